//! Axis extent readouts.
//!
//! The chart draws no ticks; each axis shows only the data values at its two
//! ends, read back from the live window so they follow pan and zoom.

use crate::geom::Point;
use crate::math::format_number;
use crate::transform::ViewTransform;

/// Data values at the corners of the plotting region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtents {
    /// Data point under the bottom-left pixel corner.
    pub min: Point,
    /// Data point under the top-right pixel corner.
    pub max: Point,
}

impl AxisExtents {
    /// Read the extents of the live window.
    pub fn from_transform(transform: &ViewTransform) -> Self {
        let pixels = transform.pixel_bounds();
        Self {
            min: transform.to_window(Point::new(pixels.left, pixels.bottom)),
            max: transform.to_window(Point::new(pixels.right, pixels.top)),
        }
    }

    /// Format the four values with `decimals` fixed decimals.
    pub fn labels(&self, decimals: usize) -> ExtentLabels {
        ExtentLabels {
            min_x: format_number(self.min.x, decimals),
            min_y: format_number(self.min.y, decimals),
            max_x: format_number(self.max.x, decimals),
            max_y: format_number(self.max.y, decimals),
        }
    }
}

/// Formatted extent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtentLabels {
    /// Left end of the x axis.
    pub min_x: String,
    /// Bottom end of the y axis.
    pub min_y: String,
    /// Right end of the x axis.
    pub max_x: String,
    /// Top end of the y axis.
    pub max_y: String,
}
