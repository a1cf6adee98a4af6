//! Rectangular bounds in pixel or data space.

use crate::geom::Point;
use crate::math::lerp;

/// An axis-aligned rectangle expressed by its four edges.
///
/// The edges carry no orientation guarantee: pixel-space bounds have `top`
/// numerically smaller than `bottom`, data-space bounds the opposite. Every
/// operation here works on each edge independently and never reorders them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Edge mapped to the start of the x axis.
    pub left: f64,
    /// Edge mapped to the end of the x axis.
    pub right: f64,
    /// Edge mapped to the start of the y axis.
    pub top: f64,
    /// Edge mapped to the end of the y axis.
    pub bottom: f64,
}

impl Bounds {
    /// Create bounds from the four edges.
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Pixel bounds of a square surface of `size` pixels inset by `margin`.
    pub fn inset_square(size: f64, margin: f64) -> Self {
        Self::new(margin, size - margin, margin, size - margin)
    }

    /// Tight data-space extent of a point set.
    ///
    /// `top` holds the largest y value and `bottom` the smallest, so data
    /// space grows upwards. An empty set yields infinite edges, which
    /// propagate as non-finite values through every remap.
    pub fn data_extent<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for point in points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }
        Self::new(min.x, max.x, max.y, min.y)
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Width along the x axis (signed).
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height along the y axis (signed).
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Shift every edge by `offset`.
    pub fn translated(&self, offset: Point) -> Self {
        Self::new(
            self.left + offset.x,
            self.right + offset.x,
            self.top + offset.y,
            self.bottom + offset.y,
        )
    }

    /// Scale the rectangle around its own centre by `factor`.
    pub fn scaled_about_center(&self, factor: f64) -> Self {
        let center = self.center();
        Self::new(
            lerp(center.x, self.left, factor),
            lerp(center.x, self.right, factor),
            lerp(center.y, self.top, factor),
            lerp(center.y, self.bottom, factor),
        )
    }

    /// Check whether every edge is finite.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }
}
