//! Labelled point samples.

use crate::geom::Point;
use crate::view::Bounds;

/// One labelled point in data space.
///
/// The label is opaque to the engine; it only keys the style table read by
/// the frame builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<L> {
    /// Location in data space.
    pub point: Point,
    /// Style key.
    pub label: L,
}

impl<L> Sample<L> {
    /// Create a new sample.
    pub fn new(point: impl Into<Point>, label: L) -> Self {
        Self {
            point: point.into(),
            label,
        }
    }
}

/// Tight data-space extent of a set of samples.
pub fn sample_extent<L>(samples: &[Sample<L>]) -> Bounds {
    Bounds::data_extent(samples.iter().map(|sample| sample.point))
}
