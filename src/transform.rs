//! Coordinate transforms between data and pixel space.
//!
//! The visible data window is never stored on its own terms: it is always
//! derived from the fixed default window, the committed pan offset and the
//! zoom scale, so repeated pan/zoom cycles cannot drift.

use crate::geom::Point;
use crate::math::remap_point;
use crate::view::Bounds;

/// Pan/zoom state of one chart and the mappings it implies.
///
/// Values are immutable; every pan or zoom produces a new transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pixel_bounds: Bounds,
    default_window: Bounds,
    offset: Point,
    scale: f64,
    window: Bounds,
}

impl ViewTransform {
    /// Create a transform at the default view (`offset = 0`, `scale = 1`).
    pub fn new(pixel_bounds: Bounds, default_window: Bounds) -> Self {
        Self {
            pixel_bounds,
            default_window,
            offset: Point::ZERO,
            scale: 1.0,
            window: default_window,
        }
        .with_view(Point::ZERO, 1.0)
    }

    /// Fixed pixel rectangle the data window is drawn into.
    pub fn pixel_bounds(&self) -> Bounds {
        self.pixel_bounds
    }

    /// Tight extent of the dataset, fixed at construction.
    pub fn default_window(&self) -> Bounds {
        self.default_window
    }

    /// Committed pan offset in data units.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Zoom scale; the window is scaled by its square.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The data window currently mapped onto the pixel bounds.
    ///
    /// During a drag this is the previewed window, which may include an
    /// offset that has not been committed yet.
    pub fn data_window(&self) -> Bounds {
        self.window
    }

    /// Window for an arbitrary offset and scale.
    ///
    /// The default window is translated by `offset`, then scaled around its
    /// own centre by `scale²`.
    pub fn window_for(&self, offset: Point, scale: f64) -> Bounds {
        self.default_window
            .translated(offset)
            .scaled_about_center(scale * scale)
    }

    /// Map a data point into pixel space through the live window.
    pub fn to_pixel(&self, point: Point) -> Point {
        remap_point(&self.window, &self.pixel_bounds, point)
    }

    /// Map a pixel point into data space for pointer input.
    ///
    /// This goes through the default window rather than the live one; drag
    /// deltas are measured in that fixed frame and reapplied via
    /// [`apply_pan`](Self::apply_pan).
    pub fn to_data(&self, point: Point) -> Point {
        remap_point(&self.pixel_bounds, &self.default_window, point)
    }

    /// Map a pixel point into the live data window.
    ///
    /// Used for labelling what is currently on screen.
    pub fn to_window(&self, point: Point) -> Point {
        remap_point(&self.pixel_bounds, &self.window, point)
    }

    /// Preview a pan of `delta` on top of the committed offset.
    ///
    /// The committed offset is left untouched.
    pub fn apply_pan(self, delta: Point) -> Self {
        Self {
            window: self.window_for(self.offset + delta, self.scale),
            ..self
        }
    }

    /// Add `delta` to the committed offset.
    pub fn commit_pan(self, delta: Point) -> Self {
        self.with_view(self.offset + delta, self.scale)
    }

    /// Step the scale by `direction * step`, clamped to `min..=max`.
    ///
    /// The window is recomputed from the committed offset.
    pub fn apply_zoom(self, direction: f64, step: f64, min: f64, max: f64) -> Self {
        let scale = (self.scale + direction * step).min(max).max(min);
        self.with_view(self.offset, scale)
    }

    /// Return to the default view.
    pub fn reset(self) -> Self {
        self.with_view(Point::ZERO, 1.0)
    }

    fn with_view(self, offset: Point, scale: f64) -> Self {
        Self {
            offset,
            scale,
            window: self.window_for(offset, scale),
            ..self
        }
    }
}
