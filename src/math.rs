//! Scalar interpolation, remapping and nearest-point search.
//!
//! None of these functions guard against degenerate input. A zero-extent
//! range makes [`inv_lerp`] divide by zero and the resulting non-finite
//! values flow through to callers unchanged.

use crate::geom::{Point, distance};
use crate::view::Bounds;

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `v` sits between `a` and `b`.
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    (v - a) / (b - a)
}

/// Map `v` from the range `old_a..old_b` onto `new_a..new_b`.
pub fn remap(old_a: f64, old_b: f64, new_a: f64, new_b: f64, v: f64) -> f64 {
    lerp(new_a, new_b, inv_lerp(old_a, old_b, v))
}

/// Map a point from one set of bounds onto another, axis by axis.
///
/// The x axis uses `left`/`right` and the y axis `top`/`bottom`. This is the
/// only primitive used for pixel/data conversion in either direction.
pub fn remap_point(from: &Bounds, to: &Bounds, point: Point) -> Point {
    Point::new(
        remap(from.left, from.right, to.left, to.right, point.x),
        remap(from.top, from.bottom, to.top, to.bottom, point.y),
    )
}

/// Index of the point closest to `location`.
///
/// Ties go to the lowest index. Returns `None` for an empty slice.
pub fn nearest_index(location: Point, points: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        let dist = distance(location, *point);
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| index)
}

/// Format a number with a fixed number of decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_and_inverse_agree() {
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
        assert_eq!(inv_lerp(2.0, 6.0, 3.0), 0.25);
        assert_eq!(remap(0.0, 10.0, 100.0, 200.0, 5.0), 150.0);
    }

    #[test]
    fn remap_handles_flipped_axes() {
        let pixels = Bounds::new(10.0, 90.0, 10.0, 90.0);
        let data = Bounds::new(0.0, 1.0, 1.0, 0.0);
        let top_left = remap_point(&data, &pixels, Point::new(0.0, 1.0));
        assert_eq!(top_left, Point::new(10.0, 10.0));
        let bottom_right = remap_point(&data, &pixels, Point::new(1.0, 0.0));
        assert_eq!(bottom_right, Point::new(90.0, 90.0));
    }

    #[test]
    fn remap_point_roundtrips() {
        let pixels = Bounds::new(24.2, 195.8, 24.2, 195.8);
        let data = Bounds::new(-3.5, 12.25, 40.0, -8.0);
        let point = Point::new(4.75, 17.5);
        let there = remap_point(&data, &pixels, point);
        let back = remap_point(&pixels, &data, there);
        assert!((back.x - point.x).abs() < 1e-9);
        assert!((back.y - point.y).abs() < 1e-9);
    }

    #[test]
    fn zero_extent_produces_non_finite() {
        assert!(!inv_lerp(3.0, 3.0, 3.0).is_finite());
        let degenerate = Bounds::new(1.0, 1.0, 2.0, 2.0);
        let pixels = Bounds::new(0.0, 100.0, 0.0, 100.0);
        assert!(!remap_point(&degenerate, &pixels, Point::new(1.0, 2.0)).is_finite());
    }

    #[test]
    fn nearest_prefers_lowest_index_on_tie() {
        let points = [
            Point::new(5.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        assert_eq!(nearest_index(Point::ZERO, &points), Some(1));
        assert_eq!(nearest_index(Point::new(4.0, 0.0), &points), Some(0));
        assert_eq!(nearest_index(Point::ZERO, &[]), None);
    }

    #[test]
    fn format_number_uses_fixed_decimals() {
        assert_eq!(format_number(1.23456, 2), "1.23");
        assert_eq!(format_number(7.0, 0), "7");
        assert_eq!(format_number(12.0, 3), "12.000");
    }
}
