//! A straight segment between two points, described the way a renderer needs it: a start
//! position, a length, and an angle, plus whether the segment runs toward negative x.

use crate::common::rad_to_deg;
use crate::geom2::Point2;
use serde::{Deserialize, Serialize};

/// A directed segment from `start` to `end` with its length and slope angle precomputed.
///
/// The angle is the arctangent of the slope, so it always lies in [-pi/2, pi/2] and does not
/// distinguish direction on its own. Segments that run toward negative x are flagged with
/// `reversed`, which a renderer uses to anchor the drawn line at its right end instead of its
/// left. When `start` and `end` coincide the slope is 0/0 and the angle is NaN; this is passed
/// through as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,

    /// Euclidean length of the segment
    pub length: f64,

    /// Slope angle in radians, `atan(dy / dx)`
    pub angle: f64,

    /// True if `end` lies at a smaller x than `start`
    pub reversed: bool,
}

impl Segment2 {
    pub fn new(start: Point2, end: Point2) -> Self {
        let d = end - start;
        Self {
            start,
            end,
            length: d.norm(),
            angle: (d.y / d.x).atan(),
            reversed: end.x < start.x,
        }
    }

    /// The slope angle in degrees
    pub fn angle_degrees(&self) -> f64 {
        rad_to_deg(self.angle)
    }

    /// The x offset at which a renderer should place the drawn line relative to `start`. For a
    /// reversed segment the line is anchored at its right end, so it is shifted back by its own
    /// length; otherwise it starts at `start`.
    pub fn anchor_offset(&self) -> f64 {
        if self.reversed { -self.length } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use test_case::test_case;

    #[test_case((0.0, 0.0), (3.0, 4.0), 5.0)]
    #[test_case((1.0, 1.0), (1.0, 3.0), 2.0)]
    #[test_case((2.0, -1.0), (-1.0, 3.0), 5.0)]
    fn test_length(a: (f64, f64), b: (f64, f64), expected: f64) {
        let s = Segment2::new(Point2::new(a.0, a.1), Point2::new(b.0, b.1));
        assert_relative_eq!(s.length, expected, epsilon = 1.0e-12);
    }

    #[test]
    fn test_rising_segment() {
        let s = Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert_relative_eq!(s.angle, PI / 4.0, epsilon = 1.0e-12);
        assert_relative_eq!(s.angle_degrees(), 45.0, epsilon = 1.0e-9);
        assert!(!s.reversed);
        assert_eq!(s.anchor_offset(), 0.0);
    }

    #[test]
    fn test_reversed_segment_has_same_slope_angle() {
        let s = Segment2::new(Point2::new(1.0, 1.0), Point2::new(0.0, 0.0));
        assert_relative_eq!(s.angle, PI / 4.0, epsilon = 1.0e-12);
        assert!(s.reversed);
        assert_relative_eq!(s.anchor_offset(), -(2.0_f64).sqrt(), epsilon = 1.0e-12);
    }

    #[test]
    fn test_vertical_segments() {
        let up = Segment2::new(Point2::new(5.0, 0.0), Point2::new(5.0, 2.0));
        let down = Segment2::new(Point2::new(5.0, 2.0), Point2::new(5.0, 0.0));
        assert_relative_eq!(up.angle, PI / 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(down.angle, -PI / 2.0, epsilon = 1.0e-12);
        assert!(!up.reversed);
        assert!(!down.reversed);
    }

    #[test]
    fn test_zero_length_segment_has_nan_angle() {
        let p = Point2::new(2.0, 3.0);
        let s = Segment2::new(p, p);
        assert_eq!(s.length, 0.0);
        assert!(s.angle.is_nan());
        assert!(!s.reversed);
    }
}
