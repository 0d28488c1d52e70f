use crate::geom2::{Aabb2, ClosedPolygon2, Point2, Segment2};
use crate::planform::ClampedWing;
use serde::{Deserialize, Serialize};

/// Names the six vertices of the planform outline, in traversal order. The x axis runs along
/// the span and the y axis runs aft along the chord, with the root leading edge at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlineVertex {
    RootLeading,
    RightTipLeading,
    RightTipTrailing,
    RootTrailing,
    LeftTipTrailing,
    LeftTipLeading,
}

impl OutlineVertex {
    pub const ALL: [OutlineVertex; 6] = [
        OutlineVertex::RootLeading,
        OutlineVertex::RightTipLeading,
        OutlineVertex::RightTipTrailing,
        OutlineVertex::RootTrailing,
        OutlineVertex::LeftTipTrailing,
        OutlineVertex::LeftTipLeading,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The closed hexagonal outline of the full wing, both halves mirrored about the root chord.
/// The vertex order is fixed and matches `OutlineVertex::ALL`; the area sign and the direction
/// of every edge segment depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanformOutline {
    polygon: ClosedPolygon2,
}

impl PlanformOutline {
    /// Build the outline of a clamped wing. With half-span `s`, tip chord `t`, root chord `r`
    /// and leading edge offset `a = s * tan(sweep)` the vertices are
    ///
    /// ```text
    /// (0, 0), (s, a), (s, a + t), (0, r), (-s, a + t), (-s, a)
    /// ```
    pub fn from_wing(wing: &ClampedWing) -> Self {
        let s = wing.half_span;
        let leading = wing.tip_offset();
        let trailing = leading + wing.tip_chord;

        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(s, leading),
            Point2::new(s, trailing),
            Point2::new(0.0, wing.root_chord),
            Point2::new(-s, trailing),
            Point2::new(-s, leading),
        ];

        Self {
            polygon: ClosedPolygon2::new(points),
        }
    }

    pub fn polygon(&self) -> &ClosedPolygon2 {
        &self.polygon
    }

    pub fn points(&self) -> &[Point2] {
        self.polygon.points()
    }

    pub fn vertex(&self, v: OutlineVertex) -> Point2 {
        self.polygon.vertex(v.index())
    }

    /// The six edges of the outline, starting with the edge from the root leading edge to the
    /// right tip and ending with the closing edge from the left tip back to the root.
    pub fn segments(&self) -> Vec<Segment2> {
        self.polygon.segments()
    }

    /// Planform area of the whole mirrored outline (mm²)
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    pub fn aabb(&self) -> Aabb2 {
        self.polygon.aabb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::deg_to_rad;
    use crate::planform::{PlanformConstants, WingInputs};
    use approx::assert_relative_eq;
    use rand::Rng;

    fn outline(s: f64, sweep: f64, r: f64, t: f64) -> PlanformOutline {
        let wing = WingInputs::new(s, sweep, r, t).clamped(&PlanformConstants::DEFAULT);
        PlanformOutline::from_wing(&wing)
    }

    #[test]
    fn test_reference_wing_vertices() {
        let o = outline(500.0, 20.0, 300.0, 150.0);
        let a = 500.0 * deg_to_rad(20.0).tan();
        assert_relative_eq!(a, 181.985, epsilon = 1.0e-3);

        assert_eq!(o.vertex(OutlineVertex::RootLeading), Point2::new(0.0, 0.0));
        assert_eq!(o.vertex(OutlineVertex::RightTipLeading), Point2::new(500.0, a));
        assert_eq!(o.vertex(OutlineVertex::RightTipTrailing), Point2::new(500.0, a + 150.0));
        assert_eq!(o.vertex(OutlineVertex::RootTrailing), Point2::new(0.0, 300.0));
        assert_eq!(o.vertex(OutlineVertex::LeftTipTrailing), Point2::new(-500.0, a + 150.0));
        assert_eq!(o.vertex(OutlineVertex::LeftTipLeading), Point2::new(-500.0, a));
    }

    #[test]
    fn test_reference_wing_area() {
        let o = outline(500.0, 20.0, 300.0, 150.0);
        assert_relative_eq!(o.area(), 225000.0, max_relative = 1.0e-12);
        assert!(o.polygon().signed_area() > 0.0);
    }

    #[test]
    fn test_segments_close_the_outline() {
        let o = outline(500.0, 20.0, 300.0, 150.0);
        let segments = o.segments();
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[5].start, o.vertex(OutlineVertex::LeftTipLeading));
        assert_eq!(segments[5].end, o.vertex(OutlineVertex::RootLeading));

        // Tip edges are vertical, right one drawn aft and left one drawn forward
        assert_relative_eq!(segments[1].length, 150.0, epsilon = 1.0e-9);
        assert_relative_eq!(segments[1].angle_degrees(), 90.0, epsilon = 1.0e-9);
        assert_relative_eq!(segments[4].angle_degrees(), -90.0, epsilon = 1.0e-9);

        // Trailing edges run toward negative x
        assert!(segments[2].reversed);
        assert!(segments[3].reversed);
        assert!(!segments[0].reversed);
        assert!(!segments[5].reversed);
    }

    #[test]
    fn test_aabb_spans_both_tips() {
        let o = outline(500.0, 20.0, 300.0, 150.0);
        let aabb = o.aabb();
        assert_eq!(aabb.mins.x, -500.0);
        assert_eq!(aabb.maxs.x, 500.0);
        assert_eq!(aabb.mins.y, 0.0);
        assert_eq!(aabb.maxs.y, o.vertex(OutlineVertex::RightTipTrailing).y);
    }

    #[test]
    fn test_random_outlines_are_simple_hexagons() {
        let mut rnd = rand::rng();
        for _ in 0..2000 {
            let o = outline(
                rnd.random_range(1.0..6000.0),
                rnd.random_range(-60.0..120.0),
                rnd.random_range(1.0..3000.0),
                rnd.random_range(-100.0..3000.0),
            );
            let p = o.points();
            assert_eq!(p.len(), 6);
            assert_eq!(p[0].x, 0.0);
            assert_eq!(p[3].x, 0.0);
            assert_eq!(p[1].x, p[2].x);
            assert_eq!(p[4].x, p[5].x);
            assert_eq!(p[4].x, -p[1].x);
            assert!(o.polygon().is_simple(), "not simple: {:?}", p);
            assert!(o.area() > 0.0);
        }
    }
}
