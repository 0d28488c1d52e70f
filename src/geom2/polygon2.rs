//! This module contains a closed polygon abstraction and the shoelace area calculation. The
//! closing edge from the last vertex back to the first is never stored; it is produced by the
//! edge iterator, so no caller has to do wrap-around index arithmetic of its own.

use crate::geom2::{Aabb2, Point2, Segment2};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Computes the signed area of a closed polygon using the shoelace formula. The polygon is
/// closed implicitly, so the last point connects back to the first. The result is positive for
/// counter-clockwise vertex order and negative for clockwise order.
///
/// # Arguments
///
/// * `points`: the ordered vertices of the polygon
///
/// returns: f64
pub fn signed_area(points: &[Point2]) -> f64 {
    let sum: f64 = points
        .iter()
        .circular_tuple_windows::<(&Point2, &Point2)>()
        .map(|(a, b)| a.x * b.y - a.y * b.x)
        .sum();
    sum / 2.0
}

/// Computes the area of a closed polygon using the shoelace formula, returning the absolute
/// value so that the result does not depend on the winding direction. The polygon should have
/// at least three vertices; the result for fewer is not meaningful.
///
/// # Arguments
///
/// * `points`: the ordered vertices of the polygon
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use planform::{Point2, polygon_area};
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
/// assert_eq!(polygon_area(&square), 4.0);
/// ```
pub fn polygon_area(points: &[Point2]) -> f64 {
    signed_area(points).abs()
}

/// An ordered sequence of vertices forming a closed polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedPolygon2 {
    points: Vec<Point2>,
}

impl ClosedPolygon2 {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the vertex at index `i`, wrapping around so that `vertex(len())` is the first
    /// vertex again.
    ///
    /// # Panics
    ///
    /// Panics if the polygon has no vertices.
    pub fn vertex(&self, i: usize) -> Point2 {
        self.points[i % self.points.len()]
    }

    /// Iterates over the edges of the polygon as pairs of vertices, in vertex order, ending
    /// with the closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        self.points.iter().circular_tuple_windows()
    }

    /// Builds a segment descriptor for every edge, in the same order as `edges()`.
    pub fn segments(&self) -> Vec<Segment2> {
        self.edges().map(|(a, b)| Segment2::new(*a, *b)).collect()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_points(self.points())
    }

    /// Returns a new polygon with the same vertices, but starting at vertex `k` instead of
    /// vertex 0. The traversal direction is unchanged.
    pub fn shifted(&self, k: usize) -> Self {
        let mut points = self.points.clone();
        if !points.is_empty() {
            let k = k % points.len();
            points.rotate_left(k);
        }
        Self::new(points)
    }

    /// Returns true if no two non-adjacent edges of the polygon touch or cross. Polygons with
    /// fewer than three vertices are never considered simple.
    pub fn is_simple(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        for i in 0..n {
            for j in (i + 2)..n {
                // The first and last edges share the first vertex
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a, b) = (self.vertex(i), self.vertex(i + 1));
                let (c, d) = (self.vertex(j), self.vertex(j + 1));
                if segments_touch(&a, &b, &c, &d) {
                    return false;
                }
            }
        }

        true
    }
}

fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b - a).perp(&(c - a))
}

/// Checks whether `p`, known to be collinear with `a` and `b`, lies within their bounding box
fn within(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_touch(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);

    let straddles = |p: f64, q: f64| (p > 0.0 && q < 0.0) || (p < 0.0 && q > 0.0);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }

    (d1 == 0.0 && within(c, d, a))
        || (d2 == 0.0 && within(c, d, b))
        || (d3 == 0.0 && within(a, b, c))
        || (d4 == 0.0 && within(a, b, d))
}
