//! Planform geometry for a swept, linearly tapered wing panel. Four raw inputs (half-span,
//! sweep, root chord, tip chord) are clamped into a valid design, turned into the closed
//! hexagonal outline of the mirrored wing, and reduced to reference offsets and simple
//! weight/lift estimates. Drawing is left to a `render::RenderSink`.

use std::error::Error;

pub mod common;
pub mod errors;
pub mod geom2;
pub mod planform;
pub mod render;

pub use geom2::{Aabb2, ClosedPolygon2, Point2, Segment2, Vector2, polygon_area};
pub use planform::{
    ClampedWing, OutlineVertex, PlanformConstants, PlanformOutline, PlanformResult, WingField,
    WingInputs, WingMetrics, compute_planform,
};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;
