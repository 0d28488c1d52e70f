mod polygon2;
mod segment2;

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;
pub type Aabb2 = parry2d_f64::bounding_volume::Aabb;

pub use self::polygon2::{ClosedPolygon2, polygon_area, signed_area};
pub use self::segment2::Segment2;
