mod geometry_object;
mod line_segment;
pub(crate) mod point;
mod polar_point;
pub mod polygon;
mod vector;

pub use geometry_object::{GeometryObject, GeometryObjectStorage};
pub use line_segment::*;
pub use polar_point::PolarPoint;

#[doc(inline)]
pub use crate::data::polygon::{Edge, Polygon};
pub use point::Point;
pub use vector::Vector;
