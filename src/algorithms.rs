pub mod convex_hull;
pub mod convexity;
pub mod generation;
pub mod point_location;

#[doc(inline)]
pub use convex_hull::{get_convex, ConvexAlgorithm};

#[doc(inline)]
pub use convexity::{is_convex_polygon, is_point_not_above_line, is_point_not_below_line};

#[doc(inline)]
pub use generation::{generate_convex_polygon, generate_polygon, GeneratorConfig};

#[doc(inline)]
pub use point_location::is_point_in_polygon;
