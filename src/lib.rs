#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar geometry on `f64` coordinates: point location, convexity tests,
//! convex hulls (three interchangeable algorithms) and random polygons.
//!
//! All floating point comparisons go through [`approx_eq`] with the shared
//! [`EPSILON`].
//!
//! ```rust
//! use polylab::algorithms::{get_convex, ConvexAlgorithm};
//! use polylab::data::Point;
//!
//! let points = vec![
//!   Point::new(0., 0.),
//!   Point::new(10., 1.),
//!   Point::new(11., 9.),
//!   Point::new(5., 5.),
//!   Point::new(1., 10.),
//! ];
//! let hull = get_convex(&points, ConvexAlgorithm::Jarvis).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert!(!hull.points().contains(&Point::new(5., 5.)));
//! ```

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
mod utils;

pub use intersection::Intersects;
pub use orientation::Orientation;
pub use utils::{approx_eq, floor_mod, EPSILON};

use data::Point;

/// Hulls that have not closed after this many vertices are reported as
/// [`Error::UnclosedHull`].
pub const MAX_HULL_VERTICES: usize = 500;

/// Horizontal distance between the rightmost polygon vertex and the far end
/// of the ray used by the point-in-polygon test.
pub const RAY_MARGIN: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
  /// The gift wrapping march did not return to its starting point. Carries the
  /// partial hull.
  #[error("hull did not close: {}", format_points(.0))]
  UnclosedHull(Vec<Point>),
  /// Generator bounds are empty or would never terminate.
  #[error("invalid generator bounds")]
  InvalidBounds,
}

fn format_points(points: &[Point]) -> String {
  points
    .iter()
    .map(|pt| pt.to_string())
    .collect::<Vec<_>>()
    .join(",")
}

#[cfg(test)]
pub mod testing;
