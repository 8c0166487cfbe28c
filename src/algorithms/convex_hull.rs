use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::data::{Point, Polygon};
use crate::Error;

pub mod brute_force;
pub mod gift_wrapping;
pub mod graham_scan;

/// Strategy used by [`get_convex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConvexAlgorithm {
  /// Triangle exclusion, see [`brute_force::convex_hull`].
  #[default]
  Triangle,
  /// Jarvis march, see [`gift_wrapping::convex_hull`].
  Jarvis,
  /// See [`graham_scan::convex_hull`].
  Graham,
}

impl ConvexAlgorithm {
  pub const ALL: [ConvexAlgorithm; 3] = [
    ConvexAlgorithm::Triangle,
    ConvexAlgorithm::Jarvis,
    ConvexAlgorithm::Graham,
  ];

  pub fn name(self) -> &'static str {
    match self {
      ConvexAlgorithm::Triangle => "triangle",
      ConvexAlgorithm::Jarvis => "jarvis",
      ConvexAlgorithm::Graham => "graham",
    }
  }
}

impl fmt::Display for ConvexAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown convex hull algorithm: {0:?}")]
pub struct ParseAlgorithmError(String);

impl FromStr for ConvexAlgorithm {
  type Err = ParseAlgorithmError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ConvexAlgorithm::ALL
      .into_iter()
      .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
  }
}

/// Convex hull of `points` computed with `algorithm`.
///
/// Inputs with fewer than 4 points are returned unchanged. The vertex order
/// of the result depends on the algorithm, but in general position (no
/// duplicates, no three collinear points) all algorithms return the same
/// vertex set.
///
/// # Errors
/// [`Error::UnclosedHull`] if the Jarvis march fails to close.
///
/// # Examples
///
/// ```rust
/// # use polylab::algorithms::{get_convex, ConvexAlgorithm};
/// # use polylab::data::Point;
/// let points: Vec<Point> = [(0, 0), (10, 1), (11, 9), (5, 5), (1, 10)]
///   .into_iter()
///   .map(Point::from)
///   .collect();
/// let hull = get_convex(&points, ConvexAlgorithm::Graham).unwrap();
/// assert_eq!(
///   hull.points(),
///   &[Point::new(10., 1.), Point::new(11., 9.), Point::new(1., 10.), Point::new(0., 0.)]
/// );
/// ```
pub fn get_convex(points: &[Point], algorithm: ConvexAlgorithm) -> Result<Polygon, Error> {
  if points.len() < 4 {
    return Ok(Polygon::new(points.to_vec()));
  }
  debug!("{} convex hull of {} points", algorithm, points.len());
  let hull = match algorithm {
    ConvexAlgorithm::Triangle => brute_force::convex_hull(points),
    ConvexAlgorithm::Jarvis => gift_wrapping::convex_hull(points)?,
    ConvexAlgorithm::Graham => graham_scan::convex_hull(points),
  };
  debug!("{} hull has {} vertices", algorithm, hull.len());
  Ok(hull)
}
