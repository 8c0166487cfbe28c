use std::cmp::Ordering;
use std::fmt;

use ordered_float::OrderedFloat;

use super::Vector;
use crate::utils::approx_eq;

/// A location in the plane.
///
/// Canvas coordinates are assumed: the origin is the top-left corner and `y`
/// grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  pub fn x_coord(&self) -> f64 {
    self.x
  }

  pub fn as_vec(&self) -> Vector {
    Vector::new(self.x, self.y)
  }

  /// Both coordinates equal within [`EPSILON`](crate::EPSILON).
  pub fn approx_eq(&self, other: &Point) -> bool {
    approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
  }

  /// Round both coordinates to the nearest integer.
  #[must_use]
  pub fn round(&self) -> Point {
    Point::new(self.x.round(), self.y.round())
  }

  pub fn distance_to(&self, other: &Point) -> f64 {
    (other - self).length()
  }

  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    OrderedFloat(self.distance_to(p)).cmp(&OrderedFloat(self.distance_to(q)))
  }

  /// Order two points bottom-up: the point with the smaller `y` comes first,
  /// and points at the same height (within epsilon) are ordered by `x`.
  ///
  /// The result doesn't depend on the argument order.
  ///
  /// ```rust
  /// # use polylab::data::Point;
  /// let a = Point::new(10., 10.);
  /// let b = Point::new(20., 10.);
  /// assert_eq!(Point::sort_vertically(a, b), (a, b));
  /// assert_eq!(Point::sort_vertically(b, a), (a, b));
  /// ```
  pub fn sort_vertically(p1: Point, p2: Point) -> (Point, Point) {
    let swap = if approx_eq(p1.y, p2.y) {
      p1.x >= p2.x
    } else {
      p1.y > p2.y
    };
    if swap {
      (p2, p1)
    } else {
      (p1, p2)
    }
  }

  /// Vertex average of a point set. `None` if the set is empty.
  pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
      return None;
    }
    let sum: Vector = points.iter().map(Point::as_vec).sum();
    Some(Point::from(sum * (1.0 / points.len() as f64)))
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new(point.0, point.1)
  }
}

impl From<(i32, i32)> for Point {
  fn from(point: (i32, i32)) -> Point {
    Point::new(f64::from(point.0), f64::from(point.1))
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point::new(vector.x, vector.y)
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({};{})", self.x, self.y)
  }
}

mod add;
mod sub;

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn sort_vertically_some_points() {
    let p1 = Point::new(10., 10.);
    let p2 = Point::new(20., 20.);
    assert_eq!(Point::sort_vertically(p1, p2), (p1, p2));
    assert_eq!(Point::sort_vertically(p2, p1), (p1, p2));
  }

  #[test]
  fn sort_vertically_same_height() {
    let p1 = Point::new(10., 10.);
    let p2 = Point::new(20., 10.);
    assert_eq!(Point::sort_vertically(p1, p2), (p1, p2));
    assert_eq!(Point::sort_vertically(p2, p1), (p1, p2));
  }

  #[test]
  fn sort_vertically_same_column() {
    let p1 = Point::new(10., 10.);
    let p2 = Point::new(10., 20.);
    assert_eq!(Point::sort_vertically(p1, p2), (p1, p2));
    assert_eq!(Point::sort_vertically(p2, p1), (p1, p2));
  }

  #[proptest]
  fn sort_vertically_is_symmetric(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
  ) {
    let (lo, hi) = Point::sort_vertically(a, b);
    prop_assert_eq!((lo, hi), Point::sort_vertically(b, a));
    prop_assert!(lo.y < hi.y || (lo.y == hi.y && lo.x <= hi.x));
  }

  #[test]
  fn display() {
    assert_eq!(Point::new(1., -2.5).to_string(), "(1;-2.5)");
  }

  #[test]
  fn round_half_away_from_zero() {
    assert_eq!(Point::new(1.5, -1.5).round(), Point::new(2., -2.));
    assert_eq!(Point::new(0.49, 7.51).round(), Point::new(0., 8.));
  }

  #[test]
  fn centroid_of_square() {
    let square = [
      Point::new(0., 0.),
      Point::new(10., 0.),
      Point::new(10., 10.),
      Point::new(0., 10.),
    ];
    assert_eq!(Point::centroid(&square), Some(Point::new(5., 5.)));
    assert_eq!(Point::centroid(&[]), None);
  }

  #[test]
  fn approx_equality() {
    let p = Point::new(1., 1.);
    assert!(p.approx_eq(&Point::new(1. + 1e-10, 1. - 1e-10)));
    assert!(!p.approx_eq(&Point::new(1. + 1e-6, 1.)));
  }
}
