use super::Point;

use crate::utils::approx_eq;
use crate::Intersects;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Bounded segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
  pub src: Point,
  pub dst: Point,
}

impl LineSegment {
  pub const fn new(src: Point, dst: Point) -> LineSegment {
    LineSegment { src, dst }
  }
}

impl From<(Point, Point)> for LineSegment {
  fn from((src, dst): (Point, Point)) -> LineSegment {
    LineSegment::new(src, dst)
  }
}

impl Intersects for &LineSegment {
  type Result = Point;
  fn intersect(self, other: &LineSegment) -> Option<Point> {
    segment_intersection(&self.src, &self.dst, &other.src, &other.dst)
  }
}

impl Intersects for LineSegment {
  type Result = Point;
  fn intersect(self, other: LineSegment) -> Option<Point> {
    (&self).intersect(&other)
  }
}

/// Intersection point of the bounded segments `a-b` and `c-d`.
///
/// Parallel segments never intersect, even when they are collinear and
/// overlap. A determinant within [`EPSILON`](crate::EPSILON) of zero counts
/// as parallel, so nearly parallel segments with tiny direction vectors are
/// rejected as well. Endpoints count: touching segments intersect.
///
/// ```rust
/// # use polylab::data::{segment_intersection, Point};
/// let hit = segment_intersection(
///   &Point::new(0., 0.),
///   &Point::new(10., 10.),
///   &Point::new(0., 10.),
///   &Point::new(10., 0.),
/// );
/// assert_eq!(hit, Some(Point::new(5., 5.)));
/// ```
pub fn segment_intersection(a: &Point, b: &Point, c: &Point, d: &Point) -> Option<Point> {
  let k = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
  if approx_eq(k, 0.0) {
    return None;
  }
  let t = ((a.x - c.x) * (c.y - d.y) - (a.y - c.y) * (c.x - d.x)) / k;
  let u = ((a.x - c.x) * (a.y - b.y) - (a.y - c.y) * (a.x - b.x)) / k;
  if !((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)) {
    return None;
  }
  Some(Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)))
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_none, assert_some_eq};
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn seg(a: (i32, i32), b: (i32, i32)) -> LineSegment {
    LineSegment::new(a.into(), b.into())
  }

  #[test]
  fn crossing() {
    assert_some_eq!(
      seg((0, 0), (10, 0)).intersect(seg((5, -5), (5, 5))),
      Point::new(5., 0.)
    );
  }

  #[test]
  fn touching_endpoints() {
    assert_some_eq!(
      seg((0, 0), (10, 0)).intersect(seg((10, 0), (10, 10))),
      Point::new(10., 0.)
    );
  }

  #[test]
  fn disjoint() {
    assert_none!(seg((0, 0), (10, 0)).intersect(seg((11, -5), (11, 5))));
    assert_none!(seg((0, 0), (10, 10)).intersect(seg((0, 10), (4, 6))));
  }

  #[test]
  fn parallel() {
    assert_none!(seg((0, 0), (10, 0)).intersect(seg((0, 1), (10, 1))));
  }

  #[test]
  fn tiny_determinant_counts_as_parallel() {
    let a = LineSegment::new(Point::new(0., 0.), Point::new(1e-5, 0.));
    let b = LineSegment::new(Point::new(5e-6, -1e-5), Point::new(5e-6, 1e-5));
    assert_none!(a.intersect(b));
  }

  #[test]
  fn collinear_overlap_is_not_detected() {
    assert_none!(seg((0, 0), (10, 0)).intersect(seg((5, 0), (15, 0))));
  }

  #[proptest]
  fn intersection_is_symmetric(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
    #[strategy(any_point())] c: Point,
    #[strategy(any_point())] d: Point,
  ) {
    let ab = LineSegment::new(a, b);
    let cd = LineSegment::new(c, d);
    let lhs = ab.intersect(cd);
    let rhs = cd.intersect(ab);
    prop_assert_eq!(lhs.is_some(), rhs.is_some());
    if let (Some(p), Some(q)) = (lhs, rhs) {
      prop_assert!((p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6);
    }
  }
}
