/// Geometric intersection between two shapes.
///
/// ```rust
/// # use polylab::data::{LineSegment, Point};
/// # use polylab::Intersects;
/// let a = LineSegment::new(Point::new(0., 0.), Point::new(2., 2.));
/// let b = LineSegment::new(Point::new(0., 2.), Point::new(2., 0.));
/// assert_eq!(a.intersect(b), Some(Point::new(1., 1.)));
/// ```
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
