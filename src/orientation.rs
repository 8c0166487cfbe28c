use crate::data::{Point, Vector};
use crate::utils::EPSILON;

/// Turn direction at the middle of three points.
///
/// Directions are measured in a y-up frame: walking `(0,0) -> (1,0) -> (1,1)`
/// is a counter-clockwise (left) turn. On a y-down canvas the same walk looks
/// clockwise on screen.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`. Cross products within [`EPSILON`] of zero are
  /// reported as [`Orientation::CoLinear`].
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polylab::data::Point;
  /// # use polylab::Orientation;
  /// let p1 = Point::new(0., 0.);
  /// let p2 = Point::new(0., 1.);
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0., 2.)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1., 2.)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1., 2.)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::of_edges(&(p2 - p1), &(p3 - p2))
  }

  /// Direction of the turn from edge `v1` onto edge `v2`.
  pub fn of_edges(v1: &Vector, v2: &Vector) -> Orientation {
    Orientation::from_cross(v1.cross_conventional(v2))
  }

  fn from_cross(cross: f64) -> Orientation {
    if cross > EPSILON {
      CounterClockWise
    } else if cross < -EPSILON {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
