use num_traits::identities::Zero;
use std::f64::consts::PI;
use std::iter::Sum;
use std::ops::AddAssign;
use std::ops::Neg;

use crate::data::Point;

/// A displacement between two [`Point`]s.
///
/// # Sign conventions
///
/// Two cross products are provided and they differ only in sign:
///
/// * [`Vector::cross_conventional`] is the textbook `x1*y2 - y1*x2`. It is
///   positive when `other` lies counter-clockwise of `self` in a y-up frame.
///   [`Orientation`](crate::Orientation) and every left-turn test use it.
/// * [`Vector::cross`] is `y1*x2 - x1*y2`, the negation. On a y-down canvas it
///   is positive when `other` lies counter-clockwise of `self` *as seen on the
///   screen*. The line-side predicates and [`Vector::polar_angle`] use it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
  pub x: f64,
  pub y: f64,
}

impl Vector {
  pub const fn new(x: f64, y: f64) -> Vector {
    Vector { x, y }
  }

  /// Displacement from `origin` to `p`.
  pub fn from_points(origin: &Point, p: &Point) -> Vector {
    p - origin
  }

  /// `self.y * other.x - self.x * other.y`
  pub fn cross(&self, other: &Vector) -> f64 {
    self.y * other.x - self.x * other.y
  }

  /// `self.x * other.y - self.y * other.x`
  pub fn cross_conventional(&self, other: &Vector) -> f64 {
    self.x * other.y - self.y * other.x
  }

  pub fn dot(&self, other: &Vector) -> f64 {
    self.x * other.x + self.y * other.y
  }

  /// Euclidean norm.
  pub fn length(&self) -> f64 {
    self.x.hypot(self.y)
  }

  #[must_use]
  pub fn scale(&self, k: f64) -> Vector {
    Vector::new(self.x * k, self.y * k)
  }

  /// Unit vector pointing in the same direction.
  ///
  /// Zero-length vectors are not checked: the result has NaN coordinates.
  #[must_use]
  pub fn normalize(&self) -> Vector {
    let len = self.length();
    Vector::new(self.x / len, self.y / len)
  }

  /// Rotate by `degrees` using the standard rotation matrix.
  #[must_use]
  pub fn rotate(&self, degrees: f64) -> Vector {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
  }

  /// The point reached by moving `point` along this vector.
  pub fn translate(&self, point: &Point) -> Point {
    point + self
  }

  /// Angle from `self` to `other` in `[0, 2π)`, measured with [`Vector::cross`].
  ///
  /// ```rust
  /// # use polylab::data::Vector;
  /// # use std::f64::consts::PI;
  /// let x_axis = Vector::new(1., 0.);
  /// let up = Vector::new(1., -1.); // Up and to the right on a canvas.
  /// assert!((x_axis.polar_angle(&up) - PI / 4.).abs() < 1e-12);
  /// ```
  pub fn polar_angle(&self, other: &Vector) -> f64 {
    let angle = self.cross(other).atan2(self.dot(other));
    if angle >= 0.0 {
      angle
    } else {
      2.0 * PI + angle
    }
  }

  /// Signed angle from `self` to `other` in `(-π, π]`. Positive angles are
  /// left turns.
  pub fn left_turn_angle(&self, other: &Vector) -> f64 {
    self.cross_conventional(other).atan2(self.dot(other))
  }

  /// Unsigned angle between the two vectors in `[0, π]`.
  ///
  /// NaN if either vector has zero length.
  pub fn turn_angle(&self, other: &Vector) -> f64 {
    let cos = self.dot(other) / (self.length() * other.length());
    cos.clamp(-1.0, 1.0).acos()
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    point.as_vec()
  }
}

mod add;
mod mul;
mod sub;

impl Zero for Vector {
  fn zero() -> Vector {
    Vector::new(0.0, 0.0)
  }
  fn is_zero(&self) -> bool {
    self.x.is_zero() && self.y.is_zero()
  }
}

impl Sum for Vector {
  fn sum<I>(iter: I) -> Vector
  where
    I: Iterator<Item = Vector>,
  {
    let mut acc = Zero::zero();
    for vec in iter {
      acc += vec;
    }
    acc
  }
}

impl AddAssign for Vector {
  fn add_assign(&mut self, other: Vector) {
    self.x += other.x;
    self.y += other.y;
  }
}

impl Neg for Vector {
  type Output = Self;
  fn neg(self) -> Self {
    Vector::new(-self.x, -self.y)
  }
}
