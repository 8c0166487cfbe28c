use std::ops::Sub;

use super::Point;
use super::Vector;

// &point - &point = vector
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Vector;

  fn sub(self: &'b Point, other: &'a Point) -> Self::Output {
    Vector::new(self.x - other.x, self.y - other.y)
  }
}

// point - point = vector
impl Sub<Point> for Point {
  type Output = Vector;

  fn sub(self: Point, other: Point) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

// point - &vector = point
impl Sub<&Vector> for Point {
  type Output = Point;

  fn sub(self: Point, other: &Vector) -> Self::Output {
    Point::new(self.x - other.x, self.y - other.y)
  }
}
