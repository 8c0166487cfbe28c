use std::ops::Sub;

use super::Vector;

// &vector - &vector = vector
impl<'a, 'b> Sub<&'a Vector> for &'b Vector {
  type Output = Vector;

  fn sub(self: &'b Vector, other: &'a Vector) -> Self::Output {
    Vector::new(self.x - other.x, self.y - other.y)
  }
}

// vector - vector = vector
impl Sub<Vector> for Vector {
  type Output = Vector;

  fn sub(self: Vector, other: Vector) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
