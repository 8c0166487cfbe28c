use std::ops::Mul;

use super::Vector;

impl Mul<f64> for Vector {
  type Output = Vector;

  fn mul(self: Vector, other: f64) -> Self::Output {
    self.scale(other)
  }
}

impl Mul<f64> for &Vector {
  type Output = Vector;

  fn mul(self, other: f64) -> Vector {
    self.scale(other)
  }
}
