use std::ops::Add;

use super::Vector;

// &vector + &vector = vector
impl<'a, 'b> Add<&'a Vector> for &'b Vector {
  type Output = Vector;

  fn add(self: &'b Vector, other: &'a Vector) -> Self::Output {
    Vector::new(self.x + other.x, self.y + other.y)
  }
}

// vector + vector = vector
impl Add<Vector> for Vector {
  type Output = Vector;

  fn add(self: Vector, other: Vector) -> Self::Output {
    Add::add(&self, &other)
  }
}
