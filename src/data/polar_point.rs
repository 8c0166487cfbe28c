use crate::data::Point;

/// A point given as an angle (degrees) and a distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
  pub phi: f64,
  pub r: f64,
}

impl PolarPoint {
  pub const fn new(phi: f64, r: f64) -> PolarPoint {
    PolarPoint { phi, r }
  }

  pub fn to_cartesian(&self) -> Point {
    let (sin, cos) = self.phi.to_radians().sin_cos();
    Point::new(self.r * cos, self.r * sin)
  }
}

impl From<PolarPoint> for Point {
  fn from(polar: PolarPoint) -> Point {
    polar.to_cartesian()
  }
}
