use std::ops::RangeInclusive;

use rand::Rng;

use crate::data::Point;
use crate::Error;

mod convex;
mod star;

pub use convex::generate_convex_polygon;
pub use star::generate_polygon;

/// Parameters shared by the random polygon generators.
///
/// Radii and angle steps are drawn uniformly from the inclusive integer
/// ranges. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
  pub radius: RangeInclusive<u32>,
  pub angle: RangeInclusive<u32>,
  pub center: Point,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    GeneratorConfig {
      radius: 50..=150,
      angle: 20..=60,
      center: Point::new(250., 250.),
    }
  }
}

impl GeneratorConfig {
  pub fn new(radius: RangeInclusive<u32>, angle: RangeInclusive<u32>, center: Point) -> Self {
    GeneratorConfig {
      radius,
      angle,
      center,
    }
  }

  /// Both ranges must be non-empty and the angle step must be positive, or
  /// the generators would never complete a full turn.
  pub fn validate(&self) -> Result<(), Error> {
    if self.radius.is_empty() || self.angle.is_empty() || *self.angle.start() == 0 {
      return Err(Error::InvalidBounds);
    }
    Ok(())
  }

  fn sample_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
    f64::from(rng.gen_range(self.radius.clone()))
  }

  fn sample_angle<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
    f64::from(rng.gen_range(self.angle.clone()))
  }
}
