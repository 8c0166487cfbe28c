use log::debug;
use rand::Rng;

use super::GeneratorConfig;
use crate::data::{PolarPoint, Polygon};
use crate::Error;

/// Random star-shaped polygon around `config.center`.
///
/// Walks once around the center: the polar angle starts at 0° and grows by a
/// random step from `config.angle` until it reaches 360°, and every vertex
/// gets its own random radius from `config.radius`. The vertex that overshoots
/// 360° is dropped. Because the angle only grows the polygon never
/// self-intersects, but it is generally not convex.
///
/// Coordinates are rounded to integers before being moved to the center.
///
/// # Errors
/// [`Error::InvalidBounds`] if `config` fails [`GeneratorConfig::validate`].
///
/// # Examples
///
/// ```rust
/// # use polylab::algorithms::{generate_polygon, GeneratorConfig};
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
/// let polygon = generate_polygon(&GeneratorConfig::default(), &mut rng).unwrap();
/// assert!(polygon.len() >= 6);
/// ```
pub fn generate_polygon<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Polygon, Error>
where
  R: Rng + ?Sized,
{
  config.validate()?;
  let mut polar = vec![PolarPoint::new(0.0, config.sample_radius(rng))];
  let mut phi = 0.0;
  while phi < 360.0 {
    phi += config.sample_angle(rng);
    polar.push(PolarPoint::new(phi, config.sample_radius(rng)));
  }
  // The last point went past a full turn.
  polar.pop();
  debug!("generated star polygon with {} vertices", polar.len());
  Ok(
    polar
      .iter()
      .map(|pt| pt.to_cartesian().round())
      .map(|pt| config.center + pt.as_vec())
      .collect(),
  )
}
