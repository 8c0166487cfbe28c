use log::{debug, trace};
use rand::Rng;

use super::GeneratorConfig;
use crate::algorithms::convexity::{is_point_not_above_line, is_point_not_below_line};
use crate::data::{PolarPoint, Point, Polygon};
use crate::{Error, Orientation};

/// Random convex polygon around `config.center`.
///
/// The first edge leaves the origin at a random angle with a random length.
/// Each following edge is the previous edge rotated by a random angle from
/// `config.angle` and rescaled to a random length from `config.radius`. Since
/// every rotation turns the same way the chain stays convex for as long as:
///
/// * the total rotation is below 360°,
/// * the newest vertex is not above the first edge, and
/// * (from the fourth vertex on) the newest vertex is not below the line from
///   the vertex before the previous one to the first vertex.
///
/// The vertex that broke the walk is dropped. The remaining vertices are moved
/// so their average sits on `config.center` and rounded to integers. Rounding
/// can turn an almost straight vertex into a reflex one; such vertices are
/// removed, so the result always passes
/// [`is_convex_polygon`](crate::algorithms::is_convex_polygon).
///
/// # Errors
/// [`Error::InvalidBounds`] if `config` fails [`GeneratorConfig::validate`] or
/// allows zero-length edges.
///
/// # Examples
///
/// ```rust
/// # use polylab::algorithms::{generate_convex_polygon, is_convex_polygon, GeneratorConfig};
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
/// let polygon = generate_convex_polygon(&GeneratorConfig::default(), &mut rng).unwrap();
/// assert!(is_convex_polygon(&polygon));
/// ```
pub fn generate_convex_polygon<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Polygon, Error>
where
  R: Rng + ?Sized,
{
  config.validate()?;
  if *config.radius.start() == 0 {
    return Err(Error::InvalidBounds);
  }

  let mut phi = config.sample_angle(rng);
  let first = Point::new(0.0, 0.0);
  let second = PolarPoint::new(phi, config.sample_radius(rng)).to_cartesian();
  let mut points = vec![first, second];
  let (mut prev, mut last) = (first, second);

  while phi < 360.0
    && is_point_not_above_line(&first, &second, &last)
    && (points.len() <= 3 || is_point_not_below_line(&prev, &first, &last))
  {
    let rotation = config.sample_angle(rng);
    phi += rotation;
    let next = (last - prev)
      .rotate(rotation)
      .normalize()
      .scale(config.sample_radius(rng))
      .translate(&last);
    trace!("convex walk: phi={} next={}", phi, next);
    points.push(next);
    prev = last;
    last = next;
  }
  // The last vertex broke one of the conditions above.
  points.pop();

  let centroid = Point::centroid(&points).unwrap_or(first);
  let rounded: Vec<Point> = points
    .iter()
    .map(|pt| (config.center + (pt - &centroid)).round())
    .collect();
  let polygon = Polygon::new(drop_reflex_vertices(rounded));
  debug!("generated convex polygon with {} vertices", polygon.len());
  Ok(polygon)
}

// The walk turns counter-clockwise (y-up), so any clockwise vertex was
// introduced by rounding.
fn drop_reflex_vertices(mut points: Vec<Point>) -> Vec<Point> {
  while points.len() > 3 {
    let n = points.len();
    let reflex = (0..n).find(|&i| {
      let prev = &points[(i + n - 1) % n];
      let next = &points[(i + 1) % n];
      Orientation::new(prev, &points[i], next).is_cw()
    });
    match reflex {
      Some(i) => {
        trace!("dropping reflex vertex {}", points[i]);
        points.remove(i);
      }
      None => break,
    }
  }
  points
}
