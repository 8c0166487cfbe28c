use log::{trace, warn};

use crate::data::{Point, Polygon};
use crate::utils::{approx_eq, EPSILON};
use crate::{Error, MAX_HULL_VERTICES};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

/// $O(nh)$ Convex hull by Jarvis march.
///
/// Starts at the lowest point (leftmost among ties) and repeatedly walks to
/// the point that needs the smallest turn from the current heading. Among
/// points with the same turn the farthest is chosen, so collinear points on
/// hull edges are skipped. The march stops when it is about to return to the
/// start; the start is not repeated at the end.
///
/// The result is counter-clockwise with y pointing up.
///
/// # Errors
/// [`Error::UnclosedHull`] with the partial hull if it grows past
/// [`MAX_HULL_VERTICES`](crate::MAX_HULL_VERTICES) points.
pub fn convex_hull(points: &[Point]) -> Result<Polygon, Error> {
  let start = match lowest_point(points) {
    Some(start) => start,
    None => return Ok(Polygon::default()),
  };
  let mut hull = vec![start];
  let mut prev = Point::new(start.x - EPSILON, start.y);
  let mut current = start;

  loop {
    let heading = current - prev;
    let mut best: Option<(Point, f64, f64)> = None;
    for pt in points.iter().filter(|pt| !pt.approx_eq(&current)) {
      let angle = heading.turn_angle(&(pt - &current));
      let distance = current.distance_to(pt);
      let better = match best {
        None => true,
        Some((_, best_angle, best_distance)) => {
          if approx_eq(angle, best_angle) {
            distance > best_distance
          } else {
            angle < best_angle
          }
        }
      };
      if better {
        best = Some((*pt, angle, distance));
      }
    }

    let next = match best {
      Some((next, _, _)) if !next.approx_eq(&start) => next,
      _ => return Ok(Polygon::new(hull)),
    };
    trace!("jarvis step {} -> {}", current, next);
    prev = current;
    current = next;
    hull.push(next);
    if hull.len() > MAX_HULL_VERTICES {
      warn!("jarvis march did not close after {} points", hull.len());
      return Err(Error::UnclosedHull(hull));
    }
  }
}

// Lowest y, ties broken by the smallest x.
fn lowest_point(points: &[Point]) -> Option<Point> {
  points.iter().copied().reduce(|best, pt| {
    let lower = pt.y < best.y && !approx_eq(pt.y, best.y);
    let left_on_tie = approx_eq(pt.y, best.y) && pt.x < best.x;
    if lower || left_on_tie {
      pt
    } else {
      best
    }
  })
}
