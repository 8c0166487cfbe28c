use std::f64::consts::PI;

use ordered_float::OrderedFloat;

use log::trace;

use crate::data::{Point, Polygon, Vector};
use crate::utils::{approx_eq, EPSILON};
use crate::Orientation;

// https://en.wikipedia.org/wiki/Graham_scan

/// $O(n \log n)$ Convex hull by Graham scan.
///
/// The pivot is the lowest point (rightmost among ties). The other points are
/// sorted by their angle around the pivot and, for equal angles, by distance.
/// The scan keeps a stack of vertices and pops until the top two and the
/// next point make a strict left turn; collinear points and reversals are
/// dropped.
///
/// The result is counter-clockwise with y pointing up and ends with the
/// pivot.
pub fn convex_hull(points: &[Point]) -> Polygon {
  let pivot = match pivot_point(points) {
    Some(pivot) => pivot,
    None => return Polygon::default(),
  };
  let axis = Vector::new(1., 0.);
  // Points level with the pivot on its left sort last, even when they sit
  // slightly below it and atan2 would report -π.
  let angle = |pt: &Point| {
    if approx_eq(pt.y, pivot.y) && pt.x < pivot.x {
      PI
    } else {
      axis.left_turn_angle(&(pt - &pivot))
    }
  };

  let mut rest: Vec<Point> = points
    .iter()
    .filter(|pt| !pt.approx_eq(&pivot))
    .copied()
    .collect();
  rest.sort_by(|a, b| {
    OrderedFloat(angle(a))
      .cmp(&OrderedFloat(angle(b)))
      .then_with(|| pivot.cmp_distance_to(a, b))
  });

  // The points on the last ray are visited farthest first so that the scan
  // ends on the nearest one and closes back to the pivot.
  if let Some(last) = rest.last().map(|pt| angle(pt)) {
    let run = rest
      .iter()
      .rev()
      .take_while(|pt| approx_eq(angle(pt), last))
      .count();
    if run < rest.len() {
      let from = rest.len() - run;
      rest[from..].reverse();
    }
  }

  let mut stack = vec![pivot];
  for pt in rest {
    while stack.len() >= 2 && !turns_left(&stack[stack.len() - 2], &stack[stack.len() - 1], &pt) {
      trace!("graham pop {}", stack[stack.len() - 1]);
      stack.pop();
    }
    stack.push(pt);
  }
  while stack.len() > 2 && !turns_left(&stack[stack.len() - 2], &stack[stack.len() - 1], &pivot) {
    stack.pop();
  }
  stack.push(pivot);
  stack.remove(0);
  Polygon::new(stack)
}

// Lowest y, ties broken by the largest x.
fn pivot_point(points: &[Point]) -> Option<Point> {
  points.iter().copied().reduce(|best, pt| {
    let lower = pt.y < best.y && !approx_eq(pt.y, best.y);
    let right_on_tie = approx_eq(pt.y, best.y) && pt.x > best.x;
    if lower || right_on_tie {
      pt
    } else {
      best
    }
  })
}

fn turns_left(a: &Point, b: &Point, c: &Point) -> bool {
  let angle = (b - a).left_turn_angle(&(c - b));
  angle > EPSILON && Orientation::new(a, b, c).is_ccw()
}
