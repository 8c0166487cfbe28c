use crate::data::{Point, Polygon, Vector};
use crate::utils::{floor_mod, EPSILON};
use crate::Orientation;

/// Convexity test based on the turn direction at every vertex.
///
/// Collinear vertices (cross product within epsilon of zero) are ignored; the
/// polygon is convex iff all remaining vertices turn the same way. Polygons
/// with fewer than 4 points are always convex. Both clockwise and
/// counter-clockwise rings are accepted.
///
/// # Time complexity
/// $O(n)$
///
/// # Examples
///
/// ```rust
/// # use polylab::algorithms::is_convex_polygon;
/// # use polylab::data::{Point, Polygon};
/// let arrow = Polygon::new(vec![
///   Point::new(0., 0.),
///   Point::new(10., 0.),
///   Point::new(10., 10.),
///   Point::new(5., 5.),
///   Point::new(0., 10.),
/// ]);
/// assert!(!is_convex_polygon(&arrow));
/// ```
pub fn is_convex_polygon(polygon: &Polygon) -> bool {
  let points = polygon.points();
  let len = points.len();
  if len < 4 {
    return true;
  }
  let n = len as isize;
  let at = |i: isize| &points[floor_mod(i, n) as usize];
  let mut seen: Option<Orientation> = None;
  for i in 0..n {
    let incoming = at(i) - at(i - 1);
    let outgoing = at(i + 1) - at(i);
    let turn = Orientation::of_edges(&incoming, &outgoing);
    if turn.is_colinear() {
      continue;
    }
    match seen {
      None => seen = Some(turn),
      Some(prev) if prev != turn => return false,
      Some(_) => {}
    }
  }
  true
}

/// `p` lies on the line through `p1` and `p2` or on the side that
/// [`Vector::cross`] reports as positive. With canvas coordinates and a
/// left-to-right line, that is on or above the line.
///
/// ```rust
/// # use polylab::algorithms::is_point_not_below_line;
/// # use polylab::data::Point;
/// let p1 = Point::new(10., 10.);
/// let p2 = Point::new(20., 10.);
/// assert!(is_point_not_below_line(&p1, &p2, &Point::new(15., 5.)));
/// assert!(!is_point_not_below_line(&p1, &p2, &Point::new(15., 15.)));
/// ```
pub fn is_point_not_below_line(p1: &Point, p2: &Point, p: &Point) -> bool {
  line_side(p1, p2, p) >= -EPSILON
}

/// `p` lies on the line through `p1` and `p2` or on the side that
/// [`Vector::cross`] reports as negative. Not the negation of
/// [`is_point_not_below_line`]: both hold for points on the line.
pub fn is_point_not_above_line(p1: &Point, p2: &Point, p: &Point) -> bool {
  line_side(p1, p2, p) <= EPSILON
}

fn line_side(p1: &Point, p2: &Point, p: &Point) -> f64 {
  Vector::from_points(p1, p2).cross(&Vector::from_points(p1, p))
}
