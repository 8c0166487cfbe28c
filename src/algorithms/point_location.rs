use crate::data::{segment_intersection, Point, Polygon};
use crate::RAY_MARGIN;

// https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm

/// Ray casting point-in-polygon test.
///
/// A horizontal ray is cast from `point` towards `x = max_x + RAY_MARGIN`
/// (always past the polygon) and the edges it crosses are counted. An
/// intersection is ignored when it coincides with the upper endpoint of the
/// edge, so a ray through a shared vertex is counted once.
///
/// Empty polygons contain nothing. Points on the boundary may be reported
/// either way.
///
/// # Time complexity
/// $O(n)$
///
/// # Examples
///
/// ```rust
/// # use polylab::algorithms::is_point_in_polygon;
/// # use polylab::data::{Point, Polygon};
/// let square = Polygon::new(vec![
///   Point::new(0., 0.),
///   Point::new(10., 0.),
///   Point::new(10., 10.),
///   Point::new(0., 10.),
/// ]);
/// assert!(is_point_in_polygon(&square, &Point::new(5., 5.)));
/// assert!(!is_point_in_polygon(&square, &Point::new(15., 15.)));
/// ```
pub fn is_point_in_polygon(polygon: &Polygon, point: &Point) -> bool {
  let max_x = match polygon.max_x() {
    Some(max_x) => max_x,
    None => return false,
  };
  let far_point = Point::new(max_x + RAY_MARGIN, point.y);
  let crossings = polygon
    .iter_edges()
    .filter(|edge| {
      let (lower, upper) = Point::sort_vertically(edge.src, edge.dst);
      match segment_intersection(&lower, &upper, point, &far_point) {
        Some(hit) => !upper.approx_eq(&hit),
        None => false,
      }
    })
    .count();
  crossings % 2 == 1
}
