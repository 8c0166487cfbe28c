use ordered_float::OrderedFloat;

use crate::algorithms::is_point_in_polygon;
use crate::data::{Point, Polygon, Vector};

/// $O(n^4)$ Convex hull by triangle exclusion.
///
/// A point is dropped when it lies inside a triangle formed by three other
/// input points. The survivors, with approximate duplicates collapsed, are
/// ordered by their angle around their own centroid, starting from the
/// negative x axis.
///
/// Points on the boundary of a triangle may be kept or dropped, so collinear
/// input can leave extra points on hull edges.
pub fn convex_hull(points: &[Point]) -> Polygon {
  let mut kept: Vec<Point> = Vec::new();
  for pt in points {
    let others: Vec<Point> = points
      .iter()
      .filter(|other| !other.approx_eq(pt))
      .copied()
      .collect();
    if !covered_by_triangle(&others, pt) && !kept.iter().any(|k| k.approx_eq(pt)) {
      kept.push(*pt);
    }
  }

  if let Some(center) = Point::centroid(&kept) {
    let axis = Vector::new(1., 0.);
    kept.sort_by_key(|pt| OrderedFloat(axis.left_turn_angle(&(pt - &center))));
  }
  Polygon::new(kept)
}

fn covered_by_triangle(others: &[Point], pt: &Point) -> bool {
  let n = others.len();
  for i in 0..n {
    for j in i + 1..n {
      for k in j + 1..n {
        let triangle = Polygon::new(vec![others[i], others[j], others[k]]);
        if is_point_in_polygon(&triangle, pt) {
          return true;
        }
      }
    }
  }
  false
}
