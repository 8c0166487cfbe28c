// Strategies for:
//  * points
//  * point sets
//  * generator parameters
// Coordinates are integral so that the epsilon based predicates never see
// values that differ by less than the tolerance.
use crate::algorithms::GeneratorConfig;
use crate::data::{Point, Polygon};
use crate::Orientation;

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;

pub fn any_point() -> impl Strategy<Value = Point> {
  (-1000..=1000i32, -1000..=1000i32).prop_map(Point::from)
}

pub fn any_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), size)
}

pub fn any_polygon(size: Range<usize>) -> impl Strategy<Value = Polygon> {
  any_points(size).prop_map(Polygon::new)
}

// No duplicates and no three collinear points.
pub fn general_position(points: &[Point]) -> bool {
  let n = points.len();
  for i in 0..n {
    for j in i + 1..n {
      if points[i].approx_eq(&points[j]) {
        return false;
      }
      for k in j + 1..n {
        if Orientation::new(&points[i], &points[j], &points[k]).is_colinear() {
          return false;
        }
      }
    }
  }
  true
}

pub fn any_generator_config() -> impl Strategy<Value = GeneratorConfig> {
  (
    1..100u32,
    0..100u32,
    1..90u32,
    0..90u32,
    any_point(),
  )
    .prop_map(|(r_min, r_extra, a_min, a_extra, center)| GeneratorConfig {
      radius: r_min..=r_min + r_extra,
      angle: a_min..=a_min + a_extra,
      center,
    })
}
