use std::iter::FromIterator;
use std::ops::Index;

use crate::data::{Point, Vector};

/// An ordered ring of points.
///
/// The ring is implicitly closed: the edge from the last point back to the
/// first is always part of the polygon. No validation is performed, so empty
/// and degenerate polygons (fewer than 3 points, duplicates, self
/// intersections) are all representable.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
  points: Vec<Point>,
}

/// A directed edge of a [`Polygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
  pub src: Point,
  pub dst: Point,
}

impl Edge {
  pub fn vector(&self) -> Vector {
    self.dst - self.src
  }
}

impl Polygon {
  pub fn new(points: Vec<Point>) -> Polygon {
    Polygon { points }
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, idx: usize) -> Option<&Point> {
    self.points.get(idx)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.points.iter()
  }

  /// Every edge `points[i] -> points[(i + 1) % n]`, including the closing
  /// edge. A single point yields one zero-length edge; an empty polygon yields
  /// nothing.
  pub fn iter_edges(&self) -> impl Iterator<Item = Edge> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| Edge {
      src: self.points[i],
      dst: self.points[(i + 1) % n],
    })
  }

  /// Largest x coordinate. `None` for an empty polygon.
  pub fn max_x(&self) -> Option<f64> {
    self.points.iter().map(Point::x_coord).reduce(f64::max)
  }

  /// Vertex average. `None` for an empty polygon.
  pub fn centroid(&self) -> Option<Point> {
    Point::centroid(&self.points)
  }

  /// Copy of this polygon with the point at `idx` replaced. Indices outside
  /// the polygon leave the points unchanged.
  #[must_use]
  pub fn with_point(&self, idx: usize, point: Point) -> Polygon {
    let mut points = self.points.clone();
    if let Some(slot) = points.get_mut(idx) {
      *slot = point;
    }
    Polygon { points }
  }

  /// Ray casting point-in-polygon test. See
  /// [`is_point_in_polygon`](crate::algorithms::is_point_in_polygon).
  pub fn contains(&self, point: &Point) -> bool {
    crate::algorithms::is_point_in_polygon(self, point)
  }

  /// See [`is_convex_polygon`](crate::algorithms::is_convex_polygon).
  pub fn is_convex(&self) -> bool {
    crate::algorithms::is_convex_polygon(self)
  }
}

impl Index<usize> for Polygon {
  type Output = Point;
  fn index(&self, index: usize) -> &Point {
    self.points.index(index)
  }
}

impl From<Vec<Point>> for Polygon {
  fn from(points: Vec<Point>) -> Polygon {
    Polygon::new(points)
  }
}

impl From<Polygon> for Vec<Point> {
  fn from(polygon: Polygon) -> Vec<Point> {
    polygon.points
  }
}

impl FromIterator<Point> for Polygon {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Polygon {
    Polygon::new(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a Polygon {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_none, assert_some_eq};

  fn square() -> Polygon {
    vec![
      Point::new(0., 0.),
      Point::new(10., 0.),
      Point::new(10., 10.),
      Point::new(0., 10.),
    ]
    .into()
  }

  #[test]
  fn edges_wrap_around() {
    let poly = square();
    let edges: Vec<Edge> = poly.iter_edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3].src, Point::new(0., 10.));
    assert_eq!(edges[3].dst, Point::new(0., 0.));
    assert_eq!(edges[0].vector(), Vector::new(10., 0.));
  }

  #[test]
  fn empty_polygon() {
    let poly = Polygon::default();
    assert_eq!(poly.iter_edges().count(), 0);
    assert_none!(poly.max_x());
    assert_none!(poly.centroid());
  }

  #[test]
  fn max_x_and_centroid() {
    let poly = square();
    assert_some_eq!(poly.max_x(), 10.);
    assert_some_eq!(poly.centroid(), Point::new(5., 5.));
  }

  #[test]
  fn with_point_copies() {
    let poly = square();
    let moved = poly.with_point(2, Point::new(20., 20.));
    assert_eq!(poly[2], Point::new(10., 10.));
    assert_eq!(moved[2], Point::new(20., 20.));
    assert_eq!(poly.with_point(7, Point::new(1., 1.)), poly);
  }
}
