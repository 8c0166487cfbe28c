use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;

use super::{Point, Polygon};

/// Either a single point or a polygon.
///
/// With the `serde` feature the variants serialize untagged, as `{"x":..,"y":..}`
/// and `{"points":[..]}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GeometryObject {
  Point(Point),
  Polygon(Polygon),
}

impl GeometryObject {
  /// A point yields itself, a polygon yields its vertices.
  pub fn points(&self) -> &[Point] {
    match self {
      GeometryObject::Point(pt) => std::slice::from_ref(pt),
      GeometryObject::Polygon(poly) => poly.points(),
    }
  }

  /// Copy with the `idx`-th point replaced. A point object is replaced
  /// outright regardless of `idx`.
  #[must_use]
  pub fn with_point(&self, idx: usize, point: Point) -> GeometryObject {
    match self {
      GeometryObject::Point(_) => GeometryObject::Point(point),
      GeometryObject::Polygon(poly) => GeometryObject::Polygon(poly.with_point(idx, point)),
    }
  }

  pub fn as_point(&self) -> Option<&Point> {
    match self {
      GeometryObject::Point(pt) => Some(pt),
      GeometryObject::Polygon(_) => None,
    }
  }

  pub fn as_polygon(&self) -> Option<&Polygon> {
    match self {
      GeometryObject::Point(_) => None,
      GeometryObject::Polygon(poly) => Some(poly),
    }
  }
}

impl From<Point> for GeometryObject {
  fn from(point: Point) -> GeometryObject {
    GeometryObject::Point(point)
  }
}

impl From<Polygon> for GeometryObject {
  fn from(polygon: Polygon) -> GeometryObject {
    GeometryObject::Polygon(polygon)
  }
}

/// Geometry objects indexed by caller-chosen string keys, iterated in key
/// order. Updates never mutate a stored object in place; the object is
/// replaced by an updated copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryObjectStorage {
  objects: BTreeMap<String, GeometryObject>,
}

impl GeometryObjectStorage {
  pub fn new() -> GeometryObjectStorage {
    GeometryObjectStorage::default()
  }

  pub fn len(&self) -> usize {
    self.objects.len()
  }

  pub fn is_empty(&self) -> bool {
    self.objects.is_empty()
  }

  /// Returns the object previously stored under `key`.
  pub fn insert(
    &mut self,
    key: impl Into<String>,
    object: impl Into<GeometryObject>,
  ) -> Option<GeometryObject> {
    self.objects.insert(key.into(), object.into())
  }

  pub fn get(&self, key: &str) -> Option<&GeometryObject> {
    self.objects.get(key)
  }

  pub fn remove(&mut self, key: &str) -> Option<GeometryObject> {
    self.objects.remove(key)
  }

  /// Replace the `idx`-th point of the object stored under `key`. Returns
  /// `false` if there is no such key.
  pub fn move_point(&mut self, key: &str, idx: usize, point: Point) -> bool {
    match self.objects.get_mut(key) {
      Some(object) => {
        *object = object.with_point(idx, point);
        true
      }
      None => false,
    }
  }

  /// All point objects whose key starts with `prefix`, in key order.
  pub fn points_with_prefix(&self, prefix: &str) -> Vec<Point> {
    self
      .objects
      .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
      .take_while(|(key, _)| key.starts_with(prefix))
      .filter_map(|(_, object)| object.as_point().copied())
      .collect()
  }

  pub fn iter(&self) -> btree_map::Iter<'_, String, GeometryObject> {
    self.objects.iter()
  }
}

impl<'a> IntoIterator for &'a GeometryObjectStorage {
  type Item = (&'a String, &'a GeometryObject);
  type IntoIter = btree_map::Iter<'a, String, GeometryObject>;
  fn into_iter(self) -> Self::IntoIter {
    self.objects.iter()
  }
}

impl<K: Into<String>> FromIterator<(K, GeometryObject)> for GeometryObjectStorage {
  fn from_iter<I: IntoIterator<Item = (K, GeometryObject)>>(iter: I) -> Self {
    GeometryObjectStorage {
      objects: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    }
  }
}
