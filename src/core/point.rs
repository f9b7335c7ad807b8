//! Labeled point and point set types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A labeled point on the real line.
///
/// Holds a coordinate and an optional set of string attributes (label,
/// timestamp, ...). Attributes are opaque payload: they are carried through
/// transformations untouched and never participate in coordinate
/// comparisons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position on the real line
    pub x: f64,
    /// Optional string attributes, keyed by name
    #[serde(default)]
    pub attrs: HashMap<String, String>,
}

impl Point {
    /// Create a point with no attributes.
    #[inline]
    pub fn new(x: f64) -> Self {
        Self {
            x,
            attrs: HashMap::new(),
        }
    }

    /// Create a point with the given attributes.
    pub fn with_attrs(x: f64, attrs: HashMap<String, String>) -> Self {
        Self { x, attrs }
    }

    /// Builder-style attribute setter.
    ///
    /// # Example
    /// ```
    /// use bindu::Point;
    ///
    /// let p = Point::new(1.5).with_attr("label", "sensor-a");
    /// assert_eq!(p.attr("label"), Some("sensor-a"));
    /// ```
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by name.
    #[inline]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// An ordered sequence of [`Point`]s.
///
/// No uniqueness or separation invariant is imposed by construction;
/// separation is only established by
/// [`filter_by_min_distance`](crate::filter_by_min_distance), which returns
/// a new set and leaves its input untouched. All transformations follow that
/// pattern: a `PointSet` is a plain value and is never aliased or mutated in
/// place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    /// The points, in insertion order
    pub points: Vec<Point>,
}

impl PointSet {
    /// Create an empty point set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a point set from a slice of points.
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Create a point set of attribute-less points from raw coordinates.
    ///
    /// # Example
    /// ```
    /// use bindu::PointSet;
    ///
    /// let ps = PointSet::from_coordinates(&[3.0, 1.0, 2.0]);
    /// assert_eq!(ps.len(), 3);
    /// ```
    pub fn from_coordinates(xs: &[f64]) -> Self {
        Self {
            points: xs.iter().copied().map(Point::new).collect(),
        }
    }

    /// Number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Add a point to the end of the set.
    #[inline]
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Extract the coordinate sequence, in set order.
    pub fn coordinates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Return a new set with the points sorted ascending by coordinate.
    ///
    /// Exact coordinate ties keep their input order (stable sort). The
    /// receiver is not modified.
    pub fn sorted_by_x(&self) -> PointSet {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        PointSet { points }
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_attrs() {
        let p = Point::new(2.5)
            .with_attr("label", "a")
            .with_attr("source", "lidar");
        assert_eq!(p.x, 2.5);
        assert_eq!(p.attr("label"), Some("a"));
        assert_eq!(p.attr("source"), Some("lidar"));
        assert_eq!(p.attr("missing"), None);
    }

    #[test]
    fn test_from_coordinates() {
        let ps = PointSet::from_coordinates(&[1.0, 2.0, 3.0]);
        assert_eq!(ps.coordinates(), vec![1.0, 2.0, 3.0]);
        assert!(ps.iter().all(|p| p.attrs.is_empty()));
    }

    #[test]
    fn test_sorted_by_x_leaves_input_untouched() {
        let ps = PointSet::from_coordinates(&[3.0, 1.0, 2.0]);
        let sorted = ps.sorted_by_x();
        assert_eq!(sorted.coordinates(), vec![1.0, 2.0, 3.0]);
        assert_eq!(ps.coordinates(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sorted_by_x_keeps_attrs() {
        let ps: PointSet = vec![
            Point::new(2.0).with_attr("label", "b"),
            Point::new(1.0).with_attr("label", "a"),
        ]
        .into();
        let sorted = ps.sorted_by_x();
        assert_eq!(sorted.points[0].attr("label"), Some("a"));
        assert_eq!(sorted.points[1].attr("label"), Some("b"));
    }

    #[test]
    fn test_empty_set() {
        let ps = PointSet::new();
        assert!(ps.is_empty());
        assert_eq!(ps.len(), 0);
        assert!(ps.coordinates().is_empty());
    }
}
