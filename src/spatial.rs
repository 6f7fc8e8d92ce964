//! Where nodes are.
//!
//! A [`Coordinates`] index places every node on the plane and measures
//! straight-line distances between them. Road costs and the search heuristic
//! are both derived from it.
use derive_more::Display;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde::Serialize;

use crate::cost::Distance;
use crate::search::SearchError;
use crate::space::Node;

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize)]
#[display("({x},{y})")]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn distance(&self, other: &Point) -> Distance {
        Distance::hypot(other.x - self.x, other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// The Spatial Index.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates<N: Node> {
    points: FxHashMap<N, Point>,
}

impl<N: Node> Coordinates<N> {
    pub fn new() -> Self {
        Self {
            points: FxHashMap::default(),
        }
    }

    /// Places `node` at `p`, returning its previous position if it had one.
    pub fn insert(&mut self, node: N, p: Point) -> Option<Point> {
        self.points.insert(node, p)
    }

    #[inline(always)]
    pub fn get(&self, node: &N) -> Option<&Point> {
        self.points.get(node)
    }

    /// Like [`Coordinates::get`], but a missing node is an error.
    #[inline(always)]
    pub fn point(&self, node: &N) -> Result<Point, SearchError<N>> {
        self.points
            .get(node)
            .copied()
            .ok_or_else(|| SearchError::MissingCoordinate(node.clone()))
    }

    #[inline(always)]
    pub fn contains(&self, node: &N) -> bool {
        self.points.contains_key(node)
    }

    /// Straight-line distance between two nodes.
    ///
    /// ```
    /// use routes::cost::Distance;
    /// use routes::spatial::Coordinates;
    /// use routes::spatial::Point;
    ///
    /// let mut coordinates = Coordinates::new();
    /// coordinates.insert("a", Point::new(0.0, 0.0));
    /// coordinates.insert("b", Point::new(3.0, 4.0));
    /// assert_eq!(coordinates.distance(&"a", &"b"), Ok(Distance::new(5.0)));
    /// assert!(coordinates.distance(&"a", &"c").is_err());
    /// ```
    #[inline(always)]
    pub fn distance(&self, a: &N, b: &N) -> Result<Distance, SearchError<N>> {
        Ok(self.point(a)?.distance(&self.point(b)?))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &Point)> {
        self.points.iter()
    }

    /// The `(min, max)` corners of the box containing every node.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.points.values();
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

impl<N: Node> Default for Coordinates<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> FromIterator<(N, Point)> for Coordinates<N> {
    fn from_iter<I: IntoIterator<Item = (N, Point)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
