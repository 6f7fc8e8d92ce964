//! Search spaces: nodes, their neighbours and the cost of moving between them.
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use crate::cost::Cost;
use crate::cost::Distance;
use crate::graph::Graph;
use crate::search::SearchError;
use crate::spatial::Coordinates;

/// A location identifier.
///
/// `Ord` is what breaks ties between equally ranked search states, so it must
/// be a total order for searches to be deterministic.
pub trait Node: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T> Node for T where T: Clone + Debug + Display + Eq + Hash + Ord {}

/// A search space where nodes lead to neighbouring nodes at some cost.
pub trait Space<N, C>: Debug
where
    N: Node,
    C: Cost,
{
    /// Expands a Node
    fn neighbours(&self, n: &N) -> &[N];

    /// The cost of moving between two neighbouring nodes.
    fn cost(&self, from: &N, to: &N) -> Result<C, SearchError<N>>;

    /// The cost of following `path`.
    fn path_cost(&self, path: &[N]) -> Result<C, SearchError<N>> {
        let mut c = C::zero();
        for step in path.windows(2) {
            c += self.cost(&step[0], &step[1])?;
        }
        Ok(c)
    }

    /// Whether every step of `path` follows a road.
    fn valid_path(&self, path: &[N]) -> bool {
        path.windows(2)
            .all(|step| self.neighbours(&step[0]).contains(&step[1]))
    }
}

/// A road graph laid on the plane, where roads cost their length.
#[derive(Clone, Debug)]
pub struct EuclideanSpace<'a, N: Node> {
    pub graph: &'a Graph<N>,
    pub coordinates: &'a Coordinates<N>,
}

impl<'a, N: Node> EuclideanSpace<'a, N> {
    pub fn new(graph: &'a Graph<N>, coordinates: &'a Coordinates<N>) -> Self {
        Self { graph, coordinates }
    }
}

impl<N: Node> Space<N, Distance> for EuclideanSpace<'_, N> {
    #[inline(always)]
    fn neighbours(&self, n: &N) -> &[N] {
        self.graph.neighbours(n)
    }

    #[inline(always)]
    fn cost(&self, from: &N, to: &N) -> Result<Distance, SearchError<N>> {
        self.coordinates.distance(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Point;

    #[test]
    fn path_cost() {
        let mut graph = Graph::new();
        graph.add_road("a", "b");
        graph.add_road("b", "c");
        let coordinates = Coordinates::from_iter([
            ("a", Point::new(0.0, 0.0)),
            ("b", Point::new(3.0, 4.0)),
            ("c", Point::new(3.0, 0.0)),
        ]);
        let space = EuclideanSpace::new(&graph, &coordinates);

        assert_eq!(space.path_cost(&["a"]), Ok(Distance::new(0.0)));
        assert_eq!(space.path_cost(&["a", "b", "c"]), Ok(Distance::new(9.0)));
        assert!(space.valid_path(&["a", "b", "c"]));
        assert!(!space.valid_path(&["a", "c"]));
        assert_eq!(
            space.path_cost(&["a", "x"]),
            Err(SearchError::MissingCoordinate("x"))
        );
    }
}
