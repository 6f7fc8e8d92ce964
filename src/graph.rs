//! The directed adjacency relation between nodes.
use rustc_hash::FxHashMap;

use crate::space::Node;

/// Directed roads between nodes.
///
/// Neighbours keep their insertion order. Nodes that are not keys (including
/// those only ever mentioned as neighbours) have no outgoing roads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<N: Node> {
    adjacency: FxHashMap<N, Vec<N>>,
}

impl<N: Node> Graph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }

    /// Adds a one-way road `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Adds a two-way road.
    pub fn add_road(&mut self, a: N, b: N) {
        self.add_edge(a.clone(), b.clone());
        self.add_edge(b, a);
    }

    /// Replaces the neighbours of `node`.
    pub fn set_neighbours(&mut self, node: N, neighbours: Vec<N>) {
        self.adjacency.insert(node, neighbours);
    }

    /// The nodes reachable from `node` through a single road.
    ///
    /// ```
    /// use routes::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_edge("a", "b");
    /// g.add_edge("a", "c");
    /// assert_eq!(g.neighbours(&"a"), ["b", "c"]);
    /// assert!(g.neighbours(&"b").is_empty());
    /// ```
    #[inline(always)]
    pub fn neighbours(&self, node: &N) -> &[N] {
        match self.adjacency.get(node) {
            Some(neighbours) => neighbours,
            None => &[],
        }
    }

    /// Nodes with outgoing roads.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Every node mentioned, either as a source or as a destination.
    pub fn mentioned_nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency
            .iter()
            .flat_map(|(from, to)| std::iter::once(from).chain(to.iter()))
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<N: Node> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> FromIterator<(N, Vec<N>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
