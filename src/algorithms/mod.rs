//! Implementation of search algorithms.
//!
//! Both algorithms search a road graph whose roads cost the straight-line
//! distance between their ends, and are guided by the straight-line distance
//! to the goal.

pub mod astar;
pub mod greedy;

use derive_more::Display;

pub use astar::a_star_search;
pub use greedy::greedy_best_first_search;

use crate::cost::Distance;
use crate::graph::Graph;
use crate::search::PathResult;
use crate::search::SearchError;
use crate::space::Node;
use crate::spatial::Coordinates;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Algorithm {
    #[display("A*")]
    #[value(name = "astar")]
    AStar,
    #[display("Greedy Best-First Search")]
    #[value(name = "greedy")]
    GreedyBestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::GreedyBestFirst];

    /// Runs this algorithm from `start` to `goal`.
    ///
    /// ```
    /// use routes::algorithms::Algorithm;
    /// use routes::problems::roadmap::RoadMap;
    ///
    /// let map = RoadMap::sample();
    /// let (a, d) = ("A".to_string(), "D".to_string());
    /// let astar = Algorithm::AStar.search(&map.graph, &map.coordinates, &a, &d).unwrap();
    /// let greedy = Algorithm::GreedyBestFirst.search(&map.graph, &map.coordinates, &a, &d).unwrap();
    /// assert!(astar.cost() <= greedy.cost());
    /// ```
    pub fn search<N: Node>(
        &self,
        graph: &Graph<N>,
        coordinates: &Coordinates<N>,
        start: &N,
        goal: &N,
    ) -> Result<PathResult<N, Distance>, SearchError<N>> {
        match self {
            Algorithm::AStar => a_star_search(graph, coordinates, start, goal),
            Algorithm::GreedyBestFirst => {
                greedy_best_first_search(graph, coordinates, start, goal)
            }
        }
    }
}
