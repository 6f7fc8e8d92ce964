//! Greedy Best-First Search.
//!
//! Expands states by lowest `h`, ignoring the cost paid so far. Usually
//! visits fewer states than A*, but may settle for a longer path.
use crate::cost::Cost;
use crate::cost::Distance;
use crate::graph::Graph;
use crate::heuristic::StraightLine;
use crate::search::BestFirstSearch;
use crate::search::PathResult;
use crate::search::Ranking;
use crate::search::SearchError;
use crate::space::EuclideanSpace;
use crate::space::Node;
use crate::spatial::Coordinates;

/// The ranking for Greedy Best-First Search
///
/// We prefer states that look closer to the goal, regardless of `g`.
#[derive(Copy, Clone, Debug)]
pub struct GreedyBestFirst;

impl<C: Cost> Ranking<C> for GreedyBestFirst {
    const NAME: &'static str = "GBFS";

    #[inline(always)]
    fn key(_g: C, h: C) -> C {
        h
    }
}

pub type GreedySearch<'a, Sp, H, N, C> = BestFirstSearch<'a, GreedyBestFirst, Sp, H, N, C>;

/// Finds a path from `start` to `goal` by always heading to the node closest
/// to `goal` in a straight line.
pub fn greedy_best_first_search<N: Node>(
    graph: &Graph<N>,
    coordinates: &Coordinates<N>,
    start: &N,
    goal: &N,
) -> Result<PathResult<N, Distance>, SearchError<N>> {
    let space = EuclideanSpace::new(graph, coordinates);
    let heuristic = StraightLine::new(coordinates, goal)?;

    GreedySearch::new(&space, heuristic, start.clone(), goal.clone())?.find_path()
}
