//! A* search.
//!
//! Expands states by lowest `f = g + h`. With the straight-line heuristic the
//! first path popped for the goal is a shortest one.
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

/// The ranking for A*
///
/// We prefer better f-values.
///
/// ```
/// use routes::algorithms::astar::AStar;
/// use routes::cost::Distance;
/// use routes::search::Ranking;
///
/// let f = AStar::key(Distance::new(2.0), Distance::new(1.5));
/// assert_eq!(f, Distance::new(3.5));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct AStar;

impl<C: Cost> Ranking<C> for AStar {
    const NAME: &'static str = "A*";

    #[inline(always)]
    fn key(g: C, h: C) -> C {
        g.saturating_add(&h)
    }
}

pub type AStarSearch<'a, Sp, H, N, C> = BestFirstSearch<'a, AStar, Sp, H, N, C>;

/// Finds a shortest path from `start` to `goal`.
///
/// Roads cost the straight-line distance between their ends.
pub fn a_star_search<N: Node>(
    graph: &Graph<N>,
    coordinates: &Coordinates<N>,
    start: &N,
    goal: &N,
) -> Result<PathResult<N, Distance>, SearchError<N>> {
    let space = EuclideanSpace::new(graph, coordinates);
    let heuristic = StraightLine::new(coordinates, goal)?;

    AStarSearch::new(&space, heuristic, start.clone(), goal.clone())?.find_path()
}
