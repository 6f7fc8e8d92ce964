//! Estimates of the remaining cost to the goal.
use crate::cost::Cost;
use crate::cost::Distance;
use crate::search::SearchError;
use crate::space::Node;
use crate::spatial::Coordinates;
use crate::spatial::Point;

/// An estimate of the remaining cost to a fixed goal.
pub trait Heuristic<N, C>: std::fmt::Debug
where
    N: Node,
    C: Cost,
{
    fn h(&self, n: &N) -> Result<C, SearchError<N>>;
}

/// Straight-line distance to the goal.
///
/// Admissible and consistent whenever roads cost their Euclidean length, as
/// no sequence of roads is shorter than the straight line.
#[derive(Debug)]
pub struct StraightLine<'a, N: Node> {
    coordinates: &'a Coordinates<N>,
    goal: Point,
}

impl<'a, N: Node> StraightLine<'a, N> {
    pub fn new(coordinates: &'a Coordinates<N>, goal: &N) -> Result<Self, SearchError<N>> {
        let goal = coordinates.point(goal)?;
        Ok(Self { coordinates, goal })
    }
}

impl<N: Node> Heuristic<N, Distance> for StraightLine<'_, N> {
    #[inline(always)]
    fn h(&self, n: &N) -> Result<Distance, SearchError<N>> {
        Ok(self.coordinates.point(n)?.distance(&self.goal))
    }
}
