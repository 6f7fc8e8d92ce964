//! Best-first search over a [`Space`].
//!
//! Both A* and Greedy Best-First Search are a [`BestFirstSearch`] that only
//! differ in how they rank search states (see [`Ranking`]).
use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::time::Duration;

use hrsw::Stopwatch;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::cost::Cost;
use crate::data_structures::heap::OpenList;
use crate::heuristic::Heuristic;
use crate::space::Node;
use crate::space::Space;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError<N: Node> {
    #[error("Node {0} has no coordinates")]
    MissingCoordinate(N),
}

/// How a search orders its Open list.
pub trait Ranking<C: Cost>: Debug {
    /// A human-readable name for the algorithm.
    const NAME: &'static str;

    /// The key of a state reached at cost `g` and estimated at `h` from the
    /// goal. Lower keys are expanded first.
    fn key(g: C, h: C) -> C;
}

/// A candidate partial path on the Open list.
///
/// Carries the whole path from the start instead of a parent pointer, so
/// states never need to be looked up again once popped.
#[derive(Clone, Debug)]
pub struct SearchState<N, C>
where
    N: Node,
    C: Cost,
{
    /// The priority of this state. See [`Ranking::key`].
    pub key: C,
    pub node: N,
    pub path: Vec<N>,
    pub g: C,
}

impl<N, C> SearchState<N, C>
where
    N: Node,
    C: Cost,
{
    pub fn new_start(start: N, key: C) -> Self {
        Self {
            key,
            node: start.clone(),
            path: vec![start],
            g: C::zero(),
        }
    }

    /// The state reached by moving from `self` into `next` at `cost`.
    pub fn extend<R: Ranking<C>>(&self, next: N, cost: C, h: C) -> Self {
        let g = self.g.saturating_add(&cost);
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next.clone());

        Self {
            key: R::key(g, h),
            node: next,
            path,
            g,
        }
    }
}

// Search states are ranked by `(key, node, path, g)`.
//
// Only the key is meaningful. The node makes ties deterministic and the rest
// just completes a total order.
impl<N: Node, C: Cost> Ord for SearchState<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.g.cmp(&other.g))
    }
}
impl<N: Node, C: Cost> PartialOrd for SearchState<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: Node, C: Cost> PartialEq for SearchState<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<N: Node, C: Cost> Eq for SearchState<N, C> {}

/// A path from a start to a goal, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<N, C>
where
    N: Node,
    C: Cost,
{
    pub nodes: Vec<N>,
    pub cost: C,
}

impl<N, C> Path<N, C>
where
    N: Node,
    C: Cost,
{
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }
    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }
    /// Number of nodes, including both ends.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N, C> std::fmt::Display for Path<N, C>
where
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" -> "))
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the Open list, stale ones included.
    pub visited: usize,
    /// Nodes expanded, which is also the final size of the Closed set.
    pub expanded: usize,
    /// Popped states whose node was already closed.
    pub stale: usize,
    /// States pushed into the Open list, the start included.
    pub generated: usize,
    /// Largest Open list size seen.
    pub peak_open: usize,
    /// Largest number of path nodes held by the Open list at once.
    pub peak_open_path_nodes: usize,
}

impl SearchStats {
    pub fn write_stats<W: std::io::Write, N>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        writeln!(out, "Search Stats:")?;
        writeln!(
            out,
            "  - Visited:   {}",
            self.visited.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Expanded:  {}",
            self.expanded.separate_with_commas()
        )?;
        writeln!(out, "  - Stale:     {}", self.stale.separate_with_commas())?;
        writeln!(
            out,
            "  - Generated: {}",
            self.generated.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - |Open|^:   {}",
            self.peak_open.separate_with_commas()
        )?;
        let s = size_of::<N>();
        let l = self.peak_open_path_nodes;
        writeln!(
            out,
            "  - |Paths|^:  {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;

        Ok(())
    }
    pub fn print_stats<N>(&self) {
        if let Err(e) = self.write_stats::<_, N>(std::io::stdout().lock()) {
            log::warn!("Failed to print search stats: {e}");
        }
    }
}

/// The outcome of a single search.
#[derive(Clone, Debug)]
pub struct PathResult<N, C>
where
    N: Node,
    C: Cost,
{
    /// The path found, if the goal was reachable.
    pub path: Option<Path<N, C>>,
    /// States popped from the Open list.
    pub visited: usize,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    pub stats: SearchStats,
}

impl<N, C> PathResult<N, C>
where
    N: Node,
    C: Cost,
{
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// The nodes of the path found, if any.
    pub fn nodes(&self) -> Option<&[N]> {
        self.path.as_ref().map(|p| p.nodes.as_slice())
    }

    pub fn cost(&self) -> Option<C> {
        self.path.as_ref().map(|p| p.cost)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// A search from a start towards a single goal, ranked by `R`.
pub struct BestFirstSearch<'a, R, Sp, H, N, C>
where
    R: Ranking<C>,
    Sp: Space<N, C>,
    H: Heuristic<N, C>,
    N: Node,
    C: Cost,
{
    space: &'a Sp,
    heuristic: H,
    goal: N,

    open: OpenList<SearchState<N, C>>,
    /// The Closed set. Closed nodes are never expanded again.
    closed: FxHashSet<N>,

    stats: SearchStats,
    /// Path nodes currently held by the Open list.
    open_path_nodes: usize,
    stopwatch: Stopwatch,

    _phantom_ranking: PhantomData<R>,
}

impl<'a, R, Sp, H, N, C> BestFirstSearch<'a, R, Sp, H, N, C>
where
    R: Ranking<C>,
    Sp: Space<N, C>,
    H: Heuristic<N, C>,
    N: Node,
    C: Cost,
{
    /// Starts timing and puts the start on the Open list.
    pub fn new(space: &'a Sp, heuristic: H, start: N, goal: N) -> Result<Self, SearchError<N>> {
        let stopwatch = Stopwatch::new_started();

        let mut search = Self {
            space,
            heuristic,
            goal,
            open: OpenList::new(),
            closed: FxHashSet::default(),
            stats: SearchStats::default(),
            open_path_nodes: 0,
            stopwatch,
            _phantom_ranking: PhantomData,
        };

        let h = search.heuristic.h(&start)?;
        search.push(SearchState::new_start(start, R::key(C::zero(), h)));

        Ok(search)
    }

    /// Runs the search to completion.
    ///
    /// Finding no path is not an error, the returned [`PathResult`] just holds
    /// no path.
    pub fn find_path(mut self) -> Result<PathResult<N, C>, SearchError<N>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("FindPath");

        while let Some(state) = self.pop() {
            self.stats.visited += 1;
            log::trace!(
                "{}: Popped {} (key: {}, g: {})",
                R::NAME,
                state.node,
                state.key,
                state.g
            );

            if state.node == self.goal {
                let path = Path {
                    nodes: state.path,
                    cost: state.g,
                };
                return Ok(self.finish(Some(path)));
            }

            // Stale state, we already expanded this node.
            if self.closed.contains(&state.node) {
                self.stats.stale += 1;
                continue;
            }

            // Mark as closed
            self.closed.insert(state.node.clone());
            self.stats.expanded += 1;

            // Expand node
            let space = self.space;
            for neighbour in space.neighbours(&state.node) {
                #[cfg(feature = "coz_profile")]
                coz::scope!("ReachNode");

                if self.closed.contains(neighbour) {
                    continue;
                }
                let c = space.cost(&state.node, neighbour)?;
                let h = self.heuristic.h(neighbour)?;
                self.push(state.extend::<R>(neighbour.clone(), c, h));
            }
        }

        Ok(self.finish(None))
    }

    #[inline(always)]
    fn push(&mut self, state: SearchState<N, C>) {
        self.open_path_nodes += state.path.len();
        self.open.push(state);

        self.stats.generated += 1;
        self.stats.peak_open = self.stats.peak_open.max(self.open.len());
        self.stats.peak_open_path_nodes = self.stats.peak_open_path_nodes.max(self.open_path_nodes);
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<SearchState<N, C>> {
        let state = self.open.pop()?;
        self.open_path_nodes -= state.path.len();
        Some(state)
    }

    fn finish(mut self, path: Option<Path<N, C>>) -> PathResult<N, C> {
        self.stopwatch.stop();
        let elapsed = self.stopwatch.elapsed();

        match &path {
            Some(p) => log::info!(
                "{}: Found {p} (cost: {}) after visiting {} states",
                R::NAME,
                p.cost,
                self.stats.visited
            ),
            None => log::info!(
                "{}: No path to {} after visiting {} states",
                R::NAME,
                self.goal,
                self.stats.visited
            ),
        }
        log::debug!("{}: {:?}", R::NAME, self.stats);

        PathResult {
            path,
            visited: self.stats.visited,
            elapsed,
            stats: self.stats,
        }
    }
}

impl<R, Sp, H, N, C> std::fmt::Debug for BestFirstSearch<'_, R, Sp, H, N, C>
where
    R: Ranking<C>,
    Sp: Space<N, C>,
    H: Heuristic<N, C>,
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}Search{{goal: {:?}, |Open|: {}, |Closed|: {}, {:?}}}",
            R::NAME,
            self.goal,
            self.open.len(),
            self.closed.len(),
            self.stats,
        )
    }
}
