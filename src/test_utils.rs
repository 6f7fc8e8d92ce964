//! Small maps and reference answers shared by tests.
use rustc_hash::FxHashSet;

use crate::graph::Graph;
use crate::space::Node;
use crate::spatial::Coordinates;
use crate::spatial::Point;

/// The five-city sample map.
pub(crate) fn sample() -> (Graph<&'static str>, Coordinates<&'static str>) {
    let coordinates = Coordinates::from_iter([
        ("A", Point::new(0.0, 0.0)),
        ("B", Point::new(2.0, 1.0)),
        ("C", Point::new(4.0, 2.0)),
        ("D", Point::new(5.0, 5.0)),
        ("E", Point::new(1.0, 4.0)),
    ]);
    let graph = Graph::from_iter([
        ("A", vec!["B", "E"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["B", "D"]),
        ("D", vec!["C"]),
        ("E", vec!["A", "D"]),
    ]);
    (graph, coordinates)
}

/// A map where A* reaches `X` twice, the cheaper way second.
///
/// ```text
///   S -> A -> X -> Y -> G
///   S ------> X
/// ```
pub(crate) fn stale_detour() -> (Graph<&'static str>, Coordinates<&'static str>) {
    let coordinates = Coordinates::from_iter([
        ("S", Point::new(0.0, 0.0)),
        ("A", Point::new(1.0, 0.0)),
        ("X", Point::new(2.0, 1.0)),
        ("Y", Point::new(2.0, 5.0)),
        ("G", Point::new(4.0, 0.0)),
    ]);
    let graph = Graph::from_iter([
        ("S", vec!["A", "X"]),
        ("A", vec!["X"]),
        ("X", vec!["Y"]),
        ("Y", vec!["G"]),
    ]);
    (graph, coordinates)
}

/// Cost of the cheapest simple path, found by trying all of them.
pub(crate) fn brute_force_shortest<N: Node>(
    graph: &Graph<N>,
    coordinates: &Coordinates<N>,
    start: &N,
    goal: &N,
) -> Option<f64> {
    fn go<N: Node>(
        graph: &Graph<N>,
        coordinates: &Coordinates<N>,
        n: &N,
        goal: &N,
        g: f64,
        on_path: &mut FxHashSet<N>,
        best: &mut Option<f64>,
    ) {
        if n == goal {
            *best = Some(best.map_or(g, |b| b.min(g)));
            return;
        }
        for m in graph.neighbours(n) {
            if on_path.contains(m) {
                continue;
            }
            let c = coordinates.distance(n, m).unwrap().get();
            on_path.insert(m.clone());
            go(graph, coordinates, m, goal, g + c, on_path, best);
            on_path.remove(m);
        }
    }

    let mut best = None;
    let mut on_path = FxHashSet::default();
    on_path.insert(start.clone());
    go(graph, coordinates, start, goal, 0.0, &mut on_path, &mut best);
    best
}

pub(crate) fn reachable<N: Node>(graph: &Graph<N>, start: &N, goal: &N) -> bool {
    let mut seen = FxHashSet::default();
    let mut todo = vec![start.clone()];
    while let Some(n) = todo.pop() {
        if &n == goal {
            return true;
        }
        if !seen.insert(n.clone()) {
            continue;
        }
        todo.extend(graph.neighbours(&n).iter().cloned());
    }
    false
}
