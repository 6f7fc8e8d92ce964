use std::cmp::min;
use std::fmt::Debug;

// A heap is a tree-like structure where every subtree's root is better than
// all the other nodes in the subtree. It lives in an array that's traversed in
// a non-linear way. These are the indices we assign to each node with 4
// children per node,
//
// ```text
//                                    0
//          1               2                  3                  4
//    5  6  7  8     9 10 11 12        13 14 15 16        17 18 19 20
// 21 ...
// ```
//
// The last level will often be incomplete
//
//   - Up:          `(i-1)//A`
//   - First child: `(A*i) + 1`
//   - Last child:  `A*(i+1)`
const HEAP_ARITY: usize = 4usize;

#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    (i - 1) / HEAP_ARITY
}
#[inline(always)]
#[must_use]
fn down_first(i: usize) -> usize {
    (HEAP_ARITY * i) + 1
}
#[inline(always)]
#[must_use]
fn down_last(i: usize) -> usize {
    HEAP_ARITY * (i + 1)
}

/// Core comparison and index selection
#[inline(always)]
#[must_use]
fn fight<T: Ord>(a: &[T], l: usize, r: usize) -> usize {
    if a[l] <= a[r] { l } else { r }
}

/// The index of the best of up to `HEAP_ARITY` siblings.
///
/// ```text
/// 0   1   2   3
/// *   *   *   *
///  \ /     \ /
///   *       *
///    \     /
///       *
/// ```
#[inline(always)]
#[must_use]
fn best_sibling<T: Ord>(a: &[T]) -> usize {
    match a.len() {
        1 => 0usize,
        2 => fight(a, 0, 1),
        3 => fight(a, fight(a, 0, 1), 2),
        4 => fight(a, fight(a, 0, 1), fight(a, 2, 3)),
        _ => unreachable!("A node has at most {HEAP_ARITY} children"),
    }
}

/// The Open list.
///
/// A min-heap of search states. Popping always yields the least element
/// according to `T: Ord`, so a total order on `T` makes the pop sequence
/// deterministic.
///
/// Elements are never updated or removed in place; outdated elements are
/// expected to be recognised and skipped by whoever pops them.
#[derive(Debug, Clone)]
pub struct OpenList<T>
where
    T: Debug + Ord,
{
    heap: Vec<T>,
}

impl<T> OpenList<T>
where
    T: Debug + Ord,
{
    pub fn new() -> Self {
        Self { heap: vec![] }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, t: T) {
        self.verify_heap();
        let index = self.heap.len();

        self.heap.push(t);
        self.sift_up(index);

        self.verify_heap();
    }

    pub fn pop(&mut self) -> Option<T> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("Pop");

        self.verify_heap();
        if self.heap.len() <= 1 {
            return self.heap.pop();
        }

        let t = self.pop_non_trivial_heap();
        self.verify_heap();
        Some(t)
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {
        // All good... (hopefully)
    }
    #[inline(always)]
    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.heap.len() {
            let p = up(i);
            debug_assert!(
                self.heap[p] <= self.heap[i],
                "Node[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.heap[p],
                self.heap[i],
                self.heap.len(),
            );
        }
    }

    /// Pops the top node from a Heap with at least 2 elements.
    ///
    /// Works by unfairly sifting down the top-node to the last level, where it
    /// can be swapped with the very last element of the array and popped.
    /// Temporarily breaks invariants around the node sifting down unfairly.
    fn pop_non_trivial_heap(&mut self) -> T {
        debug_assert!(
            self.heap.len() >= 2,
            "It doesn't get easier. Why are you calling this?"
        );

        // 1. We pretend there's a hole at the root, and bubble the best
        //    children up till the hole reaches the bottom.
        // 2. If the hole is not the last element, we swap it for the last one.
        // 3. Now the last element is the one that was at the top, we pop it.
        let len = self.heap.len();
        let last = len - 1;

        let mut hole = 0;
        let mut child = down_first(hole);
        while child < len {
            debug_assert_eq!(child + HEAP_ARITY, down_last(hole) + 1);
            child += best_sibling(&self.heap[child..min(child + HEAP_ARITY, len)]);

            self.heap.swap(hole, child);
            debug_assert!(self.heap[child] <= self.heap[hole]);

            hole = child;
            child = down_first(hole);
        }
        // NOTE: The hole made it to the last level, but it may not be at the
        // end of the array.
        debug_assert!(hole <= last, "The hole={hole} is past last={last}");
        if hole != last {
            self.heap.swap(hole, last);
            self.sift_up(hole);
        }

        match self.heap.pop() {
            Some(t) => t,
            None => unreachable!("The heap had at least 2 elements"),
        }
    }

    /// Raises a node
    /// Returns it's new index
    #[inline(always)]
    fn sift_up(&mut self, mut pos: usize) -> usize {
        debug_assert!(pos < self.heap.len(), "Index out of bounds...");

        while pos > 0 {
            let parent = up(pos);
            if self.heap[parent] <= self.heap[pos] {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
        pos
    }
}

impl<T> Default for OpenList<T>
where
    T: Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn best_sibling_matches_linear_scan() {
        for a in [
            vec![0u8],
            vec![1u8, 0u8],
            vec![1u8, 2u8, 0u8],
            vec![3u8, 1u8, 2u8, 1u8],
            vec![2u8, 2u8, 2u8, 2u8],
        ] {
            let linear = (0..a.len()).min_by_key(|&i| a[i]).unwrap();
            assert_eq!(best_sibling(&a), linear, "{a:?}");
        }
    }

    #[test]
    fn heap_works() {
        let mut heap = OpenList::<String>::new();
        assert_eq!(heap.pop(), None);

        heap.push("aoeu".to_string());
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.pop(), Some("aoeu".to_string()));
        assert!(heap.is_empty());
    }

    #[test]
    fn heap_sorts() {
        let mut heap = OpenList::new();
        for s in ["c", "e", "f", "a", "d", "b"] {
            heap.push(s);
        }
        assert_eq!(heap.len(), 6);

        let mut popped = vec![];
        while let Some(s) = heap.pop() {
            popped.push(s);
        }
        assert_eq!(popped, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn heap_sorts_random_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for len in [2usize, 5, 17, 100, 1000] {
            let mut heap = OpenList::new();
            let mut expected: Vec<u16> = (0..len).map(|_| rng.random_range(0..50)).collect();
            for x in &expected {
                heap.push(*x);
            }
            expected.sort();

            let mut popped = Vec::with_capacity(len);
            while let Some(x) = heap.pop() {
                popped.push(x);
            }
            assert_eq!(popped, expected);
        }
    }

    #[test]
    fn interleaved_push_and_pop() {
        let mut heap = OpenList::new();
        heap.push(5);
        heap.push(3);
        assert_eq!(heap.pop(), Some(3));
        heap.push(1);
        heap.push(4);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), None);
    }
}
