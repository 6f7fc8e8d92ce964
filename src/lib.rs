use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod cost;
pub mod data_structures;

// Search space
// ------------
pub mod graph;
pub mod heuristic;
pub mod space;
pub mod spatial;

// Search
// ------
pub mod search;

// Algorithms
// ----------
pub mod algorithms;

// Problems
// --------
pub mod problems;

// Presentation
// ------------
pub mod render;

#[cfg(test)]
pub(crate) mod test_utils;
