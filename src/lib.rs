//! Maximum flow on dense capacitated networks.
//!
//! An adjacency-matrix residual graph plus an Edmonds-Karp solver: repeated
//! breadth-first search for a shortest augmenting path, bottleneck push,
//! until the sink is unreachable.

pub mod maximum_flow;
