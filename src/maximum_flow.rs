pub mod edmonds_karp;
pub mod error;
pub mod residual_graph;
