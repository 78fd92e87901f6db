use thiserror::Error;

pub type Result<T> = std::result::Result<T, MaxFlowError>;

/// Recoverable input errors. Violations of internal residual invariants are
/// not represented here; they halt via assertion in `push_flow`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MaxFlowError {
    #[error("vertex {vertex} out of range for a graph with {num_vertices} vertices")]
    InvalidVertex { vertex: usize, num_vertices: usize },

    #[error("negative capacity on edge {from}->{to}")]
    NegativeCapacity { from: usize, to: usize },

    #[error("source and sink are the same vertex {vertex}")]
    DegenerateQuery { vertex: usize },
}
