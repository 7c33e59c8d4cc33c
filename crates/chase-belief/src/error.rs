//! Belief-subsystem error type.

use thiserror::Error;

use chase_graph::GraphError;

/// Errors produced by `chase-belief`.
#[derive(Debug, Error)]
pub enum BeliefError {
    /// The transition-rate constant must be finite and positive.
    #[error("transition rate constant must be finite and > 0, got {0}")]
    InvalidRate(f64),

    /// A vector or operator does not match the matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The observation ruled out every node the prediction allowed.
    ///
    /// Recoverable: the caller substitutes an uninformative operator and
    /// retries.  The filter refuses to divide by zero, so the stored belief
    /// is left exactly as it was before the failed tick.
    #[error("belief collapsed to zero mass (observation ruled out all nodes)")]
    DegenerateBelief,

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type BeliefResult<T> = Result<T, BeliefError>;
