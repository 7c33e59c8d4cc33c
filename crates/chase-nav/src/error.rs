//! Navigation-subsystem error type.

use thiserror::Error;

use chase_core::NodeId;
use chase_graph::GraphError;

/// Errors produced by `chase-nav`.
#[derive(Debug, Error)]
pub enum NavError {
    /// A node with no neighbors at all reached destination selection.
    ///
    /// The graph builder rejects isolated nodes, so hitting this means a
    /// controller was driven against a graph its node never came from —
    /// a programming-invariant violation, not a runtime condition.
    #[error("no candidate destination from {0}")]
    NoCandidate(NodeId),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type NavResult<T> = Result<T, NavError>;
