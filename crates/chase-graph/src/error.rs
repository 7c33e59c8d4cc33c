//! Graph-subsystem error type.

use thiserror::Error;

use chase_core::NodeId;

/// Errors produced by `chase-graph`.
///
/// Construction errors are fatal to mission setup: a graph that fails to
/// build must never reach the transition model or a controller.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node with no outgoing edges.  The transition model cannot assign
    /// it a row and a controller parked on it could never leave, so the
    /// builder rejects the topology outright.
    #[error("node {0} has no outgoing edges")]
    IsolatedNode(NodeId),

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("duplicate node label {0:?}")]
    DuplicateLabel(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
