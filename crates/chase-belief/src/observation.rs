//! Per-tick observation operators.
//!
//! An operator is a diagonal of per-node likelihood weights in `[0, 1]`:
//! 1 = "fully consistent with what was observed", 0 = "ruled out".  The
//! collaborator derives it from whatever sensing the environment offers
//! (direct sighting, a searched-and-empty visibility set, nothing at all)
//! and hands it to [`BeliefFilter::tick`][crate::BeliefFilter::tick].

use chase_core::NodeId;
use chase_graph::GraphError;

use crate::BeliefResult;

/// A per-node likelihood diagonal applied during the filter's update step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationOperator {
    weights: Vec<f64>,
}

impl ObservationOperator {
    /// "No information": every node weighted 1.  The neutral element of the
    /// update step and the fallback when a tick's observation collapses the
    /// belief.
    pub fn uninformative(dim: usize) -> Self {
        Self { weights: vec![1.0; dim] }
    }

    /// A confirmed sighting: one-hot at `node`, everything else ruled out.
    pub fn sighted_at(node: NodeId, dim: usize) -> BeliefResult<Self> {
        if node.index() >= dim {
            return Err(GraphError::NodeNotFound(node).into());
        }
        let mut weights = vec![0.0; dim];
        weights[node.index()] = 1.0;
        Ok(Self { weights })
    }

    /// Searched and found empty: the listed nodes are ruled out, the rest
    /// stay fully plausible.  Pair with
    /// [`WaypointGraph::visible_from`][chase_graph::WaypointGraph::visible_from]
    /// to encode "looked across the courtyard and saw nothing".
    pub fn ruled_out(nodes: &[NodeId], dim: usize) -> BeliefResult<Self> {
        let mut weights = vec![1.0; dim];
        for &node in nodes {
            if node.index() >= dim {
                return Err(GraphError::NodeNotFound(node).into());
            }
            weights[node.index()] = 0.0;
        }
        Ok(Self { weights })
    }

    /// Arbitrary per-node likelihoods.  Entries are clamped into `[0, 1]`;
    /// non-finite entries collapse to 0 (ruled out) rather than poisoning
    /// the filter with NaNs.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        let weights = weights
            .into_iter()
            .map(|w| if w.is_finite() { w.clamp(0.0, 1.0) } else { 0.0 })
            .collect();
        Self { weights }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Likelihood weight for one node (0 if out of range).
    #[inline]
    pub fn weight(&self, node: NodeId) -> f64 {
        self.weights.get(node.index()).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
