//! One-tick movement probabilities derived from graph geometry.
//!
//! # Construction rule
//!
//! For adjacent nodes `i ≠ j` the raw weight is `min(1, k / distance(i, j))`
//! — faster transitions over shorter corridors, capped at certainty.  The
//! diagonal (staying put) absorbs `1 − Σ weights / out-degree`, and the row
//! is then renormalized to sum to exactly 1.
//!
//! Construction is a pure function of the graph and `k`; matrix indices are
//! the graph's declared enumeration order and are never reordered — belief
//! vectors and policies index by the same order.
//!
//! # Degenerate geometry
//!
//! Two adjacent nodes at the same planar position would divide by zero.
//! The weight is clamped to 1 instead, the pair is recorded on the matrix
//! ([`TransitionMatrix::degenerate_pairs`]), and a warning is logged — the
//! matrix stays usable, but the graph author should hear about it.

use chase_core::NodeId;
use chase_graph::WaypointGraph;

use crate::{BeliefError, BeliefResult};

// ── TransitionMatrix ──────────────────────────────────────────────────────────

/// An N×N row-stochastic matrix over graph nodes, row-major.
///
/// `rows[i * dim + j]` is the probability of moving from node `i` to node
/// `j` in one tick.  Every row sums to 1 within 1e-9 and no entry is
/// negative; both are enforced at construction.
#[derive(Debug, Clone)]
pub struct TransitionMatrix {
    dim: usize,
    rows: Vec<f64>,
    degenerate: Vec<(NodeId, NodeId)>,
}

impl TransitionMatrix {
    /// Number of nodes (rows and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Probability of moving `from` → `to` in one tick.
    ///
    /// Out-of-range ids read as probability 0.
    #[inline]
    pub fn prob(&self, from: NodeId, to: NodeId) -> f64 {
        if from.index() < self.dim && to.index() < self.dim {
            self.rows[from.index() * self.dim + to.index()]
        } else {
            0.0
        }
    }

    /// One full row (outgoing probabilities of `from`).
    pub fn row(&self, from: NodeId) -> BeliefResult<&[f64]> {
        if from.index() >= self.dim {
            return Err(BeliefError::DimensionMismatch {
                expected: self.dim,
                got: from.index(),
            });
        }
        let start = from.index() * self.dim;
        Ok(&self.rows[start..start + self.dim])
    }

    /// Adjacent pairs whose planar distance was zero at build time.
    ///
    /// Their weights were clamped to 1 rather than dividing by zero; the
    /// matrix is valid, but the geometry deserves a look.
    pub fn degenerate_pairs(&self) -> &[(NodeId, NodeId)] {
        &self.degenerate
    }

    /// Propagate a belief vector one step: `out[j] = Σ_i prior[i] · M[i][j]`.
    ///
    /// `out` is fully overwritten.  Panics in debug builds on length
    /// mismatch; callers ([`BeliefFilter`][crate::BeliefFilter]) validate
    /// dimensions up front.
    pub fn propagate(&self, prior: &[f64], out: &mut [f64]) {
        debug_assert_eq!(prior.len(), self.dim);
        debug_assert_eq!(out.len(), self.dim);
        out.fill(0.0);
        for (i, &mass) in prior.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            let row = &self.rows[i * self.dim..(i + 1) * self.dim];
            for (o, &p) in out.iter_mut().zip(row) {
                *o += mass * p;
            }
        }
    }
}

// ── TransitionModel ───────────────────────────────────────────────────────────

/// Builds a [`TransitionMatrix`] from a graph and the rate constant `k`.
///
/// Deterministic: the same graph and `k` always produce the same matrix.
///
/// # Example
///
/// ```
/// use chase_core::Point3;
/// use chase_graph::WaypointGraphBuilder;
/// use chase_belief::TransitionModel;
///
/// let mut b = WaypointGraphBuilder::new();
/// let a = b.add_node(Point3::new(0.0, 0.0, 0.0));
/// let c = b.add_node(Point3::new(8.0, 0.0, 0.0));
/// b.add_edge(a, c);
/// let graph = b.build().unwrap();
///
/// let matrix = TransitionModel::new(4.0).build(&graph).unwrap();
/// let row = matrix.row(a).unwrap();
/// assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TransitionModel {
    rate_k: f64,
}

impl TransitionModel {
    pub fn new(rate_k: f64) -> Self {
        Self { rate_k }
    }

    /// Build the matrix.  Fails with [`BeliefError::InvalidRate`] unless
    /// `k` is finite and positive.
    pub fn build(&self, graph: &WaypointGraph) -> BeliefResult<TransitionMatrix> {
        if !self.rate_k.is_finite() || self.rate_k <= 0.0 {
            return Err(BeliefError::InvalidRate(self.rate_k));
        }

        let dim = graph.node_count();
        let mut rows = vec![0.0f64; dim * dim];
        let mut degenerate = Vec::new();

        for from in graph.node_ids() {
            let neighbors = graph.neighbors(from)?;
            let row = &mut rows[from.index() * dim..(from.index() + 1) * dim];

            let mut weight_sum = 0.0;
            for &to in neighbors {
                let d = graph.distance(from, to)?;
                let w = if d == 0.0 {
                    degenerate.push((from, to));
                    log::warn!("zero-distance corridor {from} -> {to}; clamping transition weight to 1");
                    1.0
                } else {
                    (self.rate_k / d).min(1.0)
                };
                row[to.index()] = w;
                weight_sum += w;
            }

            // Self-loop absorbs the mass not spent on leaving.  The builder
            // guarantees out-degree >= 1, and each weight is <= 1, so the
            // average is <= 1 and the diagonal stays non-negative (the max
            // clamps residual float drift).
            let diag = (1.0 - weight_sum / neighbors.len() as f64).max(0.0);
            row[from.index()] = diag;

            // Renormalize the row to sum to exactly 1.
            let total = diag + weight_sum;
            for p in row.iter_mut() {
                *p /= total;
            }
        }

        Ok(TransitionMatrix { dim, rows, degenerate })
    }
}
