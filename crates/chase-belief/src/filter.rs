//! The belief vector and the recursive filter that maintains it.

use chase_core::NodeId;
use chase_graph::GraphError;

use crate::{BeliefError, BeliefResult, ObservationOperator, TransitionMatrix};

// ── BeliefState ───────────────────────────────────────────────────────────────

/// A probability distribution over graph nodes, indexed by the declared
/// enumeration order (the same order as transition-matrix rows).
///
/// Always sums to 1; created at mission start, mutated once per tick by
/// [`BeliefFilter::tick`], discarded at mission end.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeliefState {
    probs: Vec<f64>,
}

impl BeliefState {
    /// Uniform prior: the evader could be anywhere.
    pub fn uniform(dim: usize) -> Self {
        let p = if dim == 0 { 0.0 } else { 1.0 / dim as f64 };
        Self { probs: vec![p; dim] }
    }

    /// Deterministic spike: the start node is known with certainty.
    pub fn certain(node: NodeId, dim: usize) -> BeliefResult<Self> {
        if node.index() >= dim {
            return Err(GraphError::NodeNotFound(node).into());
        }
        let mut probs = vec![0.0; dim];
        probs[node.index()] = 1.0;
        Ok(Self { probs })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.probs.len()
    }

    /// Probability mass at `node` (0 if out of range).
    #[inline]
    pub fn prob(&self, node: NodeId) -> f64 {
        self.probs.get(node.index()).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// The most likely node; ties resolve to the lowest index (declared
    /// enumeration order).  `None` only for the empty distribution.
    pub fn argmax(&self) -> Option<NodeId> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.probs.iter().enumerate() {
            match best {
                Some((_, bp)) if p <= bp => {}
                _ => best = Some((i, p)),
            }
        }
        best.map(|(i, _)| NodeId(i as u32))
    }

    /// Total mass — 1 within tolerance whenever the filter has run.
    pub fn total_mass(&self) -> f64 {
        self.probs.iter().sum()
    }
}

// ── BeliefFilter ──────────────────────────────────────────────────────────────

/// The recursive Bayesian (finite-state Hidden-Markov) estimator.
///
/// Owns the transition matrix and the current belief; one instance tracks
/// one hidden agent for one mission.
///
/// # Failure behavior
///
/// A tick whose observation rules out every node the prediction allowed
/// fails with [`BeliefError::DegenerateBelief`] and leaves the stored
/// belief untouched — the caller substitutes
/// [`ObservationOperator::uninformative`] and retries.  The filter never
/// divides by zero and never stores a NaN.
pub struct BeliefFilter {
    matrix: TransitionMatrix,
    belief: BeliefState,
    /// Work buffer for the predicted distribution, reused across ticks.
    scratch: Vec<f64>,
}

impl BeliefFilter {
    /// Create a filter from a matrix and an initial prior of matching
    /// dimension.
    pub fn new(matrix: TransitionMatrix, initial: BeliefState) -> BeliefResult<Self> {
        if initial.dim() != matrix.dim() {
            return Err(BeliefError::DimensionMismatch {
                expected: matrix.dim(),
                got: initial.dim(),
            });
        }
        let scratch = vec![0.0; matrix.dim()];
        Ok(Self { matrix, belief: initial, scratch })
    }

    /// Create a filter with a uniform prior.
    pub fn with_uniform_prior(matrix: TransitionMatrix) -> Self {
        let belief = BeliefState::uniform(matrix.dim());
        let scratch = vec![0.0; matrix.dim()];
        Self { matrix, belief, scratch }
    }

    /// The current posterior.
    #[inline]
    pub fn belief(&self) -> &BeliefState {
        &self.belief
    }

    #[inline]
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Advance the estimate by one tick: predict, update, normalize.
    ///
    /// The order is fixed — the transition matrix models motion *during*
    /// the tick, the observation models information gathered *at* the tick
    /// boundary.
    pub fn tick(&mut self, observation: &ObservationOperator) -> BeliefResult<&BeliefState> {
        let dim = self.matrix.dim();
        if observation.dim() != dim {
            return Err(BeliefError::DimensionMismatch {
                expected: dim,
                got: observation.dim(),
            });
        }

        // Predict: scratch[j] = Σ_i belief[i] · M[i][j].
        self.matrix.propagate(&self.belief.probs, &mut self.scratch);

        // Update: element-wise likelihood weighting, with the weight (and
        // any float-drift negatives or NaNs) clamped so no bad value can
        // survive into the normalization.
        for (p, &w) in self.scratch.iter_mut().zip(observation.weights()) {
            *p *= w.clamp(0.0, 1.0);
            if !p.is_finite() || *p < 0.0 {
                *p = 0.0;
            }
        }

        // Normalize, refusing to divide by zero.
        let total: f64 = self.scratch.iter().sum();
        if !(total > 0.0) || !total.is_finite() {
            return Err(BeliefError::DegenerateBelief);
        }
        for (b, &s) in self.belief.probs.iter_mut().zip(&self.scratch) {
            *b = s / total;
        }
        Ok(&self.belief)
    }
}
