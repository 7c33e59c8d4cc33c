//! Destination selection: the discrete half of navigation.
//!
//! Both shipped policies share the same two-tier candidate rule, stated
//! explicitly rather than discovered by catching an empty-set failure:
//! neighbors minus the just-departed node first; if that removes every
//! option (a dead-end spur), all neighbors.  A node with no neighbors at
//! all cannot come from a built graph and fails loudly.

use chase_core::{AgentRng, NodeId};
use chase_belief::BeliefState;
use chase_graph::WaypointGraph;
use rand::distributions::{Distribution, WeightedIndex};

use crate::{NavError, NavResult};

/// Picks the next destination waypoint on each arrival.
///
/// Implementations are pure decision rules: any randomness comes from the
/// injected [`AgentRng`], so a mission replayed with the same seed makes
/// identical choices.  `excluded` is the node the agent just departed, or
/// `None` on the very first selection.
pub trait DestinationPolicy: Send + Sync {
    fn select(
        &self,
        belief:   &BeliefState,
        current:  NodeId,
        excluded: Option<NodeId>,
        graph:    &WaypointGraph,
        rng:      &mut AgentRng,
    ) -> NavResult<NodeId>;
}

/// Two-tier candidate set: filtered first, unfiltered fallback.
fn candidates(
    graph:    &WaypointGraph,
    current:  NodeId,
    excluded: Option<NodeId>,
) -> NavResult<Vec<NodeId>> {
    let neighbors = graph.neighbors(current)?;
    let filtered: Vec<NodeId> = neighbors
        .iter()
        .copied()
        .filter(|&n| Some(n) != excluded)
        .collect();
    if !filtered.is_empty() {
        return Ok(filtered);
    }
    if neighbors.is_empty() {
        return Err(NavError::NoCandidate(current));
    }
    // Dead-end spur: reversing onto the excluded node beats standing still.
    Ok(neighbors.to_vec())
}

// ── PursuitPolicy ─────────────────────────────────────────────────────────────

/// Seeker policy: head for the candidate the belief filter considers most
/// likely to hold the evader.
///
/// Deterministic — ties break to the lowest node index (the graph's
/// declared enumeration order), and the injected RNG is untouched.
pub struct PursuitPolicy;

impl DestinationPolicy for PursuitPolicy {
    fn select(
        &self,
        belief:   &BeliefState,
        current:  NodeId,
        excluded: Option<NodeId>,
        graph:    &WaypointGraph,
        _rng:     &mut AgentRng,
    ) -> NavResult<NodeId> {
        let candidates = candidates(graph, current, excluded)?;
        // Candidate lists come out of the CSR in ascending id order, so
        // keeping the first strict maximum implements the tie-break.
        let mut best = candidates[0];
        let mut best_mass = belief.prob(best);
        for &node in &candidates[1..] {
            let mass = belief.prob(node);
            if mass > best_mass {
                best = node;
                best_mass = mass;
            }
        }
        Ok(best)
    }
}

// ── EvasionPolicy ─────────────────────────────────────────────────────────────

/// Evader policy: drift toward wherever the seeker least expects.
///
/// The candidate belief masses are renormalized to shares summing to 1 and
/// each candidate is weighted by the *inverse* (complement) of its share,
/// so less-likely-to-be-searched nodes are proportionally more likely to be
/// chosen — deliberately stochastic rather than argmin, which a seeker
/// could predict and ambush.  When the candidates carry no belief mass at
/// all the draw degrades to uniform.
pub struct EvasionPolicy;

impl DestinationPolicy for EvasionPolicy {
    fn select(
        &self,
        belief:   &BeliefState,
        current:  NodeId,
        excluded: Option<NodeId>,
        graph:    &WaypointGraph,
        rng:      &mut AgentRng,
    ) -> NavResult<NodeId> {
        let candidates = candidates(graph, current, excluded)?;
        if candidates.len() == 1 {
            return Ok(candidates[0]);
        }

        let masses: Vec<f64> = candidates.iter().map(|&n| belief.prob(n).max(0.0)).collect();
        let total: f64 = masses.iter().sum();
        if total <= 0.0 {
            // No information over the candidate set; all equally safe.
            return Ok(*rng.choose(&candidates).unwrap_or(&candidates[0]));
        }

        // shares sum to 1, so the complements sum to len - 1 > 0 and
        // WeightedIndex cannot see an all-zero weight vector.
        let weights: Vec<f64> = masses.iter().map(|m| 1.0 - m / total).collect();
        match WeightedIndex::new(&weights) {
            Ok(dist) => Ok(candidates[dist.sample(rng.inner())]),
            Err(e) => {
                log::warn!("evasion weights rejected ({e}); falling back to uniform draw");
                Ok(*rng.choose(&candidates).unwrap_or(&candidates[0]))
            }
        }
    }
}
