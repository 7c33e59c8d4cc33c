//! Per-agent navigation: steer at the target, notice arrival, pick the next
//! target.
//!
//! # State machine
//!
//! `Approaching(target)` → (within arrival threshold) → `Selecting` →
//! (policy invoked, just-departed node excluded) → `Approaching(new)`.
//!
//! `Selecting` never survives past the end of an `update` call — selection
//! happens synchronously on arrival — so between calls the controller is
//! always approaching something.  There is no terminal state; the mission
//! ends when the collaborator stops calling `update`.

use chase_core::{AgentRng, NodeId, Pose, geo::wrap_signed_deg};
use chase_belief::BeliefState;
use chase_graph::WaypointGraph;

use crate::{DestinationPolicy, NavResult, SteeringIntent};

// ── AgentNavState ─────────────────────────────────────────────────────────────

/// One agent's mutable navigation record.
///
/// Owned exclusively by that agent's [`NavigationController`]; the seeker's
/// and evader's records never alias.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentNavState {
    /// Last confirmed arrival.
    pub current_node: NodeId,
    /// Destination currently being approached.
    pub target_node: NodeId,
    /// Node left behind at the most recent arrival — the exclusion that was
    /// applied when the current target was selected, so the agent never
    /// immediately reverses.  `None` until the first real traversal.
    pub last_departed: Option<NodeId>,
    /// Latest pose seen by `update` (kept for diagnostics; a stale pose
    /// re-submitted by the collaborator is indistinguishable from a slow
    /// agent, and both are fine).
    pub pose: Option<Pose>,
}

// ── NavUpdate ─────────────────────────────────────────────────────────────────

/// Result of one controller tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavUpdate {
    /// Movement request for the collaborator to dispatch.
    pub intent: SteeringIntent,
    /// Set when this tick confirmed arrival at a node (the new
    /// `current_node`) and a fresh target was selected.
    pub arrival: Option<NodeId>,
}

// ── NavigationController ──────────────────────────────────────────────────────

/// Converts a destination waypoint into continuous steering and throttle,
/// and re-selects the destination on arrival via the injected policy.
pub struct NavigationController {
    state: AgentNavState,
    policy: Box<dyn DestinationPolicy>,
    rng: AgentRng,
    arrival_threshold: f64,
}

impl NavigationController {
    /// Create a controller parked at `start`.
    ///
    /// The initial target is `start` itself, so the first `update` reports
    /// an arrival and asks the policy for the first real destination (with
    /// nothing excluded).  Use [`with_initial_target`](Self::with_initial_target)
    /// to skip that and head somewhere immediately.
    pub fn new(
        start: NodeId,
        policy: Box<dyn DestinationPolicy>,
        rng: AgentRng,
        arrival_threshold: f64,
    ) -> Self {
        Self {
            state: AgentNavState {
                current_node: start,
                target_node: start,
                last_departed: None,
                pose: None,
            },
            policy,
            rng,
            arrival_threshold,
        }
    }

    /// Begin the mission already en route to `target`.
    pub fn with_initial_target(mut self, target: NodeId) -> Self {
        self.state.target_node = target;
        self
    }

    /// Read-only view of the navigation record.
    #[inline]
    pub fn state(&self) -> &AgentNavState {
        &self.state
    }

    /// One tick: steer toward the target, detect arrival, re-select.
    ///
    /// All mutation is confined to this controller's own state; the belief
    /// is read-only here (the seeker's policy consults it, the evader's
    /// inverts it).
    pub fn update(
        &mut self,
        pose: Pose,
        belief: &BeliefState,
        graph: &WaypointGraph,
    ) -> NavResult<NavUpdate> {
        self.state.pose = Some(pose);
        let target_pos = graph.position(self.state.target_node)?;

        // Yaw correction toward the target, wrapped into (-180, 180].
        let bearing = pose.pos.bearing_to(target_pos);
        let delta = wrap_signed_deg(bearing - pose.yaw);
        let turn = delta / 180.0;

        // Negative pitch = looking upward; ask the body to level out.
        let pitch_correct = pose.pitch < 0.0;

        let distance = pose.pos.planar_distance(target_pos);
        if distance > self.arrival_threshold {
            return Ok(NavUpdate {
                intent: SteeringIntent { turn, pitch_correct, throttle: 1.0 },
                arrival: None,
            });
        }

        // Arrived: promote the target, then select the next destination,
        // excluding the node this approach departed from.  A re-submitted
        // stale pose cannot re-trigger this branch for the same node — the
        // target has already moved on.  On the first tick, while still
        // parked at the start node, nothing has been departed yet.
        let arrived = self.state.target_node;
        let excluded = (arrived != self.state.current_node).then_some(self.state.current_node);
        self.state.current_node = arrived;

        let next =
            self.policy
                .select(belief, arrived, excluded, graph, &mut self.rng)?;
        self.state.last_departed = excluded;
        self.state.target_node = next;
        log::debug!("arrived at {arrived}, heading to {next}");

        Ok(NavUpdate {
            intent: SteeringIntent::stop(pitch_correct),
            arrival: Some(arrived),
        })
    }
}
