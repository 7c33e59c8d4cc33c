//! Fluent builder for constructing a [`Mission`].

use chase_core::{AgentRng, NodeId, Pose, Role, Tick};
use chase_belief::{BeliefFilter, BeliefState, TransitionModel};
use chase_graph::{GraphError, WaypointGraph};
use chase_nav::{DestinationPolicy, EvasionPolicy, NavigationController, PursuitPolicy};

use crate::{Mission, MissionConfig, MissionError, MissionResult};

/// Fluent builder for [`Mission`].
///
/// # Required inputs
///
/// - a built [`WaypointGraph`] with at least one node,
/// - a [`MissionConfig`],
/// - a start for each role — a node id ([`start_at`](Self::start_at)) or a
///   first telemetry pose snapped to the nearest waypoint
///   ([`start_near`](Self::start_near)).
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                      |
/// |-----------------------|----------------------------------------------|
/// | `.policy(role, p)`    | `PursuitPolicy` / `EvasionPolicy` per role   |
/// | `.initial_belief(b)`  | Uniform over all nodes                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut mission = MissionBuilder::new(graph, MissionConfig::default())
///     .start_at(Role::Seeker, gate)
///     .start_near(Role::Evader, first_evader_pose)
///     .initial_belief(BeliefState::certain(well, node_count)?)
///     .build()?;
/// ```
pub struct MissionBuilder {
    graph: WaypointGraph,
    config: MissionConfig,
    starts: [Option<NodeId>; 2],
    policies: [Option<Box<dyn DestinationPolicy>>; 2],
    initial_belief: Option<BeliefState>,
}

impl MissionBuilder {
    pub fn new(graph: WaypointGraph, config: MissionConfig) -> Self {
        Self {
            graph,
            config,
            starts: [None, None],
            policies: [None, None],
            initial_belief: None,
        }
    }

    /// Start `role` parked at `node`.
    pub fn start_at(mut self, role: Role, node: NodeId) -> Self {
        self.starts[role.index()] = Some(node);
        self
    }

    /// Start `role` at the waypoint nearest to its first telemetry pose.
    pub fn start_near(mut self, role: Role, pose: Pose) -> Self {
        self.starts[role.index()] = self.graph.nearest_waypoint(pose.pos);
        self
    }

    /// Replace the default destination policy for `role`.
    pub fn policy(mut self, role: Role, policy: Box<dyn DestinationPolicy>) -> Self {
        self.policies[role.index()] = Some(policy);
        self
    }

    /// Supply the seeker's prior instead of the uniform default — e.g. a
    /// [`BeliefState::certain`] spike when the evader's start is known.
    pub fn initial_belief(mut self, belief: BeliefState) -> Self {
        self.initial_belief = Some(belief);
        self
    }

    /// Validate inputs, build the transition matrix, seed per-role RNGs,
    /// and return a ready-to-run [`Mission`].
    pub fn build(self) -> MissionResult<Mission> {
        if self.graph.is_empty() {
            return Err(MissionError::Config("graph has no nodes".into()));
        }
        if !self.config.arrival_threshold.is_finite() || self.config.arrival_threshold <= 0.0 {
            return Err(MissionError::Config(format!(
                "arrival threshold must be finite and > 0, got {}",
                self.config.arrival_threshold
            )));
        }

        // ── Resolve starts ────────────────────────────────────────────────
        let mut starts = [NodeId::INVALID; 2];
        for role in Role::ALL {
            let node = self.starts[role.index()].ok_or_else(|| {
                MissionError::Config(format!("no start position for {role}"))
            })?;
            if !self.graph.contains(node) {
                return Err(GraphError::NodeNotFound(node).into());
            }
            starts[role.index()] = node;
        }

        // ── Belief filter ─────────────────────────────────────────────────
        let matrix = TransitionModel::new(self.config.transition_rate_k).build(&self.graph)?;
        let filter = match self.initial_belief {
            Some(prior) => BeliefFilter::new(matrix, prior)?,
            None => BeliefFilter::with_uniform_prior(matrix),
        };

        // ── Controllers ───────────────────────────────────────────────────
        let [seeker_policy, evader_policy] = self.policies;
        let controllers = [
            NavigationController::new(
                starts[Role::Seeker.index()],
                seeker_policy.unwrap_or_else(|| Box::new(PursuitPolicy)),
                AgentRng::new(self.config.seed, Role::Seeker.index() as u64),
                self.config.arrival_threshold,
            ),
            NavigationController::new(
                starts[Role::Evader.index()],
                evader_policy.unwrap_or_else(|| Box::new(EvasionPolicy)),
                AgentRng::new(self.config.seed, Role::Evader.index() as u64),
                self.config.arrival_threshold,
            ),
        ];

        Ok(Mission {
            graph: self.graph,
            filter,
            controllers,
            last_pose: [None, None],
            clock: Tick::ZERO,
        })
    }
}
