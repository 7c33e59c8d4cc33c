//! The `Mission` struct and its tick loop.

use chase_core::{Pose, Role, Tick};
use chase_belief::{BeliefError, BeliefFilter, BeliefState, ObservationOperator};
use chase_graph::WaypointGraph;
use chase_nav::{AgentNavState, NavigationController, SteeringIntent};

use crate::{MissionError, MissionObserver, NoopObserver};

// ── Telemetry in ──────────────────────────────────────────────────────────────

/// What the collaborator learned since the last poll.
///
/// `None` poses mean "no fresh telemetry for that role"; the mission reuses
/// the previous pose.  `None` observation means "no information", i.e. the
/// uninformative operator.
#[derive(Debug, Clone, Default)]
pub struct TickTelemetry {
    pub seeker_pose: Option<Pose>,
    pub evader_pose: Option<Pose>,
    /// The seeker's evidence about the evader this tick, derived externally
    /// from sensing (sightings, searched-and-empty areas, nothing).
    pub observation: Option<ObservationOperator>,
}

impl TickTelemetry {
    fn pose(&self, role: Role) -> Option<Pose> {
        match role {
            Role::Seeker => self.seeker_pose,
            Role::Evader => self.evader_pose,
        }
    }
}

// ── Report out ────────────────────────────────────────────────────────────────

/// Everything one tick produced.
///
/// A `None` intent means that role emitted nothing this tick — either no
/// pose has ever arrived for it, or its controller failed (see `errors`).
#[derive(Debug, Default)]
pub struct TickReport {
    pub tick: Tick,
    intents: [Option<SteeringIntent>; 2],
    errors: [Option<MissionError>; 2],
}

impl TickReport {
    /// Movement request for `role`, if its controller ran cleanly.
    pub fn intent(&self, role: Role) -> Option<SteeringIntent> {
        self.intents[role.index()]
    }

    /// What went wrong for `role` this tick, if anything.
    pub fn error(&self, role: Role) -> Option<&MissionError> {
        self.errors[role.index()].as_ref()
    }
}

/// Per-role view handed to [`MissionObserver::on_tick_end`]: the navigation
/// record plus the intent just emitted.
pub struct RoleSnapshot<'a> {
    pub role: Role,
    pub nav: &'a AgentNavState,
    pub intent: Option<SteeringIntent>,
}

// ── Mission ───────────────────────────────────────────────────────────────────

/// One live pursuit–evasion mission.
///
/// Holds the waypoint graph, the seeker's belief filter, and one
/// [`NavigationController`] per role.  The external collaborator drives it:
/// poll telemetry, call [`tick`](Self::tick), dispatch the returned
/// intents, repeat until the environment reports the mission over, then
/// call [`finish_with`](Self::finish_with).
///
/// Create via [`MissionBuilder`][crate::MissionBuilder].
pub struct Mission {
    pub(crate) graph: WaypointGraph,
    pub(crate) filter: BeliefFilter,
    pub(crate) controllers: [NavigationController; 2],
    /// Last pose seen per role; `None` until first telemetry.
    pub(crate) last_pose: [Option<Pose>; 2],
    pub(crate) clock: Tick,
}

impl Mission {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &WaypointGraph {
        &self.graph
    }

    /// The seeker's current posterior over the evader's node.
    pub fn belief(&self) -> &BeliefState {
        self.filter.belief()
    }

    /// Navigation record for one role.
    pub fn nav_state(&self, role: Role) -> &AgentNavState {
        self.controllers[role.index()].state()
    }

    /// Ticks processed so far.
    pub fn tick_count(&self) -> Tick {
        self.clock
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Process one tick without observer callbacks.
    pub fn tick(&mut self, telemetry: &TickTelemetry) -> TickReport {
        self.tick_with(telemetry, &mut NoopObserver)
    }

    /// Process one tick, firing observer hooks along the way.
    pub fn tick_with<O: MissionObserver>(
        &mut self,
        telemetry: &TickTelemetry,
        observer: &mut O,
    ) -> TickReport {
        let now = self.clock;
        observer.on_tick_start(now);

        let mut report = TickReport { tick: now, ..TickReport::default() };

        // ── Phase 1: resolve poses ────────────────────────────────────────
        //
        // Fresh telemetry replaces the cache; a silent role keeps last
        // tick's pose.  A role that has never reported skips its controller
        // below — there is nothing to steer from yet.
        for role in Role::ALL {
            if let Some(pose) = telemetry.pose(role) {
                self.last_pose[role.index()] = Some(pose);
            }
        }

        // ── Phase 2: belief update ────────────────────────────────────────
        //
        // The filter refuses to produce a zero distribution; on collapse we
        // substitute "no information" and retry once, charging the failure
        // to the seeker's report slot.  The prior survives a failed tick
        // untouched, so the retry is sound.
        let observation = telemetry
            .observation
            .clone()
            .unwrap_or_else(|| ObservationOperator::uninformative(self.filter.matrix().dim()));
        if let Err(e) = self.filter.tick(&observation) {
            let fallback = ObservationOperator::uninformative(self.filter.matrix().dim());
            match e {
                BeliefError::DegenerateBelief => {
                    log::warn!("observation ruled out every node at {now}; retrying uninformed");
                }
                ref other => {
                    log::warn!("belief update failed at {now} ({other}); retrying uninformed");
                }
            }
            let error = MissionError::from(e);
            observer.on_agent_error(now, Role::Seeker, &error);
            report.errors[Role::Seeker.index()] = Some(error);
            // The uninformative operator cannot collapse a valid prior; a
            // second failure would mean a corrupted filter, which new()
            // construction rules out.  Ignore its result defensively.
            let _ = self.filter.tick(&fallback);
        }

        // ── Phase 3: navigation, per role, independently ──────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access:
        // controllers mutate, the filter and graph are only read.
        let graph = &self.graph;
        let belief = self.filter.belief();
        let controllers = &mut self.controllers;
        for role in Role::ALL {
            let Some(pose) = self.last_pose[role.index()] else {
                continue;
            };
            match controllers[role.index()].update(pose, belief, graph) {
                Ok(update) => {
                    if let Some(node) = update.arrival {
                        observer.on_arrival(now, role, node);
                    }
                    report.intents[role.index()] = Some(update.intent);
                }
                Err(e) => {
                    log::warn!("{role} navigation failed at {now}: {e}");
                    let error = MissionError::from(e);
                    observer.on_agent_error(now, role, &error);
                    report.errors[role.index()] = Some(error);
                }
            }
        }

        // ── Phase 4: report ───────────────────────────────────────────────
        let snapshots = [
            RoleSnapshot {
                role: Role::Seeker,
                nav: self.controllers[Role::Seeker.index()].state(),
                intent: report.intents[Role::Seeker.index()],
            },
            RoleSnapshot {
                role: Role::Evader,
                nav: self.controllers[Role::Evader.index()].state(),
                intent: report.intents[Role::Evader.index()],
            },
        ];
        observer.on_tick_end(now, self.filter.belief(), &snapshots);

        self.clock = now + 1;
        report
    }

    /// Signal mission end to an observer (flushes trace writers).
    ///
    /// The core holds no other resources — dropping the `Mission` is the
    /// rest of the teardown.
    pub fn finish_with<O: MissionObserver>(&mut self, observer: &mut O) {
        observer.on_mission_end(self.clock);
    }
}
