//! Mission observer trait for progress reporting and data collection.

use chase_core::{NodeId, Role, Tick};
use chase_belief::BeliefState;

use crate::mission::RoleSnapshot;
use crate::MissionError;

/// Callbacks invoked by [`Mission::tick_with`][crate::Mission::tick_with]
/// at key points in the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl MissionObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, tick: Tick, role: Role, node: NodeId) {
///         println!("{tick}: {role} reached {node}");
///     }
/// }
/// ```
pub trait MissionObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a role's controller confirms arrival at a node (and has
    /// already selected its next destination).
    fn on_arrival(&mut self, _tick: Tick, _role: Role, _node: NodeId) {}

    /// Called when one role's processing fails this tick.  The other role
    /// is unaffected.
    fn on_agent_error(&mut self, _tick: Tick, _role: Role, _error: &MissionError) {}

    /// Called at the end of each tick with the posterior belief and a
    /// per-role navigation snapshot — everything a trace writer needs.
    fn on_tick_end(&mut self, _tick: Tick, _belief: &BeliefState, _roles: &[RoleSnapshot<'_>; 2]) {}

    /// Called once by [`Mission::finish_with`][crate::Mission::finish_with]
    /// when the collaborator reports the mission over.
    fn on_mission_end(&mut self, _final_tick: Tick) {}
}

/// A [`MissionObserver`] that does nothing.  Used by
/// [`Mission::tick`][crate::Mission::tick] when no callbacks are wanted.
pub struct NoopObserver;

impl MissionObserver for NoopObserver {}
