//! `chase-mission` — tick orchestrator for one pursuit–evasion mission.
//!
//! # Tick phases
//!
//! ```text
//! for each telemetry poll by the collaborator:
//!   ① Poses   — fresh telemetry replaces the cached pose per role;
//!               a silent role keeps its previous pose (stale-tolerant).
//!   ② Belief  — one BeliefFilter tick with the supplied observation
//!               operator; a degenerate collapse falls back to the
//!               uninformative operator and retries once.
//!   ③ Steer   — one NavigationController update per role, independent:
//!               an error for one role never aborts the other.
//!   ④ Report  — observer hooks fire; the TickReport carries intents,
//!               per-role errors, and the posterior.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use chase_mission::{Mission, MissionBuilder, MissionConfig, TickTelemetry};
//!
//! let mut mission = MissionBuilder::new(graph, MissionConfig::default())
//!     .start_at(Role::Seeker, gate)
//!     .start_at(Role::Evader, well)
//!     .build()?;
//! loop {
//!     let telemetry = collaborator.poll();             // external
//!     let report = mission.tick(&telemetry);
//!     collaborator.dispatch(&report);                  // external
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod mission;
pub mod observer;
pub mod trace;


pub use builder::MissionBuilder;
pub use config::MissionConfig;
pub use error::{MissionError, MissionResult};
pub use mission::{Mission, RoleSnapshot, TickReport, TickTelemetry};
pub use observer::{MissionObserver, NoopObserver};
pub use trace::CsvTraceObserver;
