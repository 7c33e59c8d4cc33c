//! `chase-nav` — turning a belief into movement.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`steering`]   | `SteeringIntent` — per-tick turn/pitch/throttle output  |
//! | [`policy`]     | `DestinationPolicy` trait, `PursuitPolicy`, `EvasionPolicy` |
//! | [`controller`] | `AgentNavState`, `NavigationController`, `NavUpdate`    |
//! | [`error`]      | `NavError`, `NavResult<T>`                              |
//!
//! # Division of labor
//!
//! The controller owns the continuous problem (bearing, yaw wrap, arrival
//! detection); a policy owns the discrete one (which waypoint next).  The
//! controller calls its policy exactly once per arrival, always excluding
//! the node just departed so neither agent ping-pongs along one corridor.

pub mod controller;
pub mod error;
pub mod policy;
pub mod steering;


pub use controller::{AgentNavState, NavUpdate, NavigationController};
pub use error::{NavError, NavResult};
pub use policy::{DestinationPolicy, EvasionPolicy, PursuitPolicy};
pub use steering::SteeringIntent;
