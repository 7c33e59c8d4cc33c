//! `chase-core` — foundational types for the `rust_chase` pursuit framework.
//!
//! This crate is a dependency of every other `chase-*` crate.  It intentionally
//! has no `chase-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `NodeId`                                          |
//! | [`geo`]   | `Point3`, `Pose`, planar distance and yaw math    |
//! | [`time`]  | `Tick`                                            |
//! | [`rng`]   | `AgentRng` (per-agent, deterministic)             |
//! | [`role`]  | `Role` enum (seeker / evader)                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod role;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{Point3, Pose};
pub use ids::NodeId;
pub use rng::AgentRng;
pub use role::Role;
pub use time::Tick;
