//! `chase-graph` — waypoint graph topology and spatial queries.
//!
//! # Crate layout
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`graph`] | `WaypointGraph` (CSR + R-tree), `WaypointGraphBuilder` |
//! | [`error`] | `GraphError`, `GraphResult<T>`                      |

pub mod error;
pub mod graph;


pub use error::{GraphError, GraphResult};
pub use graph::{WaypointGraph, WaypointGraphBuilder};
