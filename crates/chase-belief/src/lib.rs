//! `chase-belief` — where is the agent we cannot see?
//!
//! A discrete-state recursive Bayesian estimator (finite-state Hidden-Markov
//! filter) over the nodes of a [`WaypointGraph`][chase_graph::WaypointGraph].
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`transition`]  | `TransitionModel` builder, `TransitionMatrix`         |
//! | [`observation`] | `ObservationOperator` (per-node likelihood diagonal)  |
//! | [`filter`]      | `BeliefState`, `BeliefFilter`                         |
//! | [`error`]       | `BeliefError`, `BeliefResult<T>`                      |
//!
//! # The recurrence
//!
//! Once per tick, in this order (the transition matrix models motion
//! *during* the tick; the observation models information gathered *at* the
//! tick boundary — reversing them answers a different question):
//!
//! 1. **Predict** — propagate the belief through the transition matrix.
//! 2. **Update**  — multiply element-wise by the observation diagonal.
//! 3. **Normalize** — rescale to a probability vector, defending against
//!    floating-point drift and all-zero collapse.

pub mod error;
pub mod filter;
pub mod observation;
pub mod transition;

#[cfg(test)]
mod tests;

pub use error::{BeliefError, BeliefResult};
pub use filter::{BeliefFilter, BeliefState};
pub use observation::ObservationOperator;
pub use transition::{TransitionMatrix, TransitionModel};
