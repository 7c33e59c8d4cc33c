//! Mission configuration.

/// Values the collaborator supplies at construction; nothing here is
/// re-derived internally.
///
/// Typically loaded from the application's own config file and passed to
/// [`MissionBuilder`][crate::MissionBuilder].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionConfig {
    /// Transition-rate constant `k`: the off-diagonal weight of a corridor
    /// of length `d` is `min(1, k / d)`.  Larger values model a faster
    /// hidden agent.
    pub transition_rate_k: f64,

    /// Planar Manhattan distance below which a waypoint counts as reached.
    pub arrival_threshold: f64,

    /// Master RNG seed.  The same seed replays every stochastic
    /// destination choice identically.
    pub seed: u64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            transition_rate_k: 4.0,
            arrival_threshold: 1.8,
            seed: 0,
        }
    }
}
