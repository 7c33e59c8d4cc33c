//! The controller's per-tick output.

/// What an agent wants its body to do this tick.
///
/// Produced by [`NavigationController::update`][crate::NavigationController::update]
/// and translated by the external collaborator into environment-specific
/// movement commands.  The core never sends anything itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringIntent {
    /// Normalized yaw-rate request in `[-1, 1]`: the signed angular error
    /// divided by 180°.  Positive turns counter-clockwise (toward positive
    /// yaw).
    pub turn: f64,

    /// `true` when the agent is looking upward and should level out.
    pub pitch_correct: bool,

    /// Forward speed request, `>= 0`.  The controller only ever emits 1
    /// (go) or 0 (stop).
    pub throttle: f64,
}

impl SteeringIntent {
    /// A full stop (no turn, no throttle), optionally leveling pitch.
    #[inline]
    pub fn stop(pitch_correct: bool) -> Self {
        Self { turn: 0.0, pitch_correct, throttle: 0.0 }
    }

    /// `true` if this intent requests no movement at all.
    #[inline]
    pub fn is_stop(&self) -> bool {
        self.throttle == 0.0 && self.turn == 0.0
    }
}
