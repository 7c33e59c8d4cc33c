//! Mission time model.
//!
//! Time is a monotonically increasing `Tick` counter advanced once per
//! telemetry poll by the mission loop.  The mapping to wall-clock time is
//! the external collaborator's business — the core never sleeps or reads a
//! clock, so all tick arithmetic is exact integer math.

use std::fmt;

/// An absolute mission tick counter.
///
/// Stored as `u64`: at 20 ticks per second a u64 lasts ~29 billion years,
/// so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
