//! World-space coordinate types and the planar math used for steering.
//!
//! The environment's coordinate convention: `y` is the vertical axis; all
//! movement costs and steering happen on the `x`/`z` plane.  Yaw 0 faces
//! `+z` and grows clockwise, so the bearing toward a target is
//! `-atan2(dx, dz)`.  Angles are degrees throughout.
//!
//! Positions use `f64`: waypoint graphs are small, and the belief filter
//! downstream checks invariants at 1e-9 tolerance, so single precision
//! would buy nothing and cost accuracy in the angle math.

/// A 3D world position (`y` up).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Manhattan distance on the horizontal plane, ignoring the vertical
    /// offset.  This matches the environment's movement cost model, so it is
    /// the metric for both transition weights and arrival detection.
    #[inline]
    pub fn planar_distance(self, other: Point3) -> f64 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    /// Yaw (degrees) an agent at `self` must face to look at `target`.
    ///
    /// Degenerate case: a target directly above/below (zero planar offset)
    /// yields bearing 0.
    pub fn bearing_to(self, target: Point3) -> f64 {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        if dx == 0.0 && dz == 0.0 {
            return 0.0;
        }
        -dx.atan2(dz).to_degrees()
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// ── Pose ─────────────────────────────────────────────────────────────────────

/// One agent's latest telemetry sample: position plus view angles (degrees).
///
/// Negative `pitch` means the agent is looking upward (the environment's
/// convention); the controller emits a level-out request for it.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos:   Point3,
    pub yaw:   f64,
    pub pitch: f64,
}

impl Pose {
    #[inline]
    pub fn new(pos: Point3, yaw: f64, pitch: f64) -> Self {
        Self { pos, yaw, pitch }
    }
}

// ── Angle helpers ─────────────────────────────────────────────────────────────

/// Wrap a signed angle delta into `(-180, 180]` by repeated ±360 correction.
///
/// The boundary resolves consistently: exactly −180 wraps to +180, so a
/// target dead astern always produces the same (positive) full-rate turn
/// instead of oscillating between signs.  The wrap is idempotent.
pub fn wrap_signed_deg(mut d: f64) -> f64 {
    if !d.is_finite() {
        return 0.0;
    }
    while d <= -180.0 {
        d += 360.0;
    }
    while d > 180.0 {
        d -= 360.0;
    }
    d
}
