//! The two mission roles.

/// Which side of the pursuit an agent is on.
///
/// The set is closed: a mission is exactly one seeker against one evader,
/// and per-role state everywhere is stored in two-element arrays indexed by
/// [`Role::index`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Tracks the evader with the belief filter and intercepts.
    Seeker,
    /// Avoids the seeker while making progress toward its own goal.
    Evader,
}

impl Role {
    /// Both roles, in storage order.
    pub const ALL: [Role; 2] = [Role::Seeker, Role::Evader];

    /// Index into per-role arrays (seeker = 0, evader = 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Role::Seeker => 0,
            Role::Evader => 1,
        }
    }

    /// The opposing role.
    #[inline]
    pub fn opponent(self) -> Role {
        match self {
            Role::Seeker => Role::Evader,
            Role::Evader => Role::Seeker,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Seeker => write!(f, "seeker"),
            Role::Evader => write!(f, "evader"),
        }
    }
}
