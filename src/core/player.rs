//! Player identification and per-player state.
//!
//! ## PlayerId / GameId
//!
//! Type-safe identifiers handed in by the caller. The engine never
//! allocates ids; it only compares them.
//!
//! ## Player
//!
//! A seat at the table: role, liveness, host flag, and the one-shot
//! resources in `SpecialStates`. Team is never stored; it is derived from
//! the role so it cannot drift.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Iterate over `count` sequential player IDs starting at 0.
    ///
    /// ```
    /// use werewolf_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::range(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn range(count: usize) -> impl Iterator<Item = PlayerId> {
        (0..count as u32).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.raw())
    }
}

/// Game identifier. Keys the per-game pending queues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Allegiance. Fixed by role; a lover link never changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Village,
    Werewolf,
}

/// Per-player mutable capability state.
///
/// Seeded by the role's `initialize_player` and mutated only by that
/// role's own successful actions (plus the lover link, set once by Cupid).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialStates {
    /// Witch: the single heal potion is still available.
    pub heal_potion_available: bool,

    /// Witch: the single poison potion is still available.
    pub poison_potion_available: bool,

    /// Hunter: the revenge shot has not been fired yet.
    pub can_avenge_on_death: bool,

    /// Cupid: the lover link has not been cast yet.
    pub link_available: bool,

    /// Little Girl: has spied at least once.
    pub has_spied: bool,

    /// Little Girl: detection risk in percentage points (0-100).
    pub spy_detection_risk: u8,

    /// Protected for the current round only. Recomputed every resolution.
    pub is_protected_this_round: bool,

    /// Symmetric lover link. Set once, never mutated afterward.
    pub linked_lover_id: Option<PlayerId>,
}

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub role: Role,
    pub is_alive: bool,
    pub is_host: bool,
    pub special_states: SpecialStates,
}

impl Player {
    /// Create a living, non-host player with the role's initial special states.
    #[must_use]
    pub fn new(id: PlayerId, role: Role) -> Self {
        Self {
            id,
            role,
            is_alive: true,
            is_host: false,
            special_states: role.capability().initialize_player(id),
        }
    }

    /// Mark this player as the host (builder pattern).
    #[must_use]
    pub fn as_host(mut self) -> Self {
        self.is_host = true;
        self
    }

    /// Mark this player as dead (builder pattern).
    #[must_use]
    pub fn dead(mut self) -> Self {
        self.is_alive = false;
        self
    }

    /// Team derived from the role.
    #[must_use]
    pub fn team(&self) -> Team {
        self.role.team()
    }

    /// Is this player a werewolf?
    #[must_use]
    pub fn is_werewolf(&self) -> bool {
        self.team() == Team::Werewolf
    }

    /// The linked lover, if any.
    #[must_use]
    pub fn lover(&self) -> Option<PlayerId> {
        self.special_states.linked_lover_id
    }
}
