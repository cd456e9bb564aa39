//! Phase and round pointers.
//!
//! The caller owns the clock and advances these; the engine only reads
//! them to decide whether an action is phase-appropriate.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Day/night macro-phase.
///
/// The whole night counts as the werewolf phase for the Little Girl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Night,
    Day,
}

/// Snapshot of where the game is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseState {
    /// Round number (starts at 1).
    pub round: u32,

    /// Current macro-phase.
    pub phase: Phase,

    /// Tonight's werewolf victim, when known.
    ///
    /// Supplied by the caller for submission-time checks, and filled in by
    /// the engine during resolution once the werewolf slot has run.
    pub werewolf_victim: Option<PlayerId>,
}

impl PhaseState {
    /// Night of the given round.
    #[must_use]
    pub fn night(round: u32) -> Self {
        Self {
            round,
            phase: Phase::Night,
            werewolf_victim: None,
        }
    }

    /// Day of the given round.
    #[must_use]
    pub fn day(round: u32) -> Self {
        Self {
            round,
            phase: Phase::Day,
            werewolf_victim: None,
        }
    }

    /// Set tonight's werewolf victim (builder pattern).
    #[must_use]
    pub fn with_victim(mut self, victim: PlayerId) -> Self {
        self.werewolf_victim = Some(victim);
        self
    }

    /// Is it night?
    #[must_use]
    pub fn is_night(&self) -> bool {
        self.phase == Phase::Night
    }

    /// Is this the first round?
    #[must_use]
    pub fn is_first_round(&self) -> bool {
        self.round <= 1
    }
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::night(1)
    }
}
