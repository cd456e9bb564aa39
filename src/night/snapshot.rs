//! Engine checkpoints.
//!
//! An `EngineSnapshot` holds everything the engine owns: the config, every
//! game's pending queue, its history, its RNG position, and the players
//! still owed a follow-up. The role registry is code, not state, so it is
//! supplied again on restore.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ActionRecord, EngineConfig, GameId, GameRngState, NightAction, PlayerId};

/// Snapshot encode/decode failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),
}

/// One game's state inside a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub game: GameId,
    pub pending: Vec<NightAction>,
    pub history: Vec<ActionRecord>,
    pub rng: GameRngState,
    pub awaiting: Vec<PlayerId>,
}

/// Serializable engine state, ordered by game id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: EngineConfig,
    pub games: Vec<LedgerSnapshot>,
}

impl EngineSnapshot {
    /// Encode to a compact binary checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a binary checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// State of one game, if present.
    #[must_use]
    pub fn game(&self, game: GameId) -> Option<&LedgerSnapshot> {
        self.games.iter().find(|g| g.game == game)
    }
}
