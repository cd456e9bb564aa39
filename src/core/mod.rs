//! Core engine types: identifiers, players, roster, phase, actions, results,
//! RNG, configuration and errors.
//!
//! Everything here is plain data. Role behavior lives in `roles`, and the
//! per-game queues live in `night`.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod result;
pub mod rng;
pub mod roster;

pub use action::{ActionRecord, ActionType, NightAction};
pub use config::EngineConfig;
pub use error::{ActionError, ConfigError, RosterError};
pub use phase::{Phase, PhaseState};
pub use player::{GameId, Player, PlayerId, SpecialStates, Team};
pub use result::{ActionEffects, ActionResult};
pub use rng::{GameRng, GameRngState};
pub use roster::Roster;
