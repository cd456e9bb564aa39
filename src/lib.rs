//! # werewolf-engine
//!
//! Rules core for Werewolf-style social deduction games: role behavior,
//! role dealing, night action resolution, and win detection.
//!
//! ## Design Principles
//!
//! 1. **Caller Owns the Game**: The engine never owns a clock, a socket, or
//!    a database. The caller loads the roster, hands it in, and persists
//!    what comes back.
//!
//! 2. **Nothing Is Fatal**: Illegal actions and corrupted inputs come back
//!    as failed `ActionResult`s or validation reports, never panics.
//!
//! 3. **Roles Are Data + Behavior Records**: Each role is a small
//!    `RoleCapability` implementation looked up through a `RoleRegistry`,
//!    so every role can be tested alone and swapped without touching the
//!    others.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The roster is an `im::OrdMap`, so a
//!   resolution pass works on an O(1) snapshot.
//!
//! - **Deterministic Randomness**: Role dealing and spy rolls draw from
//!   seeded ChaCha8 streams that can be checkpointed.
//!
//! ## Modules
//!
//! - `core`: Ids, players, roster, phase, actions, results, RNG, config, errors
//! - `roles`: Role tags, per-role behavior, registry, static role metadata
//! - `setup`: Role configuration, validation, defaults, assignment
//! - `night`: Per-game night queues and resolution
//! - `victory`: Win condition evaluation
//!
//! ## Example
//!
//! ```
//! use werewolf_engine::{
//!     check_win_condition, deal_roster, generate_default_config, ActionType, GameId, GameRng,
//!     NightAction, NightEngine, PhaseState, PlayerId, Role,
//! };
//!
//! let ids: Vec<PlayerId> = PlayerId::range(6).collect();
//! let config = generate_default_config(6);
//! let roster = deal_roster(&ids, &config, &GameRng::new(1)).unwrap();
//!
//! let mut engine = NightEngine::default();
//! let game = GameId::new(1);
//! let night = PhaseState::night(1);
//!
//! let wolf = roster.iter().find(|p| p.role == Role::Werewolf).unwrap().id;
//! let victim = roster.iter().find(|p| p.role == Role::Villager).unwrap().id;
//! let kill = NightAction::targeted(wolf, ActionType::Kill, victim);
//! engine.submit_night_action(game, kill, &roster, &night);
//!
//! let outcome = engine.resolve_night_actions(game, &roster, &night);
//! assert_eq!(outcome.deaths, vec![victim]);
//! assert_eq!(check_win_condition(&outcome.updated_players), None);
//! ```

pub mod core;
pub mod night;
pub mod roles;
pub mod setup;
pub mod victory;

// Re-export commonly used types
pub use crate::core::{
    ActionEffects, ActionError, ActionRecord, ActionResult, ActionType, ConfigError, EngineConfig,
    GameId, GameRng, GameRngState, NightAction, Phase, PhaseState, Player, PlayerId, Roster,
    RosterError, SpecialStates, Team,
};

pub use crate::roles::{role_info, ActionContext, Role, RoleCapability, RoleInfo, RoleRegistry};

pub use crate::setup::{
    assign_roles, deal_roster, generate_default_config, validate_config, validate_config_with,
    RoleConfiguration, ValidationReport,
};

pub use crate::night::{
    Casualty, DeathCause, EngineSnapshot, FollowUp, FollowUpOutcome, NightEngine, NightSummary,
    ResolutionSlot, RoundOutcome, SnapshotError,
};

pub use crate::victory::{check_win_condition, WinCondition};

/// Static metadata for a role. Alias of [`role_info`].
#[must_use]
pub fn get_role_info(role: Role) -> RoleInfo {
    role_info(role)
}
