//! Error types.
//!
//! None of these are fatal. `ActionError` is surfaced to callers inside a
//! failed `ActionResult`; `RosterError` guards roster construction and the
//! lover link; `ConfigError` is returned by role assignment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::ActionType;
use super::player::PlayerId;
use crate::roles::Role;

/// Why an action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("Unknown actor: {0}")]
    UnknownActor(PlayerId),

    #[error("{0} is dead and cannot act")]
    ActorDead(PlayerId),

    #[error("{0} is still alive; the revenge shot only fires on death")]
    ActorAlive(PlayerId),

    #[error("{role:?} cannot perform {action:?}")]
    NotAllowed { role: Role, action: ActionType },

    #[error("{0:?} requires a target")]
    MissingTarget(ActionType),

    #[error("Target {0} does not exist")]
    UnknownTarget(PlayerId),

    #[error("Target {0} is already dead")]
    TargetDead(PlayerId),

    #[error("{0:?} cannot target yourself")]
    SelfTarget(ActionType),

    #[error("Werewolves cannot target another werewolf ({0})")]
    TargetIsWerewolf(PlayerId),

    #[error("Lovers must be two distinct players")]
    SameLovers,

    #[error("{0} is already linked to a lover")]
    AlreadyLinked(PlayerId),

    #[error("{0:?} has already been used")]
    ResourceExhausted(ActionType),

    #[error("{0:?} is not allowed during the {1:?} phase")]
    WrongPhase(ActionType, super::phase::Phase),

    #[error("{action:?} is only allowed in round {allowed}, current round is {current}")]
    WrongRound { action: ActionType, allowed: u32, current: u32 },

    #[error("{0:?} is a follow-up and cannot be queued for the night")]
    FollowUpOnly(ActionType),

    #[error("{0:?} is not a follow-up action")]
    NotAFollowUp(ActionType),

    #[error("{0} is not owed a follow-up")]
    NoFollowUpOwed(PlayerId),

    #[error("The heal can only save tonight's werewolf victim ({0})")]
    NotTheVictim(PlayerId),

    #[error("Corrupted roster: {0}")]
    CorruptedRoster(String),
}

/// Roster integrity violations.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RosterError {
    #[error("{0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("{0} is linked to unknown lover {1}")]
    DanglingLover(PlayerId, PlayerId),

    #[error("Lover link {0} -> {1} is not mutual")]
    AsymmetricLovers(PlayerId, PlayerId),

    #[error("{0} already has a lover")]
    AlreadyLinked(PlayerId),
}

/// Role assignment failures.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Configuration has {configured} roles for {players} players")]
    PlayerCountMismatch { configured: usize, players: usize },

    #[error("{0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<RosterError> for ActionError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::AlreadyLinked(id) => ActionError::AlreadyLinked(id),
            other => ActionError::CorruptedRoster(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        assert_eq!(
            ActionError::TargetDead(PlayerId::new(3)).to_string(),
            "Target Player 3 is already dead"
        );
        assert_eq!(
            ActionError::SelfTarget(ActionType::Heal).to_string(),
            "Heal cannot target yourself"
        );
    }

    #[test]
    fn test_roster_error_conversion() {
        let err: ActionError = RosterError::AlreadyLinked(PlayerId::new(1)).into();
        assert_eq!(err, ActionError::AlreadyLinked(PlayerId::new(1)));

        let err: ActionError = RosterError::DuplicatePlayer(PlayerId::new(2)).into();
        assert!(matches!(err, ActionError::CorruptedRoster(_)));
    }
}
