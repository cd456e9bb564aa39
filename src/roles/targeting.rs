//! Shared checks used by every role's `validate_action`.
//!
//! Each helper returns the first violated rule as an `ActionError`, so role
//! code reads as a chain of `?` calls.

use crate::core::{ActionError, ActionType, NightAction, PhaseState, Player, PlayerId, Roster};

use super::Role;

/// The action must be one this role can ever perform.
pub fn require_own_action(
    role: Role,
    action: &NightAction,
    own: &[ActionType],
) -> Result<(), ActionError> {
    if own.contains(&action.action_type) {
        Ok(())
    } else {
        Err(ActionError::NotAllowed {
            role,
            action: action.action_type,
        })
    }
}

/// The actor must be alive.
pub fn require_alive(player: &Player) -> Result<(), ActionError> {
    if player.is_alive {
        Ok(())
    } else {
        Err(ActionError::ActorDead(player.id))
    }
}

/// The game must be in a night phase.
pub fn require_night(action: &NightAction, phase: &PhaseState) -> Result<(), ActionError> {
    if phase.is_night() {
        Ok(())
    } else {
        Err(ActionError::WrongPhase(action.action_type, phase.phase))
    }
}

/// A one-shot resource must still be available.
pub fn require_resource(available: bool, action: &NightAction) -> Result<(), ActionError> {
    if available {
        Ok(())
    } else {
        Err(ActionError::ResourceExhausted(action.action_type))
    }
}

/// The primary target, which must be set.
pub fn primary_target(action: &NightAction) -> Result<PlayerId, ActionError> {
    action
        .target_id
        .ok_or(ActionError::MissingTarget(action.action_type))
}

/// The target must not be the actor.
pub fn require_not_self(
    player: &Player,
    target: PlayerId,
    action: &NightAction,
) -> Result<(), ActionError> {
    if player.id == target {
        Err(ActionError::SelfTarget(action.action_type))
    } else {
        Ok(())
    }
}

/// The target must exist and be alive.
pub fn living_target(roster: &Roster, target: PlayerId) -> Result<&Player, ActionError> {
    let player = roster.get(target).ok_or(ActionError::UnknownTarget(target))?;
    if player.is_alive {
        Ok(player)
    } else {
        Err(ActionError::TargetDead(target))
    }
}
