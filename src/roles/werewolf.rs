//! Werewolf: the pack's nightly kill.
//!
//! Each living werewolf submits a kill; reconciling several submissions
//! into the pack's single victim is the night engine's job.

use crate::core::{
    ActionEffects, ActionError, ActionResult, ActionType, NightAction, PhaseState, Player, Roster,
};

use super::targeting::{
    living_target, primary_target, require_alive, require_night, require_not_self,
    require_own_action,
};
use super::{ActionContext, Role, RoleCapability};

const ACTIONS: &[ActionType] = &[ActionType::Kill];

/// A werewolf.
pub struct Werewolf;

impl RoleCapability for Werewolf {
    fn role(&self) -> Role {
        Role::Werewolf
    }

    fn available_actions(&self, player: &Player, phase: &PhaseState) -> Vec<ActionType> {
        if player.is_alive && phase.is_night() {
            ACTIONS.to_vec()
        } else {
            Vec::new()
        }
    }

    fn validate_action(
        &self,
        player: &Player,
        action: &NightAction,
        roster: &Roster,
        phase: &PhaseState,
    ) -> Result<(), ActionError> {
        require_own_action(Role::Werewolf, action, ACTIONS)?;
        require_alive(player)?;
        require_night(action, phase)?;
        let target = primary_target(action)?;
        require_not_self(player, target, action)?;
        if living_target(roster, target)?.is_werewolf() {
            return Err(ActionError::TargetIsWerewolf(target));
        }
        Ok(())
    }

    fn execute_action(
        &self,
        player: &mut Player,
        action: &NightAction,
        ctx: &mut ActionContext<'_>,
    ) -> ActionResult {
        self.validate_action(player, action, ctx.roster, ctx.phase)
            .and_then(|()| primary_target(action))
            .map(|target| {
                ActionResult::with_effects(
                    format!("The werewolves attack {}", target),
                    ActionEffects::death(target),
                )
            })
            .into()
    }

    fn required_action(&self, player: &Player, phase: &PhaseState) -> Option<ActionType> {
        (player.is_alive && phase.is_night()).then_some(ActionType::Kill)
    }
}
