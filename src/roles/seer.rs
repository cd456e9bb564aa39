//! Seer: one investigation per night, revealing a target's exact role.

use crate::core::{
    ActionEffects, ActionError, ActionResult, ActionType, NightAction, PhaseState, Player, Roster,
};

use super::targeting::{
    living_target, primary_target, require_alive, require_night, require_not_self,
    require_own_action,
};
use super::{ActionContext, Role, RoleCapability};

const ACTIONS: &[ActionType] = &[ActionType::Investigate];

/// The Seer.
pub struct Seer;

impl RoleCapability for Seer {
    fn role(&self) -> Role {
        Role::Seer
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
        require_own_action(Role::Seer, action, ACTIONS)?;
        require_alive(player)?;
        require_night(action, phase)?;
        let target = primary_target(action)?;
        require_not_self(player, target, action)?;
        living_target(roster, target)?;
        Ok(())
    }

    fn execute_action(
        &self,
        player: &mut Player,
        action: &NightAction,
        ctx: &mut ActionContext<'_>,
    ) -> ActionResult {
        if let Err(err) = self.validate_action(player, action, ctx.roster, ctx.phase) {
            return err.into();
        }
        // Validation guarantees the target is on the roster.
        let Some(target) = action.target_id.and_then(|id| ctx.roster.get(id)) else {
            return ActionError::MissingTarget(action.action_type).into();
        };

        ActionResult::with_effects(
            format!("{} is a {}", target.id, target.role),
            ActionEffects::revealed(vec![(target.id, target.role)]),
        )
    }

    fn required_action(&self, player: &Player, phase: &PhaseState) -> Option<ActionType> {
        (player.is_alive && phase.is_night()).then_some(ActionType::Investigate)
    }
}
