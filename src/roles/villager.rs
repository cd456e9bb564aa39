//! Villager: no night action, votes during the day.

use crate::core::{ActionError, ActionResult, ActionType, NightAction, PhaseState, Player, Roster};

use super::{ActionContext, Role, RoleCapability};

/// Plain villager.
pub struct Villager;

impl RoleCapability for Villager {
    fn role(&self) -> Role {
        Role::Villager
    }

    fn available_actions(&self, _player: &Player, _phase: &PhaseState) -> Vec<ActionType> {
        Vec::new()
    }

    fn validate_action(
        &self,
        _player: &Player,
        action: &NightAction,
        _roster: &Roster,
        _phase: &PhaseState,
    ) -> Result<(), ActionError> {
        Err(ActionError::NotAllowed {
            role: Role::Villager,
            action: action.action_type,
        })
    }

    fn execute_action(
        &self,
        player: &mut Player,
        action: &NightAction,
        ctx: &mut ActionContext<'_>,
    ) -> ActionResult {
        self.validate_action(player, action, ctx.roster, ctx.phase)
            .map(|()| ActionResult::ok("Nothing happens"))
            .into()
    }
}
