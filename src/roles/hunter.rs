//! Hunter: no night action. On death, by any cause, gains one mandatory
//! revenge shot that runs as a follow-up outside the night queue.

use crate::core::{
    ActionEffects, ActionError, ActionResult, ActionType, NightAction, PhaseState, Player, PlayerId,
    Roster, SpecialStates,
};

use super::targeting::{
    living_target, primary_target, require_not_self, require_own_action, require_resource,
};
use super::{ActionContext, Role, RoleCapability};

const ACTIONS: &[ActionType] = &[ActionType::HunterShot];

/// The Hunter.
pub struct Hunter;

impl RoleCapability for Hunter {
    fn role(&self) -> Role {
        Role::Hunter
    }

    fn available_actions(&self, _player: &Player, _phase: &PhaseState) -> Vec<ActionType> {
        Vec::new()
    }

    fn validate_action(
        &self,
        player: &Player,
        action: &NightAction,
        roster: &Roster,
        _phase: &PhaseState,
    ) -> Result<(), ActionError> {
        require_own_action(Role::Hunter, action, ACTIONS)?;
        if player.is_alive {
            return Err(ActionError::ActorAlive(player.id));
        }
        require_resource(player.special_states.can_avenge_on_death, action)?;
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
        let Some(target) = action.target_id else {
            return ActionError::MissingTarget(action.action_type).into();
        };

        player.special_states.can_avenge_on_death = false;
        ActionResult::with_effects(
            format!("The hunter takes {} down with them", target),
            ActionEffects::death(target),
        )
    }

    fn initialize_player(&self, _player_id: PlayerId) -> SpecialStates {
        SpecialStates {
            can_avenge_on_death: true,
            ..SpecialStates::default()
        }
    }

    fn on_death(
        &self,
        player: &Player,
        roster: &Roster,
        _phase: &PhaseState,
    ) -> Option<ActionResult> {
        if !player.special_states.can_avenge_on_death {
            return None;
        }
        if !roster.living().any(|p| p.id != player.id) {
            return None;
        }
        Some(ActionResult::follow_up(
            format!("{} must choose a player to shoot", player.id),
            vec![ActionType::HunterShot],
        ))
    }
}
