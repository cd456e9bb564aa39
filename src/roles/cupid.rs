//! Cupid: on the first night only, links two distinct players as lovers.

use crate::core::{
    ActionEffects, ActionError, ActionResult, ActionType, NightAction, PhaseState, Player, PlayerId,
    Roster, SpecialStates,
};

use super::targeting::{
    living_target, primary_target, require_alive, require_night, require_own_action,
    require_resource,
};
use super::{ActionContext, Role, RoleCapability};

const ACTIONS: &[ActionType] = &[ActionType::Link];

/// Round in which Cupid acts.
const LINK_ROUND: u32 = 1;

/// Cupid.
pub struct Cupid;

impl Cupid {
    fn targets(action: &NightAction) -> Result<(PlayerId, PlayerId), ActionError> {
        let first = primary_target(action)?;
        let second = action
            .second_target_id
            .ok_or(ActionError::MissingTarget(action.action_type))?;
        if first == second {
            return Err(ActionError::SameLovers);
        }
        Ok((first, second))
    }
}

impl RoleCapability for Cupid {
    fn role(&self) -> Role {
        Role::Cupid
    }

    fn available_actions(&self, player: &Player, phase: &PhaseState) -> Vec<ActionType> {
        if player.is_alive
            && phase.is_night()
            && phase.is_first_round()
            && player.special_states.link_available
        {
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
        require_own_action(Role::Cupid, action, ACTIONS)?;
        require_alive(player)?;
        require_night(action, phase)?;
        if !phase.is_first_round() {
            return Err(ActionError::WrongRound {
                action: action.action_type,
                allowed: LINK_ROUND,
                current: phase.round,
            });
        }
        require_resource(player.special_states.link_available, action)?;
        let (first, second) = Self::targets(action)?;
        for id in [first, second] {
            if living_target(roster, id)?.lover().is_some() {
                return Err(ActionError::AlreadyLinked(id));
            }
        }
        Ok(())
    }

    fn execute_action(
        &self,
        player: &mut Player,
        action: &NightAction,
        ctx: &mut ActionContext<'_>,
    ) -> ActionResult {
        let checked = self
            .validate_action(player, action, ctx.roster, ctx.phase)
            .and_then(|()| Self::targets(action));
        let (first, second) = match checked {
            Ok(pair) => pair,
            Err(err) => return err.into(),
        };

        player.special_states.link_available = false;
        ActionResult::with_effects(
            format!("{} and {} are now lovers", first, second),
            ActionEffects::lovers(first, second),
        )
    }

    fn initialize_player(&self, _player_id: PlayerId) -> SpecialStates {
        SpecialStates {
            link_available: true,
            ..SpecialStates::default()
        }
    }

    fn required_action(&self, player: &Player, phase: &PhaseState) -> Option<ActionType> {
        self.available_actions(player, phase).first().copied()
    }
}
