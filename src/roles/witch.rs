//! Witch: one heal and one poison for the whole game.
//!
//! The heal only saves tonight's werewolf victim when that victim is known
//! (the caller supplies it, or the night engine fills it in after the
//! werewolf slot). Choosing `Pass` is always valid.

use crate::core::{
    ActionEffects, ActionError, ActionResult, ActionType, NightAction, PhaseState, Player, PlayerId,
    Roster, SpecialStates,
};

use super::targeting::{
    living_target, primary_target, require_alive, require_night, require_not_self,
    require_own_action, require_resource,
};
use super::{ActionContext, Role, RoleCapability};

const ACTIONS: &[ActionType] = &[ActionType::Heal, ActionType::Poison, ActionType::Pass];

/// The Witch.
pub struct Witch;

impl Witch {
    fn validate_heal(
        player: &Player,
        action: &NightAction,
        roster: &Roster,
        phase: &PhaseState,
    ) -> Result<PlayerId, ActionError> {
        require_resource(player.special_states.heal_potion_available, action)?;
        let target = primary_target(action)?;
        require_not_self(player, target, action)?;
        living_target(roster, target)?;
        match phase.werewolf_victim {
            Some(victim) if victim != target => Err(ActionError::NotTheVictim(victim)),
            _ => Ok(target),
        }
    }

    fn validate_poison(
        player: &Player,
        action: &NightAction,
        roster: &Roster,
    ) -> Result<PlayerId, ActionError> {
        require_resource(player.special_states.poison_potion_available, action)?;
        let target = primary_target(action)?;
        require_not_self(player, target, action)?;
        living_target(roster, target)?;
        Ok(target)
    }
}

impl RoleCapability for Witch {
    fn role(&self) -> Role {
        Role::Witch
    }

    fn available_actions(&self, player: &Player, phase: &PhaseState) -> Vec<ActionType> {
        if !player.is_alive || !phase.is_night() {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(3);
        if player.special_states.heal_potion_available {
            actions.push(ActionType::Heal);
        }
        if player.special_states.poison_potion_available {
            actions.push(ActionType::Poison);
        }
        actions.push(ActionType::Pass);
        actions
    }

    fn validate_action(
        &self,
        player: &Player,
        action: &NightAction,
        roster: &Roster,
        phase: &PhaseState,
    ) -> Result<(), ActionError> {
        require_own_action(Role::Witch, action, ACTIONS)?;
        require_alive(player)?;
        require_night(action, phase)?;
        match action.action_type {
            ActionType::Heal => Self::validate_heal(player, action, roster, phase).map(drop),
            ActionType::Poison => Self::validate_poison(player, action, roster).map(drop),
            _ => Ok(()),
        }
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

        match (action.action_type, action.target_id) {
            (ActionType::Heal, Some(target)) => {
                player.special_states.heal_potion_available = false;
                ActionResult::with_effects(
                    format!("The witch saves {}", target),
                    ActionEffects::protection(target),
                )
            }
            (ActionType::Poison, Some(target)) => {
                player.special_states.poison_potion_available = false;
                ActionResult::with_effects(
                    format!("The witch poisons {}", target),
                    ActionEffects::death(target),
                )
            }
            _ => ActionResult::ok("The witch does nothing tonight"),
        }
    }

    fn initialize_player(&self, _player_id: PlayerId) -> SpecialStates {
        SpecialStates {
            heal_potion_available: true,
            poison_potion_available: true,
            ..SpecialStates::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::execute_for_test;

    fn roster() -> Roster {
        Roster::from_players(vec![
            Player::new(PlayerId::new(0), Role::Witch),
            Player::new(PlayerId::new(1), Role::Werewolf),
            Player::new(PlayerId::new(2), Role::Villager),
            Player::new(PlayerId::new(3), Role::Villager).dead(),
        ])
        .unwrap()
    }

    fn with_witch(r: &Roster, witch: Player) -> Roster {
        let mut r = r.clone();
        r.upsert(witch);
        r
    }

    #[test]
    fn test_starts_with_both_potions() {
        let witch = Player::new(PlayerId::new(0), Role::Witch);
        assert_eq!(
            Witch.available_actions(&witch, &PhaseState::night(1)),
            vec![ActionType::Heal, ActionType::Poison, ActionType::Pass]
        );
    }

    #[test]
    fn test_heal_is_once_per_game() {
        let r = roster();
        let heal = NightAction::targeted(PlayerId::new(0), ActionType::Heal, PlayerId::new(2));

        let (first, witch) = execute_for_test(&r, &PhaseState::night(1), &heal, 0);
        assert!(first.success);
        assert_eq!(first.effects.protections.as_slice(), &[PlayerId::new(2)]);
        assert!(!witch.special_states.heal_potion_available);
        assert!(witch.special_states.poison_potion_available);

        // Next night, same witch state.
        let r = with_witch(&r, witch);
        let (second, _) = execute_for_test(&r, &PhaseState::night(2), &heal, 0);
        assert_eq!(second.error, Some(ActionError::ResourceExhausted(ActionType::Heal)));
        assert_eq!(
            Witch.available_actions(r.get(PlayerId::new(0)).unwrap(), &PhaseState::night(2)),
            vec![ActionType::Poison, ActionType::Pass]
        );
    }

    #[test]
    fn test_poison_is_once_per_game() {
        let r = roster();
        let poison = NightAction::targeted(PlayerId::new(0), ActionType::Poison, PlayerId::new(1));

        let (first, witch) = execute_for_test(&r, &PhaseState::night(1), &poison, 0);
        assert!(first.success);
        assert_eq!(first.effects.deaths.as_slice(), &[PlayerId::new(1)]);
        assert!(!witch.special_states.poison_potion_available);

        let r = with_witch(&r, witch);
        let (second, _) = execute_for_test(&r, &PhaseState::night(3), &poison, 0);
        assert_eq!(second.error, Some(ActionError::ResourceExhausted(ActionType::Poison)));
    }

    #[test]
    fn test_heal_cannot_target_self() {
        let heal = NightAction::targeted(PlayerId::new(0), ActionType::Heal, PlayerId::new(0));
        let (result, witch) = execute_for_test(&roster(), &PhaseState::night(1), &heal, 0);
        assert_eq!(result.error, Some(ActionError::SelfTarget(ActionType::Heal)));
        assert!(witch.special_states.heal_potion_available);
    }

    #[test]
    fn test_heal_must_match_known_victim() {
        let heal = NightAction::targeted(PlayerId::new(0), ActionType::Heal, PlayerId::new(2));
        let phase = PhaseState::night(1).with_victim(PlayerId::new(1));
        let (result, witch) = execute_for_test(&roster(), &phase, &heal, 0);

        assert_eq!(result.error, Some(ActionError::NotTheVictim(PlayerId::new(1))));
        assert!(witch.special_states.heal_potion_available);
    }

    #[test]
    fn test_poison_requires_living_target() {
        let poison = NightAction::targeted(PlayerId::new(0), ActionType::Poison, PlayerId::new(3));
        let (result, witch) = execute_for_test(&roster(), &PhaseState::night(1), &poison, 0);
        assert_eq!(result.error, Some(ActionError::TargetDead(PlayerId::new(3))));
        assert!(witch.special_states.poison_potion_available);
    }

    #[test]
    fn test_pass_is_valid_and_free() {
        let pass = NightAction::new(PlayerId::new(0), ActionType::Pass);
        let (result, witch) = execute_for_test(&roster(), &PhaseState::night(1), &pass, 0);
        assert!(result.success);
        assert!(result.effects.is_empty());
        assert!(witch.special_states.heal_potion_available);
        assert!(witch.special_states.poison_potion_available);
    }

    #[test]
    fn test_no_actions_when_dead_or_day() {
        let witch = Player::new(PlayerId::new(0), Role::Witch);
        assert!(Witch.available_actions(&witch, &PhaseState::day(1)).is_empty());
        assert!(Witch.available_actions(&witch.dead(), &PhaseState::night(1)).is_empty());
    }

    #[test]
    fn test_witch_never_blocks_the_night() {
        let witch = Player::new(PlayerId::new(0), Role::Witch);
        assert_eq!(Witch.required_action(&witch, &PhaseState::night(1)), None);
    }
}
