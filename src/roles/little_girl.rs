//! Little Girl: peeks during the werewolf phase.
//!
//! Every attempt raises her detection risk by `spy_risk_increment`
//! percentage points (capped at 100) and then rolls against the new risk.
//! She always learns who the living werewolves are; if the roll hits she
//! is discovered and dies, which no protection can cancel.

use crate::core::{
    ActionEffects, ActionError, ActionResult, ActionType, NightAction, PhaseState, Player, Roster,
};

use super::targeting::{require_alive, require_night, require_own_action};
use super::{ActionContext, Role, RoleCapability};

const ACTIONS: &[ActionType] = &[ActionType::Spy];

/// Highest possible detection risk.
const MAX_RISK: u8 = 100;

/// The Little Girl.
pub struct LittleGirl;

impl LittleGirl {
    /// Risk after one more attempt.
    #[must_use]
    pub fn next_risk(current: u8, increment: u8) -> u8 {
        current.saturating_add(increment).min(MAX_RISK)
    }
}

impl RoleCapability for LittleGirl {
    fn role(&self) -> Role {
        Role::LittleGirl
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
        _roster: &Roster,
        phase: &PhaseState,
    ) -> Result<(), ActionError> {
        require_own_action(Role::LittleGirl, action, ACTIONS)?;
        require_alive(player)?;
        require_night(action, phase)
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

        let risk = Self::next_risk(
            player.special_states.spy_detection_risk,
            ctx.config.spy_risk_increment,
        );
        player.special_states.spy_detection_risk = risk;
        player.special_states.has_spied = true;

        let werewolves: Vec<_> = ctx
            .roster
            .living()
            .filter(|p| p.is_werewolf())
            .map(|p| (p.id, p.role))
            .collect();
        let discovered = ctx.rng.gen_bool(f64::from(risk) / f64::from(MAX_RISK));

        let mut effects = ActionEffects::revealed(werewolves);
        if discovered {
            effects.deaths.push(player.id);
            ActionResult::with_effects(
                format!("{} was caught spying on the werewolves", player.id),
                effects,
            )
        } else {
            ActionResult::with_effects(
                format!("{} spied unnoticed (risk now {}%)", player.id, risk),
                effects,
            )
        }
    }
}
