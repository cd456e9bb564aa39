//! Role capability registry.
//!
//! ## Key Types
//!
//! - `Role`: the role tag stored on every player
//! - `RoleCapability`: per-role behavior record (legal actions, execution,
//!   initial special states, on-death reaction)
//! - `ActionContext`: what an action executes against
//! - `RoleRegistry`: role tag → behavior lookup used by the night engine
//! - `RoleInfo`: static, UI-facing role metadata
//!
//! Each role is a unit struct implementing `RoleCapability`, so every role
//! can be exercised on its own without a queue or engine.

mod cupid;
mod hunter;
pub mod info;
mod little_girl;
pub mod registry;
mod seer;
pub mod targeting;
mod villager;
mod werewolf;
mod witch;

pub use cupid::Cupid;
pub use hunter::Hunter;
pub use info::{role_info, RoleInfo};
pub use little_girl::LittleGirl;
pub use registry::RoleRegistry;
pub use seer::Seer;
pub use villager::Villager;
pub use werewolf::Werewolf;
pub use witch::Witch;

use serde::{Deserialize, Serialize};

use crate::core::{
    ActionError, ActionResult, ActionType, EngineConfig, GameRng, NightAction, PhaseState, Player,
    PlayerId, Roster, SpecialStates, Team,
};

/// Role tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Villager,
    Werewolf,
    Seer,
    Witch,
    Hunter,
    Cupid,
    LittleGirl,
}

impl Role {
    /// Every role, in dealing order.
    pub const ALL: [Role; 7] = [
        Role::Werewolf,
        Role::Villager,
        Role::Seer,
        Role::Witch,
        Role::Hunter,
        Role::Cupid,
        Role::LittleGirl,
    ];

    /// Roles dealt at most once per game.
    pub const SPECIAL: [Role; 5] = [
        Role::Seer,
        Role::Witch,
        Role::Hunter,
        Role::Cupid,
        Role::LittleGirl,
    ];

    /// Team fixed by this role.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Role::Werewolf => Team::Werewolf,
            _ => Team::Village,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Villager => "Villager",
            Role::Werewolf => "Werewolf",
            Role::Seer => "Seer",
            Role::Witch => "Witch",
            Role::Hunter => "Hunter",
            Role::Cupid => "Cupid",
            Role::LittleGirl => "Little Girl",
        }
    }

    /// Standard behavior for this role.
    #[must_use]
    pub fn capability(self) -> &'static dyn RoleCapability {
        match self {
            Role::Villager => &Villager,
            Role::Werewolf => &Werewolf,
            Role::Seer => &Seer,
            Role::Witch => &Witch,
            Role::Hunter => &Hunter,
            Role::Cupid => &Cupid,
            Role::LittleGirl => &LittleGirl,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What an action executes against.
///
/// The roster is a read-only snapshot; the acting player is passed
/// separately as `&mut` so only the actor's own resources can change.
pub struct ActionContext<'a> {
    pub roster: &'a Roster,
    pub phase: &'a PhaseState,
    pub config: &'a EngineConfig,
    pub rng: &'a mut GameRng,
}

impl<'a> ActionContext<'a> {
    /// Create a new context.
    pub fn new(
        roster: &'a Roster,
        phase: &'a PhaseState,
        config: &'a EngineConfig,
        rng: &'a mut GameRng,
    ) -> Self {
        Self {
            roster,
            phase,
            config,
            rng,
        }
    }
}

/// Per-role behavior record.
///
/// ## Implementation Notes
///
/// - `available_actions`: empty if the player is dead or has nothing to do
/// - `validate_action`: pure check, used at submission time
/// - `execute_action`: validates again, then mutates the actor's one-shot
///   resources and reports effects; never panics, never returns `Err`
/// - `on_death`: `None` unless the role reacts to dying
pub trait RoleCapability: Send + Sync {
    /// The role this behavior belongs to.
    fn role(&self) -> Role;

    /// Actions the player may take in this phase.
    fn available_actions(&self, player: &Player, phase: &PhaseState) -> Vec<ActionType>;

    /// Check an action without applying it.
    fn validate_action(
        &self,
        player: &Player,
        action: &NightAction,
        roster: &Roster,
        phase: &PhaseState,
    ) -> Result<(), ActionError>;

    /// Validate and apply an action.
    fn execute_action(
        &self,
        player: &mut Player,
        action: &NightAction,
        ctx: &mut ActionContext<'_>,
    ) -> ActionResult;

    /// Initial special states for a freshly dealt player.
    fn initialize_player(&self, _player_id: PlayerId) -> SpecialStates {
        SpecialStates::default()
    }

    /// Reaction to this player's death.
    fn on_death(
        &self,
        _player: &Player,
        _roster: &Roster,
        _phase: &PhaseState,
    ) -> Option<ActionResult> {
        None
    }

    /// The action this player must submit before the night can resolve.
    fn required_action(&self, _player: &Player, _phase: &PhaseState) -> Option<ActionType> {
        None
    }
}

/// Run one action against a roster with the default config.
///
/// Returns the result and the actor as mutated by execution.
#[cfg(test)]
pub(crate) fn execute_for_test(
    roster: &Roster,
    phase: &PhaseState,
    action: &NightAction,
    seed: u64,
) -> (ActionResult, Player) {
    let mut actor = roster.get(action.actor_id).cloned().expect("actor on roster");
    let config = EngineConfig::default();
    let mut rng = GameRng::new(seed);
    let mut ctx = ActionContext::new(roster, phase, &config, &mut rng);
    let result = actor.role.capability().execute_action(&mut actor, action, &mut ctx);
    (result, actor)
}
