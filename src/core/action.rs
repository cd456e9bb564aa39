//! Night action representation.
//!
//! An action is a verb (`ActionType`) plus up to two player targets.
//! Only Cupid's `Link` uses the second target.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::result::ActionResult;

/// Kind of action a role can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionType {
    /// Seer: learn a target's exact role.
    Investigate,
    /// Werewolf: the pack's kill.
    Kill,
    /// Witch: save tonight's victim. Once per game.
    Heal,
    /// Witch: kill a living target. Once per game.
    Poison,
    /// Witch: explicitly do nothing tonight.
    Pass,
    /// Cupid: link two players as lovers. Round 1 only, once per game.
    Link,
    /// Little Girl: peek during the werewolf phase.
    Spy,
    /// Hunter: revenge shot on death. Follow-up only, never queued.
    HunterShot,
}

impl ActionType {
    /// Does this action need a primary target?
    #[must_use]
    pub const fn needs_target(self) -> bool {
        !matches!(self, ActionType::Pass | ActionType::Spy)
    }

    /// Runs outside the night queue.
    #[must_use]
    pub const fn is_follow_up(self) -> bool {
        matches!(self, ActionType::HunterShot)
    }
}

/// A submitted night action.
///
/// ## Example
///
/// ```
/// use werewolf_engine::core::{ActionType, NightAction, PlayerId};
///
/// let kill = NightAction::targeted(PlayerId::new(0), ActionType::Kill, PlayerId::new(3));
/// let link = NightAction::link(PlayerId::new(1), PlayerId::new(2), PlayerId::new(4));
///
/// assert_eq!(kill.target_id, Some(PlayerId::new(3)));
/// assert_eq!(link.second_target_id, Some(PlayerId::new(4)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightAction {
    /// Who acts.
    pub actor_id: PlayerId,

    /// What they do.
    pub action_type: ActionType,

    /// Primary target.
    pub target_id: Option<PlayerId>,

    /// Second target (Cupid only).
    pub second_target_id: Option<PlayerId>,

    /// Caller-supplied submission time. Informational; ordering within a
    /// role slot follows submission order in the queue.
    pub timestamp: u64,

    /// Set once the action has been consumed by resolution.
    pub resolved: bool,
}

impl NightAction {
    /// Create an action with no target.
    #[must_use]
    pub fn new(actor_id: PlayerId, action_type: ActionType) -> Self {
        Self {
            actor_id,
            action_type,
            target_id: None,
            second_target_id: None,
            timestamp: 0,
            resolved: false,
        }
    }

    /// Create an action with a single target.
    #[must_use]
    pub fn targeted(actor_id: PlayerId, action_type: ActionType, target: PlayerId) -> Self {
        Self {
            target_id: Some(target),
            ..Self::new(actor_id, action_type)
        }
    }

    /// Create Cupid's two-target link.
    #[must_use]
    pub fn link(actor_id: PlayerId, first: PlayerId, second: PlayerId) -> Self {
        Self {
            target_id: Some(first),
            second_target_id: Some(second),
            ..Self::new(actor_id, ActionType::Link)
        }
    }

    /// Set the submission timestamp (builder pattern).
    #[must_use]
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Does this action occupy the same queue slot as `other`?
    #[must_use]
    pub fn same_slot(&self, other: &NightAction) -> bool {
        self.actor_id == other.actor_id && self.action_type == other.action_type
    }
}

/// A resolved action kept in per-game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action, with `resolved` set.
    pub action: NightAction,

    /// Round it was resolved in.
    pub round: u32,

    /// Position within that round's resolution order.
    pub sequence: u32,

    /// What happened.
    pub result: ActionResult,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: NightAction, round: u32, sequence: u32, result: ActionResult) -> Self {
        Self {
            action,
            round,
            sequence,
            result,
        }
    }
}
