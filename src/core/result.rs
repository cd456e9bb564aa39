//! Outcome of executing one action.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionType;
use super::error::ActionError;
use super::player::PlayerId;
use crate::roles::Role;

/// Side effects an action asks the resolution pass to apply.
///
/// SmallVec keeps the common 0-2 entry case off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEffects {
    /// Players this action kills.
    pub deaths: SmallVec<[PlayerId; 2]>,

    /// Players this action protects for the round.
    pub protections: SmallVec<[PlayerId; 2]>,

    /// Players this action links as lovers (always a pair).
    pub lovers: SmallVec<[PlayerId; 2]>,

    /// Private knowledge delivered to the actor only.
    pub revealed: Vec<(PlayerId, Role)>,
}

impl ActionEffects {
    /// No effects.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A single death.
    #[must_use]
    pub fn death(id: PlayerId) -> Self {
        Self {
            deaths: smallvec::smallvec![id],
            ..Self::default()
        }
    }

    /// A single protection.
    #[must_use]
    pub fn protection(id: PlayerId) -> Self {
        Self {
            protections: smallvec::smallvec![id],
            ..Self::default()
        }
    }

    /// A lover pair.
    #[must_use]
    pub fn lovers(a: PlayerId, b: PlayerId) -> Self {
        Self {
            lovers: smallvec::smallvec![a, b],
            ..Self::default()
        }
    }

    /// Private role knowledge.
    #[must_use]
    pub fn revealed(revealed: Vec<(PlayerId, Role)>) -> Self {
        Self {
            revealed,
            ..Self::default()
        }
    }

    /// Are there no effects at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deaths.is_empty()
            && self.protections.is_empty()
            && self.lovers.is_empty()
            && self.revealed.is_empty()
    }
}

/// Result of executing (or rejecting) an action.
///
/// Rejections are never panics or `Err`s: they come back as
/// `success == false` with a descriptive message and the matching
/// `ActionError`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    pub effects: ActionEffects,

    /// A follow-up is mandatory (Hunter's revenge).
    pub requires_action: bool,

    /// Actions legal for the follow-up.
    pub available_actions: Vec<ActionType>,

    /// Why the action was rejected, when it was.
    pub error: Option<ActionError>,
}

impl ActionResult {
    /// Successful action without effects.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            effects: ActionEffects::none(),
            requires_action: false,
            available_actions: Vec::new(),
            error: None,
        }
    }

    /// Successful action with effects.
    #[must_use]
    pub fn with_effects(message: impl Into<String>, effects: ActionEffects) -> Self {
        Self {
            effects,
            ..Self::ok(message)
        }
    }

    /// Rejected action.
    #[must_use]
    pub fn rejected(error: ActionError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            effects: ActionEffects::none(),
            requires_action: false,
            available_actions: Vec::new(),
            error: Some(error),
        }
    }

    /// A mandatory follow-up with the given legal actions.
    #[must_use]
    pub fn follow_up(message: impl Into<String>, available_actions: Vec<ActionType>) -> Self {
        Self {
            requires_action: true,
            available_actions,
            ..Self::ok(message)
        }
    }
}

impl From<ActionError> for ActionResult {
    fn from(error: ActionError) -> Self {
        Self::rejected(error)
    }
}

impl From<Result<ActionResult, ActionError>> for ActionResult {
    fn from(result: Result<ActionResult, ActionError>) -> Self {
        result.unwrap_or_else(Self::rejected)
    }
}
