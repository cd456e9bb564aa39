//! What a resolution pass hands back to the caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionRecord, ActionResult, ActionType, PlayerId, Roster};
use crate::roles::Role;

/// Why a player died.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// The pack's kill. The only cause a protection cancels.
    WerewolfAttack,
    Poison,
    /// Little Girl caught spying.
    Discovered,
    HunterShot,
    /// Followed a dead lover.
    Heartbreak,
    /// Any other role ability.
    Ability,
}

impl DeathCause {
    /// Cause of a death reported by an action of this type.
    #[must_use]
    pub const fn for_action(action: ActionType) -> Self {
        match action {
            ActionType::Kill => DeathCause::WerewolfAttack,
            ActionType::Poison => DeathCause::Poison,
            ActionType::Spy => DeathCause::Discovered,
            ActionType::HunterShot => DeathCause::HunterShot,
            ActionType::Investigate | ActionType::Heal | ActionType::Pass | ActionType::Link => {
                DeathCause::Ability
            }
        }
    }

    /// Can a protection cancel this death?
    #[must_use]
    pub const fn is_cancelable(self) -> bool {
        matches!(self, DeathCause::WerewolfAttack)
    }
}

/// A final death and its cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casualty {
    pub player: PlayerId,
    pub cause: DeathCause,
}

/// An on-death reaction the caller must run before the round is final.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    pub player: PlayerId,
    pub role: Role,
    pub result: ActionResult,
}

/// Result of resolving one night.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,

    /// Every processed action with its result, in resolution order.
    pub results: Vec<ActionRecord>,

    /// The full roster after deaths and protection flags were applied.
    pub updated_players: Roster,

    /// Final deaths, lover cascade included, in order of death.
    pub deaths: Vec<PlayerId>,

    pub casualties: Vec<Casualty>,

    /// Players protected this round.
    pub protections: Vec<PlayerId>,

    pub follow_ups: Vec<FollowUp>,
}

impl RoundOutcome {
    /// An outcome with nothing resolved.
    #[must_use]
    pub fn empty(round: u32, roster: Roster) -> Self {
        Self {
            round,
            results: Vec::new(),
            updated_players: roster,
            deaths: Vec::new(),
            casualties: Vec::new(),
            protections: Vec::new(),
            follow_ups: Vec::new(),
        }
    }

    /// Why a player died this round, if they did.
    #[must_use]
    pub fn cause_of(&self, player: PlayerId) -> Option<DeathCause> {
        self.casualties
            .iter()
            .find(|c| c.player == player)
            .map(|c| c.cause)
    }

    /// The result of the first action of this type by this actor.
    #[must_use]
    pub fn result_for(&self, actor: PlayerId, action: ActionType) -> Option<&ActionResult> {
        self.results
            .iter()
            .find(|r| r.action.actor_id == actor && r.action.action_type == action)
            .map(|r| &r.result)
    }
}

/// Result of running a follow-up action outside the queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpOutcome {
    pub result: ActionResult,
    pub updated_players: Roster,
    pub deaths: Vec<PlayerId>,
    pub casualties: Vec<Casualty>,

    /// Further reactions triggered by these deaths.
    pub follow_ups: Vec<FollowUp>,
}

/// Submission status of one living player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSubmission {
    pub player: PlayerId,
    pub role: Role,

    /// The action this player must submit, if any.
    pub required: Option<ActionType>,

    /// Actions this player has queued.
    pub submitted: Vec<ActionType>,
}

impl PlayerSubmission {
    /// Is a required action still missing?
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.required
            .is_some_and(|required| !self.submitted.contains(&required))
    }
}

/// Read-only projection of the pending queue for host/UI display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightSummary {
    pub round: u32,
    pub pending: usize,
    pub players: Vec<PlayerSubmission>,
}

impl NightSummary {
    /// Players still owing a required action.
    pub fn missing(&self) -> impl Iterator<Item = &PlayerSubmission> {
        self.players.iter().filter(|p| p.is_missing())
    }

    /// Has every required action been submitted?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }
}

/// Deaths and protections accumulated during one pass.
#[derive(Debug, Default)]
pub(crate) struct DeathLedger {
    pending: Vec<Casualty>,
    protections: SmallVec<[PlayerId; 2]>,
}

impl DeathLedger {
    pub(crate) fn kill(&mut self, player: PlayerId, cause: DeathCause) {
        self.pending.push(Casualty { player, cause });
    }

    pub(crate) fn protect(&mut self, player: PlayerId) {
        if !self.protections.contains(&player) {
            self.protections.push(player);
        }
    }

    pub(crate) fn protections(&self) -> &[PlayerId] {
        &self.protections
    }

    /// Final deaths: each protection cancels one werewolf attack on the
    /// same player; every other cause stands. One entry per player, first
    /// surviving cause wins.
    pub(crate) fn settle(self) -> Vec<Casualty> {
        let mut shields: SmallVec<[PlayerId; 2]> = self.protections.clone();
        let mut settled: Vec<Casualty> = Vec::new();

        for casualty in self.pending {
            if casualty.cause.is_cancelable() {
                if let Some(pos) = shields.iter().position(|p| *p == casualty.player) {
                    shields.swap_remove(pos);
                    continue;
                }
            }
            if !settled.iter().any(|c| c.player == casualty.player) {
                settled.push(casualty);
            }
        }

        settled
    }
}

/// Add the living lover of every casualty, once.
pub(crate) fn lover_cascade(roster: &Roster, casualties: &mut Vec<Casualty>) {
    let mut grieving = Vec::new();
    for casualty in casualties.iter() {
        let Some(lover) = roster.get(casualty.player).and_then(|p| p.lover()) else {
            continue;
        };
        let already_dead = casualties.iter().any(|c| c.player == lover)
            || grieving.iter().any(|c: &Casualty| c.player == lover);
        if roster.is_alive(lover) && !already_dead {
            grieving.push(Casualty {
                player: lover,
                cause: DeathCause::Heartbreak,
            });
        }
    }
    casualties.extend(grieving);
}
