//! Static role metadata for display.
//!
//! Not consumed by the engine itself; callers render it in lobbies and
//! role cards.

use serde::Serialize;

use crate::core::{ActionType, Team};

use super::Role;

/// Static description of a role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub role: Role,
    pub name: &'static str,
    pub team: Team,

    /// Every action the role can ever take, including follow-ups.
    pub actions: &'static [ActionType],

    /// Acts on the first night only.
    pub first_night_only: bool,

    /// Must submit an action before the night can resolve.
    pub required_each_night: bool,

    /// Rules text.
    pub description: &'static str,
}

/// Night actions, first-night flag, required flag, rules text.
type RoleEntry = (&'static [ActionType], bool, bool, &'static str);

/// Metadata for a role.
#[must_use]
pub fn role_info(role: Role) -> RoleInfo {
    let (actions, first_night_only, required_each_night, description): RoleEntry = match role {
        Role::Villager => (
            &[],
            false,
            false,
            "No night action. Finds the werewolves through discussion and votes during the day.",
        ),
        Role::Werewolf => (
            &[ActionType::Kill],
            false,
            true,
            "Each night the pack chooses one non-werewolf to kill. Wins when werewolves equal \
             or outnumber everyone else.",
        ),
        Role::Seer => (
            &[ActionType::Investigate],
            false,
            true,
            "Each night investigates one other living player and learns their exact role.",
        ),
        Role::Witch => (
            &[ActionType::Heal, ActionType::Poison, ActionType::Pass],
            false,
            false,
            "Owns one healing potion and one poison for the whole game. The heal saves the \
             werewolves' victim; the poison kills any living player.",
        ),
        Role::Hunter => (
            &[ActionType::HunterShot],
            false,
            false,
            "No night action. When killed, by any means, immediately shoots another living player.",
        ),
        Role::Cupid => (
            &[ActionType::Link],
            true,
            true,
            "On the first night links two players as lovers. If one lover dies, the other \
             dies of heartbreak.",
        ),
        Role::LittleGirl => (
            &[ActionType::Spy],
            false,
            false,
            "May spy on the werewolves at night to learn who they are. Every attempt raises \
             the chance of being caught and killed.",
        ),
    };

    RoleInfo {
        role,
        name: role.name(),
        team: role.team(),
        actions,
        first_night_only,
        required_each_night,
        description,
    }
}
