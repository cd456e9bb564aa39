//! Win condition evaluation.
//!
//! Checked in a fixed order, first match wins:
//!
//! 1. Lovers: exactly two players alive, linked to each other, one from
//!    each team
//! 2. Village: no living werewolves
//! 3. Werewolves: living werewolves at least equal living non-werewolves
//!
//! The lovers check must come first; otherwise a surviving
//! werewolf/villager pair would read as a werewolf win under rule 3.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, Roster, Team};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCondition {
    VillageWins,
    WerewolvesWin,
    LoversWin,
}

impl WinCondition {
    /// Players who share this win, in id order.
    ///
    /// Lovers win alone; team wins include dead team members.
    #[must_use]
    pub fn winning_players(self, roster: &Roster) -> Vec<PlayerId> {
        match self {
            WinCondition::LoversWin => roster.living().map(|p| p.id).collect(),
            WinCondition::VillageWins => team_members(roster, Team::Village),
            WinCondition::WerewolvesWin => team_members(roster, Team::Werewolf),
        }
    }
}

impl std::fmt::Display for WinCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WinCondition::VillageWins => "The village wins",
            WinCondition::WerewolvesWin => "The werewolves win",
            WinCondition::LoversWin => "The lovers win",
        })
    }
}

fn team_members(roster: &Roster, team: Team) -> Vec<PlayerId> {
    roster.iter().filter(|p| p.team() == team).map(|p| p.id).collect()
}

/// Decide whether the game is over. `None` means play continues.
#[must_use]
pub fn check_win_condition(roster: &Roster) -> Option<WinCondition> {
    let result = if lovers_win(roster) {
        Some(WinCondition::LoversWin)
    } else {
        let werewolves = roster.living_werewolves();
        let others = roster.living().count() - werewolves;
        if werewolves == 0 {
            Some(WinCondition::VillageWins)
        } else if werewolves >= others {
            Some(WinCondition::WerewolvesWin)
        } else {
            None
        }
    };

    if let Some(win) = result {
        debug!(outcome = ?win, living = roster.living().count(), "Win condition met");
    }
    result
}

fn lovers_win(roster: &Roster) -> bool {
    let living: Vec<_> = roster.living().collect();
    let [a, b] = living.as_slice() else {
        return false;
    };
    a.lover() == Some(b.id) && b.lover() == Some(a.id) && a.team() != b.team()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::roles::Role;

    fn id(n: u32) -> PlayerId {
        PlayerId::new(n)
    }

    #[test]
    fn test_lovers_beat_werewolf_parity() {
        let mut roster = Roster::from_players(vec![
            Player::new(id(0), Role::Werewolf),
            Player::new(id(1), Role::Villager),
            Player::new(id(2), Role::Seer).dead(),
        ])
        .unwrap();
        roster.link_lovers(id(0), id(1)).unwrap();

        assert_eq!(check_win_condition(&roster), Some(WinCondition::LoversWin));
        assert_eq!(WinCondition::LoversWin.winning_players(&roster), vec![id(0), id(1)]);
    }

    #[test]
    fn test_same_team_lovers_do_not_win_as_lovers() {
        let mut roster = Roster::from_players(vec![
            Player::new(id(0), Role::Villager),
            Player::new(id(1), Role::Seer),
            Player::new(id(2), Role::Werewolf).dead(),
        ])
        .unwrap();
        roster.link_lovers(id(0), id(1)).unwrap();

        assert_eq!(check_win_condition(&roster), Some(WinCondition::VillageWins));
    }

    #[test]
    fn test_unlinked_pair_is_werewolf_win() {
        let roster = Roster::from_players(vec![
            Player::new(id(0), Role::Werewolf),
            Player::new(id(1), Role::Villager),
        ])
        .unwrap();

        assert_eq!(check_win_condition(&roster), Some(WinCondition::WerewolvesWin));
    }

    #[test]
    fn test_game_continues() {
        let roster = Roster::from_players(vec![
            Player::new(id(0), Role::Werewolf),
            Player::new(id(1), Role::Villager),
            Player::new(id(2), Role::Villager),
        ])
        .unwrap();

        assert_eq!(check_win_condition(&roster), None);
    }

    #[test]
    fn test_village_win_players_include_dead() {
        let roster = Roster::from_players(vec![
            Player::new(id(0), Role::Werewolf).dead(),
            Player::new(id(1), Role::Villager),
            Player::new(id(2), Role::Witch).dead(),
        ])
        .unwrap();

        let win = check_win_condition(&roster).unwrap();
        assert_eq!(win, WinCondition::VillageWins);
        assert_eq!(win.winning_players(&roster), vec![id(1), id(2)]);
        assert_eq!(win.to_string(), "The village wins");
    }

    #[test]
    fn test_empty_roster_is_village_win() {
        assert_eq!(check_win_condition(&Roster::new()), Some(WinCondition::VillageWins));
    }
}
