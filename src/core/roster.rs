//! The roster: every player in a game, keyed by id.
//!
//! Backed by `im::OrdMap` so the resolution pass can take an O(1)
//! snapshot and iteration order is deterministic.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::error::RosterError;
use super::player::{Player, PlayerId, Team};

/// All players of one game.
///
/// ## Example
///
/// ```
/// use werewolf_engine::core::{Player, PlayerId, Roster};
/// use werewolf_engine::roles::Role;
///
/// let roster = Roster::from_players(vec![
///     Player::new(PlayerId::new(0), Role::Werewolf),
///     Player::new(PlayerId::new(1), Role::Villager),
/// ]).unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.living_werewolves(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: OrdMap<PlayerId, Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster, rejecting duplicate ids and broken lover links.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for player in players {
            if roster.contains(player.id) {
                return Err(RosterError::DuplicatePlayer(player.id));
            }
            roster.players.insert(player.id, player);
        }
        roster.check_integrity()?;
        Ok(roster)
    }

    /// Verify lover links are symmetric and point at known players.
    pub fn check_integrity(&self) -> Result<(), RosterError> {
        for player in self.players.values() {
            let Some(lover_id) = player.lover() else {
                continue;
            };
            if lover_id == player.id {
                return Err(RosterError::AsymmetricLovers(player.id, lover_id));
            }
            let lover = self
                .get(lover_id)
                .ok_or(RosterError::DanglingLover(player.id, lover_id))?;
            if lover.lover() != Some(player.id) {
                return Err(RosterError::AsymmetricLovers(player.id, lover_id));
            }
        }
        Ok(())
    }

    /// Insert or replace a player.
    pub fn upsert(&mut self, player: Player) {
        self.players.insert(player.id, player);
    }

    /// Get a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Get a mutable player by id.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Mark a player dead. Returns `false` if they were not alive.
    pub fn mark_dead(&mut self, id: PlayerId) -> bool {
        match self.get_mut(id) {
            Some(player) if player.is_alive => {
                player.is_alive = false;
                true
            }
            _ => false,
        }
    }

    /// Is this id on the roster?
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// Is this id on the roster and alive?
    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.get(id).is_some_and(|p| p.is_alive)
    }

    /// Number of players, alive or dead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Is the roster empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over all players in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// All player ids in order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.keys().copied()
    }

    /// Iterate over living players in id order.
    pub fn living(&self) -> impl Iterator<Item = &Player> {
        self.players.values().filter(|p| p.is_alive)
    }

    /// Ids of living werewolves.
    pub fn living_werewolf_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.living().filter(|p| p.is_werewolf()).map(|p| p.id)
    }

    /// Count of living werewolves.
    #[must_use]
    pub fn living_werewolves(&self) -> usize {
        self.living_werewolf_ids().count()
    }

    /// Count of living players on the given team.
    #[must_use]
    pub fn living_on_team(&self, team: Team) -> usize {
        self.living().filter(|p| p.team() == team).count()
    }

    /// Link two players as lovers.
    ///
    /// Links are written once; an existing link on either side is an error.
    pub fn link_lovers(&mut self, a: PlayerId, b: PlayerId) -> Result<(), RosterError> {
        if a == b {
            return Err(RosterError::AsymmetricLovers(a, b));
        }
        for (id, other) in [(a, b), (b, a)] {
            let player = self.get(id).ok_or(RosterError::DanglingLover(other, id))?;
            if player.lover().is_some() {
                return Err(RosterError::AlreadyLinked(id));
            }
        }
        for (id, other) in [(a, b), (b, a)] {
            if let Some(player) = self.get_mut(id) {
                player.special_states.linked_lover_id = Some(other);
            }
        }
        Ok(())
    }
}

impl FromIterator<Player> for Roster {
    /// Collect players without integrity checks. Later duplicates win.
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;

    fn roster() -> Roster {
        Roster::from_players(vec![
            Player::new(PlayerId::new(0), Role::Werewolf),
            Player::new(PlayerId::new(1), Role::Villager),
            Player::new(PlayerId::new(2), Role::Seer),
            Player::new(PlayerId::new(3), Role::Villager).dead(),
        ])
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let r = roster();
        assert_eq!(r.len(), 4);
        assert_eq!(r.living().count(), 3);
        assert_eq!(r.living_werewolves(), 1);
        assert_eq!(r.living_on_team(Team::Village), 2);
        assert!(r.is_alive(PlayerId::new(1)));
        assert!(!r.is_alive(PlayerId::new(3)));
        assert!(!r.is_alive(PlayerId::new(99)));
    }

    #[test]
    fn test_mark_dead() {
        let mut r = roster();
        assert!(r.mark_dead(PlayerId::new(1)));
        assert!(!r.is_alive(PlayerId::new(1)));
        assert!(!r.mark_dead(PlayerId::new(1)));
        assert!(!r.mark_dead(PlayerId::new(3)));
        assert!(!r.mark_dead(PlayerId::new(42)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = Roster::from_players(vec![
            Player::new(PlayerId::new(0), Role::Werewolf),
            Player::new(PlayerId::new(0), Role::Villager),
        ]);
        assert_eq!(result, Err(RosterError::DuplicatePlayer(PlayerId::new(0))));
    }

    #[test]
    fn test_link_lovers_is_symmetric() {
        let mut r = roster();
        r.link_lovers(PlayerId::new(0), PlayerId::new(1)).unwrap();

        assert_eq!(r.get(PlayerId::new(0)).unwrap().lover(), Some(PlayerId::new(1)));
        assert_eq!(r.get(PlayerId::new(1)).unwrap().lover(), Some(PlayerId::new(0)));
        assert!(r.check_integrity().is_ok());
    }

    #[test]
    fn test_link_lovers_only_once() {
        let mut r = roster();
        r.link_lovers(PlayerId::new(0), PlayerId::new(1)).unwrap();
        assert_eq!(
            r.link_lovers(PlayerId::new(1), PlayerId::new(2)),
            Err(RosterError::AlreadyLinked(PlayerId::new(1)))
        );
        assert_eq!(r.get(PlayerId::new(2)).unwrap().lover(), None);
    }

    #[test]
    fn test_asymmetric_link_detected() {
        let mut r = roster();
        let player = r.get_mut(PlayerId::new(0)).unwrap();
        player.special_states.linked_lover_id = Some(PlayerId::new(1));
        assert_eq!(
            r.check_integrity(),
            Err(RosterError::AsymmetricLovers(PlayerId::new(0), PlayerId::new(1)))
        );
    }

    #[test]
    fn test_dangling_link_detected() {
        let mut r = roster();
        let player = r.get_mut(PlayerId::new(0)).unwrap();
        player.special_states.linked_lover_id = Some(PlayerId::new(42));
        assert_eq!(
            r.check_integrity(),
            Err(RosterError::DanglingLover(PlayerId::new(0), PlayerId::new(42)))
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let original = roster();
        let mut snapshot = original.clone();
        snapshot.get_mut(PlayerId::new(1)).unwrap().is_alive = false;

        assert!(original.is_alive(PlayerId::new(1)));
        assert!(!snapshot.is_alive(PlayerId::new(1)));
    }

    #[test]
    fn test_roster_serialization() {
        let r = roster();
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
