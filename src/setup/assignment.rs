//! Role dealing.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::core::{ConfigError, GameRng, Player, PlayerId, Roster};
use crate::roles::Role;

use super::config::RoleConfiguration;

/// RNG stream used for dealing, independent of in-game rolls.
pub const ASSIGNMENT_CONTEXT: &str = "assignment";

/// Deal one role to every player.
///
/// The seats are shuffled once, then werewolves are dealt first, then each
/// enabled special role once, then villagers. The result has exactly one
/// role per id and exactly the configured count of each role.
pub fn assign_roles(
    player_ids: &[PlayerId],
    config: &RoleConfiguration,
    rng: &GameRng,
) -> Result<FxHashMap<PlayerId, Role>, ConfigError> {
    if config.total() != player_ids.len() {
        return Err(ConfigError::PlayerCountMismatch {
            configured: config.total(),
            players: player_ids.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for &id in player_ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicatePlayer(id));
        }
    }

    let mut seats = player_ids.to_vec();
    let mut stream = rng.for_context(ASSIGNMENT_CONTEXT);
    stream.shuffle(&mut seats);

    let assignment: FxHashMap<PlayerId, Role> = seats.into_iter().zip(config.roles()).collect();

    debug!(
        players = assignment.len(),
        werewolves = config.werewolves,
        specials = config.special_role_count(),
        "Roles assigned"
    );

    Ok(assignment)
}

/// Deal roles and build the starting roster.
///
/// Each player's special states come from their role's initializer.
pub fn deal_roster(
    player_ids: &[PlayerId],
    config: &RoleConfiguration,
    rng: &GameRng,
) -> Result<Roster, ConfigError> {
    let assignment = assign_roles(player_ids, config, rng)?;
    Roster::from_players(
        player_ids
            .iter()
            .filter_map(|id| assignment.get(id).map(|role| Player::new(*id, *role))),
    )
    .map_err(|e| ConfigError::Invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<PlayerId> {
        PlayerId::range(n).collect()
    }

    fn count(assignment: &FxHashMap<PlayerId, Role>, role: Role) -> usize {
        assignment.values().filter(|r| **r == role).count()
    }

    #[test]
    fn test_counts_match_config() {
        let config = RoleConfiguration::new(2, 3).with_seer().with_witch();
        let assignment = assign_roles(&ids(7), &config, &GameRng::new(1)).unwrap();

        assert_eq!(assignment.len(), 7);
        assert_eq!(count(&assignment, Role::Werewolf), 2);
        assert_eq!(count(&assignment, Role::Villager), 3);
        assert_eq!(count(&assignment, Role::Seer), 1);
        assert_eq!(count(&assignment, Role::Witch), 1);
        assert_eq!(count(&assignment, Role::Hunter), 0);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let config = RoleConfiguration::new(2, 6).with_seer();
        let a = assign_roles(&ids(9), &config, &GameRng::new(42)).unwrap();
        let b = assign_roles(&ids(9), &config, &GameRng::new(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeds_vary_the_deal() {
        let config = RoleConfiguration::new(3, 9).with_seer();
        let first = assign_roles(&ids(13), &config, &GameRng::new(0)).unwrap();
        let differs = (1..20)
            .any(|seed| assign_roles(&ids(13), &config, &GameRng::new(seed)).unwrap() != first);
        assert!(differs);
    }

    #[test]
    fn test_count_mismatch() {
        let config = RoleConfiguration::new(1, 3);
        assert_eq!(
            assign_roles(&ids(5), &config, &GameRng::new(0)),
            Err(ConfigError::PlayerCountMismatch { configured: 4, players: 5 })
        );
    }

    #[test]
    fn test_duplicate_ids() {
        let config = RoleConfiguration::new(1, 3);
        let players = vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(1), PlayerId::new(2)];
        assert_eq!(
            assign_roles(&players, &config, &GameRng::new(0)),
            Err(ConfigError::DuplicatePlayer(PlayerId::new(1)))
        );
    }

    #[test]
    fn test_deal_roster_initializes_players() {
        let config = RoleConfiguration::new(1, 2).with_witch().with_hunter();
        let roster = deal_roster(&ids(5), &config, &GameRng::new(3)).unwrap();

        assert_eq!(roster.len(), 5);
        assert!(roster.iter().all(|p| p.is_alive));
        let witch = roster.iter().find(|p| p.role == Role::Witch).unwrap();
        assert!(witch.special_states.heal_potion_available);
        assert!(witch.special_states.poison_potion_available);
        let hunter = roster.iter().find(|p| p.role == Role::Hunter).unwrap();
        assert!(hunter.special_states.can_avenge_on_death);
    }
}
