//! Role configuration: how many of each role a game deals.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Player count at which each special role is unlocked by default.
const UNLOCKS: [(Role, usize); 5] = [
    (Role::Seer, 5),
    (Role::Witch, 7),
    (Role::Hunter, 8),
    (Role::Cupid, 10),
    (Role::LittleGirl, 12),
];

/// Share of the table dealt as werewolves by default.
const DEFAULT_WEREWOLF_SHARE: f64 = 0.25;

/// Role counts for one game.
///
/// Werewolves and villagers are counts; every special role is dealt at
/// most once, so it is a flag.
///
/// ## Example
///
/// ```
/// use werewolf_engine::roles::Role;
/// use werewolf_engine::setup::RoleConfiguration;
///
/// let config = RoleConfiguration::new(2, 3).with_role(Role::Seer);
///
/// assert_eq!(config.total(), 6);
/// assert_eq!(config.count(Role::Seer), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfiguration {
    pub werewolves: usize,
    pub villagers: usize,
    pub seer: bool,
    pub witch: bool,
    pub hunter: bool,
    pub cupid: bool,
    pub little_girl: bool,
}

impl RoleConfiguration {
    /// Configuration with only werewolves and villagers.
    #[must_use]
    pub fn new(werewolves: usize, villagers: usize) -> Self {
        Self {
            werewolves,
            villagers,
            ..Self::default()
        }
    }

    /// Enable a special role (builder pattern).
    ///
    /// Werewolf and Villager are counts and are ignored here.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.set_enabled(role, true);
        self
    }

    /// Enable the Seer.
    #[must_use]
    pub fn with_seer(self) -> Self {
        self.with_role(Role::Seer)
    }

    /// Enable the Witch.
    #[must_use]
    pub fn with_witch(self) -> Self {
        self.with_role(Role::Witch)
    }

    /// Enable the Hunter.
    #[must_use]
    pub fn with_hunter(self) -> Self {
        self.with_role(Role::Hunter)
    }

    /// Enable Cupid.
    #[must_use]
    pub fn with_cupid(self) -> Self {
        self.with_role(Role::Cupid)
    }

    /// Enable the Little Girl.
    #[must_use]
    pub fn with_little_girl(self) -> Self {
        self.with_role(Role::LittleGirl)
    }

    fn set_enabled(&mut self, role: Role, enabled: bool) {
        match role {
            Role::Seer => self.seer = enabled,
            Role::Witch => self.witch = enabled,
            Role::Hunter => self.hunter = enabled,
            Role::Cupid => self.cupid = enabled,
            Role::LittleGirl => self.little_girl = enabled,
            Role::Werewolf | Role::Villager => {}
        }
    }

    /// How many players this configuration deals the given role.
    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::Werewolf => self.werewolves,
            Role::Villager => self.villagers,
            Role::Seer => usize::from(self.seer),
            Role::Witch => usize::from(self.witch),
            Role::Hunter => usize::from(self.hunter),
            Role::Cupid => usize::from(self.cupid),
            Role::LittleGirl => usize::from(self.little_girl),
        }
    }

    /// Enabled special roles, in dealing order.
    #[must_use]
    pub fn special_roles(&self) -> Vec<Role> {
        Role::SPECIAL
            .into_iter()
            .filter(|role| self.count(*role) > 0)
            .collect()
    }

    /// Number of enabled special roles.
    #[must_use]
    pub fn special_role_count(&self) -> usize {
        self.special_roles().len()
    }

    /// Total number of roles dealt.
    #[must_use]
    pub fn total(&self) -> usize {
        self.werewolves + self.villagers + self.special_role_count()
    }

    /// Every dealt role as a flat list: werewolves, then specials, then villagers.
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        let mut roles = Vec::with_capacity(self.total());
        roles.extend(std::iter::repeat(Role::Werewolf).take(self.werewolves));
        roles.extend(self.special_roles());
        roles.extend(std::iter::repeat(Role::Villager).take(self.villagers));
        roles
    }
}

/// Default werewolf count for a table size.
#[must_use]
pub fn recommended_werewolves(total_players: usize) -> usize {
    ((total_players as f64 * DEFAULT_WEREWOLF_SHARE).floor() as usize).max(1)
}

/// Balanced default configuration for a table size.
///
/// A quarter of the table (at least one) are werewolves; special roles
/// unlock as the table grows, each replacing one villager.
#[must_use]
pub fn generate_default_config(total_players: usize) -> RoleConfiguration {
    let werewolves = recommended_werewolves(total_players);
    let mut config = RoleConfiguration::new(werewolves, total_players.saturating_sub(werewolves));

    for (role, threshold) in UNLOCKS {
        if total_players >= threshold && config.villagers > 0 {
            config.set_enabled(role, true);
            config.villagers -= 1;
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let config = RoleConfiguration::new(2, 3).with_seer().with_witch();
        assert_eq!(config.total(), 7);
        assert_eq!(config.count(Role::Werewolf), 2);
        assert_eq!(config.count(Role::Witch), 1);
        assert_eq!(config.count(Role::Cupid), 0);
        assert_eq!(config.special_roles(), vec![Role::Seer, Role::Witch]);
    }

    #[test]
    fn test_roles_flat_list() {
        let config = RoleConfiguration::new(2, 2).with_hunter();
        assert_eq!(
            config.roles(),
            vec![Role::Werewolf, Role::Werewolf, Role::Hunter, Role::Villager, Role::Villager]
        );
    }

    #[test]
    fn test_with_role_ignores_counted_roles() {
        let config = RoleConfiguration::new(1, 3)
            .with_role(Role::Werewolf)
            .with_role(Role::Villager);
        assert_eq!(config, RoleConfiguration::new(1, 3));
    }

    #[test]
    fn test_default_small_table() {
        let config = generate_default_config(4);
        assert_eq!(config, RoleConfiguration::new(1, 3));
    }

    #[test]
    fn test_default_unlocks() {
        assert_eq!(generate_default_config(5), RoleConfiguration::new(1, 3).with_seer());
        assert_eq!(
            generate_default_config(7),
            RoleConfiguration::new(1, 4).with_seer().with_witch()
        );
        assert_eq!(
            generate_default_config(8),
            RoleConfiguration::new(2, 3).with_seer().with_witch().with_hunter()
        );
        assert_eq!(
            generate_default_config(10),
            RoleConfiguration::new(2, 4).with_seer().with_witch().with_hunter().with_cupid()
        );
        assert_eq!(
            generate_default_config(12),
            RoleConfiguration::new(3, 4)
                .with_seer()
                .with_witch()
                .with_hunter()
                .with_cupid()
                .with_little_girl()
        );
    }

    #[test]
    fn test_default_total_always_matches() {
        for n in 4..=20 {
            assert_eq!(generate_default_config(n).total(), n, "table of {}", n);
        }
    }

    #[test]
    fn test_recommended_werewolves() {
        assert_eq!(recommended_werewolves(1), 1);
        assert_eq!(recommended_werewolves(7), 1);
        assert_eq!(recommended_werewolves(8), 2);
        assert_eq!(recommended_werewolves(20), 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = generate_default_config(10);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoleConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
