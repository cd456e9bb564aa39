//! Configuration validation.
//!
//! Validation never fails: every problem is reported in a `ValidationReport`
//! so a lobby UI can show all of them at once.

use serde::{Deserialize, Serialize};

use crate::core::EngineConfig;
use crate::roles::Role;

use super::config::{recommended_werewolves, RoleConfiguration};

/// Outcome of validating a configuration against a table size.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` when `errors` is empty.
    pub is_valid: bool,

    /// Hard errors; the game cannot start.
    pub errors: Vec<String>,

    /// Soft warnings; the game can start but may be unbalanced.
    pub warnings: Vec<String>,

    /// Optional tweaks toward the default configuration.
    pub suggestions: Vec<String>,

    pub total_players: usize,

    /// Werewolf share of the table, 0..=100.
    pub werewolf_percentage: f64,
}

/// Validate a configuration with the default engine limits.
#[must_use]
pub fn validate_config(config: &RoleConfiguration, total_players: usize) -> ValidationReport {
    validate_config_with(config, total_players, &EngineConfig::default())
}

/// Validate a configuration against explicit engine limits.
#[must_use]
pub fn validate_config_with(
    config: &RoleConfiguration,
    total_players: usize,
    engine: &EngineConfig,
) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    if config.werewolves < 1 {
        errors.push("At least one werewolf is required".to_string());
    }
    if config.villagers < 1 {
        errors.push("At least one villager is required".to_string());
    }
    if !engine.player_count_in_range(total_players) {
        errors.push(format!(
            "Player count {} is outside the allowed range {}-{}",
            total_players, engine.min_players, engine.max_players
        ));
    }
    if config.total() != total_players {
        errors.push(format!(
            "Configuration deals {} roles but there are {} players",
            config.total(),
            total_players
        ));
    }

    let ratio = if total_players == 0 {
        0.0
    } else {
        config.werewolves as f64 / total_players as f64
    };

    if total_players > 0 && config.werewolves > 0 {
        if ratio < engine.werewolf_ratio_low {
            warnings.push(format!(
                "Werewolves are only {:.0}% of players; the village may win too easily",
                ratio * 100.0
            ));
        } else if ratio > engine.werewolf_ratio_high {
            warnings.push(format!(
                "Werewolves are {:.0}% of players; the werewolves may win too easily",
                ratio * 100.0
            ));
        }
    }

    if config.special_role_count() * 2 > total_players {
        warnings.push(format!(
            "{} special roles is a lot for {} players",
            config.special_role_count(),
            total_players
        ));
    }

    let recommended = recommended_werewolves(total_players);
    if total_players > 0 && config.werewolves != recommended {
        suggestions.push(format!(
            "{} werewolves is the usual count for {} players",
            recommended, total_players
        ));
    }
    if total_players >= 5 && config.count(Role::Seer) == 0 {
        suggestions.push("Add a Seer so the village has a source of information".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
        total_players,
        werewolf_percentage: ratio * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::generate_default_config;

    #[test]
    fn test_default_configs_are_valid() {
        for n in 4..=20 {
            let report = validate_config(&generate_default_config(n), n);
            assert!(report.is_valid, "table of {}: {:?}", n, report.errors);
            assert!(report.suggestions.is_empty(), "table of {}: {:?}", n, report.suggestions);
        }
    }

    #[test]
    fn test_missing_werewolf_and_villager() {
        let report = validate_config(&RoleConfiguration::new(0, 0).with_seer().with_witch(), 2);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("werewolf")));
        assert!(report.errors.iter().any(|e| e.contains("villager")));
        assert!(report.errors.iter().any(|e| e.contains("outside the allowed range")));
    }

    #[test]
    fn test_sum_mismatch() {
        let report = validate_config(&RoleConfiguration::new(1, 3), 6);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("4 roles"));
    }

    #[test]
    fn test_player_range_bounds() {
        assert!(!validate_config(&RoleConfiguration::new(1, 2), 3).is_valid);
        assert!(validate_config(&RoleConfiguration::new(1, 3), 4).is_valid);
        assert!(validate_config(&RoleConfiguration::new(5, 15), 20).is_valid);
        assert!(!validate_config(&RoleConfiguration::new(5, 16), 21).is_valid);
    }

    #[test]
    fn test_ratio_warnings() {
        let report = validate_config(&RoleConfiguration::new(1, 9), 10);
        assert!(report.is_valid);
        assert_eq!(report.werewolf_percentage, 10.0);
        assert!(report.warnings.iter().any(|w| w.contains("village may win")));

        let report = validate_config(&RoleConfiguration::new(3, 2), 5);
        assert!(report.is_valid);
        assert_eq!(report.werewolf_percentage, 60.0);
        assert!(report.warnings.iter().any(|w| w.contains("werewolves may win")));
    }

    #[test]
    fn test_too_many_special_roles_warning() {
        let config = RoleConfiguration::new(1, 1)
            .with_seer()
            .with_witch()
            .with_hunter()
            .with_cupid();
        let report = validate_config(&config, 6);
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|w| w.contains("special roles")));
    }

    #[test]
    fn test_custom_engine_limits() {
        let engine = EngineConfig::default().with_player_range(6, 8);
        let report = validate_config_with(&RoleConfiguration::new(1, 3), 4, &engine);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("6-8"));
    }

    #[test]
    fn test_seer_suggestion() {
        let report = validate_config(&RoleConfiguration::new(2, 6), 8);
        assert!(report.suggestions.iter().any(|s| s.contains("Seer")));

        let report = validate_config(&RoleConfiguration::new(1, 3), 4);
        assert!(!report.suggestions.iter().any(|s| s.contains("Seer")));
    }
}
