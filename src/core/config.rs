//! Engine configuration.
//!
//! Callers build an `EngineConfig` at startup (or deserialize one) and hand
//! it to the setup functions and the `NightEngine`. Every field has a
//! default matching the standard rules.

use serde::{Deserialize, Serialize};

/// Tunable engine parameters.
///
/// ## Example
///
/// ```
/// use werewolf_engine::core::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_seed(7)
///     .with_spy_risk_increment(25);
///
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.spy_risk_increment, 25);
/// assert_eq!(config.min_players, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Smallest legal table.
    pub min_players: usize,

    /// Largest legal table.
    pub max_players: usize,

    /// Below this werewolf share a configuration gets a warning.
    pub werewolf_ratio_low: f64,

    /// Above this werewolf share a configuration gets a warning.
    pub werewolf_ratio_high: f64,

    /// Percentage points of detection risk added per spy attempt.
    pub spy_risk_increment: u8,

    /// Seed for role dealing and spy rolls.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_players: 4,
            max_players: 20,
            werewolf_ratio_low: 0.15,
            werewolf_ratio_high: 0.40,
            spy_risk_increment: 20,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the legal player count range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "min_players must not exceed max_players");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the werewolf ratio warning band.
    #[must_use]
    pub fn with_werewolf_band(mut self, low: f64, high: f64) -> Self {
        self.werewolf_ratio_low = low;
        self.werewolf_ratio_high = high;
        self
    }

    /// Set the per-attempt spy risk increment (capped at 100).
    #[must_use]
    pub fn with_spy_risk_increment(mut self, increment: u8) -> Self {
        self.spy_risk_increment = increment.min(100);
        self
    }

    /// Is `count` inside the legal player range?
    #[must_use]
    pub fn player_count_in_range(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}
