//! Tournament and round configuration.
//!
//! All tunables live here rather than in the round algorithms:
//! - `RoundConfig`: per-game constants (turns, distances, probabilities)
//! - `TournamentConfig`: field size, seed, ability range, plus `RoundConfig`
//!
//! Both deserialize from JSON with every field optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::DEFAULT_ABILITY_RANGE;

/// Per-game constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Turns played in Red Light Green Light.
    pub movement_turns: u32,

    /// Distance a runner must cover to escape.
    pub movement_target: u32,

    /// Chance a runner falls on any turn they do not escape.
    pub fall_rate: f64,

    /// Glass panels on the bridge.
    pub bridge_steps: usize,

    /// Marbles are drawn from `1..=marble_max`.
    pub marble_max: u32,

    /// Base completion time for the ship task, in seconds.
    pub task_base_time: f64,

    /// Base success chance in the final fight.
    pub final_base_probability: f64,

    /// Success penalty for attacking in the final fight.
    pub attack_offset: f64,

    /// Success bonus for defending in the final fight.
    pub defend_offset: f64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            movement_turns: 20,
            movement_target: 1000,
            fall_rate: 0.1,
            bridge_steps: 18,
            marble_max: 10,
            task_base_time: 8.0,
            final_base_probability: 0.4,
            attack_offset: 0.1,
            defend_offset: 0.05,
        }
    }
}

impl RoundConfig {
    /// Set the number of movement turns.
    #[must_use]
    pub fn with_movement_turns(mut self, turns: u32) -> Self {
        self.movement_turns = turns;
        self
    }

    /// Set the escape distance.
    #[must_use]
    pub fn with_movement_target(mut self, target: u32) -> Self {
        self.movement_target = target;
        self
    }

    /// Set the per-turn fall probability.
    #[must_use]
    pub fn with_fall_rate(mut self, rate: f64) -> Self {
        self.fall_rate = rate;
        self
    }

    /// Set the bridge length.
    #[must_use]
    pub fn with_bridge_steps(mut self, steps: usize) -> Self {
        self.bridge_steps = steps;
        self
    }

    /// Set the upper bound of a marble draw.
    #[must_use]
    pub fn with_marble_max(mut self, max: u32) -> Self {
        self.marble_max = max;
        self
    }

    /// Set the ship task base time.
    #[must_use]
    pub fn with_task_base_time(mut self, seconds: f64) -> Self {
        self.task_base_time = seconds;
        self
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.movement_turns == 0 {
            return Err(ConfigError::invalid("movement_turns", "must be at least 1"));
        }
        for (field, value) in [
            ("fall_rate", self.fall_rate),
            ("final_base_probability", self.final_base_probability),
            ("attack_offset", self.attack_offset),
            ("defend_offset", self.defend_offset),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be within [0, 1], got {value}"),
                ));
            }
        }
        // A fighter at full ability must still be able to fail, or the final
        // fight never ends.
        let best = self.final_base_probability + f64::from(DEFAULT_ABILITY_RANGE.1) / 200.0;
        if best - self.attack_offset >= 1.0 {
            return Err(ConfigError::invalid(
                "attack_offset",
                format!(
                    "best attack odds reach {:.3}, must stay below 1",
                    best - self.attack_offset
                ),
            ));
        }
        if best + self.defend_offset >= 1.0 {
            return Err(ConfigError::invalid(
                "defend_offset",
                format!(
                    "best defend odds reach {:.3}, must stay below 1",
                    best + self.defend_offset
                ),
            ));
        }
        if self.bridge_steps == 0 {
            return Err(ConfigError::invalid("bridge_steps", "must be at least 1"));
        }
        if self.marble_max == 0 {
            return Err(ConfigError::invalid("marble_max", "must be at least 1"));
        }
        if !(self.task_base_time > 0.0 && self.task_base_time.is_finite()) {
            return Err(ConfigError::invalid(
                "task_base_time",
                format!("must be a positive number, got {}", self.task_base_time),
            ));
        }
        Ok(())
    }
}

/// Whole-tournament configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Number of entrants at the start.
    pub entrants: u32,

    /// RNG seed. `None` lets the driver pick one.
    pub seed: Option<u64>,

    /// Lowest ability value (inclusive).
    pub ability_min: u32,

    /// Highest ability value (inclusive), at most 100.
    pub ability_max: u32,

    /// Per-game constants.
    pub rounds: RoundConfig,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            entrants: 456,
            seed: None,
            ability_min: 0,
            ability_max: 100,
            rounds: RoundConfig::default(),
        }
    }
}

impl TournamentConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    ///
    /// ```
    /// use rust_rounds::core::TournamentConfig;
    ///
    /// let config = TournamentConfig::from_json_str(r#"{ "entrants": 10, "seed": 7 }"#).unwrap();
    /// assert_eq!(config.entrants, 10);
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.rounds.bridge_steps, 18);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Set the number of entrants.
    #[must_use]
    pub fn with_entrants(mut self, entrants: u32) -> Self {
        self.entrants = entrants;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-game constants.
    #[must_use]
    pub fn with_rounds(mut self, rounds: RoundConfig) -> Self {
        self.rounds = rounds;
        self
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entrants == 0 {
            return Err(ConfigError::invalid("entrants", "must be at least 1"));
        }
        if self.ability_min > self.ability_max {
            return Err(ConfigError::invalid(
                "ability_min",
                format!(
                    "must not exceed ability_max ({} > {})",
                    self.ability_min, self.ability_max
                ),
            ));
        }
        if self.ability_max > DEFAULT_ABILITY_RANGE.1 {
            return Err(ConfigError::invalid(
                "ability_max",
                format!(
                    "must not exceed {}, got {}",
                    DEFAULT_ABILITY_RANGE.1, self.ability_max
                ),
            ));
        }
        self.rounds.validate()
    }
}
