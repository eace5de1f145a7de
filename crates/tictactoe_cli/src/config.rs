//! Play settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{DEFAULT_OPTIMAL_SHARE, Engine, Mark, Tier};
use tracing::{debug, info, instrument};

/// Settings for interactive play and self-play.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Default opponent strength.
    #[serde(default)]
    tier: Tier,

    /// Probability that the Mixed tier plays the optimal move.
    #[serde(default = "default_optimal_share")]
    optimal_share: f64,

    /// Fixed seed for reproducible games; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Mark played by the human.
    #[serde(default = "default_human")]
    human: Mark,

    /// Swap the starting mark after every round.
    #[serde(default = "default_alternate_start")]
    alternate_start: bool,

    /// Optimal play opens with a random cell on an empty board.
    #[serde(default)]
    vary_opening: bool,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,
}

fn default_optimal_share() -> f64 {
    DEFAULT_OPTIMAL_SHARE
}

fn default_human() -> Mark {
    Mark::X
}

fn default_alternate_start() -> bool {
    true
}

fn default_think_delay_ms() -> u64 {
    500
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            tier: Tier::default(),
            optimal_share: default_optimal_share(),
            seed: None,
            human: default_human(),
            alternate_start: default_alternate_start(),
            vary_opening: false,
            think_delay_ms: default_think_delay_ms(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(tier = %config.tier, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        tier: Option<Tier>,
        human: Option<Mark>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(tier) = tier {
            self.tier = tier;
        }
        if let Some(human) = human {
            self.human = human;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds an engine for `tier` with this config's tuning.
    pub fn engine(&self, tier: Tier) -> Engine {
        Engine::new(tier)
            .with_optimal_share(self.optimal_share)
            .with_vary_opening(self.vary_opening)
    }

    /// Seeded generator when a seed is configured, entropy otherwise.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: PlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config: PlayConfig = toml::from_str(
            r#"
            tier = "hard"
            optimal_share = 0.5
            seed = 42
            human = "o"
            alternate_start = false
            vary_opening = true
            think_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(*config.tier(), Tier::Optimal);
        assert_eq!(*config.optimal_share(), 0.5);
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.human(), Mark::O);
        assert!(!*config.alternate_start());
        assert!(*config.vary_opening());
        assert_eq!(*config.think_delay_ms(), 0);
    }

    #[test]
    fn test_overrides_win() {
        let config = PlayConfig::default().with_overrides(Some(Tier::Random), None, Some(7));
        assert_eq!(*config.tier(), Tier::Random);
        assert_eq!(*config.human(), Mark::X);
        assert_eq!(*config.seed(), Some(7));
    }

    #[test]
    fn test_engine_uses_tuning() {
        let config: PlayConfig = toml::from_str("optimal_share = 0.9").unwrap();
        let engine = config.engine(Tier::Mixed);
        assert_eq!(engine.tier(), Tier::Mixed);
        assert_eq!(engine.optimal_share(), 0.9);
    }
}
