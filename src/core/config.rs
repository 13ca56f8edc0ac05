//! Engine configuration.
//!
//! Sessions are created from an `EngineConfig`. The defaults reproduce the
//! classic game: two starting tiles, and a new tile is a 4 one time in ten.

use serde::{Deserialize, Serialize};

use super::board::CELL_COUNT;
use super::error::{EngineError, Result};

/// Probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Tiles placed before the first move.
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the session RNG.
    /// Same seed produces the same sequence of spawns.
    pub seed: u64,

    /// Chance in `[0, 1]` that a spawned tile is a 4.
    pub four_probability: f64,

    /// Number of tiles spawned when the session starts.
    pub initial_tiles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            initial_tiles: DEFAULT_INITIAL_TILES,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom four-tile probability.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Four-tile probability must be within [0, 1]"
        );
        self.four_probability = probability;
        self
    }

    /// Create a new config with a custom number of starting tiles.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        assert!(
            (1..=CELL_COUNT).contains(&count),
            "Initial tiles must be between 1 and 16"
        );
        self.initial_tiles = count;
        self
    }

    /// Check the ranges the builders assert.
    ///
    /// Public fields and deserialization bypass the builders, so sessions
    /// call this before using a config.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability {} is outside [0, 1]",
                self.four_probability
            )));
        }
        if !(1..=CELL_COUNT).contains(&self.initial_tiles) {
            return Err(EngineError::InvalidConfig(format!(
                "initial_tiles {} is outside [1, {CELL_COUNT}]",
                self.initial_tiles
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.four_probability, 0.1);
        assert_eq!(config.initial_tiles, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_four_probability(0.2)
            .with_initial_tiles(3);

        assert_eq!(config.seed, 123);
        assert_eq!(config.four_probability, 0.2);
        assert_eq!(config.initial_tiles, 3);
    }

    #[test]
    #[should_panic(expected = "Four-tile probability must be within [0, 1]")]
    fn test_probability_out_of_range() {
        let _ = EngineConfig::default().with_four_probability(1.5);
    }

    #[test]
    #[should_panic(expected = "Initial tiles must be between 1 and 16")]
    fn test_zero_initial_tiles() {
        let _ = EngineConfig::default().with_initial_tiles(0);
    }

    #[test]
    fn test_validate_builder_configs() {
        assert!(EngineConfig::default().validate().is_ok());
        let config = EngineConfig::default()
            .with_four_probability(1.0)
            .with_initial_tiles(16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_literal_fields() {
        let config = EngineConfig {
            four_probability: 1.5,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        let config = EngineConfig {
            four_probability: f64::NAN,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            initial_tiles: 17,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_deserialized_probability() {
        let json = r#"{"seed":1,"four_probability":-0.5,"initial_tiles":2}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.validate(),
            Err(EngineError::InvalidConfig(
                "four_probability -0.5 is outside [0, 1]".to_string()
            ))
        );
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
