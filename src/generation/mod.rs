//! # Generation Module
//!
//! Procedural content generation: maze carving, entity placement, and loot
//! rolls.
//!
//! Every probabilistic routine takes an injected `StdRng` so generation is
//! reproducible from a seed and unit-testable without real randomness.

pub mod loot;
pub mod maze;
pub mod placement;

pub use loot::*;
pub use maze::*;
pub use placement::*;

use crate::config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
///
/// Controls maze dimensions, entity counts, and randomness parameters for
/// one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Maze width in cells
    pub width: u32,
    /// Maze height in cells
    pub height: u32,
    /// Monsters to scatter per level
    pub monster_count: u32,
    /// Loot chests to scatter per level
    pub chest_count: u32,
    /// Probability of flipping an eligible wall during the braiding pass
    pub braid_chance: f64,
    /// Rejection-sampling attempt cap per placement category
    pub placement_attempts: u32,
}

impl GenerationConfig {
    /// Creates the default generation configuration for a seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert!(config.width >= 5 && config.height >= 5);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: config::DEFAULT_MAZE_WIDTH,
            height: config::DEFAULT_MAZE_HEIGHT,
            monster_count: config::MONSTERS_PER_LEVEL,
            chest_count: config::CHESTS_PER_LEVEL,
            braid_chance: config::BRAID_CHANCE,
            placement_attempts: config::PLACEMENT_ATTEMPTS,
        }
    }

    /// Creates a configuration for testing with a smaller, sparser level.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 9,
            height: 9,
            monster_count: 2,
            chest_count: 1,
            braid_chance: 0.0,
            placement_attempts: 50,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 15);
        assert_eq!(config.monster_count, 5);
        assert_eq!(config.chest_count, 3);
    }

    #[test]
    fn test_testing_config_is_smaller() {
        let config = GenerationConfig::for_testing(1);
        assert!(config.width < GenerationConfig::new(1).width);
        assert!(config.monster_count < GenerationConfig::new(1).monster_count);
    }

    #[test]
    fn test_utils_rng_is_deterministic() {
        use rand::Rng;

        let config = GenerationConfig::new(12345);
        let mut a = utils::create_rng(&config);
        let mut b = utils::create_rng(&config);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
