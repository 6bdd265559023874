/// Game configuration constants.
///
/// This module defines the default gameplay parameters such as grid dimensions,
/// resource counts and scoring thresholds, and the `GameConfig` built from them.
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::game::error::GameError;

/// Number of columns in the game grid.
pub const GRID_WIDTH: usize = 28;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: usize = 18;

/// Number of fish kept on the grid at all times.
pub const FISH_COUNT: usize = 8;

/// Number of mice kept on the grid at all times.
pub const MOUSE_COUNT: usize = 3;

/// Happiness needed to win.
pub const HAPPINESS_GOAL: u32 = 10;

/// Moves into empty cells tolerated before happiness decays.
pub const MAX_MOVES_WITHOUT_FISH: u32 = 12;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "CAT_FEEDER_";

/// Gameplay parameters, fixed once a game is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub fish_count: usize,
    pub mouse_count: usize,
    pub happiness_goal: u32,
    pub max_moves_without_fish: u32,
    /// Seed for the game's random source. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            fish_count: FISH_COUNT,
            mouse_count: MOUSE_COUNT,
            happiness_goal: HAPPINESS_GOAL,
            max_moves_without_fish: MAX_MOVES_WITHOUT_FISH,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Build a configuration from the defaults, overridden by `CAT_FEEDER_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`], reading values through `lookup`.
    /// Values that fail to parse are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_from(&lookup, "GRID_WIDTH", &mut config.grid_width);
        override_from(&lookup, "GRID_HEIGHT", &mut config.grid_height);
        override_from(&lookup, "FISH_COUNT", &mut config.fish_count);
        override_from(&lookup, "MOUSE_COUNT", &mut config.mouse_count);
        override_from(&lookup, "HAPPINESS_GOAL", &mut config.happiness_goal);
        override_from(&lookup, "MAX_MOVES_WITHOUT_FISH", &mut config.max_moves_without_fish);

        let mut seed = 0u64;
        if override_from(&lookup, "SEED", &mut seed) {
            config.rng_seed = Some(seed);
        }

        config
    }

    /// Reject configurations the engine cannot run with.
    ///
    /// Entity counts that overflow the grid are not checked here: they surface as
    /// [`GameError::GridFull`] when the game is created.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.happiness_goal == 0 {
            return Err(GameError::InvalidConfig("happiness goal must be positive".into()));
        }
        Ok(())
    }
}

/// Parse `CAT_FEEDER_<name>` into `slot`. Returns true if the value was applied.
fn override_from<F, T>(lookup: &F, name: &str, slot: &mut T) -> bool
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let key = format!("{ENV_PREFIX}{name}");
    let Some(raw) = lookup(&key) else {
        return false;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => {
            *slot = value;
            true
        }
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a valid value");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = GameConfig::from_lookup(|_| None);
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.grid_width, 28);
        assert_eq!(config.grid_height, 18);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("CAT_FEEDER_GRID_WIDTH", "10"),
            ("CAT_FEEDER_FISH_COUNT", " 2 "),
            ("CAT_FEEDER_SEED", "42"),
        ]));
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, GRID_HEIGHT);
        assert_eq!(config.fish_count, 2);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_bad_override_keeps_default() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("CAT_FEEDER_HAPPINESS_GOAL", "lots"),
            ("CAT_FEEDER_SEED", "-1"),
        ]));
        assert_eq!(config.happiness_goal, HAPPINESS_GOAL);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_grid_and_zero_goal() {
        let mut config = GameConfig::default();
        assert!(config.validate().is_ok());

        config.grid_height = 0;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        config.grid_height = 5;
        config.happiness_goal = 0;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }
}
