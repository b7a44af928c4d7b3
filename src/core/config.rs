//! Game configuration.
//!
//! The driver builds a `WarConfig` before dealing. Everything has a default
//! that reproduces a plain game of War: players "A" and "B", an
//! unseeded shuffle, two cards per side for each war, and no round cap.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Player;

/// Cards each player adds per tie: one face-down, one face-up.
pub const DEFAULT_WAR_DRAWS: usize = 2;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Display names of the two draw piles, used in trace output.
    pub player_names: [String; 2],

    /// Shuffle seed. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,

    /// Cards each player adds to the pile per tie before re-comparing.
    pub war_draws: usize,

    /// Stop after this many completed rounds. `None` plays until a loss.
    pub round_limit: Option<u64>,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            player_names: ["A".to_string(), "B".to_string()],
            seed: None,
            war_draws: DEFAULT_WAR_DRAWS,
            round_limit: None,
        }
    }
}

impl WarConfig {
    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the cap on completed rounds.
    #[must_use]
    pub fn with_round_limit(mut self, limit: u64) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Set the per-tie draw count.
    #[must_use]
    pub fn with_war_draws(mut self, draws: usize) -> Self {
        self.war_draws = draws;
        self
    }

    /// Display name for a player's draw pile.
    #[must_use]
    pub fn player_name(&self, player: Player) -> &str {
        &self.player_names[player.index()]
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.war_draws == 0 {
            // A tie would re-compare the same two cards forever.
            return Err(GameError::InvalidConfig(
                "war_draws must be at least 1".to_string(),
            ));
        }
        if let Some(player) = Player::ALL
            .into_iter()
            .find(|&p| self.player_name(p).is_empty())
        {
            return Err(GameError::InvalidConfig(format!(
                "{} needs a non-empty name",
                player
            )));
        }
        if self.player_names[0] == self.player_names[1] {
            return Err(GameError::InvalidConfig(format!(
                "player names must differ, both are {:?}",
                self.player_names[0]
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
        let config = WarConfig::default();

        assert_eq!(config.player_name(Player::A), "A");
        assert_eq!(config.player_name(Player::B), "B");
        assert_eq!(config.seed, None);
        assert_eq!(config.war_draws, 2);
        assert_eq!(config.round_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = WarConfig::default()
            .with_seed(7)
            .with_round_limit(100)
            .with_war_draws(1);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.round_limit, Some(100));
        assert_eq!(config.war_draws, 1);
    }

    #[test]
    fn test_validate_rejects_zero_war_draws() {
        let config = WarConfig::default().with_war_draws(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut config = WarConfig::default();
        config.player_names[1] = String::new();
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        config.player_names[1] = "A".to_string();
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = WarConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
