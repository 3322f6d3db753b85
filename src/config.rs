//! Game setup options collected from the command line.

use crate::constants::{MAX_BOARD_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::ConfigError;

/// Game setup. Fields left as `None` are asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: Option<usize>,
    /// Names of the human players, in turn order.
    pub humans: Option<Vec<String>>,
    pub ai_players: Option<usize>,
    /// Seed for AI move selection; random when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// A game played by `ai_players` computer players only.
    pub fn ai_only(board_size: usize, ai_players: usize, seed: Option<u64>) -> Self {
        GameConfig {
            board_size: Some(board_size),
            humans: Some(Vec::new()),
            ai_players: Some(ai_players),
            seed,
        }
    }

    /// Validate the values that are already known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == Some(0) {
            return Err(ConfigError::Validation("board_size must be > 0".into()));
        }
        if self.board_size.is_some_and(|size| size > MAX_BOARD_SIZE) {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {MAX_BOARD_SIZE}"
            )));
        }
        let humans = self.humans.as_ref().map(Vec::len);
        if let Some(humans) = humans {
            if humans > MAX_PLAYERS {
                return Err(ConfigError::Validation(format!(
                    "at most {MAX_PLAYERS} human players are supported"
                )));
            }
        }
        if let Some(names) = &self.humans {
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(ConfigError::Validation(
                    "human player names must not be empty".into(),
                ));
            }
        }
        if let Some(ai) = self.ai_players {
            if ai > MAX_PLAYERS {
                return Err(ConfigError::Validation(format!(
                    "at most {MAX_PLAYERS} AI players are supported"
                )));
            }
        }
        if let (Some(humans), Some(ai)) = (humans, self.ai_players) {
            let total = humans + ai;
            if total < MIN_PLAYERS {
                return Err(ConfigError::Validation(format!(
                    "at least {MIN_PLAYERS} players are required (got {total})"
                )));
            }
            if total > MAX_PLAYERS {
                return Err(ConfigError::Validation(format!(
                    "at most {MAX_PLAYERS} players are supported (got {total})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn test_ai_only_is_valid() {
        GameConfig::ai_only(10, 2, Some(1)).validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_zero_size() {
        let config = GameConfig {
            board_size: Some(0),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let config = GameConfig {
            board_size: Some(MAX_BOARD_SIZE + 1),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Validation("board_size must be <= 99".into()))
        );
        let config = GameConfig {
            board_size: Some(usize::MAX / 2),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_too_few_players() {
        let config = GameConfig {
            humans: Some(vec!["Ada".into()]),
            ai_players: Some(0),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Validation(
                "at least 2 players are required (got 1)".into()
            ))
        );
    }

    #[test]
    fn test_validation_rejects_too_many_players() {
        let config = GameConfig {
            humans: Some(vec!["Ada".into(); 4]),
            ai_players: Some(7),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let config = GameConfig {
            humans: Some(vec!["Ada".into(), "  ".into()]),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_defers_player_check() {
        let config = GameConfig {
            humans: Some(vec!["Ada".into()]),
            ..GameConfig::default()
        };
        config.validate().unwrap();
    }
}
