use common::config::Validate;
use common::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeLobbyConfig {
    pub difficulty: u8,
    #[serde(default = "default_bot_delay_ms")]
    pub bot_delay_ms: u64,
}

fn default_bot_delay_ms() -> u64 {
    500
}

impl TicTacToeLobbyConfig {
    pub fn difficulty(&self) -> Result<Difficulty, String> {
        Difficulty::new(self.difficulty)
    }

    /// Applies command line values over the stored ones and checks the result.
    pub fn with_overrides(
        &self,
        difficulty: Option<u8>,
        bot_delay_ms: Option<u64>,
    ) -> Result<Self, String> {
        let merged = Self {
            difficulty: difficulty.unwrap_or(self.difficulty),
            bot_delay_ms: bot_delay_ms.unwrap_or(self.bot_delay_ms),
        };
        merged.validate()?;
        Ok(merged)
    }
}

impl Validate for TicTacToeLobbyConfig {
    fn validate(&self) -> Result<(), String> {
        self.difficulty()?;
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeLobbyConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default().percent(),
            bot_delay_ms: default_bot_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_stored_values() {
        let merged = TicTacToeLobbyConfig::default()
            .with_overrides(Some(80), Some(0))
            .unwrap();
        assert_eq!(merged.difficulty, 80);
        assert_eq!(merged.bot_delay_ms, 0);
    }

    #[test]
    fn test_missing_overrides_keep_stored_values() {
        let stored = TicTacToeLobbyConfig {
            difficulty: 30,
            bot_delay_ms: 250,
        };
        assert_eq!(stored.with_overrides(None, None), Ok(stored.clone()));
    }

    #[test]
    fn test_bot_delay_override_above_limit_is_rejected() {
        let err = TicTacToeLobbyConfig::default()
            .with_overrides(None, Some(60_000))
            .unwrap_err();
        assert!(err.contains("bot_delay_ms"));
        assert!(
            TicTacToeLobbyConfig::default()
                .with_overrides(None, Some(MAX_BOT_DELAY_MS))
                .is_ok()
        );
    }

    #[test]
    fn test_difficulty_override_above_hundred_is_rejected() {
        assert!(
            TicTacToeLobbyConfig::default()
                .with_overrides(Some(101), None)
                .is_err()
        );
    }
}
