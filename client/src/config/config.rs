use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

use super::TicTacToeLobbyConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub last_mode: Option<GameMode>,
    pub tictactoe: TicTacToeLobbyConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized: String = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            last_mode: Some(GameMode::PlayerVsComputer),
            tictactoe: TicTacToeLobbyConfig {
                difficulty: 80,
                bot_delay_ms: 0,
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(file_path.clone()));
        assert_eq!(reloaded.get_config().unwrap(), config);
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_bot_delay_uses_default() {
        let content = "tictactoe:\n  difficulty: 70\n";
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize(content).unwrap();
        assert_eq!(config.last_mode, None);
        assert_eq!(config.tictactoe.difficulty, 70);
        assert_eq!(config.tictactoe.bot_delay_ms, 500);
    }

    #[test]
    fn test_invalid_difficulty_cant_be_read() {
        let invalid_config_content = r#"
            last_mode: PlayerVsPlayer
            tictactoe:
              difficulty: 150
              bot_delay_ms: 500
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_excessive_bot_delay_is_invalid() {
        let config = Config {
            last_mode: None,
            tictactoe: TicTacToeLobbyConfig {
                difficulty: 50,
                bot_delay_ms: 60_000,
            },
        };
        assert!(config.validate().is_err());
    }
}
