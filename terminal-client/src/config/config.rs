use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::SnakeGameSettings;
use serde::{Deserialize, Serialize};

use super::KeyBindings;

const CONFIG_FILE_NAME: &str = "snake_duel_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: SnakeGameSettings,
    #[serde(default)]
    pub keys: KeyBindings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.keys.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_duel_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_manager_saves_and_loads_config() {
        let config = Config {
            game: SnakeGameSettings {
                apple_count: 3,
                apples_to_win: 5,
                ..SnakeGameSettings::default()
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        let config = Config {
            game: SnakeGameSettings { field_width: 2, ..SnakeGameSettings::default() },
            ..Config::default()
        };

        let error = manager.set_config(&config).unwrap_err();
        assert!(error.starts_with("Config validation error"), "{}", error);
        assert_eq!(FileContentConfigProvider::new(file_path).get_config_content(), Ok(None));
    }

    #[test]
    fn test_invalid_file_content_is_rejected_on_load() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("game:\n  starting_length: 0\n")
            .unwrap();

        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }
}
