use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// Short type name for error messages, e.g. `Config` rather than the full path.
fn config_name<TConfig>() -> &'static str {
    let full = type_name::<TConfig>();
    full.rsplit("::").next().unwrap_or(full)
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: DeserializeOwned + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize {} as YAML: {}", config_name::<TConfig>(), e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize {} from YAML: {}", config_name::<TConfig>(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::SnakeGameSettings;

    #[test]
    fn test_error_names_the_config_type() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<SnakeGameSettings, String> = serializer.deserialize("field_width: [1, 2]");
        let error = result.unwrap_err();
        assert!(error.contains("SnakeGameSettings"), "{}", error);
    }
}
