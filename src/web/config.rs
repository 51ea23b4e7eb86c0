use serde::Deserialize;
use thiserror::Error;

use crate::palette::Palette;
use crate::scene::SceneConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub palette: Palette,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path);
                Self::from_file(path)
            }
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = r##"
web:
  bind: "127.0.0.1:9000"
scene:
  ring_segments: 64
palette:
  objects:
    sat_hubble: "#f59e0b"
"##;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.scene.ring_segments, 64);
        assert_eq!(config.scene.body_radius, 1.0);
        assert_eq!(config.palette.objects.len(), 1);
        assert_eq!(config.palette.default.as_str(), "#60a5fa");
    }

    #[test]
    fn missing_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn unreadable_file_is_io_error() {
        assert!(matches!(
            Config::from_file("/nonexistent/argus-view.yaml"),
            Err(ConfigError::Io(_))
        ));
    }
}
