use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple configuration for tiktally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Model the CLI falls back to when neither a model nor an encoding is
    /// given on the command line.
    #[serde(default = "default_model")]
    pub default_model: String,

    #[serde(default)]
    pub walk: WalkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            walk: WalkConfig::default(),
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
    ]
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "tiktally", "tiktally") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.tiktally/config.toml")
        }
    }
}
