//! Configuration for the taskdef CLI
//!
//! The configuration lives in a TOML file. Its location is resolved as:
//! - `TASKDEF_CONFIG` when set and non-empty
//! - the path stored in the `.taskdef_config_path` pointer file, if present
//! - `~/.config/taskdef/taskdef.toml` (the platform config dir on Windows)

pub mod output_format;

pub use output_format::OutputFormat;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TASKDEF_CONFIG";

/// Pointer file next to the default config that redirects to another path
pub const POINTER_FILE: &str = ".taskdef_config_path";

/// Keys accepted by [`Config::set`]
pub const KNOWN_KEYS: &[&str] = &["format", "pretty", "output-dir"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Unknown config key: {0}. Supported keys: format, pretty, output-dir")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

impl Config {
    /// Default config location, ignoring overrides
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        #[cfg(not(target_os = "windows"))]
        let dir = dirs::home_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(".config")
            .join("taskdef");

        #[cfg(target_os = "windows")]
        let dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("taskdef");

        Ok(dir.join("taskdef.toml"))
    }

    /// Resolved config location, honoring `TASKDEF_CONFIG` and the pointer file
    pub fn path() -> Result<PathBuf, ConfigError> {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let default = Self::default_path()?;
        if let Some(parent) = default.parent() {
            let pointer = parent.join(POINTER_FILE);
            if let Ok(contents) = fs::read_to_string(&pointer) {
                let trimmed = contents.trim();
                if !trimmed.is_empty() {
                    return Ok(PathBuf::from(trimmed));
                }
            }
        }

        Ok(default)
    }

    /// Point future loads at `new_path` by writing the pointer file
    pub fn set_path(new_path: &Path) -> Result<PathBuf, ConfigError> {
        let default = Self::default_path()?;
        let parent = default.parent().ok_or(ConfigError::NoConfigDir)?;
        fs::create_dir_all(parent)?;
        let pointer = parent.join(POINTER_FILE);
        fs::write(&pointer, new_path.to_string_lossy().as_bytes())?;
        Ok(pointer)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&Self::path()?)
    }

    /// Load from `path`, returning the default config if the file does not exist
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(&Self::path()?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "format" => self.format.map(|f| f.to_string()),
            "pretty" => self.pretty.map(|p| p.to_string()),
            "output-dir" => self.output_dir.clone(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        match key {
            "format" => self.format = Some(value.parse().map_err(invalid)?),
            "pretty" => {
                self.pretty = Some(
                    value
                        .parse()
                        .map_err(|_| invalid("expected true or false".to_string()))?,
                );
            }
            "output-dir" => self.output_dir = Some(value.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.format.is_none() && self.pretty.is_none() && self.output_dir.is_none()
    }

    /// Configured key/value pairs in [`KNOWN_KEYS`] order
    pub fn values_iter(&self) -> Vec<(&'static str, String)> {
        KNOWN_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    /// Output format to use when none is given on the command line
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Whether to pretty-print output; defaults to true
    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }
}
