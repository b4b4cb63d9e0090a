//! Centralized error types for the taskdef CLI

use std::io;
use taskdef_config::ConfigError;
use taskdef_manifest::ManifestError;
use thiserror::Error;

/// Errors raised by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown task '{key}'. Available tasks: {available}")]
    UnknownTask { key: String, available: String },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to serialize TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}
