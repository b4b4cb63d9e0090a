//! Manifest writer utilities
//!
//! Renders any serializable document in one of the supported output formats
//! and writes it to stdout or a file.

use crate::errors::CliError;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use taskdef_config::OutputFormat;
use tracing::debug;

/// Render `value` as a string in `format`
///
/// `pretty` only affects JSON and TOML; YAML is always block style.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> Result<String, CliError> {
    let mut rendered = match (format, pretty) {
        (OutputFormat::Json, true) => serde_json::to_string_pretty(value)?,
        (OutputFormat::Json, false) => serde_json::to_string(value)?,
        (OutputFormat::Yaml, _) => serde_yaml::to_string(value)?,
        (OutputFormat::Toml, true) => toml::to_string_pretty(value)?,
        (OutputFormat::Toml, false) => toml::to_string(value)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Write rendered output to `path`, creating parent directories as needed
pub fn write_to_path(contents: &str, path: &Path) -> Result<(), CliError> {
    debug!("Writing output to {:?}", path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Write rendered output to stdout
pub fn write_to_stdout(contents: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(contents.as_bytes())?;
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::samples::TestInputs;
    use crate::writer::*;
    use taskdef_manifest::{Manifest, ManifestError, TaskDefinition};
    use tempfile::TempDir;

    fn manifest() -> Result<Manifest, ManifestError> {
        TestInputs::manifest()
    }

    #[test]
    fn test_render_json_pretty_and_compact() -> Result<(), CliError> {
        let manifest = manifest()?;
        let pretty = render(&manifest, OutputFormat::Json, true)?;
        let compact = render(&manifest, OutputFormat::Json, false)?;

        assert!(pretty.contains("\n  \"friendlyName\": \"Test inputs\""));
        assert!(compact.contains("\"type\":\"pickList\""));
        assert_eq!(compact.lines().count(), 1);

        let reparsed: serde_json::Value = serde_json::from_str(&compact)?;
        assert_eq!(reparsed["inputs"][1]["options"]["Dos"], "Opcion Dos");
        Ok(())
    }

    #[test]
    fn test_render_yaml() -> Result<(), CliError> {
        let rendered = render(&manifest()?, OutputFormat::Yaml, true)?;
        assert!(rendered.contains("friendlyName: Test inputs"));
        assert!(rendered.contains("type: pickList"));
        Ok(())
    }

    #[test]
    fn test_render_toml() -> Result<(), CliError> {
        let rendered = render(&manifest()?, OutputFormat::Toml, true)?;
        assert!(rendered.contains("name = \"TestInputs\""));
        assert!(rendered.contains("[[inputs]]"));
        Ok(())
    }

    #[test]
    fn test_write_to_nested_path() -> Result<(), CliError> {
        let Ok(temp_dir) = TempDir::new() else {
            return Ok(());
        };
        let path = temp_dir.path().join("out").join("task.json");
        write_to_path("{}\n", &path)?;
        assert_eq!(fs::read_to_string(&path)?, "{}\n");
        Ok(())
    }
}
