//! `taskdef generate`: build a bundled task's manifest and write it out

use crate::config_manager::{Config, OutputFormat};
use crate::samples::find_task;
use crate::{logger, writer, GlobalOpts};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use taskdef_manifest::{build_manifest, Manifest};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
    /// Bundled task key (see `taskdef list`)
    pub task: String,

    /// Output format: json, yaml or toml (defaults to the configured format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout or the configured output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact output instead of pretty-printing
    #[arg(long)]
    pub compact: bool,
}

/// Where the rendered manifest goes
#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn destination(
    cmd: &GenerateCommand,
    config: &Config,
    manifest: &Manifest,
    format: OutputFormat,
) -> Destination {
    if let Some(path) = &cmd.output {
        return Destination::File(path.clone());
    }
    match config.output_dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => Destination::File(
            PathBuf::from(dir).join(format!("{}.{}", manifest.identity().name(), format.extension())),
        ),
        _ => Destination::Stdout,
    }
}

pub fn handle_generate(cmd: &GenerateCommand, _opts: &GlobalOpts) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let task = find_task(&cmd.task)?;

    logger::step(&format!("Building manifest for '{}'", task.key));
    let decl = task.declaration()?;
    let manifest = build_manifest(&decl)
        .with_context(|| format!("Failed to build manifest for '{}'", task.key))?;
    debug!(
        task = task.key,
        inputs = manifest.inputs().len(),
        "manifest built"
    );

    let format = cmd.format.unwrap_or_else(|| config.output_format());
    let pretty = !cmd.compact && config.pretty();
    let rendered = writer::render(&manifest, format, pretty)?;

    let destination = destination(cmd, &config, &manifest, format);
    logger::info(&format!("Writing {} manifest to {}", format, destination));

    match destination {
        Destination::Stdout => writer::write_to_stdout(&rendered)?,
        Destination::File(path) => {
            writer::write_to_path(&rendered, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "manifest written");
            logger::success(&format!(
                "Wrote {} manifest for '{}' to {}",
                format,
                task.key,
                path.display()
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::TestInputs;
    use taskdef_manifest::TaskDefinition;

    fn command(output: Option<&str>) -> GenerateCommand {
        GenerateCommand {
            task: "test-inputs".to_string(),
            format: None,
            output: output.map(PathBuf::from),
            compact: false,
        }
    }

    #[test]
    fn test_destination_precedence() -> Result<()> {
        let manifest = TestInputs::manifest()?;
        let mut config = Config::default();

        assert_eq!(
            destination(&command(None), &config, &manifest, OutputFormat::Json),
            Destination::Stdout
        );

        config.set("output-dir", "out")?;
        assert_eq!(
            destination(&command(None), &config, &manifest, OutputFormat::Yaml),
            Destination::File(PathBuf::from("out").join("TestInputs.yaml"))
        );

        assert_eq!(
            destination(&command(Some("explicit.json")), &config, &manifest, OutputFormat::Json),
            Destination::File(PathBuf::from("explicit.json"))
        );
        Ok(())
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::Stdout.to_string(), "stdout");
        assert_eq!(
            Destination::File(PathBuf::from("out").join("a.json")).to_string(),
            PathBuf::from("out").join("a.json").display().to_string()
        );
    }
}
