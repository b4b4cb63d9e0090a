use crate::samples::bundled_tasks;
use crate::{logger, GlobalOpts};
use anyhow::Result;
use colored::Colorize;
use taskdef_manifest::build_manifest;

/// Print every bundled task with its identity
///
/// A task whose declaration fails validation is still listed, with the
/// error in place of its identity.
pub fn list_tasks(opts: &GlobalOpts) -> Result<()> {
    let tasks = bundled_tasks();
    if tasks.is_empty() {
        println!("{}", "No bundled tasks".yellow());
        return Ok(());
    }

    println!("{}", "Tasks:".bold().green());
    for task in tasks {
        match task.declaration().and_then(|decl| build_manifest(&decl)) {
            Ok(manifest) => {
                println!(
                    "  {} {} ({})",
                    task.key.cyan().bold(),
                    manifest.identity().friendly_name(),
                    manifest.identity().name().dimmed()
                );
                if opts.verbosity_level() > 0 {
                    println!("      {}", task.summary);
                    println!(
                        "      id: {}, category: {}, inputs: {}",
                        manifest.identity().id(),
                        manifest.identity().category(),
                        manifest.inputs().len()
                    );
                }
            }
            Err(e) => {
                logger::warn(&format!("Task '{}' is invalid: {}", task.key, e));
                println!("  {} {}", task.key.cyan().bold(), "(invalid)".red());
            }
        }
    }
    Ok(())
}
