use crate::samples::find_task;
use crate::GlobalOpts;
use anyhow::Result;
use colored::Colorize;
use taskdef_manifest::output_variables;

/// Print the output variable bindings of a bundled task
pub fn show_variables(task: &str, _opts: &GlobalOpts) -> Result<()> {
    let task = find_task(task)?;
    let variables = output_variables(&task.declaration()?);

    if variables.is_empty() {
        println!("{}", format!("'{}' publishes no output variables", task.key).yellow());
        return Ok(());
    }

    println!("{}", "Output variables:".bold().green());
    for variable in variables {
        println!("  {} -> {}", variable.field, variable.name.cyan());
    }
    Ok(())
}
