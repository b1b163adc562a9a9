//! Implementation of the `docstrap plan` command.

use serde_json::json;

use crate::{
    cli::{PlanArgs, PlanFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: PlanArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let plan = docstrap_adapters::builtin_plan().map_err(|e| CliError::Core(e.into()))?;

    match args.format {
        PlanFormat::Table => {
            output.header("Built-in documentation plan:")?;
            output.print("")?;
            output.print("  Directories:")?;
            for dir in plan.directories() {
                output.print(&format!("    {}/", dir))?;
            }
            output.print("")?;
            output.print("  Files:")?;
            for template in plan.templates() {
                let mode = if template.permissions().executable_flag() {
                    "rwx"
                } else {
                    "rw-"
                };
                output.print(&format!(
                    "    {:<4} {:>6} B  {}",
                    mode,
                    template.content().len(),
                    template.path()
                ))?;
            }
            output.print("")?;
            output.print(&format!(
                "  {} file(s) across {} directorie(s)",
                plan.file_count(),
                plan.directory_count()
            ))?;
        }

        PlanFormat::List => {
            for template in plan.templates() {
                println!("{}", template.path());
            }
        }

        PlanFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<_> = plan
                .templates()
                .iter()
                .map(|t| {
                    json!({
                        "path": t.path().as_str(),
                        "bytes": t.content().len(),
                        "executable": t.permissions().executable_flag(),
                    })
                })
                .collect();
            let doc = json!({
                "directories": plan
                    .directories()
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<_>>(),
                "files": entries,
            });
            let rendered = serde_json::to_string_pretty(&doc).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("cannot serialise plan: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            println!("{rendered}");
        }
    }

    Ok(())
}
