//! Implementation of the `docstrap run` command.
//!
//! Responsibility: resolve the target root, build the built-in plan, call
//! the core scaffold service, and display results.  No plan logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use docstrap_adapters::{GitCli, LocalFilesystem, builtin_plan};
use docstrap_core::{
    application::{CommitOutcome, RunOptions, ScaffoldReport, ScaffoldService},
    domain::ScaffoldPlan,
};

use crate::{
    cli::{RunArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `docstrap run` command.
///
/// Dispatch sequence:
/// 1. Resolve the target root (flag, falling back to config)
/// 2. Build the built-in plan
/// 3. Early-exit if `--dry-run`
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print the report and next-steps guidance
#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(
    args: RunArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve root: explicit flag wins, config default fills in the
    //    implicit "." case.
    let root = resolve_root(&args.root, &config);

    // 2. Build the plan.
    let plan = builtin_plan().map_err(|e| CliError::Core(e.into()))?;

    debug!(
        files = plan.file_count(),
        directories = plan.directory_count(),
        "plan constructed"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return show_dry_run(&plan, &root, &output);
    }

    // 4. Create adapters and scaffold.
    let filesystem = Box::new(LocalFilesystem::new());
    let vcs = Box::new(GitCli::new());
    let service = ScaffoldService::new(filesystem, vcs);

    output.header(&format!("Scaffolding into {}...", root.display()))?;
    info!(root = %root.display(), "scaffold run started");

    let report = service
        .scaffold_with(
            &plan,
            &root,
            RunOptions {
                skip_commit: args.no_commit,
            },
        )
        .map_err(CliError::Core)?;

    info!(run_id = %report.run_id, written = report.written.len(), "scaffold run completed");

    // 5. Report.
    show_report(&report, &global, &output)?;

    Ok(())
}

/// Pick the working-tree root for this run.
///
/// An explicit `--root` always wins; the config's `run.default_root` only
/// replaces the implicit `.` default.
fn resolve_root(flag: &Path, config: &AppConfig) -> PathBuf {
    if flag == Path::new(".") {
        if let Some(default_root) = &config.run.default_root {
            return default_root.clone();
        }
    }
    flag.to_path_buf()
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_dry_run(plan: &ScaffoldPlan, root: &Path, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would scaffold into {}",
        root.display()
    ))?;

    out.print("")?;
    out.print("Directories:")?;
    for dir in plan.directories() {
        out.print(&format!("  {}/", dir))?;
    }

    out.print("")?;
    out.print("Files:")?;
    for template in plan.templates() {
        let marker = if template.permissions().executable_flag() {
            " (executable)"
        } else {
            ""
        };
        out.print(&format!("  {}{}", template.path(), marker))?;
    }

    out.print("")?;
    out.info("No files were written; no commit was made.")?;
    Ok(())
}

fn show_report(report: &ScaffoldReport, global: &GlobalArgs, out: &OutputManager) -> CliResult<()> {
    for path in &report.written {
        out.print(&format!("  wrote {}", path.display()))?;
    }

    // Status visibility: what version control saw before the commit step.
    if !report.staged.is_empty() {
        out.print("")?;
        out.print("Status:")?;
        for line in &report.staged {
            out.print(&format!("  {line}"))?;
        }
    }

    match &report.outcome {
        Some(CommitOutcome::Committed) => {
            out.success(&format!(
                "Scaffolded {} file(s) and committed the result.",
                report.written.len()
            ))?;
        }
        Some(CommitOutcome::NothingToCommit) => {
            out.success("Working tree already up to date; nothing to commit.")?;
        }
        None => {
            out.success(&format!(
                "Scaffolded {} file(s); changes staged but not committed.",
                report.written.len()
            ))?;
        }
    }

    if !global.quiet {
        out.print("")?;
        out.print("Next steps:")?;
        out.print("  git log -1          # inspect the scaffold commit")?;
        out.print("  git push            # publish when ready")?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins_over_config() {
        let mut config = AppConfig::default();
        config.run.default_root = Some(PathBuf::from("/from/config"));
        let root = resolve_root(Path::new("/explicit"), &config);
        assert_eq!(root, PathBuf::from("/explicit"));
    }

    #[test]
    fn config_default_fills_implicit_dot() {
        let mut config = AppConfig::default();
        config.run.default_root = Some(PathBuf::from("/from/config"));
        let root = resolve_root(Path::new("."), &config);
        assert_eq!(root, PathBuf::from("/from/config"));
    }

    #[test]
    fn dot_stays_without_config_default() {
        let config = AppConfig::default();
        let root = resolve_root(Path::new("."), &config);
        assert_eq!(root, PathBuf::from("."));
    }
}
