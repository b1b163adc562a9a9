//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No orchestration logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "docstrap",
    bin_name = "docstrap",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{1f4da} Documentation tree scaffolding",
    long_about = "Docstrap materializes a fixed documentation template set \
                  into a git working tree and commits the result.",
    after_help = "EXAMPLES:\n\
        \x20 docstrap run                       # scaffold into the current directory\n\
        \x20 docstrap run --root ../docs-repo   # scaffold into another checkout\n\
        \x20 docstrap run --dry-run             # preview without writing\n\
        \x20 docstrap plan --format json        # inspect the built-in template set",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Execute a scaffold run: ensure directories, write templates, stage,
    /// and commit.
    #[command(
        visible_alias = "r",
        about = "Run the scaffolder against a working tree",
        after_help = "EXAMPLES:\n\
            \x20 docstrap run\n\
            \x20 docstrap run --root /path/to/checkout\n\
            \x20 docstrap run --no-commit   # stop after staging"
    )]
    Run(RunArgs),

    /// Show what the built-in plan would materialize.
    #[command(
        visible_alias = "ls",
        about = "List the built-in template set",
        after_help = "EXAMPLES:\n\
            \x20 docstrap plan\n\
            \x20 docstrap plan --format list\n\
            \x20 docstrap plan --format json"
    )]
    Plan(PlanArgs),

    /// Initialise a Docstrap configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 docstrap init          # default location\n\
            \x20 docstrap init --force  # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 docstrap completions bash > ~/.local/share/bash-completion/completions/docstrap\n\
            \x20 docstrap completions zsh  > ~/.zfunc/_docstrap\n\
            \x20 docstrap completions fish > ~/.config/fish/completions/docstrap.fish"
    )]
    Completions(CompletionsArgs),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `docstrap run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Target root: must be the top of a git working tree.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Working-tree root to scaffold into (default: current directory)"
    )]
    pub root: PathBuf,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Write and stage, but skip the commit step.
    #[arg(long = "no-commit", help = "Stop after staging; do not commit")]
    pub no_commit: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `docstrap plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `docstrap init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `docstrap completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_run_command_with_root() {
        let cli = Cli::parse_from(["docstrap", "run", "--root", "/tmp/docs"]);
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.root, PathBuf::from("/tmp/docs"));
            assert!(!args.dry_run);
        } else {
            panic!("expected Run command");
        }
    }

    #[test]
    fn run_root_defaults_to_current_directory() {
        let cli = Cli::parse_from(["docstrap", "run"]);
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.root, PathBuf::from("."));
        } else {
            panic!("expected Run command");
        }
    }

    #[test]
    fn run_alias() {
        let cli = Cli::parse_from(["docstrap", "r", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Run(args) if args.dry_run));
    }

    #[test]
    fn parse_plan_format() {
        let cli = Cli::parse_from(["docstrap", "plan", "--format", "json"]);
        if let Commands::Plan(args) = cli.command {
            assert!(matches!(args.format, PlanFormat::Json));
        } else {
            panic!("expected Plan command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["docstrap", "--quiet", "--verbose", "plan"]);
        assert!(result.is_err());
    }
}
