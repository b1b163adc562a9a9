//! Command handlers.
//!
//! Each submodule owns exactly one subcommand: translate CLI arguments,
//! call into `docstrap-core`, and display results.  No plan logic here.

pub mod completions;
pub mod init;
pub mod plan;
pub mod run;
