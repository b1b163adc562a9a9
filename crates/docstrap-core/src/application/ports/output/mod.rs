//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `docstrap-adapters` crate provides implementations.

use crate::error::DocstrapResult;
use serde::Serialize;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `docstrap_adapters::filesystem::LocalFilesystem` (production)
/// - `docstrap_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - All operations are absolute-path based; the service joins plan-relative
///   paths onto the target root before calling in.
/// - `create_dir_all` must be safe to repeat (no error on existing dirs).
/// - `write_file` is create-or-truncate: pre-existing content is replaced,
///   pre-existing files outside the plan are never touched.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> DocstrapResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> DocstrapResult<()>;

    /// Mark a file executable (no-op on platforms without the bit).
    fn set_executable(&self, path: &Path) -> DocstrapResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external version-control system.
///
/// Implemented by:
/// - `docstrap_adapters::vcs::GitCli` (production, shells out to `git`)
/// - `docstrap_adapters::vcs::RecordingVcs` (testing, records calls)
///
/// The scaffolder treats version control as a black-box command interface:
/// it checks success/failure and surfaces the tool's message verbatim, but
/// never inspects or retries beyond that. Commit history is owned entirely
/// by the external system.
pub trait VersionControl: Send + Sync {
    /// Whether `root` is the top of a working tree (control-metadata marker
    /// present). Must not mutate anything.
    fn is_working_tree(&self, root: &Path) -> bool;

    /// Register the given root-relative paths with the index, recursively.
    fn stage(&self, root: &Path, paths: &[&Path]) -> DocstrapResult<()>;

    /// Read-only status query: paths currently staged or modified.
    fn status(&self, root: &Path) -> DocstrapResult<Vec<String>>;

    /// Create a single commit covering the staged files.
    ///
    /// A run where nothing is staged reports
    /// [`CommitOutcome::NothingToCommit`] — a successful no-op, distinct
    /// from a hard error.
    fn commit(&self, root: &Path, message: &str) -> DocstrapResult<CommitOutcome>;
}

/// Result of the commit step, owned by the external version-control system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    /// A new commit was created.
    Committed,
    /// All template outputs already matched what was on disk; nothing was
    /// staged and no commit was created.
    NothingToCommit,
}

impl CommitOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NothingToCommit)
    }
}
