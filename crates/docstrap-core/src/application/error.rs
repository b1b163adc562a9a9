//! Application layer errors.
//!
//! These errors represent failures in orchestration, not plan logic.
//! Plan validation errors are `DomainError` from `crate::domain`.
//!
//! All variants are terminal for the current run — none are retried, because
//! each stems from an environment misconfiguration that a retry cannot fix
//! (permissions, missing repository, disk full).

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Precondition failed: the target root is not the top of a
    /// version-controlled working tree. Raised before any filesystem write.
    #[error("'{root}' is not a version-controlled working tree")]
    NotAWorkingTree { root: PathBuf },

    /// Directory creation was denied by the underlying filesystem.
    #[error("Failed to create directory '{path}': {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// A file write was denied by the underlying filesystem.
    #[error("Failed to write '{path}': {reason}")]
    FileWriteFailed { path: PathBuf, reason: String },

    /// Marking a file executable failed.
    #[error("Failed to set permissions on '{path}': {reason}")]
    PermissionsFailed { path: PathBuf, reason: String },

    /// The version-control stage invocation returned non-success.
    /// `detail` carries the external tool's message verbatim.
    #[error("Version-control staging failed: {detail}")]
    StageFailed { detail: String },

    /// The version-control status query returned non-success.
    #[error("Version-control status query failed: {detail}")]
    StatusFailed { detail: String },

    /// The version-control commit invocation returned non-success.
    /// `detail` carries the external tool's message verbatim.
    #[error("Version-control commit failed: {detail}")]
    CommitFailed { detail: String },

    /// The version-control tool itself could not be invoked.
    #[error("Failed to invoke version-control tool: {detail}")]
    VcsUnavailable { detail: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAWorkingTree { root } => vec![
                format!("'{}' has no version-control metadata", root.display()),
                "Run `git init` in the target root first".into(),
                "Or point --root at an existing repository checkout".into(),
            ],
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions on the target root".into(),
                "Previously created directories are left in place; re-run after fixing".into(),
            ],
            Self::FileWriteFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check write permissions and available disk space".into(),
                "Already-written files are left in place; re-run after fixing".into(),
            ],
            Self::PermissionsFailed { path, .. } => vec![
                format!("Could not mark executable: {}", path.display()),
                "Check filesystem support for the executable bit".into(),
            ],
            Self::StageFailed { .. } | Self::CommitFailed { .. } | Self::StatusFailed { .. } => {
                vec![
                    "The version-control tool rejected the operation".into(),
                    "The tool's own message above usually names the cause".into(),
                    "The run is not retried; fix the cause and re-run".into(),
                ]
            }
            Self::VcsUnavailable { .. } => vec![
                "Ensure `git` is installed and on your PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAWorkingTree { .. } => ErrorCategory::Precondition,
            Self::DirectoryCreationFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::PermissionsFailed { .. } => ErrorCategory::Internal,
            Self::StageFailed { .. }
            | Self::StatusFailed { .. }
            | Self::CommitFailed { .. }
            | Self::VcsUnavailable { .. } => ErrorCategory::ExternalTool,
        }
    }
}
