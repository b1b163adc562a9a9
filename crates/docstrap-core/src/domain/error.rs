// ============================================================================
// domain/error.rs - PLAN VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (plans are rebuilt per run, never mutated in place)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid scaffold plan: {0}")]
    InvalidPlan(String),

    #[error("Scaffold plan has no templates")]
    EmptyPlan,

    #[error("Duplicate path in plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Template '{path}' has empty content")]
    EmptyTemplate { path: String },

    /// A template's parent directory is not covered by the plan's
    /// directory set. Directories must be ensured before any file write.
    #[error("Template '{path}' has no parent directory in the plan")]
    MissingParentDirectory { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPlan(msg) => vec![
                "The built-in plan failed validation".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyPlan => vec![
                "A scaffold plan must materialize at least one template".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("The path '{}' appears more than once in the plan", path),
                "Template identity is its relative path; paths must be unique".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute; plan paths are relative to the target root", path),
            ],
            Self::MissingParentDirectory { path } => vec![
                format!("Add the parent directory of '{}' to the plan", path),
                "ScaffoldPlanBuilder::file() normally does this automatically".into(),
            ],
            Self::EmptyTemplate { path } => vec![
                format!("Template '{}' has no content to write", path),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
