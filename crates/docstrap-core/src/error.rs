//! Unified error handling for Docstrap Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Docstrap Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// docstrap-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum DocstrapError {
    /// Errors from the domain layer (plan validation violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DocstrapError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Docstrap".into(),
                "Please report this issue with the full error output".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Precondition,
    ExternalTool,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type DocstrapResult<T> = Result<T, DocstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_maps_to_validation_category() {
        let err: DocstrapError = DomainError::DuplicatePath {
            path: "README.md".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn precondition_error_maps_through() {
        let err: DocstrapError = ApplicationError::NotAWorkingTree {
            root: "/tmp/plain".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Precondition);
    }

    #[test]
    fn suggestions_never_empty() {
        let err = DocstrapError::Internal {
            message: "oops".into(),
        };
        assert!(!err.suggestions().is_empty());
    }
}
