//! Application layer for Docstrap.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! plan logic itself. All plan rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main service and its report DTO
pub use services::{RunOptions, ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{CommitOutcome, Filesystem, VersionControl};

pub use error::ApplicationError;
