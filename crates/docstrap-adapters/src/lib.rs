//! Infrastructure adapters for Docstrap.
//!
//! Implements the driven ports defined in `docstrap_core::application::ports`:
//!
//! - [`filesystem::LocalFilesystem`] / [`filesystem::MemoryFilesystem`]
//! - [`vcs::GitCli`] / [`vcs::RecordingVcs`]
//!
//! plus [`builtin_plan`], the compiled-in template table.

pub mod builtin_plan;
pub mod filesystem;
pub mod vcs;

pub use builtin_plan::builtin_plan;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use vcs::{GitCli, RecordingVcs};
