//! Docstrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Docstrap
//! documentation scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          docstrap-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (ScaffoldService)             │
//! │  ensure dirs → write → stage → commit   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, VersionControl)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    docstrap-adapters (Infrastructure)   │
//! │  (LocalFilesystem, GitCli, fakes, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │     (Template, ScaffoldPlan, paths)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use docstrap_core::{
//!     application::ScaffoldService,
//!     domain::ScaffoldPlan,
//! };
//!
//! // 1. Build a plan (usually docstrap_adapters::builtin_plan())
//! let plan = ScaffoldPlan::builder()
//!     .file("README.md", "# Docs\n")
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, vcs);
//! let report = service.scaffold(&plan, "./docs-repo").unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommitOutcome, RunOptions, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, VersionControl},
    };
    pub use crate::domain::{
        Permissions, RelativePath, ScaffoldPlan, ScaffoldPlanBuilder, Template, TemplateContent,
    };
    pub use crate::error::{DocstrapError, DocstrapResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
