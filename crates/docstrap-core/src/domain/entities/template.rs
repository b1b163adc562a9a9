//! Template entity: a fixed (relative path, static content) pair.
//!
//! Templates are the unit of work for the scaffolder. Each one names a
//! relative path under the target root and carries the full, fixed content
//! to write there. Content is not parameterized: a scaffold run is a pure
//! overwrite, so re-running against the same tree produces byte-identical
//! files.
//!
//! ## Design Decisions
//!
//! ### Why `TemplateContent` with `Static` vs `Owned`?
//!
//! **Zero-copy for compiled-in templates:** the built-in plan references
//! `&'static str` content without allocation or cloning.
//!
//! **Flexibility for constructed plans:** tests and future loaders can own
//! their content.
//!
//! ### Why shebang detection?
//!
//! Script templates (e.g. a Python tool stub) must end up runnable on disk.
//! Rather than a hand-maintained list of executable paths, the interpreter
//! marker line in the content itself is the source of truth. An explicit
//! `executable()` override exists for the rare non-shebang case.

use std::fmt;

use super::common::{Permissions, RelativePath};

/// A (relative path, fixed content) pair the scaffolder materializes verbatim.
///
/// ## Invariants
///
/// - Identity = relative path (the plan rejects duplicates).
/// - Immutable once defined; all fields set at construction.
/// - Content beginning with `#!` yields executable permissions unless
///   explicitly overridden.
#[derive(Debug, Clone)]
pub struct Template {
    /// Relative path from the target root (e.g. "case-studies/spray-on-dress.md")
    path: RelativePath,

    /// Fixed content, written create-or-truncate
    content: TemplateContent,

    /// Unix-style capability flags; `executable` drives the chmod-equivalent
    permissions: Permissions,
}

impl Template {
    /// Create a new template with permissions derived from the content.
    ///
    /// Content starting with an interpreter marker line (`#!`) is marked
    /// executable; everything else is plain read-write.
    pub fn new(path: impl Into<RelativePath>, content: impl Into<TemplateContent>) -> Self {
        let content = content.into();
        let permissions = if content.has_interpreter_marker() {
            Permissions::executable()
        } else {
            Permissions::read_write()
        };
        Self {
            path: path.into(),
            content,
            permissions,
        }
    }

    /// Force executable permissions regardless of content.
    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Parent directory this template needs ensured before it is written.
    pub fn parent_dir(&self) -> Option<RelativePath> {
        self.path.parent()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Source of template content: either compile-time or runtime.
///
/// `Static` references binary data (zero-cost). `Owned` allocates for
/// dynamically constructed content (tests, future loaders).
#[derive(Debug, Clone)]
pub enum TemplateContent {
    /// Compile-time string literal (e.g. `include_str!("readme.md")`)
    Static(&'static str),

    /// Runtime-owned string (heap-allocated)
    Owned(String),
}

impl TemplateContent {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    /// Check whether the content's first line is an interpreter marker.
    pub fn has_interpreter_marker(&self) -> bool {
        self.as_str().starts_with("#!")
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }
}

impl From<&'static str> for TemplateContent {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateContent {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}
