//! ScaffoldPlan: the ordered work list for one scaffold run.
//!
//! A plan is constructed once per run from a declarative template table and
//! consumed within that run; nothing persists in memory between runs. It
//! carries two ordered sets:
//!
//! - directories to ensure exist (created before any file is written)
//! - templates to materialize (pure overwrites, in insertion order)
//!
//! ## Invariants (enforced by `validate()`)
//!
//! 1. The plan contains at least one template.
//! 2. Every path (directory or template) is unique.
//! 3. No path is absolute.
//! 4. The directory set is a superset of every template's parent directory.
//!
//! `ScaffoldPlanBuilder::file()` inserts missing parent directories
//! automatically, so invariant 4 only trips on hand-assembled plans.

use std::collections::HashSet;

use super::common::RelativePath;
use super::template::{Template, TemplateContent};
use crate::domain::error::DomainError;

/// Fixed first line of the scaffold commit message.
///
/// Kept stable so operators (and tests) can recognize scaffold commits in
/// history.
pub const COMMIT_SUBJECT: &str = "Scaffold documentation tree";

/// Ordered directories to ensure plus ordered templates to materialize.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldPlan {
    directories: Vec<RelativePath>,
    templates: Vec<Template>,
}

impl ScaffoldPlan {
    /// Start the builder pattern for fluent construction.
    pub fn builder() -> ScaffoldPlanBuilder {
        ScaffoldPlanBuilder::default()
    }

    /// Directories in creation order.
    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    /// Templates in write order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Top-level paths the plan touches, for staging.
    ///
    /// Staging the top-level entries recursively covers every file the run
    /// wrote without enumerating each one to the version-control tool.
    pub fn top_level_paths(&self) -> Vec<RelativePath> {
        let mut seen = HashSet::new();
        let mut paths = Vec::new();

        let top = |p: &RelativePath| -> RelativePath {
            match p.as_path().components().next() {
                Some(first) => RelativePath::new(first.as_os_str()),
                None => p.clone(),
            }
        };

        for dir in &self.directories {
            let t = top(dir);
            if seen.insert(t.clone()) {
                paths.push(t);
            }
        }
        for template in &self.templates {
            let t = top(template.path());
            if seen.insert(t.clone()) {
                paths.push(t);
            }
        }

        paths
    }

    /// Validate all invariants.
    ///
    /// Called by `ScaffoldService` before any filesystem mutation.
    pub fn validate(&self) -> Result<(), DomainError> {
        // Invariant 1: must have content to create
        if self.templates.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        // Invariant 2 + 3: unique, relative paths
        let mut seen = HashSet::new();
        for path in self
            .directories
            .iter()
            .chain(self.templates.iter().map(Template::path))
        {
            if !seen.insert(path.as_str().to_string()) {
                return Err(DomainError::DuplicatePath {
                    path: path.as_str().to_string(),
                });
            }
        }

        // Invariant 4: every template parent is covered by the directory set
        let dirs: HashSet<&str> = self.directories.iter().map(RelativePath::as_str).collect();
        for template in &self.templates {
            if template.content().is_empty() {
                return Err(DomainError::EmptyTemplate {
                    path: template.path().as_str().to_string(),
                });
            }
            if let Some(parent) = template.parent_dir() {
                if !dirs.contains(parent.as_str()) {
                    return Err(DomainError::MissingParentDirectory {
                        path: template.path().as_str().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// The fixed, descriptive multi-line commit message for this plan.
    ///
    /// Subject line is [`COMMIT_SUBJECT`]; the body enumerates what was
    /// scaffolded. Deterministic for a given plan, so a no-op re-run that
    /// did commit would produce the identical message.
    pub fn commit_message(&self) -> String {
        let mut msg = String::from(COMMIT_SUBJECT);
        msg.push_str("\n\n");
        msg.push_str(&format!(
            "Materialize {} template file(s) across {} directorie(s):\n",
            self.templates.len(),
            self.directories.len(),
        ));
        for template in &self.templates {
            msg.push_str(&format!("  - {}\n", template.path()));
        }
        msg
    }

    pub fn file_count(&self) -> usize {
        self.templates.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.directories.is_empty()
    }
}

/// Builder for constructing plans with automatic parent-directory insertion.
///
/// ## Design Rationale
///
/// The template table is declarative data: a flat list of `dir`/`file` calls
/// with no content literals interleaved with control flow. Parent directories
/// are derived from file paths so the table cannot drift out of sync with
/// the directory set.
#[derive(Default)]
pub struct ScaffoldPlanBuilder {
    directories: Vec<RelativePath>,
    dir_index: HashSet<RelativePath>,
    templates: Vec<Template>,
}

impl ScaffoldPlanBuilder {
    /// Ensure a directory exists in the plan (idempotent, keeps first order).
    pub fn dir(mut self, path: impl Into<RelativePath>) -> Self {
        self.push_dir(path.into());
        self
    }

    /// Add a file template, ensuring its ancestor directories first.
    ///
    /// Executable detection follows [`Template::new`]: content starting with
    /// `#!` is marked runnable.
    pub fn file(
        mut self,
        path: impl Into<RelativePath>,
        content: impl Into<TemplateContent>,
    ) -> Self {
        let template = Template::new(path.into(), content.into());
        self.push_parents_of(&template);
        self.templates.push(template);
        self
    }

    /// Add a pre-built template (for explicit permission overrides).
    pub fn template(mut self, template: Template) -> Self {
        self.push_parents_of(&template);
        self.templates.push(template);
        self
    }

    /// Consume builder and construct a validated `ScaffoldPlan`.
    pub fn build(self) -> Result<ScaffoldPlan, DomainError> {
        let plan = ScaffoldPlan {
            directories: self.directories,
            templates: self.templates,
        };
        plan.validate()?;
        Ok(plan)
    }

    fn push_parents_of(&mut self, template: &Template) {
        // Walk ancestors root-first so mkdir order never depends on the
        // template table's ordering.
        let mut chain = Vec::new();
        let mut cursor = template.parent_dir();
        while let Some(dir) = cursor {
            cursor = dir.parent();
            chain.push(dir);
        }
        for dir in chain.into_iter().rev() {
            self.push_dir(dir);
        }
    }

    fn push_dir(&mut self, dir: RelativePath) {
        if self.dir_index.insert(dir.clone()) {
            self.directories.push(dir);
        }
    }
}
