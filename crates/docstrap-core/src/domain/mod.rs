//! Core domain layer for Docstrap.
//!
//! This module contains pure plan logic with ZERO external dependencies.
//! All I/O and version-control concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: Templates and plans never mutate after build
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Re-exports for convenience
pub use entities::{
    common::{Permissions, RelativePath},
    plan::{COMMIT_SUBJECT, ScaffoldPlan, ScaffoldPlanBuilder},
    template::{Template, TemplateContent},
};

pub use error::{DomainError, ErrorCategory};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // RelativePath Tests
    // ========================================================================

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("case-studies/x.md").is_ok());
    }

    #[test]
    fn relative_path_parent_chain() {
        let p = RelativePath::new("tools-and-frameworks/calc.py");
        assert_eq!(p.parent().unwrap().as_str(), "tools-and-frameworks");
        assert!(p.parent().unwrap().parent().is_none());
    }

    #[test]
    fn root_level_path_has_no_parent() {
        assert!(RelativePath::new("README.md").parent().is_none());
    }

    // ========================================================================
    // Template Tests
    // ========================================================================

    #[test]
    fn template_identity_is_its_path() {
        let t = Template::new("README.md", "# Docs\n");
        assert_eq!(t.path().as_str(), "README.md");
        assert_eq!(t.content(), "# Docs\n");
    }

    #[test]
    fn shebang_content_is_executable() {
        let t = Template::new("tools/run.py", "#!/usr/bin/env python3\nprint()\n");
        assert!(t.permissions().executable_flag());
    }

    #[test]
    fn markdown_content_is_not_executable() {
        let t = Template::new("README.md", "# Heading\n");
        assert!(!t.permissions().executable_flag());
    }

    #[test]
    fn explicit_executable_override() {
        let t = Template::new("tools/run", "no marker here\n").executable();
        assert!(t.permissions().executable_flag());
    }

    #[test]
    fn shebang_must_be_first_line() {
        let t = Template::new("notes.md", "text\n#!/bin/sh\n");
        assert!(!t.permissions().executable_flag());
    }

    // ========================================================================
    // ScaffoldPlan Builder Tests
    // ========================================================================

    #[test]
    fn builder_inserts_parent_directories() {
        let plan = ScaffoldPlan::builder()
            .file("case-studies/a.md", "# A\n")
            .build()
            .unwrap();

        assert_eq!(plan.directories().len(), 1);
        assert_eq!(plan.directories()[0].as_str(), "case-studies");
    }

    #[test]
    fn builder_inserts_ancestors_root_first() {
        let plan = ScaffoldPlan::builder()
            .file("a/b/c.md", "content\n")
            .build()
            .unwrap();

        let dirs: Vec<_> = plan.directories().iter().map(|d| d.as_str()).collect();
        assert_eq!(dirs, vec!["a", "a/b"]);
    }

    #[test]
    fn builder_deduplicates_directories() {
        let plan = ScaffoldPlan::builder()
            .dir("case-studies")
            .file("case-studies/a.md", "# A\n")
            .file("case-studies/b.md", "# B\n")
            .build()
            .unwrap();

        assert_eq!(plan.directory_count(), 1);
        assert_eq!(plan.file_count(), 2);
    }

    #[test]
    fn plan_directory_set_covers_every_template_parent() {
        let plan = ScaffoldPlan::builder()
            .file("README.md", "# Root\n")
            .file("applications/note.md", "# Note\n")
            .file("tools-and-frameworks/calc.py", "#!/usr/bin/env python3\n")
            .build()
            .unwrap();

        let dirs: std::collections::HashSet<_> =
            plan.directories().iter().map(|d| d.as_str()).collect();
        for t in plan.templates() {
            if let Some(parent) = t.parent_dir() {
                assert!(dirs.contains(parent.as_str()), "uncovered: {}", parent);
            }
        }
    }

    // ========================================================================
    // Plan Validation Tests
    // ========================================================================

    #[test]
    fn empty_plan_is_rejected() {
        let result = ScaffoldPlan::builder().dir("only-a-dir").build();
        assert_eq!(result.unwrap_err(), DomainError::EmptyPlan);
    }

    #[test]
    fn duplicate_template_path_is_rejected() {
        let result = ScaffoldPlan::builder()
            .file("README.md", "first\n")
            .file("README.md", "second\n")
            .build();

        assert!(matches!(result, Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn empty_template_content_is_rejected() {
        let result = ScaffoldPlan::builder().file("README.md", "").build();
        assert!(matches!(result, Err(DomainError::EmptyTemplate { .. })));
    }

    // ========================================================================
    // Commit Message Tests
    // ========================================================================

    #[test]
    fn commit_message_starts_with_fixed_subject() {
        let plan = ScaffoldPlan::builder()
            .file("README.md", "# Docs\n")
            .build()
            .unwrap();

        let msg = plan.commit_message();
        assert!(msg.starts_with(COMMIT_SUBJECT));
        assert!(msg.contains("README.md"));
    }

    #[test]
    fn commit_message_is_deterministic() {
        let build = || {
            ScaffoldPlan::builder()
                .file("README.md", "# Docs\n")
                .file("applications/a.md", "# A\n")
                .build()
                .unwrap()
        };
        assert_eq!(build().commit_message(), build().commit_message());
    }

    // ========================================================================
    // Top-Level Path Tests
    // ========================================================================

    #[test]
    fn top_level_paths_collapse_nested_entries() {
        let plan = ScaffoldPlan::builder()
            .file("README.md", "# Docs\n")
            .file("case-studies/a.md", "# A\n")
            .file("case-studies/b.md", "# B\n")
            .build()
            .unwrap();

        let tops: Vec<_> = plan
            .top_level_paths()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();
        assert_eq!(tops, vec!["case-studies".to_string(), "README.md".into()]);
    }
}
