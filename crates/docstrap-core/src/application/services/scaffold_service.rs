//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffold run, in strict order:
//! 1. Precondition: target root is a working tree (abort before any write)
//! 2. Ensure directories (idempotent, before any file write)
//! 3. Materialize templates (pure overwrite, executable bit for scripts)
//! 4. Stage written paths
//! 5. Report status (read-only query, surfaced for visibility)
//! 6. Commit (a no-op run reports "nothing to commit", not an error)
//!
//! Execution is single-threaded, synchronous, and fail-fast: the first
//! failing step aborts the run without rollback. Steps are idempotent, so
//! re-running after fixing the root cause converges to the same end state.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{CommitOutcome, Filesystem, VersionControl},
    },
    domain::ScaffoldPlan,
    error::{DocstrapError, DocstrapResult},
};

/// Tuning knobs for one scaffold run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop after staging; leave the commit to the operator.
    pub skip_commit: bool,
}

/// Outcome of one scaffold run, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Unique identifier of this run (tracing correlation).
    pub run_id: Uuid,
    /// Files written, in write order, relative to the target root.
    pub written: Vec<PathBuf>,
    /// Paths the version-control status query surfaced before committing.
    pub staged: Vec<String>,
    /// What the commit step did; `None` when the commit was skipped.
    pub outcome: Option<CommitOutcome>,
}

/// Main scaffolding service.
///
/// Orchestrates the ensure-directories → write-files → stage → status →
/// commit workflow against injected adapters.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, vcs: Box<dyn VersionControl>) -> Self {
        Self { filesystem, vcs }
    }

    /// Execute one complete scaffold run with default options.
    pub fn scaffold(
        &self,
        plan: &ScaffoldPlan,
        root: impl AsRef<Path>,
    ) -> DocstrapResult<ScaffoldReport> {
        self.scaffold_with(plan, root, RunOptions::default())
    }

    /// Execute one complete scaffold run.
    ///
    /// The plan is validated first; the working-tree precondition is checked
    /// before any filesystem mutation.
    #[instrument(skip_all, fields(root = %root.as_ref().display(), run_id = tracing::field::Empty))]
    pub fn scaffold_with(
        &self,
        plan: &ScaffoldPlan,
        root: impl AsRef<Path>,
        options: RunOptions,
    ) -> DocstrapResult<ScaffoldReport> {
        let root = root.as_ref();
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", run_id.to_string());

        // 0. Validate the plan before touching anything.
        plan.validate().map_err(DocstrapError::Domain)?;

        // 1. Precondition: must already be a working tree. No filesystem
        //    mutation may happen before this check.
        if !self.vcs.is_working_tree(root) {
            return Err(ApplicationError::NotAWorkingTree {
                root: root.to_path_buf(),
            }
            .into());
        }

        info!(
            files = plan.file_count(),
            directories = plan.directory_count(),
            "Scaffold run started"
        );

        // 2. Ensure directories, in plan order, before any file write.
        for dir in plan.directories() {
            let path = root.join(dir.as_path());
            debug!(path = %path.display(), "ensuring directory");
            self.filesystem.create_dir_all(&path)?;
        }

        // 3. Materialize templates: create-or-truncate overwrite.
        let mut written = Vec::with_capacity(plan.file_count());
        for template in plan.templates() {
            let path = root.join(template.path().as_path());
            debug!(path = %path.display(), bytes = template.content().len(), "writing template");
            self.filesystem.write_file(&path, template.content())?;

            if template.permissions().executable_flag() {
                self.filesystem.set_executable(&path)?;
            }

            written.push(template.path().as_path().to_path_buf());
        }

        // 4. Stage everything under the plan's top-level paths.
        let top_level = plan.top_level_paths();
        let stage_paths: Vec<&Path> = top_level.iter().map(|p| p.as_path()).collect();
        self.vcs.stage(root, &stage_paths)?;

        // 5. Surface the staged/modified set before committing.
        let staged = self.vcs.status(root)?;
        info!(staged = staged.len(), "paths staged");

        // 6. Commit. "Nothing to commit" is a successful no-op.
        let outcome = if options.skip_commit {
            info!("commit step skipped");
            None
        } else {
            let outcome = self.vcs.commit(root, &plan.commit_message())?;
            match outcome {
                CommitOutcome::Committed => info!("scaffold commit created"),
                CommitOutcome::NothingToCommit => {
                    info!("nothing to commit; tree already up to date")
                }
            }
            Some(outcome)
        };

        Ok(ScaffoldReport {
            run_id,
            written,
            staged,
            outcome,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
