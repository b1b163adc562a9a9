//! In-memory version-control fake for testing.
//!
//! Records every call so tests can assert on the collaboration without a
//! real repository. Outcomes are configurable per instance.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use docstrap_core::{
    application::ports::{CommitOutcome, VersionControl},
    error::DocstrapResult,
};

/// One recorded call against the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    IsWorkingTree(PathBuf),
    Stage(PathBuf, Vec<PathBuf>),
    Status(PathBuf),
    Commit(PathBuf, String),
}

/// Call-recording [`VersionControl`] fake.
#[derive(Debug, Clone)]
pub struct RecordingVcs {
    working_tree: bool,
    status_lines: Vec<String>,
    commit_outcome: CommitOutcome,
    calls: Arc<Mutex<Vec<VcsCall>>>,
}

impl RecordingVcs {
    /// A fake behaving like a working tree with stageable changes.
    pub fn working_tree() -> Self {
        Self {
            working_tree: true,
            status_lines: vec!["A  README.md".into()],
            commit_outcome: CommitOutcome::Committed,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A fake behaving like a plain, unversioned directory.
    pub fn plain_directory() -> Self {
        Self {
            working_tree: false,
            ..Self::working_tree()
        }
    }

    /// A fake whose index never has anything to commit.
    pub fn clean_tree() -> Self {
        Self {
            status_lines: Vec::new(),
            commit_outcome: CommitOutcome::NothingToCommit,
            ..Self::working_tree()
        }
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Messages passed to `commit`, in order.
    pub fn commit_messages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                VcsCall::Commit(_, msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: VcsCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl VersionControl for RecordingVcs {
    fn is_working_tree(&self, root: &Path) -> bool {
        self.record(VcsCall::IsWorkingTree(root.to_path_buf()));
        self.working_tree
    }

    fn stage(&self, root: &Path, paths: &[&Path]) -> DocstrapResult<()> {
        self.record(VcsCall::Stage(
            root.to_path_buf(),
            paths.iter().map(|p| p.to_path_buf()).collect(),
        ));
        Ok(())
    }

    fn status(&self, root: &Path) -> DocstrapResult<Vec<String>> {
        self.record(VcsCall::Status(root.to_path_buf()));
        Ok(self.status_lines.clone())
    }

    fn commit(&self, root: &Path, message: &str) -> DocstrapResult<CommitOutcome> {
        self.record(VcsCall::Commit(root.to_path_buf(), message.to_string()));
        Ok(self.commit_outcome.clone())
    }
}
