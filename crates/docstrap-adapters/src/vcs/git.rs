//! Git adapter: shells out to the `git` binary.
//!
//! Git is treated as a black-box command interface. Each operation checks the
//! exit status and surfaces git's own message verbatim on failure; nothing is
//! parsed beyond `status --porcelain` lines, and nothing is retried.

use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

use docstrap_core::{
    application::{
        ApplicationError,
        ports::{CommitOutcome, VersionControl},
    },
    error::DocstrapResult,
};

/// Production version-control adapter invoking the `git` CLI.
#[derive(Debug, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, root: &Path, args: &[&str]) -> DocstrapResult<Output> {
        debug!(root = %root.display(), ?args, "invoking git");
        Command::new("git")
            .arg("-C")
            .arg(root)
            .args(args)
            .output()
            .map_err(|e| {
                ApplicationError::VcsUnavailable {
                    detail: e.to_string(),
                }
                .into()
            })
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    /// The control-metadata marker must sit at the target root itself:
    /// being *inside* someone else's working tree is not enough, because the
    /// scaffolded paths are resolved against this root.
    fn is_working_tree(&self, root: &Path) -> bool {
        root.join(".git").exists()
    }

    fn stage(&self, root: &Path, paths: &[&Path]) -> DocstrapResult<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut args: Vec<&str> = vec!["add", "--"];
        let rendered: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        args.extend(rendered.iter().map(String::as_str));

        let output = self.run(root, &args)?;
        if !output.status.success() {
            return Err(ApplicationError::StageFailed {
                detail: collect_tool_message(&output),
            }
            .into());
        }
        Ok(())
    }

    fn status(&self, root: &Path) -> DocstrapResult<Vec<String>> {
        let output = self.run(root, &["status", "--porcelain"])?;
        if !output.status.success() {
            return Err(ApplicationError::StatusFailed {
                detail: collect_tool_message(&output),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn commit(&self, root: &Path, message: &str) -> DocstrapResult<CommitOutcome> {
        // Porcelain first column: staged state. ' ' = unstaged, '?' =
        // untracked; anything else means the index has content to commit.
        // Checking here keeps "nothing to commit" out of the error path.
        let staged = self
            .status(root)?
            .iter()
            .any(|line| !line.starts_with(' ') && !line.starts_with('?'));

        if !staged {
            return Ok(CommitOutcome::NothingToCommit);
        }

        let output = self.run(root, &["commit", "-m", message])?;
        if !output.status.success() {
            return Err(ApplicationError::CommitFailed {
                detail: collect_tool_message(&output),
            }
            .into());
        }

        Ok(CommitOutcome::Committed)
    }
}

/// Git writes some diagnostics to stdout and some to stderr; keep both.
fn collect_tool_message(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{}{}", stdout, stderr).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// `git init` a temp repo with a throwaway identity so commits work in
    /// bare CI environments.
    fn init_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        for args in [
            vec!["init"],
            vec!["config", "user.name", "docstrap-tests"],
            vec!["config", "user.email", "tests@docstrap.invalid"],
        ] {
            let status = Command::new("git")
                .arg("-C")
                .arg(temp.path())
                .args(&args)
                .output()
                .unwrap();
            assert!(status.status.success(), "git {args:?} failed");
        }
        temp
    }

    #[test]
    fn plain_directory_is_not_a_working_tree() {
        let temp = TempDir::new().unwrap();
        assert!(!GitCli::new().is_working_tree(temp.path()));
    }

    #[test]
    fn initialized_repo_is_a_working_tree() {
        let repo = init_repo();
        assert!(GitCli::new().is_working_tree(repo.path()));
    }

    #[test]
    fn stage_status_commit_roundtrip() {
        let repo = init_repo();
        let git = GitCli::new();

        fs::write(repo.path().join("README.md"), "# Docs\n").unwrap();
        git.stage(repo.path(), &[Path::new("README.md")]).unwrap();

        let status = git.status(repo.path()).unwrap();
        assert!(status.iter().any(|l| l.contains("README.md")));

        let outcome = git.commit(repo.path(), "Scaffold documentation tree\n\ntest").unwrap();
        assert_eq!(outcome, CommitOutcome::Committed);
    }

    #[test]
    fn commit_with_clean_index_is_a_noop() {
        let repo = init_repo();
        let git = GitCli::new();

        let outcome = git.commit(repo.path(), "anything").unwrap();
        assert_eq!(outcome, CommitOutcome::NothingToCommit);
    }

    #[test]
    fn untracked_files_do_not_count_as_staged() {
        let repo = init_repo();
        let git = GitCli::new();

        fs::write(repo.path().join("stray.md"), "untracked\n").unwrap();

        let outcome = git.commit(repo.path(), "anything").unwrap();
        assert_eq!(outcome, CommitOutcome::NothingToCommit);
    }

    #[test]
    fn stage_nonexistent_path_surfaces_git_message() {
        let repo = init_repo();
        let git = GitCli::new();

        let err = git
            .stage(repo.path(), &[Path::new("no-such-file.md")])
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("staging failed"), "unexpected: {msg}");
    }
}
