//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use docstrap_core::{application::ports::Filesystem, error::DocstrapResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DocstrapResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_mkdir_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> DocstrapResult<()> {
        std::fs::write(path, content).map_err(|e| map_write_error(path, e))
    }

    fn set_executable(&self, path: &Path) -> DocstrapResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(|e| map_perm_error(path, e))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(mode | 0o111);
            std::fs::set_permissions(path, perms).map_err(|e| map_perm_error(path, e))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit to set on this platform.
            let _ = path;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_mkdir_error(path: &Path, e: io::Error) -> docstrap_core::error::DocstrapError {
    docstrap_core::application::ApplicationError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn map_write_error(path: &Path, e: io::Error) -> docstrap_core::error::DocstrapError {
    docstrap_core::application::ApplicationError::FileWriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(unix)]
fn map_perm_error(path: &Path, e: io::Error) -> docstrap_core::error::DocstrapError {
    docstrap_core::application::ApplicationError::PermissionsFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("a/b/c");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("note.md");

        fs.write_file(&file, "a much longer first version\n").unwrap();
        fs.write_file(&file, "short\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short\n");
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_adds_exec_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("run.py");

        fs.write_file(&file, "#!/usr/bin/env python3\n").unwrap();
        fs.set_executable(&file).unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0, "no exec bit set: {mode:o}");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("missing-dir/note.md");

        assert!(fs.write_file(&file, "x\n").is_err());
    }
}
