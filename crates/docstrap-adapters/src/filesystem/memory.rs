//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use docstrap_core::application::ports::Filesystem;
use docstrap_core::application::ApplicationError;
use docstrap_core::error::DocstrapResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.executables.contains(path)
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Total number of writes ever performed (files are overwritten in place,
    /// so this equals the live file count).
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> DocstrapResult<()> {
        let mut inner = self.inner.write().expect("filesystem lock poisoned");

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> DocstrapResult<()> {
        let mut inner = self.inner.write().expect("filesystem lock poisoned");

        // Mirror the real filesystem: parent must already exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FileWriteFailed {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> DocstrapResult<()> {
        let mut inner = self.inner.write().expect("filesystem lock poisoned");

        if !inner.files.contains_key(path) {
            return Err(ApplicationError::PermissionsFailed {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into());
        }

        inner.executables.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/repo/docs/a.md"), "x").is_err());

        fs.create_dir_all(Path::new("/repo/docs")).unwrap();
        assert!(fs.write_file(Path::new("/repo/docs/a.md"), "x").is_ok());
    }

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/repo/a/b")).unwrap();
        assert!(fs.exists(Path::new("/repo/a")));
        assert!(fs.exists(Path::new("/repo/a/b")));
    }

    #[test]
    fn set_executable_only_on_existing_files() {
        let fs = MemoryFilesystem::new();
        assert!(fs.set_executable(Path::new("/repo/run.py")).is_err());

        fs.create_dir_all(Path::new("/repo")).unwrap();
        fs.write_file(Path::new("/repo/run.py"), "#!/bin/sh\n").unwrap();
        fs.set_executable(Path::new("/repo/run.py")).unwrap();
        assert!(fs.is_executable(Path::new("/repo/run.py")));
    }
}
