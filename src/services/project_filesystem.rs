use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::{EntryKind, ProjectStore};

/// Filesystem-backed project store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn entry_kind(&self, rel: &str) -> EntryKind {
        match fs::metadata(self.resolve(rel)) {
            Err(_) => EntryKind::Missing,
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::Other,
        }
    }

    fn read_file(&self, rel: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(rel))?)
    }

    fn write_file(&self, rel: &str, content: &str) -> Result<(), AppError> {
        let path = self.resolve(rel);
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
        fs::create_dir_all(&parent)?;

        // Stage in the destination directory so the rename stays on one filesystem.
        let mut staged = NamedTempFile::new_in(&parent)?;
        staged.write_all(content.as_bytes())?;
        staged.persist(&path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, rel: &str) -> Result<(), AppError> {
        Ok(fs::create_dir_all(self.resolve(rel))?)
    }
}
