use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// What currently occupies a project-relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    File,
    Directory,
    Other,
}

/// Filesystem access rooted at the project directory.
pub trait ProjectStore {
    /// Absolute project root.
    fn root(&self) -> &Path;

    /// Resolve a project-relative path against the root.
    fn resolve(&self, rel: &str) -> PathBuf;

    /// Probe a project-relative path.
    fn entry_kind(&self, rel: &str) -> EntryKind;

    /// Read a project-relative file to a string.
    fn read_file(&self, rel: &str) -> Result<String, AppError>;

    /// Write a project-relative file atomically, creating missing parents.
    fn write_file(&self, rel: &str, content: &str) -> Result<(), AppError>;

    /// Create a project-relative directory and any missing parents.
    fn create_dir_all(&self, rel: &str) -> Result<(), AppError>;
}
