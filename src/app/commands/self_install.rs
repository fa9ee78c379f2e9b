//! Self-install command: copy the running binary into a per-user bin directory.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::AppError;

/// Name the binary is installed under (platform suffix added on Windows).
pub const BINARY_NAME: &str = "membank";

/// Resolved installation target for the current user.
#[derive(Debug, Clone)]
pub struct InstallTarget {
    /// Directory the binary is placed in.
    pub dir: PathBuf,
    /// Full path of the installed binary.
    pub path: PathBuf,
}

/// Resolve the per-user bin directory.
///
/// Uses the platform executable directory where the platform defines one
/// (`$XDG_BIN_HOME` or `~/.local/bin` on Linux), falling back to
/// `~/.local/bin` under the user's home directory.
pub fn resolve_target() -> Result<InstallTarget, AppError> {
    let dir = dirs::executable_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("bin")))
        .ok_or(AppError::HomeDirUnavailable)?;

    let path = dir.join(format!("{}{}", BINARY_NAME, env::consts::EXE_SUFFIX));
    Ok(InstallTarget { dir, path })
}

/// Copy the currently running executable to the target.
pub fn execute(target: &InstallTarget) -> Result<(), AppError> {
    let source = env::current_exe()?;
    install_from(&source, target)
}

/// Copy `source` into place at the target, creating the directory as needed.
///
/// The copy is staged next to the destination and renamed into place.
pub fn install_from(source: &Path, target: &InstallTarget) -> Result<(), AppError> {
    fs::create_dir_all(&target.dir)?;

    let staged = NamedTempFile::new_in(&target.dir)?;
    fs::copy(source, staged.path())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o755))?;
    }

    staged.persist(&target.path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}

/// Whether the target directory is on the current `PATH`.
pub fn dir_on_path(dir: &Path) -> bool {
    path_contains(env::var_os("PATH"), dir)
}

fn path_contains(path: Option<OsString>, dir: &Path) -> bool {
    path.map(|value| env::split_paths(&value).any(|entry| entry == dir)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn install_from_copies_the_binary_into_a_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("built-binary");
        fs::write(&source, b"#!/bin/sh\necho membank\n").unwrap();

        let dir = temp.path().join("home/.local/bin");
        let target = InstallTarget { dir: dir.clone(), path: dir.join(BINARY_NAME) };

        install_from(&source, &target).unwrap();

        assert_eq!(fs::read(&target.path).unwrap(), fs::read(&source).unwrap());
    }

    #[test]
    fn install_from_overwrites_an_existing_binary() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("new-binary");
        fs::write(&source, b"new").unwrap();

        let dir = temp.path().join("bin");
        fs::create_dir_all(&dir).unwrap();
        let target = InstallTarget { dir: dir.clone(), path: dir.join(BINARY_NAME) };
        fs::write(&target.path, b"old").unwrap();

        install_from(&source, &target).unwrap();

        assert_eq!(fs::read(&target.path).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn installed_binary_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let source = temp.path().join("built-binary");
        fs::write(&source, b"binary").unwrap();

        let dir = temp.path().join("bin");
        let target = InstallTarget { dir: dir.clone(), path: dir.join(BINARY_NAME) };
        install_from(&source, &target).unwrap();

        let mode = fs::metadata(&target.path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn path_membership_matches_whole_entries() {
        let dir = Path::new("/home/user/.local/bin");
        let on_path = env::join_paths(["/usr/bin", "/home/user/.local/bin"]).unwrap();
        let other = env::join_paths(["/usr/bin", "/home/user/.local/bin-extra"]).unwrap();

        assert!(path_contains(Some(on_path), dir));
        assert!(!path_contains(Some(other), dir));
        assert!(!path_contains(None, dir));
    }
}
