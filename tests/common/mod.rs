//! Shared testing utilities for membank CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory and `$HOME` for
/// CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `membank` binary within the
    /// project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("membank").expect("Failed to locate membank binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env_remove("XDG_BIN_HOME");
        cmd
    }

    /// Arguments for a non-interactive install pointed at a local server.
    pub fn install_args(server_url: &str) -> Vec<String> {
        vec![
            "install".to_string(),
            "--yes".to_string(),
            format!("--architect-url={}/.clinerules-architect", server_url),
            format!("--ask-url={}/.clinerules-ask", server_url),
            format!("--code-url={}/.clinerules-code", server_url),
        ]
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e))
    }

    /// Write a file relative to the project directory.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Assert that a project-relative path exists.
    pub fn assert_exists(&self, rel: &str) {
        assert!(self.work_dir.join(rel).exists(), "{} should exist", rel);
    }

    /// Assert that a project-relative path does not exist.
    pub fn assert_not_exists(&self, rel: &str) {
        assert!(!self.work_dir.join(rel).exists(), "{} should not exist", rel);
    }
}

/// Mount GET mocks for the three rule files on the given server.
#[allow(dead_code)]
pub fn mock_rule_files(server: &mut mockito::Server) -> Vec<mockito::Mock> {
    ["architect", "ask", "code"]
        .iter()
        .map(|name| {
            server
                .mock("GET", format!("/.clinerules-{}", name).as_str())
                .with_status(200)
                .with_body(format!("{} rules", name))
                .create()
        })
        .collect()
}
