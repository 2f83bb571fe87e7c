//! Shared testing utilities for nativecn CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");

        Self { root, project_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Build a command for invoking the compiled `nativecn` binary within
    /// the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nativecn").expect("Failed to locate nativecn binary");
        cmd.current_dir(&self.project_dir);
        cmd
    }

    /// Write a `nativecn.config.toml` with the given content.
    pub fn write_config(&self, content: &str) {
        fs::write(self.project_dir.join("nativecn.config.toml"), content)
            .expect("Failed to write test config");
    }

    /// Write the default configuration (utility classes, bundled theme).
    pub fn write_default_config(&self) {
        self.write_config("styling = \"utility-classes\"\n");
    }

    /// Path to an installed component directory under the default target.
    pub fn component_path(&self, component: &str) -> PathBuf {
        self.project_dir.join("components/ui").join(component)
    }

    /// Read an installed component file to a string.
    pub fn read_component_file(&self, component: &str, file: &str) -> String {
        fs::read_to_string(self.component_path(component).join(file))
            .expect("Failed to read installed component file")
    }

    /// Assert that a component directory exists with the given file.
    pub fn assert_component_file_exists(&self, component: &str, file: &str) {
        let path = self.component_path(component).join(file);
        assert!(path.exists(), "Component file should exist at {}", path.display());
    }

    /// Assert that a component directory does not exist.
    pub fn assert_component_not_installed(&self, component: &str) {
        let path = self.component_path(component);
        assert!(!path.exists(), "Component should not exist at {}", path.display());
    }
}
