//! [`TestConfigDir`] builder for on-disk standards/study scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// A temporary directory holding config files, with helpers for setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use hostmeta_test_utils::TestConfigDir;
///
/// let dir = TestConfigDir::with_fixtures();
/// dir.assert_file_exists("standards.yml");
/// dir.assert_file_contains("study.yml", "study_specific_metadata");
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A directory holding `standards.yml` and `study.yml` from [`fixtures`].
    pub fn with_fixtures() -> Self {
        let dir = Self::new();
        dir.write("standards.yml", fixtures::STANDARDS_YAML);
        dir.write("study.yml", fixtures::STUDY_YAML);
        dir
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name` (relative to root), creating parent
    /// directories, and return the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `name` (relative to root) to a string.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `name` (relative to root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let path = self.path(name);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that the file at `name` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, name: &str, content: &str) {
        let file_content = self.read(name);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual:\n{}",
            name,
            content,
            file_content
        );
    }
}
