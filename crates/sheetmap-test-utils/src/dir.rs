//! [`TestCatalogDir`] for tests that read definition files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory of catalog definition files.
///
/// # Example
///
/// ```rust,no_run
/// use sheetmap_test_utils::catalogs::WORKBOOK_TOML;
/// use sheetmap_test_utils::dir::TestCatalogDir;
///
/// let dir = TestCatalogDir::new();
/// let path = dir.write("workbook.toml", WORKBOOK_TOML);
/// dir.assert_file_exists("workbook.toml");
/// assert!(path.is_file());
/// ```
pub struct TestCatalogDir {
    temp_dir: TempDir,
}

impl Default for TestCatalogDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalogDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` (relative to the root), creating parent
    /// directories, and return the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a `sheetmap.toml` with the given `[build]` depth limit.
    pub fn write_config(&self, max_depth: usize) -> PathBuf {
        self.write("sheetmap.toml", &format!("[build]\nmax_depth = {max_depth}\n"))
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
