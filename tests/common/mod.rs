//! Common test utilities for Corvus integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary plugin root for integration tests
#[allow(dead_code)]
pub struct TestRoot {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the plugin root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRoot {
    /// Create an empty plugin root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a plugin root populated from `tests/common/fixtures/plugin`
    pub fn from_fixture() -> Self {
        let root = Self::new();
        copy_dir_recursive(&fixture_plugin_path(), &root.path)
            .expect("Failed to copy fixture plugin");
        root
    }

    /// Write a file under the root, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }


    /// Create a directory under the root
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the checked-in fixture plugin root
#[allow(dead_code)]
pub fn fixture_plugin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("plugin")
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
