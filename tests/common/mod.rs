#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloc binary.
#[macro_export]
macro_rules! sloc {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloc"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.sloc.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sloc.toml", content);
    }

    /// A small mixed-language project.
    ///
    /// | Language | Files | Code | Comment | Mixed | Blank |
    /// |----------|-------|------|---------|-------|-------|
    /// | Golang   | 2     | 2    | 4       | 1     | 1     |
    /// | Python   | 1     | 2    | 4       | 0     | 1     |
    pub fn with_sample_project() -> Self {
        let fixture = Self::new();
        fixture.create_file(
            "main.go",
            "package main\n\n// entry point\nfunc main() {} // run\n",
        );
        fixture.create_file("pkg/util.go", "/*\n helpers\n*/\nfunc helper() {}\n");
        fixture.create_file(
            "tool.py",
            "# tool\ndef run():\n    \"\"\"\n    Docs.\n    \"\"\"\n\n    return 1\n",
        );
        fixture.create_file("README.unknown", "not counted\n");
        fixture
    }
}
