#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the kpi-tile binary.
#[macro_export]
macro_rules! kpi_tile {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("kpi-tile"))
    };
}

/// Three daily points; the last one dropped 20% against the day before.
pub const TREND_PAYLOAD: &str = r#"{
    "data": [[1514764800000, 10], [1514851200000, 15], [1514937600000, 12]],
    "compare_lag": 1,
    "compare_suffix": "DoD"
}"#;

/// A single value with a label.
pub const SINGLE_PAYLOAD: &str = r#"{"data": [[1234.5]], "subheader": "Orders"}"#;

pub const BASIC_CONFIG: &str = r#"
[form]
viz_mode = "plain"
value_format = ",d"

[container]
width = 320
height = 180
container_id = "orders"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.kpi-tile.toml` into the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".kpi-tile.toml", content);
    }

    /// Writes `payload.json` into the temp directory.
    pub fn create_payload(&self, content: &str) {
        self.create_file("payload.json", content);
    }

    /// Directory used as the user config home, kept empty unless a test fills it.
    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config-home")
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
