//! Shared utilities for integration testing.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp dir, returning the dir
/// guard (keep it alive) and the file path.
pub fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config file");
    (dir, path)
}

/// The application's route table as a TOML config.
pub const SHOP_TABLE: &str = r#"
initial_route = "home"
fallback_view = "NotFoundView"

[[routes]]
path = "/"
name = "home"
view = "LogInView"

[[routes]]
path = "/register"
name = "register"
view = "RegisterView"

[[routes]]
path = "/dashboard"
name = "dashboard"
view = "DashboardView"
"#;
