//! Helpers for driving the `advancer` binary.

use assert_cmd::Command;
use tempfile::TempDir;

/// The `advancer` binary with colors off, rooted at `root`.
pub fn advancer(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("advancer").expect("advancer binary should build");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root.path());
    cmd
}

/// A temporary project initialized with the built-in templates.
#[allow(dead_code)]
pub fn initialized_project() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    advancer(&temp_dir).arg("init").assert().success();
    temp_dir
}
