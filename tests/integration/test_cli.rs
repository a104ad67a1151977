//! CLI surface and startup faults

use crate::helpers::run_shipit;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_outside_a_repository_is_a_fault() {
  let dir = TempDir::new().unwrap();

  let output = run_shipit(dir.path()).unwrap();
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr);
  assert!(stderr.contains("Git repository not found"), "stderr: {}", stderr);
}

#[test]
fn test_version_flag() {
  let bin = env!("CARGO_BIN_EXE_cargo-shipit");

  let output = Command::new(bin).args(["shipit", "--version"]).output().unwrap();
  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
