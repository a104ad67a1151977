//! Precondition inspection through the real binary

use crate::helpers::{TestRepo, run_shipit};

#[test]
fn test_missing_manifest_stops_cleanly() {
  let repo = TestRepo::new().unwrap();

  let output = run_shipit(&repo.path).unwrap();
  let stdout = String::from_utf8_lossy(&output.stdout);

  // A failed precondition is a controlled stop, not a fault: exit 0, the
  // message, the uniform farewell.
  assert!(output.status.success(), "stdout: {}", stdout);
  assert!(stdout.contains("Step 1: Inspecting package"), "stdout: {}", stdout);
  assert!(
    stdout.contains("does not contain a Cargo.toml"),
    "stdout: {}",
    stdout
  );
  assert!(stdout.contains("Exiting"), "stdout: {}", stdout);
}

#[test]
fn test_banner_promises_restartability() {
  let repo = TestRepo::new().unwrap();

  let output = run_shipit(&repo.path).unwrap();
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(
    stdout.contains("stopped and restarted at any time"),
    "stdout: {}",
    stdout
  );
}
