//! Version-control queries behind a capability trait
//!
//! Only the read-only queries the release flow needs live here. Mutating git
//! operations (tag, delete tag, push) go through the step catalog instead so
//! the operator confirms the literal command line before it runs.

pub mod system_git;

pub use system_git::SystemGit;

use crate::core::error::ShipResult;

/// Read-only version-control queries
pub trait Vcs {
  /// Porcelain status restricted to tracked files; empty output means clean
  fn status_tracked_only(&self) -> ShipResult<String>;

  /// Full message of the most recent commit
  fn last_commit_message(&self) -> ShipResult<String>;
}
