//! System git backend - zero dependencies
//!
//! Uses git porcelain commands for the read-only queries the release flow
//! needs. Subprocesses run with an isolated environment so global user
//! configuration cannot change the output the tool parses.

use crate::core::error::{GitError, ShipError, ShipResult};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::Vcs;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  ///
  /// Probes the repository with one subprocess call so a directory outside
  /// any checkout fails up front rather than midway through the flow.
  pub fn open(path: &Path) -> ShipResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .map_err(|e| ShipError::message(format!("Failed to execute git rev-parse: {}", e)))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(
          GitError::RepoNotFound {
            path: path.to_path_buf(),
          }
          .into(),
        );
      }
      return Err(ShipError::message(format!("Failed to open git repository: {}", stderr)));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables, whitelisting only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }

  /// Run a query and return trimmed stdout, failing on non-zero exit
  fn query(&self, args: &[&str]) -> ShipResult<String> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .map_err(|e| ShipError::message(format!("Failed to execute git {}: {}", args.join(" "), e)))?;

    if !output.status.success() {
      return Err(
        GitError::CommandFailed {
          command: format!("git {}", args.join(" ")),
          stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
        .into(),
      );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }
}

impl Vcs for SystemGit {
  fn status_tracked_only(&self) -> ShipResult<String> {
    // Empty output means no uncommitted changes to tracked files.
    self.query(&["status", "--porcelain", "--untracked-files=no"])
  }

  fn last_commit_message(&self) -> ShipResult<String> {
    self.query(&["log", "-1", "--pretty=%B"])
  }
}
