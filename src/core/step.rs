//! Release steps: one externally-executed command, gated by confirmation
//!
//! A `Step` is presented to the operator (numbered title, literal command
//! line, optional description) before anything runs. Execution inherits the
//! terminal so the operator watches the external tool live; only the exit
//! status is captured.

use crate::core::error::{ShipResult, ShipError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One release action backed by an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
  /// Operator-facing title, numbered when the step is presented
  pub title: String,
  /// Full argument vector, program first
  pub argv: Vec<String>,
  /// Optional free-text description shown alongside the command
  pub description: Option<String>,
}

impl Step {
  pub fn new(title: impl Into<String>, argv: &[&str]) -> Self {
    Self {
      title: title.into(),
      argv: argv.iter().map(|s| s.to_string()).collect(),
      description: None,
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  /// Render the argv as a single command line for display
  ///
  /// Arguments containing whitespace or quotes are double-quoted so the
  /// printed line matches what a shell would need.
  pub fn command_line(&self) -> String {
    self
      .argv
      .iter()
      .map(|arg| quote_arg(arg))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

fn quote_arg(arg: &str) -> String {
  if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
    format!("\"{}\"", arg.replace('"', "\\\""))
  } else {
    arg.to_string()
  }
}

/// Exit status of one executed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
  /// Raw exit code; -1 when the process died without one (signal)
  pub code: i32,
}

impl StepOutcome {
  pub fn success(&self) -> bool {
    self.code == 0
  }
}

/// Executes a step's command; the seam that tests fake out
pub trait StepExec {
  fn run(&self, argv: &[String]) -> ShipResult<StepOutcome>;
}

/// Runs steps as real subprocesses with inherited stdio
pub struct SystemExec {
  workdir: PathBuf,
}

impl SystemExec {
  pub fn new(workdir: &Path) -> Self {
    Self {
      workdir: workdir.to_path_buf(),
    }
  }
}

impl StepExec for SystemExec {
  fn run(&self, argv: &[String]) -> ShipResult<StepOutcome> {
    let (program, args) = argv
      .split_first()
      .ok_or_else(|| ShipError::message("Cannot execute an empty command"))?;

    let status = Command::new(program)
      .args(args)
      .current_dir(&self.workdir)
      .status()
      .map_err(|e| ShipError::message(format!("Failed to start {}: {}", program, e)))?;

    Ok(StepOutcome {
      code: status.code().unwrap_or(-1),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_command_line_plain() {
    let step = Step::new("Push tag", &["git", "push", "--tags"]);
    assert_eq!(step.command_line(), "git push --tags");
  }

  #[test]
  fn test_command_line_quotes_whitespace() {
    let step = Step::new(
      "Create tag with message",
      &["git", "tag", "-a", "v1.2.0", "--message", "fix: new release"],
    );
    assert_eq!(
      step.command_line(),
      "git tag -a v1.2.0 --message \"fix: new release\""
    );
  }

  #[test]
  fn test_command_line_escapes_embedded_quotes() {
    let step = Step::new("t", &["echo", "say \"hi\""]);
    assert_eq!(step.command_line(), "echo \"say \\\"hi\\\"\"");
  }

  #[test]
  fn test_outcome_success() {
    assert!(StepOutcome { code: 0 }.success());
    assert!(!StepOutcome { code: 1 }.success());
    assert!(!StepOutcome { code: -1 }.success());
  }
}
