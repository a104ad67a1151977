//! Error types for cargo-shipit with contextual messages and exit codes
//!
//! Two families live here. `ExitSignal` is the controlled, expected way for a
//! run to stop early: an operator abort, a failed precondition, or a failed
//! tag verification. Everything else in `ShipError` is a genuine fault and is
//! reported through `print_error` with a non-zero exit code.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for cargo-shipit
///
/// The entire `ExitSignal` class exits 0; these codes are for faults only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (missing package, invalid input)
  User = 1,
  /// System error (git, registry, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Controlled early stop, distinct from a crash
///
/// Carries an optional human message; the top level prints it (when present)
/// followed by a uniform "Exiting" line. Never rendered as a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitSignal {
  /// Operator declined a confirmation prompt (or closed stdin)
  Aborted,
  /// A release precondition does not hold (missing manifest, dirty tree)
  PreconditionFailed(String),
  /// The tag did not produce the intended version
  VerificationFailed(String),
}

impl ExitSignal {
  /// Human message to print before exiting, if any
  pub fn message(&self) -> Option<&str> {
    match self {
      ExitSignal::Aborted => None,
      ExitSignal::PreconditionFailed(msg) => Some(msg),
      ExitSignal::VerificationFailed(msg) => Some(msg),
    }
  }
}

/// Main error type for cargo-shipit
#[derive(Debug)]
pub enum ShipError {
  /// Controlled early stop (abort, precondition, verification)
  Signal(ExitSignal),

  /// Git operation errors
  Git(GitError),

  /// Registry lookup errors (anything other than success or not-found)
  Registry(RegistryError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional help text
  Message { message: String, help: Option<String> },
}

impl ShipError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ShipError::Signal(_) => ExitCode::User, // unreachable via print_error; signals exit 0
      ShipError::Git(_) => ExitCode::System,
      ShipError::Registry(_) => ExitCode::System,
      ShipError::Io(_) => ExitCode::System,
      ShipError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ShipError::Git(e) => e.help_message(),
      ShipError::Registry(e) => e.help_message(),
      ShipError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ShipError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ShipError::Signal(sig) => write!(f, "{}", sig.message().unwrap_or("stopped")),
      ShipError::Git(e) => write!(f, "{}", e),
      ShipError::Registry(e) => write!(f, "{}", e),
      ShipError::Io(e) => write!(f, "I/O error: {}", e),
      ShipError::Message { message, .. } => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for ShipError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ShipError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<ExitSignal> for ShipError {
  fn from(sig: ExitSignal) -> Self {
    ShipError::Signal(sig)
  }
}

impl From<GitError> for ShipError {
  fn from(err: GitError) -> Self {
    ShipError::Git(err)
  }
}

impl From<RegistryError> for ShipError {
  fn from(err: RegistryError) -> Self {
    ShipError::Registry(err)
  }
}

impl From<io::Error> for ShipError {
  fn from(err: io::Error) -> Self {
    ShipError::Io(err)
  }
}

impl From<toml_edit::TomlError> for ShipError {
  fn from(err: toml_edit::TomlError) -> Self {
    ShipError::message(format!("TOML parse error: {}", err))
  }
}

impl From<cargo_metadata::Error> for ShipError {
  fn from(err: cargo_metadata::Error) -> Self {
    ShipError::message(format!("Cargo metadata error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for ShipError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    ShipError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Convert anyhow::Error to ShipError (one-off message errors)
impl From<anyhow::Error> for ShipError {
  fn from(err: anyhow::Error) -> Self {
    ShipError::message(err.to_string())
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// Repository not found
  RepoNotFound { path: PathBuf },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::RepoNotFound { path } => Some(format!(
        "Run cargo shipit from inside a git checkout. Not a repository: {}",
        path.display()
      )),
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
    }
  }
}

/// Registry lookup errors
///
/// A not-found response is NOT an error (the inspector reports a sentinel
/// instead); this type covers every other registry-side failure.
#[derive(Debug)]
pub struct RegistryError {
  /// The query command that failed
  pub command: String,
  /// Captured stderr of the query
  pub stderr: String,
}

impl RegistryError {
  fn help_message(&self) -> Option<String> {
    Some("Check network connectivity and that the registry is reachable, then re-run.".to_string())
  }
}

impl fmt::Display for RegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Registry lookup failed: {}\n{}", self.command, self.stderr)
  }
}

/// Result type alias for cargo-shipit
pub type ShipResult<T> = Result<T, ShipError>;

/// Pretty-print a fault to stderr with help text
///
/// Only for genuine faults; `ExitSignal` is printed by the top level itself.
pub fn print_error(error: &ShipError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
