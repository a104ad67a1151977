//! Core building blocks for the release flow
//!
//! - **context**: per-run session bundling the collaborators and step counter
//! - **error**: error types, the `ExitSignal` early-stop class, exit codes
//! - **manifest**: package manifest queries (name, version, tag-versioning)
//! - **registry**: local install index and remote registry queries
//! - **step**: confirmable external commands and their outcomes
//! - **vcs**: read-only git queries (SystemGit)

pub mod context;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod step;
pub mod vcs;
