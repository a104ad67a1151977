//! The two phases of a release run
//!
//! - **check**: read-only precondition inspection; produces the package
//!   descriptor the sequencer consumes
//! - **release**: the confirmed, idempotent step sequence (tag, verify,
//!   push, package, publish)
//!
//! Both take the per-run `Session` so all collaborator access goes through
//! the capability traits.

pub mod check;
pub mod release;

pub use check::run_check;
pub use release::run_release;
