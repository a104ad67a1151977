//! Integration tests for cargo-shipit
//!
//! These drive the real binary in throwaway repositories. They never reach
//! the registry: every scenario stops before the first network-touching
//! query, so the suite runs offline.

mod helpers;
mod test_check;
mod test_cli;
