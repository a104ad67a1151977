//! Catalog of release steps
//!
//! Every mutation the flow can perform is constructed here as a `Step`, so
//! the operator always sees the literal command line before confirming. The
//! commands are chosen to make a restarted run safe: re-tagging an existing
//! tag fails loudly, re-pushing tags is a no-op, re-packaging overwrites.

use crate::core::step::Step;
use std::env;

/// Name of the git tag for a version, with the conventional `v` prefix
pub fn tag_name(version: &str) -> String {
  format!("v{}", version)
}

pub fn tag_step(tag: &str) -> Step {
  Step::new("Create tag", &["git", "tag", tag]).with_description("Create a bare git tag on the current commit.")
}

pub fn annotated_tag_step(tag: &str, message: &str) -> Step {
  Step::new("Create tag with message", &["git", "tag", "-a", tag, "--message", message]).with_description(
    "Create an annotated git tag on the current commit (includes tagger name, date and a custom message).",
  )
}

pub fn remove_tag_step(tag: &str) -> Step {
  Step::new("Remove newly created tag", &["git", "tag", "-d", tag])
}

pub fn push_tags_step() -> Step {
  Step::new("Push tag", &["git", "push", "--tags"]).with_description("Push the tag to the public source repository.")
}

pub fn package_step() -> Step {
  Step::new("Create package", &["cargo", "package"]).with_description(
    "Build the distributable .crate archive under target/package/, exactly as the registry will receive it.",
  )
}

pub fn publish_step() -> Step {
  // CARGO_REGISTRY_TOKEN only changes the wording; authentication itself is
  // cargo's business.
  let description = if env::var_os("CARGO_REGISTRY_TOKEN").is_some() {
    "Upload the packaged crate to the registry, authenticating with the token from CARGO_REGISTRY_TOKEN.".to_string()
  } else {
    "Upload the packaged crate to the registry. cargo uses the token saved by `cargo login`; \
     set CARGO_REGISTRY_TOKEN to override it."
      .to_string()
  };

  Step::new("Publish release", &["cargo", "publish"]).with_description(description)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tag_name_prefixes_v() {
    assert_eq!(tag_name("1.2.0"), "v1.2.0");
  }

  #[test]
  fn test_tag_steps_carry_the_tag() {
    assert_eq!(tag_step("v1.2.0").argv, ["git", "tag", "v1.2.0"]);
    assert_eq!(
      annotated_tag_step("v1.2.0", "first stable release").argv,
      ["git", "tag", "-a", "v1.2.0", "--message", "first stable release"]
    );
    assert_eq!(remove_tag_step("v1.2.0").argv, ["git", "tag", "-d", "v1.2.0"]);
  }

  #[test]
  fn test_rollback_step_has_no_description() {
    // Rollback runs unconfirmed; there is nothing to present.
    assert!(remove_tag_step("v1.2.0").description.is_none());
  }

  #[test]
  fn test_publish_step_mentions_token_when_set() {
    // Whichever way the environment leans, the description must say how
    // authentication will happen.
    let step = publish_step();
    assert!(step.description.unwrap().contains("CARGO_REGISTRY_TOKEN"));
  }
}
