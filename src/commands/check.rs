//! Precondition inspection: read-only facts about the package
//!
//! Reports the current version everywhere it exists (working tree, local
//! install index, registry) and refuses to release from a missing manifest
//! or a dirty working tree. Nothing here mutates anything.

use crate::core::context::Session;
use crate::core::error::{ExitSignal, ShipResult};
use crate::core::manifest::PackageDescriptor;
use crate::ui::console::KeyValueTable;
use std::env;

const NOT_INSTALLED: &str = "[not installed]";
const NOT_PUBLISHED: &str = "[not yet published]";

/// Inspect the package and its surroundings; fails on a broken precondition
pub fn run_check(session: &mut Session) -> ShipResult<PackageDescriptor> {
  session.header.step("Inspecting package");

  let table = KeyValueTable::new(38);
  let workdir = env::current_dir()?;
  table.row("Working directory", &workdir.display().to_string());

  if !session.manifest.exists() {
    return Err(
      ExitSignal::PreconditionFailed("Working directory does not contain a Cargo.toml manifest".to_string()).into(),
    );
  }

  let name = session.manifest.package_name()?;
  table.row("Package name", &name);

  let version = session.manifest.declared_version()?;
  table.row("Version in working tree", &version);

  let installed = session.registry.installed_version(&name)?;
  table.row(
    "Installed with cargo install",
    installed.as_deref().unwrap_or(NOT_INSTALLED),
  );

  // A not-found answer is normal (first release); any other registry
  // failure propagates here as a fatal fault.
  let published = session.registry.latest_published(&name)?;
  table.row(
    "Latest version on the registry",
    published.as_deref().unwrap_or(NOT_PUBLISHED),
  );

  let clean = session.git.status_tracked_only()?.trim().is_empty();
  table.row(
    "Git working tree",
    if clean {
      "clean (no uncommitted changes)"
    } else {
      "dirty (uncommitted changes)"
    },
  );

  if !clean {
    return Err(
      ExitSignal::PreconditionFailed(
        "Commit or stash working tree changes before making a new release".to_string(),
      )
      .into(),
    );
  }

  let tag_versioned = session.manifest.uses_tag_versioning()?;

  Ok(PackageDescriptor {
    name,
    version,
    tag_versioned,
  })
}
