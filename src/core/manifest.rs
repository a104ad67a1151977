//! Package manifest queries behind a capability trait
//!
//! The sequencer never parses anything itself: it asks a `Manifest` for the
//! package name, the declared version, and whether the version is derived
//! from git tags. The cargo implementation resolves name and version through
//! `cargo metadata` (so tag-driven version generators are reflected) and
//! detects tag-versioning with a static read of the manifest text.

use crate::core::error::{ShipError, ShipResult};
use cargo_metadata::MetadataCommand;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::DocumentMut;

/// Facts about the package being released, read once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
  pub name: String,
  pub version: String,
  /// Version derived from git tags rather than hardcoded in the manifest
  pub tag_versioned: bool,
}

/// Package manifest queries
pub trait Manifest {
  /// Whether a manifest file is present in the working directory
  fn exists(&self) -> bool;

  /// Declared package name
  fn package_name(&self) -> ShipResult<String>;

  /// Declared package version
  ///
  /// Must be a fresh read on every call: after tagging, the flow re-reads
  /// the version to verify the tag produced the intended one.
  fn declared_version(&self) -> ShipResult<String>;

  /// Whether the package derives its version from git tags
  ///
  /// Idempotent: repeated calls on the same manifest return the same result.
  fn uses_tag_versioning(&self) -> ShipResult<bool>;
}

/// Manifest backed by Cargo.toml in a working directory
pub struct CargoManifest {
  workdir: PathBuf,
}

impl CargoManifest {
  pub fn new(workdir: &Path) -> Self {
    Self {
      workdir: workdir.to_path_buf(),
    }
  }

  fn manifest_path(&self) -> PathBuf {
    self.workdir.join("Cargo.toml")
  }

  /// Resolve the root package through `cargo metadata`
  fn root_package(&self) -> ShipResult<cargo_metadata::Package> {
    let metadata = MetadataCommand::new()
      .current_dir(&self.workdir)
      .no_deps()
      .exec()?;

    metadata.root_package().cloned().ok_or_else(|| {
      ShipError::with_help(
        "No root package in this directory",
        "cargo shipit releases one package at a time; run it from a package directory, \
         not a virtual workspace root.",
      )
    })
  }
}

impl Manifest for CargoManifest {
  fn exists(&self) -> bool {
    self.manifest_path().exists()
  }

  fn package_name(&self) -> ShipResult<String> {
    Ok(self.root_package()?.name.to_string())
  }

  fn declared_version(&self) -> ShipResult<String> {
    Ok(self.root_package()?.version.to_string())
  }

  fn uses_tag_versioning(&self) -> ShipResult<bool> {
    // Static read of the manifest text; presence of the
    // [package.metadata.scm-version] key opts the package in. An explicit
    // `scm-version = false` opts out.
    let text = fs::read_to_string(self.manifest_path())?;
    let doc: DocumentMut = text.parse()?;

    let entry = doc
      .get("package")
      .and_then(|pkg| pkg.as_table_like())
      .and_then(|pkg| pkg.get("metadata"))
      .and_then(|meta| meta.as_table_like())
      .and_then(|meta| meta.get("scm-version"));

    Ok(match entry {
      None => false,
      Some(item) => !matches!(item.as_bool(), Some(false)),
    })
  }
}
