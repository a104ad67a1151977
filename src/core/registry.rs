//! Registry queries: the local install index and the remote registry
//!
//! Both sides are reached through cargo subprocesses whose text output is
//! parsed line-by-line. A remote not-found is a normal answer (the caller
//! prints a sentinel); any other remote failure is a fatal `RegistryError`.

use crate::core::error::{RegistryError, ShipResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Registry queries used by the precondition inspector
pub trait Registry {
  /// Version of this package installed on the local system, if any
  fn installed_version(&self, name: &str) -> ShipResult<Option<String>>;

  /// Latest version published on the registry; None on a not-found response
  fn latest_published(&self, name: &str) -> ShipResult<Option<String>>;
}

/// Registry backed by the cargo CLI
pub struct CargoRegistry {
  workdir: PathBuf,
}

impl CargoRegistry {
  pub fn new(workdir: &Path) -> Self {
    Self {
      workdir: workdir.to_path_buf(),
    }
  }

  fn cargo_output(&self, args: &[&str]) -> ShipResult<std::process::Output> {
    Command::new("cargo")
      .args(args)
      .current_dir(&self.workdir)
      .output()
      .map_err(|e| anyhow::anyhow!("Failed to execute cargo {}: {}", args.join(" "), e).into())
  }
}

impl Registry for CargoRegistry {
  fn installed_version(&self, name: &str) -> ShipResult<Option<String>> {
    let output = self.cargo_output(&["install", "--list"])?;

    if !output.status.success() {
      return Err(
        anyhow::anyhow!(
          "cargo install --list failed:\n{}",
          String::from_utf8_lossy(&output.stderr)
        )
        .into(),
      );
    }

    Ok(find_installed(
      &String::from_utf8_lossy(&output.stdout),
      name,
    ))
  }

  fn latest_published(&self, name: &str) -> ShipResult<Option<String>> {
    let output = self.cargo_output(&["search", name, "--limit", "10"])?;

    if !output.status.success() {
      return Err(
        RegistryError {
          command: format!("cargo search {}", name),
          stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
        .into(),
      );
    }

    Ok(find_search_match(
      &String::from_utf8_lossy(&output.stdout),
      name,
    ))
  }
}

/// Scan `cargo install --list` output for an exactly-matching package entry
///
/// Entry lines start at column zero as `name vX.Y.Z:` (binary lines below
/// them are indented). The name must match the whole first token; a package
/// name that merely prefixes another installed package's name does not count.
fn find_installed(listing: &str, name: &str) -> Option<String> {
  for line in listing.lines() {
    if line.starts_with(char::is_whitespace) {
      continue;
    }
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(name) {
      continue;
    }
    if let Some(version) = tokens.next() {
      let version = version.trim_end_matches(':');
      return Some(version.strip_prefix('v').unwrap_or(version).to_string());
    }
  }
  None
}

/// Scan `cargo search` output for an exactly-matching result line
///
/// Result lines look like `name = "1.2.3"    # description`. Search results
/// are fuzzy, so the name left of `=` must match exactly; no match means the
/// package has never been published.
fn find_search_match(results: &str, name: &str) -> Option<String> {
  for line in results.lines() {
    let Some((lhs, rhs)) = line.split_once('=') else {
      continue;
    };
    if lhs.trim() != name {
      continue;
    }
    let rest = rhs.split_once('"')?.1;
    let (version, _) = rest.split_once('"')?;
    return Some(version.to_string());
  }
  None
}

#[cfg(test)]
mod tests {
  use super::*;

  const LISTING: &str = "\
cargo-shipit v0.1.0:
    cargo-shipit
ripgrep v14.1.0:
    rg
shipit-tools v2.0.0 (/home/dev/shipit-tools):
    shipit-tools
";

  #[test]
  fn test_find_installed_exact() {
    assert_eq!(find_installed(LISTING, "ripgrep").as_deref(), Some("14.1.0"));
    assert_eq!(
      find_installed(LISTING, "shipit-tools").as_deref(),
      Some("2.0.0")
    );
  }

  #[test]
  fn test_find_installed_rejects_prefix_match() {
    // "shipit" is a prefix of "shipit-tools" but is not itself installed
    assert_eq!(find_installed(LISTING, "shipit"), None);
  }

  #[test]
  fn test_find_installed_skips_binary_lines() {
    // "rg" appears only as an indented binary name, not a package entry
    assert_eq!(find_installed(LISTING, "rg"), None);
  }

  #[test]
  fn test_find_installed_empty() {
    assert_eq!(find_installed("", "anything"), None);
  }

  const SEARCH: &str = "\
shipit = \"0.3.1\"           # Ship it!
shipit-tools = \"2.0.0\"     # Helpers for shipit
cargo-shipit = \"0.1.0\"     # Interactive release checklist
... and 17 crates more (use --limit N to see more)
";

  #[test]
  fn test_find_search_match_exact() {
    assert_eq!(find_search_match(SEARCH, "shipit").as_deref(), Some("0.3.1"));
    assert_eq!(
      find_search_match(SEARCH, "cargo-shipit").as_deref(),
      Some("0.1.0")
    );
  }

  #[test]
  fn test_find_search_match_not_found() {
    assert_eq!(find_search_match(SEARCH, "no-such-crate"), None);
    assert_eq!(find_search_match("", "no-such-crate"), None);
  }
}
