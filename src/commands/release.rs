//! The release sequence: tag, verify, push, package, publish
//!
//! Every step is presented and confirmed before it runs. A step's non-zero
//! exit is reported but never halts the sequence: the steps are idempotent,
//! so the recovery path for any failure is simply re-running the tool. The
//! one compensating action is the tag rollback when the freshly tagged tree
//! does not report the intended version.

use crate::core::context::Session;
use crate::core::error::{ExitSignal, ShipResult};
use crate::core::manifest::PackageDescriptor;
use crate::release;
use crate::ui::prompt::{Prompter, confirm_or_abort};
use semver::Version;

/// Run the release steps for an inspected package
pub fn run_release(session: &mut Session, pkg: &PackageDescriptor) -> ShipResult<()> {
  session.header.step("Preparing new release");

  confirm_or_abort(session.prompter.as_ref(), "Did you run the test suite locally?", true)?;

  if pkg.tag_versioned {
    let desired = prompt_new_version(session.prompter.as_ref())?;
    let tag = release::tag_name(&desired);

    let tag_step = if session.prompter.confirm("Annotate the tag with a message?", true)? {
      let last_message = session.git.last_commit_message()?;
      let message = session.prompter.prompt("Tag message", Some(&last_message))?;
      release::annotated_tag_step(&tag, &message)
    } else {
      release::tag_step(&tag)
    };
    session.check_and_run(&tag_step)?;

    // Verification gate: the tag must have produced the intended version.
    let fresh = session.manifest.declared_version()?;
    println!();
    println!("Version of the package in the working tree is now: \"{}\"", fresh);
    if fresh != desired {
      println!("This does not match the desired new version \"{}\"", desired);
      println!("Removing the new tag and quitting");
      session.run_step(&release::remove_tag_step(&tag))?;
      return Err(
        ExitSignal::VerificationFailed(format!(
          "The tag produced version \"{}\" instead of \"{}\"",
          fresh, desired
        ))
        .into(),
      );
    }

    session.check_and_run(&release::push_tags_step())?;
  }

  session.check_and_run(&release::package_step())?;
  session.check_and_run(&release::publish_step())?;

  println!();
  println!("🎉 Congrats on the new release");
  Ok(())
}

/// Ask for the new version until it parses as semver
///
/// Returns the normalized rendering, which is also what the verification
/// gate compares against the re-read manifest version.
fn prompt_new_version(prompter: &dyn Prompter) -> ShipResult<String> {
  loop {
    let entered = prompter.prompt("Enter the new version (without a leading v)", None)?;
    match entered.trim().parse::<Version>() {
      Ok(version) => return Ok(version.to_string()),
      Err(err) => println!("⚠️  \"{}\" is not a valid semver version: {}", entered.trim(), err),
    }
  }
}
