//! Per-run session: collaborators plus the run-scoped step counter
//!
//! Built once in main and threaded through both phases of the flow. The
//! capability traits are boxed here so the commands depend on interfaces
//! only; tests build a session out of fakes.

use crate::core::error::ShipResult;
use crate::core::manifest::{CargoManifest, Manifest};
use crate::core::registry::{CargoRegistry, Registry};
use crate::core::step::{Step, StepExec, StepOutcome, SystemExec};
use crate::core::vcs::{SystemGit, Vcs};
use crate::ui::console::{KeyValueTable, StepHeader};
use crate::ui::prompt::{Prompter, TerminalPrompter, confirm_or_abort};
use std::path::Path;

/// Everything one release run needs
pub struct Session {
  pub manifest: Box<dyn Manifest>,
  pub git: Box<dyn Vcs>,
  pub registry: Box<dyn Registry>,
  pub prompter: Box<dyn Prompter>,
  pub exec: Box<dyn StepExec>,
  pub header: StepHeader,
}

impl Session {
  /// Open a session on a working directory with the real collaborators
  pub fn open(workdir: &Path) -> ShipResult<Self> {
    Ok(Self {
      manifest: Box::new(CargoManifest::new(workdir)),
      git: Box::new(SystemGit::open(workdir)?),
      registry: Box::new(CargoRegistry::new(workdir)),
      prompter: Box::new(TerminalPrompter::new()),
      exec: Box::new(SystemExec::new(workdir)),
      header: StepHeader::new(),
    })
  }

  /// Present a step (numbered title, command line, description), require
  /// confirmation, then execute it
  ///
  /// Declining aborts the whole run. A non-zero exit of the command itself
  /// is reported but is NOT an error: steps are idempotent, and a failed one
  /// is safely retried by re-running the tool.
  pub fn check_and_run(&mut self, step: &Step) -> ShipResult<StepOutcome> {
    self.header.step(&step.title);

    let table = KeyValueTable::new(14);
    table.row("Command", &step.command_line());
    if let Some(description) = &step.description {
      table.row("Description", description);
    }

    confirm_or_abort(self.prompter.as_ref(), "Execute?", true)?;
    self.run_step(step)
  }

  /// Execute a step without presentation or confirmation (rollbacks)
  pub fn run_step(&mut self, step: &Step) -> ShipResult<StepOutcome> {
    println!("{}", step.command_line());
    let outcome = self.exec.run(&step.argv)?;

    if outcome.success() {
      println!("✅ Command completed successfully");
    } else {
      println!("⚠️  Command exited with status {}", outcome.code);
    }

    Ok(outcome)
  }
}
