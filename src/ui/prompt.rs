//! Operator prompts: confirmations and free-text questions
//!
//! Every destructive action in the flow is gated on `confirm`. Reaching EOF
//! on stdin is treated the same as declining everything: the run aborts
//! cleanly instead of looping on empty reads.

use crate::core::error::{ExitSignal, ShipResult};
use std::io::{self, BufRead, Write};

/// Interactive prompts; the seam that tests script
pub trait Prompter {
  /// Yes/no question; returns the default on an empty answer
  fn confirm(&self, text: &str, default: bool) -> ShipResult<bool>;

  /// Free-text question; re-asks on empty input unless a default is given
  fn prompt(&self, text: &str, default: Option<&str>) -> ShipResult<String>;
}

/// Confirm with the given default, aborting the whole run on "no"
pub fn confirm_or_abort(prompter: &dyn Prompter, text: &str, default: bool) -> ShipResult<()> {
  if prompter.confirm(text, default)? {
    Ok(())
  } else {
    Err(ExitSignal::Aborted.into())
  }
}

/// Prompter reading answers from the terminal
pub struct TerminalPrompter;

impl TerminalPrompter {
  pub fn new() -> Self {
    Self
  }

  /// Read one line; EOF aborts the run
  fn read_answer(&self) -> ShipResult<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
      return Err(ExitSignal::Aborted.into());
    }
    Ok(line.trim().to_string())
  }
}

impl Default for TerminalPrompter {
  fn default() -> Self {
    Self::new()
  }
}

impl Prompter for TerminalPrompter {
  fn confirm(&self, text: &str, default: bool) -> ShipResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
      print!("{} {} ", text, hint);
      io::stdout().flush()?;

      match self.read_answer()?.to_lowercase().as_str() {
        "" => return Ok(default),
        "y" | "yes" => return Ok(true),
        "n" | "no" => return Ok(false),
        other => println!("Please answer y or n (got \"{}\")", other),
      }
    }
  }

  fn prompt(&self, text: &str, default: Option<&str>) -> ShipResult<String> {
    loop {
      match default {
        Some(value) => print!("{} [{}]: ", text, value),
        None => print!("{}: ", text),
      }
      io::stdout().flush()?;

      let answer = self.read_answer()?;
      if !answer.is_empty() {
        return Ok(answer);
      }
      if let Some(value) = default {
        return Ok(value.to_string());
      }
    }
  }
}
