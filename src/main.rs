mod commands;
mod core;
mod release;
mod ui;

use crate::core::context::Session;
use crate::core::error::{ShipError, ShipResult, print_error};
use clap::Parser;

/// Release the crate in the current directory
#[derive(Parser)]
#[command(name = "cargo")]
#[command(bin_name = "cargo")]
#[command(styles = get_styles())]
enum CargoCli {
  Shipit(ShipitCli),
}

/// One command, no flags: inspect the package, then walk the release steps
/// (tag, push, package, publish) with a confirmation before each one.
#[derive(Parser)]
#[command(name = "shipit")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct ShipitCli {}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let CargoCli::Shipit(_cli) = CargoCli::parse();

  match run() {
    Ok(()) => println!("Exiting"),
    Err(ShipError::Signal(signal)) => {
      // A controlled stop, never a stack trace: print the message when the
      // signal carries one, then the uniform farewell. Exit status 0.
      if let Some(message) = signal.message() {
        println!();
        println!("{}", message);
      }
      println!("Exiting");
    }
    Err(err) => {
      print_error(&err);
      std::process::exit(err.exit_code().as_i32());
    }
  }
}

fn run() -> ShipResult<()> {
  println!("This is cargo-shipit {}", env!("CARGO_PKG_VERSION"));
  println!();
  println!("This program can be safely stopped and restarted at any time: the release steps are idempotent.");

  let workdir = std::env::current_dir()?;
  let mut session = Session::open(&workdir)?;

  let pkg = commands::run_check(&mut session)?;
  commands::run_release(&mut session, &pkg)
}
