mod action;
mod app;
mod cli;
mod config;
mod error;
mod event;
mod fs;
mod icons;
mod launcher;
mod palette;
mod shell;
mod terminal;
mod ui;

use std::fs::File;
use std::panic;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::app::{App, Exit};
use crate::cli::{CliAction, RunOptions, USAGE, parse_args};
use crate::config::Config;
use crate::error::BrowserError;
use crate::launcher::SystemLauncher;
use crate::palette::{Palette, PaletteColors};
use crate::terminal::{TerminalSession, restore_terminal};

fn main() -> Result<()> {
  let opts = match parse_args(std::env::args().skip(1)) {
    Ok(CliAction::Help) => {
      println!("{USAGE}");
      return Ok(());
    }
    Ok(CliAction::Version) => {
      println!("lsi {}", env!("CARGO_PKG_VERSION"));
      return Ok(());
    }
    Ok(CliAction::DumpConfig) => {
      print!("{}", Config::default_toml());
      return Ok(());
    }
    Ok(CliAction::ShellInit(shell)) => {
      print!("{}", shell.init_script());
      return Ok(());
    }
    Ok(CliAction::Run(opts)) => opts,
    Err(e) => {
      eprintln!("lsi: {e}");
      eprintln!("Try 'lsi --help' for more information.");
      std::process::exit(2);
    }
  };

  if let Some(ref log_file) = opts.log_file {
    init_logging(log_file, opts.log_level);
  }

  // The terminal session has been dropped by the time `run` returns.
  match run(opts)? {
    Exit::Quit => {}
    Exit::ChangeDir(path) => println!("{}", shell::change_dir_directive(&path)),
  }
  Ok(())
}

fn run(opts: RunOptions) -> Result<Exit> {
  let (config, config_errors) = Config::load(opts.config.as_deref());
  for e in &config_errors {
    warn!("{e}");
    eprintln!("lsi: {e}");
  }

  let start = opts.path.unwrap_or_else(|| PathBuf::from("."));
  let launcher = SystemLauncher::detect();
  let available = crossterm::style::available_color_count();
  info!(
    "starting in {} ({} colors, launcher {:?})",
    start.display(),
    available,
    launcher.strategy()
  );

  // Install panic hook that restores terminal
  let original_hook = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let _ = restore_terminal();
    original_hook(info);
  }));

  let (palette, mut session) = match check_terminal(&config.colors, available, TerminalSession::enter) {
    Ok(ready) => ready,
    Err(e) if e.is::<BrowserError>() => {
      warn!("{e}");
      eprintln!("{e}");
      std::process::exit(1);
    }
    Err(e) => return Err(e),
  };

  let mut app = App::new(start, launcher);
  app.run(&mut session.terminal, &palette, &config, event::read_event)
}

/// Builds the palette and only then takes over the terminal, so an
/// unsupported terminal is never touched.
fn check_terminal<S>(
  colors: &PaletteColors,
  available: u16,
  enter: impl FnOnce() -> Result<S>,
) -> Result<(Palette, S)> {
  let palette = Palette::init(colors, available)?;
  Ok((palette, enter()?))
}

fn init_logging(path: &Path, level: LevelFilter) {
  let log_config = ConfigBuilder::new()
    .set_time_format_rfc3339()
    .build();

  match File::create(path) {
    Ok(log_file) => {
      let _ = WriteLogger::init(level, log_config, log_file);
    }
    Err(e) => eprintln!("lsi: cannot open log file {}: {e}", path.display()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;

  #[test]
  fn test_unsupported_terminal_never_enters_session() {
    let entered = Cell::new(false);
    let err = check_terminal(&PaletteColors::default(), 8, || {
      entered.set(true);
      Ok(())
    })
    .unwrap_err();

    assert!(!entered.get());
    assert!(matches!(
      err.downcast_ref::<BrowserError>(),
      Some(BrowserError::ColorCapability { available: 8 })
    ));
    assert_eq!(
      err.to_string(),
      "Your terminal doesn't support custom colors (8 colors available)"
    );
  }

  #[test]
  fn test_supported_terminal_enters_session() {
    let (palette, session) = check_terminal(&PaletteColors::default(), 256, || Ok("session")).unwrap();
    assert_eq!(session, "session");
    assert_eq!(palette, Palette::init(&PaletteColors::default(), 256).unwrap());
  }

  #[test]
  fn test_session_failure_is_not_a_capability_error() {
    let err = check_terminal(&PaletteColors::default(), 256, || -> Result<()> {
      Err(anyhow::anyhow!("no tty"))
    })
    .unwrap_err();
    assert!(!err.is::<BrowserError>());
  }
}
