//! Scoped ownership of the terminal.
//!
//! The UI is drawn on stderr so a wrapping shell function can capture stdout
//! for the change-dir line.

use std::io::{self, Stderr};

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
  EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Raw mode, alternate screen and hidden cursor for as long as it lives.
pub struct TerminalSession {
  pub terminal: Tui,
}

impl TerminalSession {
  pub fn enter() -> Result<Self> {
    setup_terminal()?;
    let terminal = match Terminal::new(CrosstermBackend::new(io::stderr())) {
      Ok(t) => t,
      Err(e) => {
        let _ = restore_terminal();
        return Err(e.into());
      }
    };
    Ok(Self { terminal })
  }
}

impl Drop for TerminalSession {
  fn drop(&mut self) {
    let _ = restore_terminal();
  }
}

fn setup_terminal() -> Result<()> {
  enable_raw_mode()?;
  if let Err(e) = execute!(io::stderr(), EnterAlternateScreen, Hide) {
    let _ = disable_raw_mode();
    return Err(e.into());
  }
  Ok(())
}

/// Safe to call more than once; also used from the panic hook.
pub fn restore_terminal() -> Result<()> {
  disable_raw_mode()?;
  execute!(io::stderr(), LeaveAlternateScreen, Show)?;
  Ok(())
}
