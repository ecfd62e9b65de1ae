use std::io;
use std::path::Path;

use log::{debug, warn};

/// Opens files outside the browser. Results never reach the UI.
pub trait Launcher {
  fn launch(&mut self, path: &Path);
}

/// How the host hands a file to its default application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStrategy {
  /// The platform's own association call (Windows).
  Native,
  /// The `open` command (macOS).
  PosixOpen,
  /// The `xdg-open` command (Linux and other Unix desktops).
  XdgOpen,
}

impl LaunchStrategy {
  pub fn detect() -> Self {
    if cfg!(target_os = "windows") {
      LaunchStrategy::Native
    } else if cfg!(target_os = "macos") {
      LaunchStrategy::PosixOpen
    } else {
      LaunchStrategy::XdgOpen
    }
  }

  pub fn command(self) -> Option<&'static str> {
    match self {
      LaunchStrategy::Native => None,
      LaunchStrategy::PosixOpen => Some("open"),
      LaunchStrategy::XdgOpen => Some("xdg-open"),
    }
  }
}

/// Launches through the strategy picked at construction. The opener runs
/// double-forked in its own session, so lsi never waits on it and leaves no
/// zombie behind.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
  strategy: LaunchStrategy,
  program: Option<String>,
}

impl SystemLauncher {
  pub fn new(strategy: LaunchStrategy) -> Self {
    Self {
      strategy,
      program: strategy.command().map(String::from),
    }
  }

  /// Same strategy, different opener binary.
  #[cfg(test)]
  fn with_program(strategy: LaunchStrategy, program: &Path) -> Self {
    Self {
      strategy,
      program: Some(program.to_string_lossy().into_owned()),
    }
  }

  pub fn detect() -> Self {
    Self::new(LaunchStrategy::detect())
  }

  pub fn strategy(&self) -> LaunchStrategy {
    self.strategy
  }

  fn spawn(&self, path: &Path) -> io::Result<()> {
    match self.program {
      None => open::that_detached(path),
      Some(ref program) => open::with_detached(path, program.as_str()),
    }
  }
}

impl Launcher for SystemLauncher {
  fn launch(&mut self, path: &Path) {
    match self.spawn(path) {
      Ok(()) => debug!("launched {} via {:?}", path.display(), self.strategy),
      Err(e) => warn!("failed to open {}: {e}", path.display()),
    }
  }
}
