//! Typed errors for the browser core.
//!
//! Terminal plumbing goes through `anyhow`; these are the failures the engine
//! itself names and reacts to.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
  /// The terminal cannot show the custom palette. There is no monochrome fallback.
  #[error("Your terminal doesn't support custom colors ({available} colors available)")]
  ColorCapability { available: u16 },

  /// A directory could not be read.
  #[error("cannot list {}: {source}", .path.display())]
  Listing {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
