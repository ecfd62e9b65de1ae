use std::path::{Path, PathBuf};

use log::warn;

use super::entry::Entry;
use crate::error::BrowserError;

/// Visible children of `dir`, hidden names dropped, sorted by name.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>, BrowserError> {
  let read_dir = std::fs::read_dir(dir).map_err(|source| BrowserError::Listing {
    path: dir.to_path_buf(),
    source,
  })?;

  let mut entries = Vec::new();
  for item in read_dir {
    let item = item.map_err(|source| BrowserError::Listing {
      path: dir.to_path_buf(),
      source,
    })?;
    let entry = Entry::from_path(item.path());
    if entry.is_hidden() {
      continue;
    }
    entries.push(entry);
  }

  entries.sort_by(|a, b| a.name.cmp(&b.name));
  Ok(entries)
}

/// One frame's view of a directory. A failed read leaves no entries and keeps
/// the message for display.
#[derive(Debug, Default)]
pub struct Listing {
  pub entries: Vec<Entry>,
  pub error: Option<String>,
}

impl Listing {
  pub fn read(dir: &Path) -> Self {
    match list_dir(dir) {
      Ok(entries) => Self { entries, error: None },
      Err(e) => {
        warn!("{e}");
        Self { entries: Vec::new(), error: Some(e.to_string()) }
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Entry> {
    self.entries.get(index)
  }
}

/// Parent used by the "back" transition. The `.` root marker and filesystem
/// roots have none; a bare relative name goes back to `.`.
pub fn parent_dir(path: &Path) -> Option<PathBuf> {
  if path == Path::new(".") {
    return None;
  }
  match path.parent() {
    Some(p) if p.as_os_str().is_empty() => Some(PathBuf::from(".")),
    Some(p) => Some(p.to_path_buf()),
    None => None,
  }
}

/// Absolute form of `path` for display and for the change-dir handoff.
pub fn resolve(path: &Path) -> PathBuf {
  std::fs::canonicalize(path)
    .or_else(|_| std::path::absolute(path))
    .unwrap_or_else(|_| path.to_path_buf())
}
