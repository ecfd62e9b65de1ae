use std::path::PathBuf;

/// Names starting with this character are hidden from listings.
pub const HIDDEN_MARKER: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub path: PathBuf,
  pub name: String,
  pub is_dir: bool,
}

impl Entry {
  pub fn from_path(path: PathBuf) -> Self {
    // Follows symlinks, so a link to a directory can be entered.
    let is_dir = path.is_dir();
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().to_string())
      .unwrap_or_default();

    Self { path, name, is_dir }
  }

  pub fn is_hidden(&self) -> bool {
    self.name.starts_with(HIDDEN_MARKER)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn test_from_path_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("test.txt");
    fs::write(&file, "hello").unwrap();

    let entry = Entry::from_path(file.clone());
    assert_eq!(entry.name, "test.txt");
    assert!(!entry.is_dir);
    assert_eq!(entry.path, file);
  }

  #[test]
  fn test_from_path_dir() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();

    let entry = Entry::from_path(sub);
    assert!(entry.is_dir);
    assert_eq!(entry.name, "sub");
  }

  #[cfg(unix)]
  #[test]
  fn test_symlink_to_dir_is_dir() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("real");
    fs::create_dir(&real).unwrap();
    let link = dir.path().join("link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    assert!(Entry::from_path(link).is_dir);
  }

  #[test]
  fn test_is_hidden() {
    let hidden = Entry { path: PathBuf::from(".git"), name: ".git".to_string(), is_dir: true };
    assert!(hidden.is_hidden());

    let visible = Entry { path: PathBuf::from("a.txt"), name: "a.txt".to_string(), is_dir: false };
    assert!(!visible.is_hidden());
  }

  #[test]
  fn test_from_nonexistent_path() {
    let entry = Entry::from_path(PathBuf::from("/nonexistent/file.txt"));
    assert_eq!(entry.name, "file.txt");
    assert!(!entry.is_dir);
  }
}
