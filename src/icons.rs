use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  Folder,
  Python,
  Text,
  Java,
  Html,
  Css,
  JavaScript,
  Markdown,
  Pdf,
  Image,
  Video,
  Audio,
  Zip,
  Git,
  Json,
  Xml,
  Csv,
  Generic,
}

impl FileKind {
  /// Category for a lowercased extension without the leading dot.
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "py" => FileKind::Python,
      "txt" => FileKind::Text,
      "java" => FileKind::Java,
      "html" => FileKind::Html,
      "css" => FileKind::Css,
      "js" => FileKind::JavaScript,
      "md" => FileKind::Markdown,
      "pdf" => FileKind::Pdf,
      "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" => FileKind::Image,
      "mp4" | "mkv" | "avi" => FileKind::Video,
      "mp3" => FileKind::Audio,
      "zip" => FileKind::Zip,
      "git" => FileKind::Git,
      "json" => FileKind::Json,
      "xml" => FileKind::Xml,
      "csv" => FileKind::Csv,
      _ => FileKind::Generic,
    }
  }

  pub fn glyph(self) -> &'static str {
    match self {
      FileKind::Folder => "\u{ea83}",
      FileKind::Python => "\u{e73c}",
      FileKind::Text => "\u{f15c}",
      FileKind::Java => "\u{e738}",
      FileKind::Html => "\u{e736}",
      FileKind::Css => "\u{e749}",
      FileKind::JavaScript => "\u{f2ee}",
      FileKind::Markdown => "\u{f48a}",
      FileKind::Pdf => "\u{eaeb}",
      FileKind::Image => "\u{f03e}",
      FileKind::Video => "\u{f52c}",
      FileKind::Audio => "\u{f1c7}",
      FileKind::Zip => "\u{f1c6}",
      FileKind::Git => "\u{e702}",
      FileKind::Json => "\u{eb0f}",
      FileKind::Xml => "\u{e619}",
      FileKind::Csv => "\u{eefc}",
      FileKind::Generic => "\u{ea7b}",
    }
  }
}

pub fn file_kind(name: &str, is_dir: bool) -> FileKind {
  if is_dir {
    return FileKind::Folder;
  }

  let ext = Path::new(name)
    .extension()
    .map(|e| e.to_string_lossy().to_lowercase())
    .unwrap_or_default();
  FileKind::from_extension(&ext)
}

pub fn file_icon(name: &str, is_dir: bool) -> &'static str {
  file_kind(name, is_dir).glyph()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dir_icon() {
    assert_eq!(file_icon("src", true), "\u{ea83}");
  }

  #[test]
  fn test_dir_wins_over_extension() {
    assert_eq!(file_kind("backup.zip", true), FileKind::Folder);
  }

  #[test]
  fn test_python_icon() {
    assert_eq!(file_icon("script.py", false), "\u{e73c}");
  }

  #[test]
  fn test_extension_is_case_insensitive() {
    assert_eq!(file_kind("PHOTO.JPG", false), FileKind::Image);
    assert_eq!(file_kind("Notes.Md", false), FileKind::Markdown);
  }

  #[test]
  fn test_only_last_extension_counts() {
    assert_eq!(file_kind("archive.tar.zip", false), FileKind::Zip);
    assert_eq!(file_kind("data.json.bak", false), FileKind::Generic);
  }

  #[test]
  fn test_media_groups() {
    for name in ["a.png", "a.gif", "a.svg", "a.webp", "a.jpeg"] {
      assert_eq!(file_kind(name, false), FileKind::Image, "{name}");
    }
    for name in ["a.mp4", "a.mkv", "a.avi"] {
      assert_eq!(file_kind(name, false), FileKind::Video, "{name}");
    }
    assert_eq!(file_kind("song.mp3", false), FileKind::Audio);
  }

  #[test]
  fn test_unknown_extension_is_generic() {
    assert_eq!(file_icon("unknown.xyz", false), "\u{ea7b}");
    assert_ne!(file_icon("unknown.xyz", false), FileKind::Folder.glyph());
  }

  #[test]
  fn test_no_extension_is_generic() {
    assert_eq!(file_kind("Makefile", false), FileKind::Generic);
    assert_eq!(file_kind("trailing.", false), FileKind::Generic);
  }
}
