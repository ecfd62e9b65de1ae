pub mod entry_list;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::BrowserState;
use crate::fs::{Listing, resolve};
use crate::palette::Palette;

const ELLIPSIS: &str = "...";

pub fn draw(frame: &mut Frame, state: &BrowserState, listing: &Listing, palette: &Palette, help: &str) {
  let area = frame.area();

  // Help line, path line, a spacer, then the entries
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Length(1),
      Constraint::Length(1),
      Constraint::Min(0),
    ])
    .split(area);

  let path = format!("Path: {}", resolve(&state.current_path).display());
  render_header_line(help, chunks[0], frame.buffer_mut());
  render_header_line(&path, chunks[1], frame.buffer_mut());

  entry_list::render_entries(listing, state.selection, palette, chunks[3], frame.buffer_mut());
}

fn render_header_line(text: &str, area: Rect, buf: &mut Buffer) {
  let line = Line::styled(
    truncate(text, area.width as usize),
    Style::default().add_modifier(Modifier::BOLD),
  );
  Paragraph::new(line).render(area, buf);
}

/// Cuts `s` to at most `max` columns, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
  if s.width() <= max {
    return s.to_string();
  }

  let (budget, tail) = if max > ELLIPSIS.len() {
    (max - ELLIPSIS.len(), ELLIPSIS)
  } else {
    (max, "")
  };

  let mut out = String::new();
  let mut used = 0;
  for c in s.chars() {
    let w = c.width().unwrap_or(0);
    if used + w > budget {
      break;
    }
    used += w;
    out.push(c);
  }
  out.push_str(tail);
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::path::PathBuf;

  use ratatui::Terminal;
  use ratatui::backend::TestBackend;

  use crate::fs::Entry;
  use crate::palette::PaletteColors;

  const HELP: &str = "↑↓:Navigate | Enter:Open | b:Back | h:History Back | e:Change Dir | q:Quit";

  fn palette() -> Palette {
    Palette::init(&PaletteColors::default(), 256).unwrap()
  }

  fn render(state: &BrowserState, listing: &Listing, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
      .draw(|f| draw(f, state, listing, &palette(), HELP))
      .unwrap();
    terminal.backend().buffer().clone()
  }

  fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect::<String>().trim_end().to_string()
  }

  fn entries(names: &[&str]) -> Listing {
    Listing {
      entries: names
        .iter()
        .map(|n| Entry { path: PathBuf::from(n), name: n.to_string(), is_dir: false })
        .collect(),
      error: None,
    }
  }

  #[test]
  fn test_truncate_short_is_untouched() {
    assert_eq!(truncate("hello", 5), "hello");
    assert_eq!(truncate("", 0), "");
  }

  #[test]
  fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate("hello world", 8), "hello...");
    assert_eq!(truncate("hello world", 8).width(), 8);
  }

  #[test]
  fn test_truncate_tiny_width() {
    assert_eq!(truncate("hello", 3), "hel");
    assert_eq!(truncate("hello", 0), "");
  }

  #[test]
  fn test_truncate_wide_chars() {
    // each CJK char is two columns
    let out = truncate("日本語のファイル", 7);
    assert_eq!(out, "日本...");
    assert!(out.width() <= 7);
  }

  #[test]
  fn test_layout_rows() {
    let dir = tempfile::tempdir().unwrap();
    let state = BrowserState::new(dir.path().to_path_buf());
    let buf = render(&state, &entries(&["a.txt", "b", "c.py"]), 100, 10);

    assert_eq!(row(&buf, 0), HELP);
    let resolved = fs::canonicalize(dir.path()).unwrap();
    assert_eq!(row(&buf, 1), format!("Path: {}", resolved.display()));
    assert_eq!(row(&buf, 2), "");
    assert!(row(&buf, 3).ends_with("a.txt"));
    assert!(row(&buf, 4).ends_with("b"));
    assert!(row(&buf, 5).ends_with("c.py"));
    assert_eq!(row(&buf, 6), "");
    assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
  }

  #[test]
  fn test_entries_limited_to_rows_minus_three() {
    let names: Vec<String> = (0..20).map(|i| format!("file{i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let listing = entries(&refs);
    let mut state = BrowserState::new(PathBuf::from("."));
    state.selection = 12;
    let buf = render(&state, &listing, 40, 8);

    // 5 entry rows: file08..=file12, selected one at the bottom
    assert!(row(&buf, 3).ends_with("file08"));
    assert!(row(&buf, 7).ends_with("file12"));
    assert!(buf[(2, 7)].modifier.contains(Modifier::REVERSED));
  }

  #[test]
  fn test_narrow_screen_truncates_header() {
    let state = BrowserState::new(PathBuf::from("."));
    let buf = render(&state, &entries(&[]), 20, 5);
    assert_eq!(row(&buf, 0), "↑↓:Navigate | Ent...");
    assert!(row(&buf, 1).starts_with("Path: "));
    assert!(row(&buf, 1).chars().count() <= 20);
  }
}
