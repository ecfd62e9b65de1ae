use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use super::truncate;
use crate::fs::Listing;
use crate::icons::file_icon;
use crate::palette::Palette;

/// Slice of entries to draw so that `selection` stays on screen. The window
/// only scrolls once the cursor passes the bottom row.
pub fn visible_window(selection: usize, len: usize, rows: usize) -> Range<usize> {
  if rows == 0 {
    return 0..0;
  }
  let start = (selection + 1).saturating_sub(rows);
  let end = (start + rows).min(len);
  start.min(end)..end
}

pub fn render_entries(listing: &Listing, selection: usize, palette: &Palette, area: Rect, buf: &mut Buffer) {
  let width = area.width as usize;

  if let Some(ref msg) = listing.error {
    let style = Style::default().fg(Color::Indexed(167)).add_modifier(Modifier::BOLD);
    Paragraph::new(Line::styled(truncate(msg, width), style)).render(area, buf);
    return;
  }

  let window = visible_window(selection, listing.len(), area.height as usize);
  let lines: Vec<Line> = listing.entries[window.clone()]
    .iter()
    .zip(window)
    .map(|(entry, idx)| {
      let text = format!("{} {}", file_icon(&entry.name, entry.is_dir), entry.name);
      let style = palette.entry_style(entry.is_dir, idx == selection);
      Line::styled(truncate(&text, width), style)
    })
    .collect();

  Paragraph::new(lines).render(area, buf);
}
