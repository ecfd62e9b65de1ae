use ratatui::style::{Color, Modifier, Style};

use crate::error::BrowserError;

/// Fewest colors a terminal must offer before custom RGB pairs are used.
pub const MIN_COLOR_COUNT: u16 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
  pub fg: Color,
  pub bg: Color,
}

impl ColorPair {
  pub fn style(self) -> Style {
    Style::default().fg(self.fg).bg(self.bg)
  }
}

/// Colors requested by configuration, before the terminal has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColors {
  pub directory: Color,
  pub file: Color,
  pub background: Color,
}

impl Default for PaletteColors {
  fn default() -> Self {
    Self {
      directory: Color::Rgb(0x22, 0x34, 0xa8),
      file: Color::Rgb(0xff, 0xff, 0xff),
      background: Color::Black,
    }
  }
}

/// The two color pairs every frame is drawn with. Built once at startup and
/// handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
  pub directory: ColorPair,
  pub file: ColorPair,
}

impl Palette {
  pub fn init(colors: &PaletteColors, available: u16) -> Result<Self, BrowserError> {
    if !supports_custom_colors(available) {
      return Err(BrowserError::ColorCapability { available });
    }
    Ok(Self {
      directory: ColorPair { fg: colors.directory, bg: colors.background },
      file: ColorPair { fg: colors.file, bg: colors.background },
    })
  }

  pub fn entry_style(&self, is_dir: bool, selected: bool) -> Style {
    let pair = if is_dir { self.directory } else { self.file };
    let style = pair.style();
    if selected {
      style.add_modifier(Modifier::REVERSED)
    } else {
      style
    }
  }
}

pub fn supports_custom_colors(available: u16) -> bool {
  available >= MIN_COLOR_COUNT
}

/// Parses a color as written in config files: `#rrggbb`, a named color or an
/// indexed color.
pub fn parse_color(s: &str) -> Option<Color> {
  s.trim().parse::<Color>().ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_colors() {
    let colors = PaletteColors::default();
    assert_eq!(colors.directory, Color::Rgb(34, 52, 168));
    assert_eq!(colors.file, Color::Rgb(255, 255, 255));
    assert_eq!(colors.background, Color::Black);
  }

  #[test]
  fn test_init_builds_two_pairs() {
    let palette = Palette::init(&PaletteColors::default(), 256).unwrap();
    assert_eq!(palette.directory.fg, Color::Rgb(34, 52, 168));
    assert_eq!(palette.file.fg, Color::Rgb(255, 255, 255));
    assert_eq!(palette.directory.bg, Color::Black);
    assert_eq!(palette.file.bg, Color::Black);
  }

  #[test]
  fn test_init_truecolor() {
    assert!(Palette::init(&PaletteColors::default(), u16::MAX).is_ok());
  }

  #[test]
  fn test_init_rejects_basic_terminal() {
    let err = Palette::init(&PaletteColors::default(), 8).unwrap_err();
    assert!(matches!(err, BrowserError::ColorCapability { available: 8 }));
  }

  #[test]
  fn test_entry_style_selected_is_reversed() {
    let palette = Palette::init(&PaletteColors::default(), 256).unwrap();
    let plain = palette.entry_style(true, false);
    let selected = palette.entry_style(true, true);
    assert!(!plain.add_modifier.contains(Modifier::REVERSED));
    assert!(selected.add_modifier.contains(Modifier::REVERSED));
    assert_eq!(selected.fg, plain.fg);
  }

  #[test]
  fn test_entry_style_dir_and_file_differ() {
    let palette = Palette::init(&PaletteColors::default(), 256).unwrap();
    assert_ne!(palette.entry_style(true, true).fg, palette.entry_style(false, true).fg);
    assert_ne!(palette.entry_style(true, false).fg, palette.entry_style(false, false).fg);
  }

  #[test]
  fn test_parse_color() {
    assert_eq!(parse_color("#2234a8"), Some(Color::Rgb(0x22, 0x34, 0xa8)));
    assert_eq!(parse_color("black"), Some(Color::Black));
    assert_eq!(parse_color("not-a-color"), None);
  }
}
