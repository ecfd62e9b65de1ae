use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::action::Action;
use crate::config::{Config, normalize_key_event};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  Key(KeyEvent),
  Resize(u16, u16),
  Other,
}

impl From<CrosstermEvent> for Event {
  fn from(ev: CrosstermEvent) -> Self {
    match ev {
      CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
      CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
      _ => Event::Other,
    }
  }
}

/// Blocks until the terminal delivers the next event.
pub fn read_event() -> Result<Event> {
  Ok(event::read()?.into())
}

pub fn map_key(key: KeyEvent, config: &Config) -> Action {
  let kb = normalize_key_event(key);
  config.keys.get(&kb).cloned().unwrap_or(Action::None)
}
