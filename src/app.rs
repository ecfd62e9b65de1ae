use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::action::Action;
use crate::config::Config;
use crate::event::{Event, map_key};
use crate::fs::{Entry, Listing, parent_dir, resolve};
use crate::launcher::Launcher;
use crate::palette::Palette;
use crate::ui;

/// How the browser loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
  Quit,
  /// The shell should `cd` here. Always absolute.
  ChangeDir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
  pub current_path: PathBuf,
  pub selection: usize,
  pub history: Vec<PathBuf>,
}

impl BrowserState {
  pub fn new(start: PathBuf) -> Self {
    Self {
      current_path: start,
      selection: 0,
      history: Vec::new(),
    }
  }

  /// Moves to `dir`, remembering where we came from.
  fn visit(&mut self, dir: PathBuf) {
    let prev = std::mem::replace(&mut self.current_path, dir);
    self.history.push(prev);
    self.selection = 0;
  }
}

pub struct App<L: Launcher> {
  pub state: BrowserState,
  pub listing: Listing,
  pub launcher: L,
}

impl<L: Launcher> App<L> {
  pub fn new(start: PathBuf, launcher: L) -> Self {
    Self {
      state: BrowserState::new(start),
      listing: Listing::default(),
      launcher,
    }
  }

  /// Re-reads the current directory. Called once per frame.
  pub fn refresh(&mut self) {
    self.listing = Listing::read(&self.state.current_path);
    // The directory may have shrunk since the last frame.
    if self.listing.is_empty() {
      self.state.selection = 0;
    } else {
      self.state.selection = self.state.selection.min(self.listing.len() - 1);
    }
  }

  pub fn update(&mut self, action: Action) -> Option<Exit> {
    if action != Action::None {
      debug!("{action:?} at {}", self.state.current_path.display());
    }
    match action {
      Action::MoveUp => self.move_up(),
      Action::MoveDown => self.move_down(),
      Action::Open => self.open_selected(),
      Action::Parent => self.go_parent(),
      Action::HistoryBack => self.history_back(),
      Action::Quit => return Some(Exit::Quit),
      Action::ChangeDir => return Some(Exit::ChangeDir(resolve(&self.state.current_path))),
      Action::None => {}
    }
    None
  }

  fn move_up(&mut self) {
    if self.state.selection > 0 {
      self.state.selection -= 1;
    }
  }

  fn move_down(&mut self) {
    if self.state.selection + 1 < self.listing.len() {
      self.state.selection += 1;
    }
  }

  fn open_selected(&mut self) {
    let Some(entry) = self.selected_entry() else {
      return;
    };
    if entry.is_dir {
      let dir = entry.path.clone();
      debug!("enter {}", dir.display());
      self.state.visit(dir);
    } else {
      let path = entry.path.clone();
      self.launcher.launch(&path);
    }
  }

  fn go_parent(&mut self) {
    if let Some(parent) = parent_dir(&self.state.current_path) {
      debug!("parent {}", parent.display());
      self.state.visit(parent);
    }
  }

  fn history_back(&mut self) {
    if let Some(prev) = self.state.history.pop() {
      debug!("history back to {}", prev.display());
      self.state.current_path = prev;
      self.state.selection = 0;
    }
  }

  pub fn selected_entry(&self) -> Option<&Entry> {
    self.listing.get(self.state.selection)
  }

  /// Render, read one event, apply it; repeat until the user leaves.
  pub fn run<B: Backend>(
    &mut self,
    terminal: &mut Terminal<B>,
    palette: &Palette,
    config: &Config,
    mut next_event: impl FnMut() -> Result<Event>,
  ) -> Result<Exit>
  where
    B::Error: Send + Sync + 'static,
  {
    let help = config.help_line();
    loop {
      self.refresh();
      terminal.draw(|frame| ui::draw(frame, &self.state, &self.listing, palette, &help))?;

      let action = match next_event()? {
        Event::Key(key) => map_key(key, config),
        Event::Resize(..) | Event::Other => Action::None,
      };
      if let Some(exit) = self.update(action) {
        info!("exit: {exit:?}");
        return Ok(exit);
      }
    }
  }
}
