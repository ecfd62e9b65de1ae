use std::collections::HashMap;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::action::Action;
use crate::palette::{PaletteColors, parse_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
  pub code: KeyCode,
  pub modifiers: KeyModifiers,
}

impl KeyBinding {
  pub fn display_key(&self) -> String {
    let key_name = match self.code {
      KeyCode::Char(' ') => "Space".to_string(),
      KeyCode::Char(c) => c.to_string(),
      KeyCode::Enter => "Enter".to_string(),
      KeyCode::Esc => "Esc".to_string(),
      KeyCode::Backspace => "Backspace".to_string(),
      KeyCode::Delete => "Delete".to_string(),
      KeyCode::Tab => "Tab".to_string(),
      KeyCode::PageUp => "PageUp".to_string(),
      KeyCode::PageDown => "PageDown".to_string(),
      KeyCode::Up => "↑".to_string(),
      KeyCode::Down => "↓".to_string(),
      KeyCode::Left => "←".to_string(),
      KeyCode::Right => "→".to_string(),
      KeyCode::F(n) => format!("F{n}"),
      _ => format!("{:?}", self.code),
    };

    if self.modifiers.contains(KeyModifiers::CONTROL) {
      format!("Ctrl+{key_name}")
    } else if self.modifiers.contains(KeyModifiers::ALT) {
      format!("Alt+{key_name}")
    } else {
      key_name
    }
  }
}

pub struct Config {
  pub keys: HashMap<KeyBinding, Action>,
  pub colors: PaletteColors,
}

#[derive(Deserialize, Default)]
struct TomlConfig {
  colors: Option<ColorsConfig>,
  keys: Option<HashMap<String, String>>,
}

#[derive(Deserialize, Default)]
struct ColorsConfig {
  directory: Option<String>,
  file: Option<String>,
  background: Option<String>,
}

pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
  if s.is_empty() {
    return None;
  }

  let parts: Vec<&str> = s.split('+').collect();

  if parts.len() == 1 {
    let key = parts[0];
    if let Some(code) = named_key(key) {
      return Some(KeyBinding { code, modifiers: KeyModifiers::NONE });
    }
    let chars: Vec<char> = key.chars().collect();
    if chars.len() == 1 {
      return Some(KeyBinding { code: KeyCode::Char(chars[0]), modifiers: KeyModifiers::NONE });
    }
    return None;
  }

  if parts.len() == 2 {
    let modifier_str = parts[0].to_lowercase();
    let key_str = parts[1];

    let modifiers = match modifier_str.as_str() {
      "ctrl" => KeyModifiers::CONTROL,
      "shift" => {
        let chars: Vec<char> = key_str.chars().collect();
        if chars.len() == 1 {
          let c = chars[0].to_uppercase().next().unwrap_or(chars[0]);
          return Some(KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::NONE });
        }
        if let Some(code) = named_key(key_str) {
          return Some(KeyBinding { code, modifiers: KeyModifiers::SHIFT });
        }
        return None;
      }
      "alt" => KeyModifiers::ALT,
      _ => return None,
    };

    if let Some(code) = named_key(key_str) {
      return Some(KeyBinding { code, modifiers });
    }
    let chars: Vec<char> = key_str.chars().collect();
    if chars.len() == 1 {
      return Some(KeyBinding { code: KeyCode::Char(chars[0]), modifiers });
    }
    return None;
  }

  None
}

fn named_key(s: &str) -> Option<KeyCode> {
  match s.to_lowercase().as_str() {
    "enter" => Some(KeyCode::Enter),
    "space" => Some(KeyCode::Char(' ')),
    "esc" => Some(KeyCode::Esc),
    "up" => Some(KeyCode::Up),
    "down" => Some(KeyCode::Down),
    "left" => Some(KeyCode::Left),
    "right" => Some(KeyCode::Right),
    "backspace" => Some(KeyCode::Backspace),
    "delete" => Some(KeyCode::Delete),
    "tab" => Some(KeyCode::Tab),
    "pageup" => Some(KeyCode::PageUp),
    "pagedown" => Some(KeyCode::PageDown),
    s if s.starts_with('f') && s.len() > 1 => {
      s[1..].parse::<u8>().ok().filter(|&n| (1..=24).contains(&n)).map(KeyCode::F)
    }
    _ => None,
  }
}

pub fn normalize_key_event(key: KeyEvent) -> KeyBinding {
  let mut modifiers = key.modifiers;
  if let KeyCode::Char(c) = key.code
    && c.is_uppercase()
  {
    modifiers -= KeyModifiers::SHIFT;
  }
  KeyBinding { code: key.code, modifiers }
}

impl Default for Config {
  fn default() -> Self {
    let mut config = Config::empty();
    let mut errors = Vec::new();
    config.apply_toml_str(Config::default_toml(), &mut errors);
    config
  }
}

impl Config {
  fn empty() -> Self {
    Config {
      keys: HashMap::new(),
      colors: PaletteColors::default(),
    }
  }

  fn apply_toml_str(&mut self, s: &str, errors: &mut Vec<String>) {
    let toml_config: TomlConfig = match toml::from_str(s) {
      Ok(c) => c,
      Err(e) => {
        errors.push(format!("failed to parse config: {e}"));
        return;
      }
    };

    if let Some(colors) = toml_config.colors {
      apply_color(&mut self.colors.directory, "directory", colors.directory, errors);
      apply_color(&mut self.colors.file, "file", colors.file, errors);
      apply_color(&mut self.colors.background, "background", colors.background, errors);
    }

    if let Some(keys) = toml_config.keys {
      self.keys.clear();
      for (key_str, action_str) in &keys {
        let Some(kb) = parse_key_binding(key_str) else {
          errors.push(format!("invalid key binding: {key_str:?}"));
          continue;
        };
        let Some(action) = Action::from_name(action_str) else {
          errors.push(format!("invalid action: {action_str:?}"));
          continue;
        };
        self.keys.insert(kb, action);
      }

      // Raw mode has no other way out.
      let can_exit = self.keys.values().any(|a| matches!(a, Action::Quit | Action::ChangeDir));
      if !can_exit {
        errors.push("no key bound to quit or change_dir, keeping q = \"quit\"".to_string());
        let q = KeyBinding { code: KeyCode::Char('q'), modifiers: KeyModifiers::NONE };
        self.keys.insert(q, Action::Quit);
      }
    }
  }

  pub fn default_toml() -> &'static str {
    r##"[colors]
directory = "#2234a8"   # directory rows
file = "#ffffff"        # file rows
background = "black"

[keys]
up = "move_up"
down = "move_down"
enter = "open"
b = "parent"
h = "history_back"
e = "change_dir"
q = "quit"
"##
  }

  pub fn reverse_lookup(&self) -> HashMap<Action, Vec<String>> {
    let mut map: HashMap<Action, Vec<String>> = HashMap::new();
    for (kb, action) in &self.keys {
      map.entry(action.clone()).or_default().push(kb.display_key());
    }
    // Sort keys for deterministic display
    for keys in map.values_mut() {
      keys.sort();
    }
    map
  }

  /// One-line key summary drawn at the top of the screen.
  pub fn help_line(&self) -> String {
    let lookup = self.reverse_lookup();
    let first = |action: &Action| lookup.get(action).and_then(|keys| keys.first()).cloned();

    let mut parts = Vec::new();
    let nav: String = [Action::MoveUp, Action::MoveDown].iter().filter_map(first).collect();
    if !nav.is_empty() {
      parts.push(format!("{nav}:{}", Action::MoveUp.label()));
    }
    for action in [
      Action::Open,
      Action::Parent,
      Action::HistoryBack,
      Action::ChangeDir,
      Action::Quit,
    ] {
      if let Some(key) = first(&action) {
        parts.push(format!("{key}:{}", action.label()));
      }
    }
    parts.join(" | ")
  }

  /// Loads defaults, overlaid with the file at `path` when one is given.
  /// Problems are returned next to a usable config instead of aborting.
  pub fn load(path: Option<&Path>) -> (Config, Vec<String>) {
    let mut errors = Vec::new();
    let Some(path) = path else {
      return (Config::default(), errors);
    };

    let config = match std::fs::read_to_string(path) {
      Ok(s) => Self::load_from_str_with_errors(&s, &mut errors),
      Err(e) => {
        errors.push(format!("failed to read {}: {e}", path.display()));
        Config::default()
      }
    };
    (config, errors)
  }

  #[cfg(test)]
  pub fn load_from_str(s: &str) -> Config {
    let mut errors = Vec::new();
    Self::load_from_str_with_errors(s, &mut errors)
  }

  fn load_from_str_with_errors(s: &str, errors: &mut Vec<String>) -> Config {
    let mut config = Config::default();
    config.apply_toml_str(s, errors);
    config
  }
}

fn apply_color(slot: &mut ratatui::style::Color, role: &str, value: Option<String>, errors: &mut Vec<String>) {
  let Some(value) = value else { return };
  match parse_color(&value) {
    Some(color) => *slot = color,
    None => errors.push(format!("invalid {role} color: {value:?}")),
  }
}
