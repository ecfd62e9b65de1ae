#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
  Quit,
  MoveUp,
  MoveDown,
  Open,
  Parent,
  HistoryBack,
  ChangeDir,
  None,
}

impl Action {
  pub fn from_name(name: &str) -> Option<Action> {
    match name {
      "quit" => Some(Action::Quit),
      "move_up" => Some(Action::MoveUp),
      "move_down" => Some(Action::MoveDown),
      "open" => Some(Action::Open),
      "parent" => Some(Action::Parent),
      "history_back" => Some(Action::HistoryBack),
      "change_dir" => Some(Action::ChangeDir),
      "none" => Some(Action::None),
      _ => None,
    }
  }

  /// Label shown in the help line.
  pub fn label(&self) -> &'static str {
    match self {
      Action::Quit => "Quit",
      Action::MoveUp | Action::MoveDown => "Navigate",
      Action::Open => "Open",
      Action::Parent => "Back",
      Action::HistoryBack => "History Back",
      Action::ChangeDir => "Change Dir",
      Action::None => "",
    }
  }
}
