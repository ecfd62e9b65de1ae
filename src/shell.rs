use std::path::Path;

pub const CHANGE_DIR_PREFIX: &str = "CHANGE_DIR:";

/// The line printed on stdout when the user asks to change directory.
pub fn change_dir_directive(path: &Path) -> String {
  format!("{CHANGE_DIR_PREFIX}{}", path.display())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
}

impl Shell {
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "bash" => Some(Shell::Bash),
      "zsh" => Some(Shell::Zsh),
      "fish" => Some(Shell::Fish),
      _ => None,
    }
  }

  /// Wrapper function that runs lsi and follows its change-dir line.
  pub fn init_script(self) -> &'static str {
    match self {
      Shell::Bash | Shell::Zsh => POSIX_FUNCTION,
      Shell::Fish => FISH_FUNCTION,
    }
  }
}

const POSIX_FUNCTION: &str = r#"lsi() {
  local out
  out="$(command lsi "$@")" || return
  case "$out" in
    CHANGE_DIR:*) cd -- "${out#CHANGE_DIR:}" ;;
    *) if [ -n "$out" ]; then printf '%s\n' "$out"; fi ;;
  esac
}
"#;

const FISH_FUNCTION: &str = r#"function lsi
  set -l out (command lsi $argv | string collect); or return
  switch "$out"
    case 'CHANGE_DIR:*'
      cd -- (string replace -r '^CHANGE_DIR:' '' -- "$out")
    case '*'
      if test -n "$out"
        printf '%s\n' "$out"
      end
  end
end
"#;
