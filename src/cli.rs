use std::path::PathBuf;

use simplelog::LevelFilter;

use crate::shell::Shell;

pub const USAGE: &str = "\
lsi - interactive directory browser

Usage: lsi [options] [path]

Options:
  --config <file>          Read colors and key bindings from a TOML file
  --dump-config            Print the default config to stdout
  --shell-init <shell>     Print a bash, zsh or fish function that cd's on exit
  --log <file>             Write a debug log to <file>
  --log-level <level>      Log level: error, warn, info, debug, trace (default: debug)
  -h, --help               Print this help message
  -V, --version            Print version

If no path is given, browsing starts in the current directory.
Press e to exit and print CHANGE_DIR:<path> for the shell function to follow.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
  pub path: Option<PathBuf>,
  pub config: Option<PathBuf>,
  pub log_file: Option<PathBuf>,
  pub log_level: LevelFilter,
}

impl Default for RunOptions {
  fn default() -> Self {
    Self {
      path: None,
      config: None,
      log_file: None,
      log_level: LevelFilter::Debug,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
  Help,
  Version,
  DumpConfig,
  ShellInit(Shell),
  Run(RunOptions),
}

/// Parses flags and the positional path in a single pass.
pub fn parse_args<I>(args: I) -> Result<CliAction, String>
where
  I: IntoIterator<Item = String>,
{
  let mut opts = RunOptions::default();
  let mut args = args.into_iter();

  while let Some(arg) = args.next() {
    // Accept both `--flag value` and `--flag=value`
    let (flag, inline) = match arg.split_once('=') {
      Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
      _ => (arg.clone(), None),
    };
    let mut value = |name: &str| {
      inline
        .clone()
        .or_else(|| args.next())
        .ok_or_else(|| format!("{name} needs a value"))
    };

    match flag.as_str() {
      "--help" | "-h" => return Ok(CliAction::Help),
      "--version" | "-V" => return Ok(CliAction::Version),
      "--dump-config" => return Ok(CliAction::DumpConfig),
      "--shell-init" => {
        let name = value("--shell-init")?;
        let shell = Shell::from_name(&name).ok_or_else(|| format!("unsupported shell '{name}'"))?;
        return Ok(CliAction::ShellInit(shell));
      }
      "--config" => opts.config = Some(PathBuf::from(value("--config")?)),
      "--log" => opts.log_file = Some(PathBuf::from(value("--log")?)),
      "--log-level" => {
        let level = value("--log-level")?;
        opts.log_level = level
          .parse::<LevelFilter>()
          .map_err(|_| format!("invalid log level '{level}'"))?;
      }
      a if !a.starts_with('-') || a == "-" => {
        if opts.path.is_some() {
          return Err(format!("unexpected argument '{a}'"));
        }
        opts.path = Some(PathBuf::from(a));
      }
      _ => return Err(format!("unknown option '{arg}'")),
    }
  }

  Ok(CliAction::Run(opts))
}
