//! Parsing of launch arguments and of the commands typed into the panel.

use std::str::FromStr;

use thiserror::Error;
use todo_panel_core::{ApiConfig, DeleteCheck, PanelConfig};

pub const USAGE: &str = "\
commands:
  title <text>        set the draft title
  description <text>  set the draft description
  add                 create a todo from the draft
  delete <id>         delete a todo
  reload              fetch the list again
  show                redraw the panel
  help                print this message
  quit                leave";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Title(String),
    Description(String),
    Add,
    /// The id exactly as typed; the host resolves it against the loaded list.
    Delete(String),
    Reload,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// The first word picks the command; for `title` and `description` the
    /// rest of the line is taken verbatim, so an empty rest clears the field.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };
        let rest = rest.trim_end_matches(['\r', '\n']);

        let no_argument = |command: Command| {
            if rest.trim().is_empty() {
                Ok(command)
            } else {
                Err(CommandError::UnexpectedArgument(rest.trim().to_string()))
            }
        };

        match word {
            "title" => Ok(Command::Title(rest.to_string())),
            "description" | "desc" => Ok(Command::Description(rest.to_string())),
            "delete" | "rm" => {
                let id = rest.trim();
                if id.is_empty() {
                    return Err(CommandError::MissingArgument("delete"));
                }
                Ok(Command::Delete(id.to_string()))
            }
            "add" => no_argument(Command::Add),
            "reload" => no_argument(Command::Reload),
            "show" => no_argument(Command::Show),
            "help" | "?" => no_argument(Command::Help),
            "quit" | "exit" => no_argument(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// `todo-panel [HOST] [--strict-delete]`
pub fn config_from_args<I>(args: I) -> Result<PanelConfig, CommandError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = PanelConfig::default();
    let mut host_seen = false;
    for arg in args {
        if arg == "--strict-delete" {
            config.delete_check = DeleteCheck::Strict;
        } else if !host_seen && !arg.starts_with("--") {
            config.api = ApiConfig::with_host(&arg);
            host_seen = true;
        } else {
            return Err(CommandError::UnexpectedArgument(arg));
        }
    }
    Ok(config)
}
