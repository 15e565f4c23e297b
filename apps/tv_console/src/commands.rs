//! Line commands typed at the console, standing in for remote-control input.

use std::collections::BTreeSet;

use shared::{domain::ReminderId, protocol::Intent};
use thiserror::Error;

pub const HELP: &str = "commands: add <title> | toggle <id> | delete <id> | \
delete-at <offset>... | show <id> | list | help | quit | {json intent}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Raw text for the add-reminder form; may be blank.
    Add(String),
    Intent(Intent),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("malformed intent json: {0}")]
    Json(String),
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand, CommandError> {
    let line = line.trim();
    if line.starts_with('{') {
        return serde_json::from_str(line)
            .map(ConsoleCommand::Intent)
            .map_err(|err| CommandError::Json(err.to_string()));
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => ConsoleCommand::Add(rest.to_string()),
        "toggle" => ConsoleCommand::Intent(Intent::RequestToggle {
            id: parse_id("toggle", rest)?,
        }),
        "delete" => ConsoleCommand::Intent(Intent::RequestDelete {
            id: parse_id("delete", rest)?,
        }),
        "delete-at" => ConsoleCommand::Intent(Intent::RequestDeleteAtOffsets {
            offsets: parse_offsets(rest)?,
        }),
        "show" => ConsoleCommand::Intent(Intent::RequestShowInTicker {
            id: parse_id("show", rest)?,
        }),
        "list" | "ls" => ConsoleCommand::List,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn parse_id(command: &'static str, raw: &str) -> Result<ReminderId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "a reminder id",
        });
    }
    raw.parse::<u64>()
        .map(ReminderId)
        .map_err(|_| CommandError::NotANumber(raw.to_string()))
}

fn parse_offsets(raw: &str) -> Result<BTreeSet<usize>, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "delete-at",
            what: "one or more offsets",
        });
    }
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| CommandError::NotANumber(part.to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
