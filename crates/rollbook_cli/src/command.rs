//! Line command grammar for the Rollbook driver.
//!
//! # Responsibility
//! - Split one input line into tokens, honoring double-quoted groups.
//! - Turn tokens into typed `Command` values with argument errors reported
//!   per line.
//!
//! # Invariants
//! - Blank lines and `#` comments parse to `None`.
//! - Parsing never touches the student store.

use once_cell::sync::Lazy;
use regex::Regex;
use rollbook_core::{AddStudentRequest, RollNumber};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("valid token regex"));

pub const HELP_TEXT: &str = "\
Commands:
  add <roll> <name> <phone> <cgpa> <year> [subject...]
  enroll <roll> <subject>
  search <roll>
  mark <roll> <attended>
  apply
  discard
  pending
  list
  clear
  help
  exit | quit
Quote values that contain spaces, e.g. add 1 \"Asha Rao\" 555-0101 3.4 2";

/// One parsed driver command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddStudentRequest),
    Enroll { roll: RollNumber, subject: String },
    Search(RollNumber),
    Mark { roll: RollNumber, attended: i64 },
    Apply,
    Discard,
    Pending,
    List,
    Clear,
    Help,
    Exit,
}

/// Per-line parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
    UnexpectedArgument {
        command: &'static str,
        value: String,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(name) => {
                write!(f, "unknown command `{name}`; type `help` for the command list")
            }
            Self::MissingArgument { command, argument } => {
                write!(f, "`{command}` is missing <{argument}>")
            }
            Self::InvalidArgument { argument, value } => {
                write!(f, "invalid <{argument}> value `{value}`")
            }
            Self::UnexpectedArgument { command, value } => {
                write!(f, "`{command}` does not take extra argument `{value}`")
            }
        }
    }
}

impl Error for ParseError {}

/// Splits a line into whitespace-separated tokens; `"a b"` stays one token.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed);
    let Some((name, rest)) = tokens.split_first() else {
        return Ok(None);
    };
    let mut args = Args {
        command: "",
        rest: rest.iter(),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "add" => {
            args.command = "add";
            let roll_number = args.parse("roll")?;
            let name = args.text("name")?;
            let phone_number = args.text("phone")?;
            let cgpa = args.parse("cgpa")?;
            let year_of_study = args.parse("year")?;
            let subjects = args.rest.by_ref().cloned().collect();
            Command::Add(AddStudentRequest {
                roll_number,
                name,
                phone_number,
                cgpa,
                year_of_study,
                subjects,
            })
        }
        "enroll" => {
            args.command = "enroll";
            Command::Enroll {
                roll: args.parse("roll")?,
                subject: args.text("subject")?,
            }
        }
        "search" => {
            args.command = "search";
            Command::Search(args.parse("roll")?)
        }
        "mark" => {
            args.command = "mark";
            Command::Mark {
                roll: args.parse("roll")?,
                attended: args.parse("attended")?,
            }
        }
        "apply" => Command::Apply,
        "discard" => Command::Discard,
        "pending" => Command::Pending,
        "list" => Command::List,
        "clear" => Command::Clear,
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = args.rest.next() {
        return Err(ParseError::UnexpectedArgument {
            command: command_name(&command),
            value: extra.clone(),
        });
    }

    Ok(Some(command))
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Add(_) => "add",
        Command::Enroll { .. } => "enroll",
        Command::Search(_) => "search",
        Command::Mark { .. } => "mark",
        Command::Apply => "apply",
        Command::Discard => "discard",
        Command::Pending => "pending",
        Command::List => "list",
        Command::Clear => "clear",
        Command::Help => "help",
        Command::Exit => "exit",
    }
}

struct Args<'a> {
    command: &'static str,
    rest: std::slice::Iter<'a, String>,
}

impl Args<'_> {
    fn text(&mut self, argument: &'static str) -> Result<String, ParseError> {
        self.rest
            .next()
            .cloned()
            .ok_or(ParseError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn parse<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ParseError> {
        let value = self.text(argument)?;
        value
            .parse()
            .map_err(|_| ParseError::InvalidArgument { argument, value })
    }
}
