//! User input parsing.
//!
//! # Responsibility
//! - Turn one line of user input into a `Command`.
//! - Report malformed input with messages fit for direct display.
//!
//! # Invariants
//! - Parsing is pure: no model access and no I/O.
//! - The command word is the first whitespace-delimited token.

mod commands;
pub mod fields;
pub mod tokenizer;

pub use commands::{
    parse_add, parse_attendance, parse_delete, parse_edit, parse_find, parse_lab_score,
};

use crate::command::{
    Command, COMMAND_ADD, COMMAND_ATTENDANCE, COMMAND_CLEAR, COMMAND_DELETE, COMMAND_EDIT,
    COMMAND_EXIT, COMMAND_FIND, COMMAND_HELP, COMMAND_LAB, COMMAND_LIST, HELP_MESSAGE,
};
use crate::model::attendance::WEEKS;
use crate::model::field::ValidationError;
use crate::model::lab_score::LABS;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokenizer::Prefix;

/// Input could not be interpreted as a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not follow the command format; carries the usage text.
    InvalidCommandFormat(&'static str),
    UnknownCommand(String),
    InvalidIndex,
    InvalidValue(ValidationError),
    DuplicatePrefixes(Vec<Prefix>),
    NoFieldEdited,
    InvalidWeek,
    InvalidAttendanceStatus,
    InvalidLabNumber,
    InvalidScore,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandFormat(usage) => write!(f, "Invalid command format! \n{usage}"),
            Self::UnknownCommand(_) => write!(f, "Unknown command"),
            Self::InvalidIndex => write!(f, "Index is not a non-zero unsigned integer."),
            Self::InvalidValue(err) => write!(f, "{err}"),
            Self::DuplicatePrefixes(prefixes) => {
                write!(
                    f,
                    "Multiple values specified for the following single-valued field(s):"
                )?;
                for prefix in prefixes {
                    write!(f, " {prefix}")?;
                }
                Ok(())
            }
            Self::NoFieldEdited => write!(f, "At least one field to edit must be provided."),
            Self::InvalidWeek => write!(f, "Week must be a number from 1 to {WEEKS}."),
            Self::InvalidAttendanceStatus => write!(
                f,
                "Status must be 0 (absent), 1 (attended), 2 (on MC) or 3 (no tutorial)."
            ),
            Self::InvalidLabNumber => write!(f, "Lab number must be from 1 to {LABS}."),
            Self::InvalidScore => write!(f, "Score must be a non-negative integer."),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ParseError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidValue(value)
    }
}

/// Parses one line of user input.
///
/// # Errors
/// - `InvalidCommandFormat` with the help text for blank input.
/// - `UnknownCommand` for an unrecognised command word.
/// - Command-specific errors from the matching command parser.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidCommandFormat(HELP_MESSAGE));
    }

    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split_at) => trimmed.split_at(split_at),
        None => (trimmed, ""),
    };

    match word {
        COMMAND_ADD => parse_add(args),
        COMMAND_EDIT => parse_edit(args),
        COMMAND_DELETE => parse_delete(args),
        COMMAND_FIND => parse_find(args),
        COMMAND_ATTENDANCE => parse_attendance(args),
        COMMAND_LAB => parse_lab_score(args),
        COMMAND_LIST => Ok(Command::List),
        COMMAND_CLEAR => Ok(Command::Clear),
        COMMAND_HELP => Ok(Command::Help),
        COMMAND_EXIT => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, ParseError};
    use crate::command::{Command, HELP_MESSAGE};

    #[test]
    fn blank_input_reports_help() {
        assert_eq!(
            parse_command("   ").unwrap_err(),
            ParseError::InvalidCommandFormat(HELP_MESSAGE)
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let err = parse_command("unknownCommand 1").unwrap_err();
        assert_eq!(err, ParseError::UnknownCommand("unknownCommand".to_string()));
        assert_eq!(err.to_string(), "Unknown command");
    }

    #[test]
    fn argument_free_commands_ignore_trailing_text() {
        assert_eq!(parse_command("list").unwrap(), Command::List);
        assert_eq!(parse_command("list 3").unwrap(), Command::List);
        assert_eq!(parse_command("  exit  ").unwrap(), Command::Exit);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert!(matches!(
            parse_command("LIST").unwrap_err(),
            ParseError::UnknownCommand(_)
        ));
    }
}
