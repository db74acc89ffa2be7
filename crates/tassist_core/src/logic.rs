//! Command-processing use case.
//!
//! # Responsibility
//! - Parse one line of input, execute it, and persist mutations.
//! - Keep front-ends decoupled from parser, model, and storage details.
//!
//! # Invariants
//! - Storage is written only after a mutating command succeeds.
//! - Logged events carry command metadata only, never user-entered values.

use crate::command::{CommandError, CommandResult};
use crate::model::manager::Model;
use crate::model::person::Person;
use crate::parser::{parse_command, ParseError};
use crate::storage::{AddressBookStorage, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Failure surfaced to the user for one input line.
#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
    Storage(StorageError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "Could not save data to file: {err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<StorageError> for LogicError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Orchestrates parser, model and storage for a running session.
pub struct Logic<S: AddressBookStorage> {
    model: Model,
    storage: S,
}

impl<S: AddressBookStorage> Logic<S> {
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    /// Parses and runs one line of user input.
    ///
    /// # Errors
    /// - `LogicError::Parse` when the input is malformed.
    /// - `LogicError::Command` when execution is rejected by the model.
    /// - `LogicError::Storage` when the updated address book cannot be saved;
    ///   the in-memory change is kept.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        let started_at = Instant::now();
        let command = parse_command(input).map_err(|err| {
            info!("event=command_execute module=logic status=rejected stage=parse");
            err
        })?;

        let result = command.execute(&mut self.model).map_err(|err| {
            info!(
                "event=command_execute module=logic status=rejected stage=execute command={}",
                command.word()
            );
            err
        })?;

        if command.mutates_address_book() {
            if let Err(err) = self.storage.save_address_book(self.model.address_book()) {
                warn!(
                    "event=command_execute module=logic status=error stage=save command={}",
                    command.word()
                );
                return Err(err.into());
            }
        }

        info!(
            "event=command_execute module=logic status=ok command={} duration_ms={}",
            command.word(),
            started_at.elapsed().as_millis()
        );
        Ok(result)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Persons currently shown to the user.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
