//! Core library for TAssist, a contact manager for teaching assistants.
//! This crate owns every business rule; front-ends only pass text in and out.

pub mod command;
pub mod config;
pub mod logging;
pub mod logic;
pub mod model;
pub mod parser;
pub mod sample;
pub mod storage;
pub mod util;

pub use command::{Command, CommandError, CommandResult, EditPersonDescriptor, Index};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use logic::{Logic, LogicError};
pub use model::address_book::{AddressBook, AddressBookError};
pub use model::attendance::{AttendanceList, AttendanceStatus};
pub use model::field::{Field, ValidationError};
pub use model::lab_score::{LabScore, LabScoreError, LabScoreList};
pub use model::manager::Model;
pub use model::person::Person;
pub use model::predicate::NameContainsKeywordsPredicate;
pub use model::values::{
    Email, Faculty, LabGroup, MatNum, Name, Phone, Remark, Tag, TeleHandle, TutGroup, Year,
};
pub use parser::{parse_command, ParseError};
pub use sample::sample_address_book;
pub use storage::json_address_book::JsonSerializableAddressBook;
pub use storage::json_person::{JsonAdaptedPerson, RecordError};
pub use storage::{AddressBookStorage, JsonAddressBookStorage, StorageError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
