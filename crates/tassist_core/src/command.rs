//! Executable commands.
//!
//! # Responsibility
//! - Represent every user command as a parsed, fully-validated value.
//! - Apply commands to the in-memory `Model`.
//!
//! # Invariants
//! - Indices refer to the currently displayed (filtered) list.
//! - A failed command leaves the model unchanged.

use crate::model::address_book::AddressBookError;
use crate::model::attendance::AttendanceStatus;
use crate::model::lab_score::LabScoreError;
use crate::model::manager::Model;
use crate::model::person::Person;
use crate::model::predicate::NameContainsKeywordsPredicate;
use crate::model::values::{
    Email, Faculty, LabGroup, MatNum, Name, Phone, Remark, TeleHandle, Tag, TutGroup, Year,
};
use log::debug;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const COMMAND_ADD: &str = "add";
pub const COMMAND_EDIT: &str = "edit";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_FIND: &str = "find";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_ATTENDANCE: &str = "att";
pub const COMMAND_LAB: &str = "lab";
pub const COMMAND_CLEAR: &str = "clear";
pub const COMMAND_HELP: &str = "help";
pub const COMMAND_EXIT: &str = "exit";

pub const ADD_USAGE: &str = "add: Adds a person to the address book.\n\
Parameters: n/NAME m/MATNUM [p/PHONE] [h/TELE_HANDLE] [e/EMAIL] [t/TUT_GROUP] \
[b/LAB_GROUP] [f/FACULTY] [y/YEAR] [r/REMARK] [tag/TAG]...\n\
Example: add n/John Doe m/A0123456J p/98765432 h/@johndoe e/johnd@example.com t/T01 tag/friends";

pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index \
number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [h/TELE_HANDLE] [e/EMAIL] \
[m/MATNUM] [t/TUT_GROUP] [b/LAB_GROUP] [f/FACULTY] [y/YEAR] [r/REMARK] [tag/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number used \
in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub const ATTENDANCE_USAGE: &str = "att: Marks the attendance of the person identified by the \
index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) w/WEEK (1 to 13) \
s/STATUS (0: absent, 1: attended, 2: on MC, 3: no tutorial)\n\
Example: att 1 w/3 s/1";

pub const LAB_USAGE: &str = "lab: Records a lab score for the person identified by the index \
number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) l/LAB (1 to 4) s/SCORE\n\
Example: lab 1 l/2 s/20";

pub const HELP_MESSAGE: &str = "Commands:\n  \
add n/NAME m/MATNUM [p/PHONE] [h/TELE_HANDLE] [e/EMAIL] [t/TUT_GROUP] [b/LAB_GROUP] [f/FACULTY] [y/YEAR] [r/REMARK] [tag/TAG]...\n  \
edit INDEX [n/NAME] [p/PHONE] ... [tag/TAG]...\n  \
delete INDEX\n  \
find KEYWORD [MORE_KEYWORDS]...\n  \
list\n  \
att INDEX w/WEEK s/STATUS\n  \
lab INDEX l/LAB s/SCORE\n  \
clear\n  \
help\n  \
exit";

/// One-based position in the displayed person list, stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
    /// Returns `None` for zero.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }
}

/// Replacement values for `edit`; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub tele_handle: Option<TeleHandle>,
    pub email: Option<Email>,
    pub mat_num: Option<MatNum>,
    pub tut_group: Option<TutGroup>,
    pub lab_group: Option<LabGroup>,
    pub faculty: Option<Faculty>,
    pub year: Option<Year>,
    pub remark: Option<Remark>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.tele_handle.is_some()
            || self.email.is_some()
            || self.mat_num.is_some()
            || self.tut_group.is_some()
            || self.lab_group.is_some()
            || self.faculty.is_some()
            || self.year.is_some()
            || self.remark.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `person`. Attendance and lab scores carry over.
    pub fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            tele_handle: self
                .tele_handle
                .clone()
                .unwrap_or_else(|| person.tele_handle.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            mat_num: self.mat_num.clone().unwrap_or_else(|| person.mat_num.clone()),
            tut_group: self
                .tut_group
                .clone()
                .unwrap_or_else(|| person.tut_group.clone()),
            lab_group: self
                .lab_group
                .clone()
                .unwrap_or_else(|| person.lab_group.clone()),
            faculty: self.faculty.clone().unwrap_or_else(|| person.faculty.clone()),
            year: self.year.clone().unwrap_or_else(|| person.year.clone()),
            remark: self.remark.clone().unwrap_or_else(|| person.remark.clone()),
            attendance: person.attendance.clone(),
            lab_scores: person.lab_scores.clone(),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

/// Parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Edit {
        index: Index,
        descriptor: EditPersonDescriptor,
    },
    Delete(Index),
    Find(NameContainsKeywordsPredicate),
    List,
    MarkAttendance {
        index: Index,
        week: usize,
        status: AttendanceStatus,
    },
    SetLabScore {
        index: Index,
        lab: usize,
        score: u32,
    },
    Clear,
    Help,
    Exit,
}

/// Outcome shown to the user after a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// Command execution failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidPersonIndex(Index),
    DuplicatePerson,
    InvalidWeek(usize),
    LabScore(LabScoreError),
    AddressBook(AddressBookError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPersonIndex(_) => {
                write!(f, "The person index provided is invalid")
            }
            Self::DuplicatePerson => write!(f, "This person already exists in the address book"),
            Self::InvalidWeek(week) => write!(f, "Week {week} is out of range"),
            Self::LabScore(err) => write!(f, "{err}"),
            Self::AddressBook(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LabScore(err) => Some(err),
            Self::AddressBook(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LabScoreError> for CommandError {
    fn from(value: LabScoreError) -> Self {
        Self::LabScore(value)
    }
}

impl From<AddressBookError> for CommandError {
    fn from(value: AddressBookError) -> Self {
        match value {
            AddressBookError::DuplicatePerson(_) => Self::DuplicatePerson,
            other => Self::AddressBook(other),
        }
    }
}

impl Command {
    /// Command word this command was parsed from.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => COMMAND_ADD,
            Self::Edit { .. } => COMMAND_EDIT,
            Self::Delete(_) => COMMAND_DELETE,
            Self::Find(_) => COMMAND_FIND,
            Self::List => COMMAND_LIST,
            Self::MarkAttendance { .. } => COMMAND_ATTENDANCE,
            Self::SetLabScore { .. } => COMMAND_LAB,
            Self::Clear => COMMAND_CLEAR,
            Self::Help => COMMAND_HELP,
            Self::Exit => COMMAND_EXIT,
        }
    }

    /// Whether a successful run changes the address book contents.
    pub fn mutates_address_book(&self) -> bool {
        matches!(
            self,
            Self::Add(_)
                | Self::Edit { .. }
                | Self::Delete(_)
                | Self::MarkAttendance { .. }
                | Self::SetLabScore { .. }
                | Self::Clear
        )
    }

    /// Applies this command to `model`.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        debug!("event=command_apply module=command command={}", self.word());
        match self {
            Self::Add(person) => {
                if model.has_person(person) {
                    return Err(CommandError::DuplicatePerson);
                }
                model.add_person(person.clone())?;
                Ok(CommandResult::new(format!("New person added: {person}")))
            }
            Self::Edit { index, descriptor } => {
                let target = displayed_person(model, *index)?;
                let edited = descriptor.apply(&target);
                model.set_person(&target, edited.clone())?;
                Ok(CommandResult::new(format!("Edited Person: {edited}")))
            }
            Self::Delete(index) => {
                let target = displayed_person(model, *index)?;
                let deleted = model.delete_person(&target)?;
                Ok(CommandResult::new(format!("Deleted Person: {deleted}")))
            }
            Self::Find(predicate) => {
                model.update_filter(Some(predicate.clone()));
                let count = model.filtered_persons().len();
                Ok(CommandResult::new(format!("{count} persons listed!")))
            }
            Self::List => {
                model.update_filter(None);
                Ok(CommandResult::new("Listed all persons"))
            }
            Self::MarkAttendance {
                index,
                week,
                status,
            } => {
                let target = displayed_person(model, *index)?;
                let mut edited = target.clone();
                if !edited.attendance.set(*week, *status) {
                    return Err(CommandError::InvalidWeek(*week));
                }
                model.set_person(&target, edited)?;
                Ok(CommandResult::new(format!(
                    "Marked week {week} as {} for {}",
                    status.label(),
                    target.name
                )))
            }
            Self::SetLabScore { index, lab, score } => {
                let target = displayed_person(model, *index)?;
                let mut edited = target.clone();
                edited.lab_scores.set_score(*lab, *score)?;
                let entry = edited.lab_scores.get(*lab);
                model.set_person(&target, edited)?;
                let max = entry.map_or(0, |entry| entry.max);
                Ok(CommandResult::new(format!(
                    "Updated lab {lab} score to {score}/{max} for {}",
                    target.name
                )))
            }
            Self::Clear => {
                model.clear();
                Ok(CommandResult::new("Address book has been cleared!"))
            }
            Self::Help => Ok(CommandResult {
                feedback: HELP_MESSAGE.to_string(),
                show_help: true,
                exit: false,
            }),
            Self::Exit => Ok(CommandResult {
                feedback: "Exiting TAssist as requested ...".to_string(),
                show_help: false,
                exit: true,
            }),
        }
    }
}

fn displayed_person(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex(index))
}
