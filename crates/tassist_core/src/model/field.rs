//! Field catalogue and field-level validation error.
//!
//! # Responsibility
//! - Name every validated person attribute in one place.
//! - Own the user-facing constraint text for each attribute.
//!
//! # Invariants
//! - `Field::type_name` is the stable identifier used in "missing field"
//!   messages and must not change between releases.
//! - `ValidationError` displays exactly `Field::constraints`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated person attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    TeleHandle,
    Email,
    MatNum,
    TutGroup,
    LabGroup,
    Faculty,
    Year,
    Remark,
    AttendanceList,
    LabScoreList,
    Tag,
}

impl Field {
    /// Type name reported when a persisted record omits this field.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::TeleHandle => "TeleHandle",
            Self::Email => "Email",
            Self::MatNum => "MatNum",
            Self::TutGroup => "TutGroup",
            Self::LabGroup => "LabGroup",
            Self::Faculty => "Faculty",
            Self::Year => "Year",
            Self::Remark => "Remark",
            Self::AttendanceList => "AttendanceList",
            Self::LabScoreList => "LabScoreList",
            Self::Tag => "Tag",
        }
    }

    /// Human-readable format rule for this field.
    pub fn constraints(self) -> &'static str {
        match self {
            Self::Name => {
                "Names should only contain letters and spaces, and it should not be blank"
            }
            Self::Phone => {
                "Phone numbers should only contain digits, and it should be at least 3 digits long"
            }
            Self::TeleHandle => {
                "Telegram handles should start with @ followed by 5 to 32 letters, digits or underscores"
            }
            Self::Email => {
                "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
                 1. The local-part should only contain alphanumeric characters and these special characters, excluding the parentheses, (+_.-). \
                 The local-part may not start or end with any special characters.\n\
                 2. This is followed by a '@' and then a domain name made up of domain labels separated by periods.\n\
                 The domain name must:\n    \
                 - end with a domain label at least 2 characters long\n    \
                 - have each domain label consist of alphanumeric characters, separated only by hyphens, if any."
            }
            Self::MatNum => {
                "Matriculation numbers should start with A, followed by 7 digits and end with a letter, e.g. A0123456J"
            }
            Self::TutGroup => "Tutorial groups should be T followed by 2 digits, e.g. T01",
            Self::LabGroup => "Lab groups should be B followed by 2 digits, e.g. B02",
            Self::Faculty => {
                "Faculties should only contain letters, spaces, '&' and ',', and start with a letter"
            }
            Self::Year => "Year of study should be a single digit from 1 to 6",
            Self::Remark => "Remarks can be at most 200 characters long",
            Self::AttendanceList => {
                "Attendance must be exactly 13 characters, one per week, each being \
                 0 (absent), 1 (attended), 2 (on MC) or 3 (no tutorial)"
            }
            Self::LabScoreList => {
                "Lab scores must be exactly 4 space-separated entries of the form SCORE/MAX, \
                 where MAX is a positive integer and SCORE is '-' (ungraded) or an integer from 0 to MAX"
            }
            Self::Tag => "Tags names should be alphanumeric",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A raw value that does not satisfy its field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
}

impl ValidationError {
    pub(crate) fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field.constraints())
    }
}

impl Error for ValidationError {}
