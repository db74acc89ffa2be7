//! Single-string person attributes.
//!
//! # Responsibility
//! - Wrap each attribute in a newtype that can only hold a valid value.
//! - Expose `is_valid` as a pure predicate for every attribute.
//!
//! # Invariants
//! - Constructors never trim; callers hand over the exact text to store.
//! - Optional attributes accept `""` as "not provided".
//! - Case-insensitive identifiers (`MatNum`, `TutGroup`, `LabGroup`) are
//!   stored upper-case so that persisted values round-trip unchanged.

use crate::model::field::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L} ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static TELE_HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[A-Za-z0-9_]{5,32}$").expect("valid tele handle regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*([A-Za-z0-9]+(?:-[A-Za-z0-9]+)*)$",
    )
    .expect("valid email regex")
});
static MAT_NUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^A[0-9]{7}[A-Z]$").expect("valid mat num regex"));
static TUT_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T[0-9]{2}$").expect("valid tut group regex"));
static LAB_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^B[0-9]{2}$").expect("valid lab group regex"));
static FACULTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L} &,]*$").expect("valid faculty regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-6]$").expect("valid year regex"));
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

const REMARK_MAX_CHARS: usize = 200;

/// Shared accessors for string newtypes.
macro_rules! string_value {
    ($ty:ident) => {
        impl $ty {
            /// Returns the stored text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

fn optional_matches(re: &Regex, value: &str) -> bool {
    value.is_empty() || re.is_match(value)
}

fn checked<T>(
    field: Field,
    value: String,
    is_valid: fn(&str) -> bool,
    wrap: fn(String) -> T,
) -> Result<T, ValidationError> {
    if is_valid(&value) {
        Ok(wrap(value))
    } else {
        Err(ValidationError::new(field, value))
    }
}

/// Person display name. Required.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::Name, value.into(), Self::is_valid, Self)
    }

    pub fn is_valid(value: &str) -> bool {
        NAME_RE.is_match(value)
    }
}

string_value!(Name);

/// Phone number. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::Phone, value.into(), Self::is_valid, Self)
    }

    pub fn is_valid(value: &str) -> bool {
        optional_matches(&PHONE_RE, value)
    }
}

string_value!(Phone);

/// Telegram handle, including the leading `@`. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TeleHandle(String);

impl TeleHandle {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::TeleHandle, value.into(), Self::is_valid, Self)
    }

    pub fn is_valid(value: &str) -> bool {
        optional_matches(&TELE_HANDLE_RE, value)
    }
}

string_value!(TeleHandle);

/// Email address. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::Email, value.into(), Self::is_valid, Self)
    }

    /// The last domain label must be at least two characters long.
    pub fn is_valid(value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        EMAIL_RE
            .captures(value)
            .and_then(|caps| caps.get(1))
            .is_some_and(|last_label| last_label.as_str().len() >= 2)
    }
}

string_value!(Email);

/// Matriculation number; the identity key of a person. Required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatNum(String);

impl MatNum {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(
            Field::MatNum,
            value.into().to_ascii_uppercase(),
            Self::is_valid,
            Self,
        )
    }

    /// Case-insensitive check.
    pub fn is_valid(value: &str) -> bool {
        MAT_NUM_RE.is_match(&value.to_ascii_uppercase())
    }
}

string_value!(MatNum);

/// Tutorial group code. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TutGroup(String);

impl TutGroup {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(
            Field::TutGroup,
            value.into().to_ascii_uppercase(),
            Self::is_valid,
            Self,
        )
    }

    pub fn is_valid(value: &str) -> bool {
        optional_matches(&TUT_GROUP_RE, &value.to_ascii_uppercase())
    }
}

string_value!(TutGroup);

/// Lab group code. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LabGroup(String);

impl LabGroup {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(
            Field::LabGroup,
            value.into().to_ascii_uppercase(),
            Self::is_valid,
            Self,
        )
    }

    pub fn is_valid(value: &str) -> bool {
        optional_matches(&LAB_GROUP_RE, &value.to_ascii_uppercase())
    }
}

string_value!(LabGroup);

/// Faculty name. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Faculty(String);

impl Faculty {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::Faculty, value.into(), Self::is_valid, Self)
    }

    pub fn is_valid(value: &str) -> bool {
        optional_matches(&FACULTY_RE, value)
    }
}

string_value!(Faculty);

/// Year of study. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Year(String);

impl Year {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::Year, value.into(), Self::is_valid, Self)
    }

    pub fn is_valid(value: &str) -> bool {
        optional_matches(&YEAR_RE, value)
    }
}

string_value!(Year);

/// Free-text note about a person. Optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::Remark, value.into(), Self::is_valid, Self)
    }

    pub fn is_valid(value: &str) -> bool {
        value.chars().count() <= REMARK_MAX_CHARS
    }
}

string_value!(Remark);

/// Short alphanumeric label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(Field::Tag, value.into(), Self::is_valid, Self)
    }

    pub fn is_valid(value: &str) -> bool {
        TAG_RE.is_match(value)
    }
}

string_value!(Tag);
