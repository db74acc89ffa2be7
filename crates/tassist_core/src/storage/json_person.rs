//! JSON-facing person record.
//!
//! # Responsibility
//! - Mirror `Person` as a flat, string-typed record for persistence.
//! - Convert records into validated domain objects and back.
//!
//! # Invariants
//! - `to_model_type` validates fields in a fixed order: name, phone,
//!   tele handle, email, mat num, tut group, lab group, faculty, year,
//!   remark, attendance, lab scores, tags. The first failure is returned.
//! - `to_model_type` never returns a partially built person.
//! - `from_model_type` is total; its output always converts back.

use crate::model::attendance::AttendanceList;
use crate::model::field::{Field, ValidationError};
use crate::model::lab_score::LabScoreList;
use crate::model::person::Person;
use crate::model::values::{
    Email, Faculty, LabGroup, MatNum, Name, Phone, Remark, TeleHandle, Tag, TutGroup, Year,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persisted record could not be turned into a domain object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is absent from the record.
    MissingField(Field),
    /// A present field violates its constraint.
    InvalidValue(ValidationError),
    /// Two records describe the same person.
    DuplicatePerson,
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Person's {field} field is missing!"),
            Self::InvalidValue(err) => write!(f, "{err}"),
            Self::DuplicatePerson => write!(f, "Persons list contains duplicate person(s)."),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RecordError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidValue(value)
    }
}

/// Flat JSON shape of one person.
///
/// Every scalar is optional here only so that absent keys can be reported
/// as missing fields instead of generic deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPerson {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tele_handle: Option<String>,
    pub email: Option<String>,
    pub mat_num: Option<String>,
    pub tut_group: Option<String>,
    pub lab_group: Option<String>,
    pub faculty: Option<String>,
    pub year: Option<String>,
    pub remark: Option<String>,
    pub attendance_list: Option<String>,
    pub lab_score_list: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JsonAdaptedPerson {
    /// Converts a domain person into its persisted form.
    pub fn from_model_type(person: &Person) -> Self {
        Self {
            name: Some(person.name.to_string()),
            phone: Some(person.phone.to_string()),
            tele_handle: Some(person.tele_handle.to_string()),
            email: Some(person.email.to_string()),
            mat_num: Some(person.mat_num.to_string()),
            tut_group: Some(person.tut_group.to_string()),
            lab_group: Some(person.lab_group.to_string()),
            faculty: Some(person.faculty.to_string()),
            year: Some(person.year.to_string()),
            remark: Some(person.remark.to_string()),
            attendance_list: Some(person.attendance.to_string()),
            lab_score_list: Some(person.lab_scores.to_string()),
            tags: person.tags.iter().map(Tag::to_string).collect(),
        }
    }

    /// Validates every field and builds a `Person`.
    ///
    /// # Errors
    /// - `RecordError::MissingField` for the first absent field.
    /// - `RecordError::InvalidValue` for the first constraint violation.
    pub fn to_model_type(&self) -> Result<Person, RecordError> {
        let name = Name::new(required(&self.name, Field::Name)?)?;
        let phone = Phone::new(required(&self.phone, Field::Phone)?)?;
        let tele_handle = TeleHandle::new(required(&self.tele_handle, Field::TeleHandle)?)?;
        let email = Email::new(required(&self.email, Field::Email)?)?;
        let mat_num = MatNum::new(required(&self.mat_num, Field::MatNum)?)?;
        let tut_group = TutGroup::new(required(&self.tut_group, Field::TutGroup)?)?;
        let lab_group = LabGroup::new(required(&self.lab_group, Field::LabGroup)?)?;
        let faculty = Faculty::new(required(&self.faculty, Field::Faculty)?)?;
        let year = Year::new(required(&self.year, Field::Year)?)?;
        let remark = Remark::new(required(&self.remark, Field::Remark)?)?;
        let attendance =
            AttendanceList::new(required(&self.attendance_list, Field::AttendanceList)?)?;
        let lab_scores = LabScoreList::new(required(&self.lab_score_list, Field::LabScoreList)?)?;
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::new(tag.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Person {
            name,
            phone,
            tele_handle,
            email,
            mat_num,
            tut_group,
            lab_group,
            faculty,
            year,
            remark,
            attendance,
            lab_scores,
            tags,
        })
    }
}

fn required(value: &Option<String>, field: Field) -> Result<&str, RecordError> {
    value.as_deref().ok_or(RecordError::MissingField(field))
}
