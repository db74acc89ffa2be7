//! Argument parsers for each command word.

use crate::command::{
    Command, EditPersonDescriptor, ADD_USAGE, ATTENDANCE_USAGE, DELETE_USAGE, EDIT_USAGE,
    FIND_USAGE, LAB_USAGE,
};
use crate::model::person::Person;
use crate::model::predicate::NameContainsKeywordsPredicate;
use crate::model::values::{
    Email, Faculty, LabGroup, MatNum, Name, Phone, Remark, Tag, TeleHandle, TutGroup, Year,
};
use crate::parser::fields::{
    parse_attendance_status, parse_index, parse_lab_number, parse_optional, parse_score,
    parse_tags, parse_value, parse_week,
};
use crate::parser::tokenizer::{
    tokenize, Prefix, PREFIX_EMAIL, PREFIX_FACULTY, PREFIX_LAB, PREFIX_LAB_GROUP,
    PREFIX_MAT_NUM, PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK, PREFIX_STATUS, PREFIX_TAG,
    PREFIX_TELE_HANDLE, PREFIX_TUT_GROUP, PREFIX_WEEK, PREFIX_YEAR,
};
use crate::parser::ParseError;
use std::collections::BTreeSet;

const PERSON_FIELD_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_TELE_HANDLE,
    PREFIX_EMAIL,
    PREFIX_MAT_NUM,
    PREFIX_TUT_GROUP,
    PREFIX_LAB_GROUP,
    PREFIX_FACULTY,
    PREFIX_YEAR,
    PREFIX_REMARK,
];

const ALL_PERSON_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_TELE_HANDLE,
    PREFIX_EMAIL,
    PREFIX_MAT_NUM,
    PREFIX_TUT_GROUP,
    PREFIX_LAB_GROUP,
    PREFIX_FACULTY,
    PREFIX_YEAR,
    PREFIX_REMARK,
    PREFIX_TAG,
];

/// Parses `find` arguments into a name predicate.
///
/// Keywords are the whitespace-separated tokens of the trimmed input, in
/// input order.
pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidCommandFormat(FIND_USAGE));
    }

    let keywords = trimmed.split_whitespace().map(str::to_string).collect();
    Ok(Command::Find(NameContainsKeywordsPredicate::new(keywords)))
}

pub fn parse_delete(args: &str) -> Result<Command, ParseError> {
    parse_index(args)
        .map(Command::Delete)
        .map_err(|_| ParseError::InvalidCommandFormat(DELETE_USAGE))
}

/// Parses `add` arguments into a new person with default records.
pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, ALL_PERSON_PREFIXES);
    let (Some(raw_name), Some(raw_mat_num)) = (map.value(PREFIX_NAME), map.value(PREFIX_MAT_NUM))
    else {
        return Err(ParseError::InvalidCommandFormat(ADD_USAGE));
    };
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(ADD_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(PERSON_FIELD_PREFIXES)?;

    let mut person = Person::new(
        parse_value(raw_name, Name::new)?,
        parse_value(raw_mat_num, MatNum::new)?,
    );
    if let Some(phone) = parse_optional(map.value(PREFIX_PHONE), Phone::new)? {
        person.phone = phone;
    }
    if let Some(handle) = parse_optional(map.value(PREFIX_TELE_HANDLE), TeleHandle::new)? {
        person.tele_handle = handle;
    }
    if let Some(email) = parse_optional(map.value(PREFIX_EMAIL), Email::new)? {
        person.email = email;
    }
    if let Some(tut_group) = parse_optional(map.value(PREFIX_TUT_GROUP), TutGroup::new)? {
        person.tut_group = tut_group;
    }
    if let Some(lab_group) = parse_optional(map.value(PREFIX_LAB_GROUP), LabGroup::new)? {
        person.lab_group = lab_group;
    }
    if let Some(faculty) = parse_optional(map.value(PREFIX_FACULTY), Faculty::new)? {
        person.faculty = faculty;
    }
    if let Some(year) = parse_optional(map.value(PREFIX_YEAR), Year::new)? {
        person.year = year;
    }
    if let Some(remark) = parse_optional(map.value(PREFIX_REMARK), Remark::new)? {
        person.remark = remark;
    }
    person.tags = parse_tags(map.all_values(PREFIX_TAG))?;

    Ok(Command::Add(person))
}

/// Parses `edit` arguments.
///
/// A single empty `tag/` clears all tags.
pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, ALL_PERSON_PREFIXES);
    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidCommandFormat(EDIT_USAGE))?;
    map.verify_no_duplicate_prefixes_for(PERSON_FIELD_PREFIXES)?;

    let descriptor = EditPersonDescriptor {
        name: parse_optional(map.value(PREFIX_NAME), Name::new)?,
        phone: parse_optional(map.value(PREFIX_PHONE), Phone::new)?,
        tele_handle: parse_optional(map.value(PREFIX_TELE_HANDLE), TeleHandle::new)?,
        email: parse_optional(map.value(PREFIX_EMAIL), Email::new)?,
        mat_num: parse_optional(map.value(PREFIX_MAT_NUM), MatNum::new)?,
        tut_group: parse_optional(map.value(PREFIX_TUT_GROUP), TutGroup::new)?,
        lab_group: parse_optional(map.value(PREFIX_LAB_GROUP), LabGroup::new)?,
        faculty: parse_optional(map.value(PREFIX_FACULTY), Faculty::new)?,
        year: parse_optional(map.value(PREFIX_YEAR), Year::new)?,
        remark: parse_optional(map.value(PREFIX_REMARK), Remark::new)?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::Edit { index, descriptor })
}

fn parse_tags_for_edit(raw: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse_tags(values).map(Some),
    }
}

/// Parses `att INDEX w/WEEK s/STATUS`.
pub fn parse_attendance(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_WEEK, PREFIX_STATUS]);
    let (Some(raw_week), Some(raw_status)) = (map.value(PREFIX_WEEK), map.value(PREFIX_STATUS))
    else {
        return Err(ParseError::InvalidCommandFormat(ATTENDANCE_USAGE));
    };
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidCommandFormat(ATTENDANCE_USAGE))?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_WEEK, PREFIX_STATUS])?;

    Ok(Command::MarkAttendance {
        index,
        week: parse_week(raw_week)?,
        status: parse_attendance_status(raw_status)?,
    })
}

/// Parses `lab INDEX l/LAB s/SCORE`.
pub fn parse_lab_score(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_LAB, PREFIX_STATUS]);
    let (Some(raw_lab), Some(raw_score)) = (map.value(PREFIX_LAB), map.value(PREFIX_STATUS))
    else {
        return Err(ParseError::InvalidCommandFormat(LAB_USAGE));
    };
    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidCommandFormat(LAB_USAGE))?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_LAB, PREFIX_STATUS])?;

    Ok(Command::SetLabScore {
        index,
        lab: parse_lab_number(raw_lab)?,
        score: parse_score(raw_score)?,
    })
}
