//! Parsers for individual argument values.
//!
//! Every function trims its input before validating it.

use crate::command::Index;
use crate::model::attendance::{AttendanceStatus, WEEKS};
use crate::model::field::ValidationError;
use crate::model::lab_score::LABS;
use crate::model::values::Tag;
use crate::parser::ParseError;
use std::collections::BTreeSet;

/// Parses a one-based, non-zero list index.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    parse_positive(raw)
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parses any value object from trimmed text.
pub fn parse_value<T>(
    raw: &str,
    new: fn(String) -> Result<T, ValidationError>,
) -> Result<T, ParseError> {
    Ok(new(raw.trim().to_string())?)
}

/// Parses an optional value object, passing `None` through.
pub fn parse_optional<T>(
    raw: Option<&str>,
    new: fn(String) -> Result<T, ValidationError>,
) -> Result<Option<T>, ParseError> {
    raw.map(|value| parse_value(value, new)).transpose()
}

/// Parses tag values into a set, failing on the first invalid tag.
pub fn parse_tags(raw: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    raw.iter()
        .map(|tag| parse_value(tag, Tag::new))
        .collect()
}

/// Parses a 1-based week number.
pub fn parse_week(raw: &str) -> Result<usize, ParseError> {
    parse_positive(raw)
        .filter(|week| *week <= WEEKS)
        .ok_or(ParseError::InvalidWeek)
}

/// Parses a single-digit attendance status code.
pub fn parse_attendance_status(raw: &str) -> Result<AttendanceStatus, ParseError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => {
            AttendanceStatus::from_code(code).ok_or(ParseError::InvalidAttendanceStatus)
        }
        _ => Err(ParseError::InvalidAttendanceStatus),
    }
}

/// Parses a 1-based lab number.
pub fn parse_lab_number(raw: &str) -> Result<usize, ParseError> {
    parse_positive(raw)
        .filter(|lab| *lab <= LABS)
        .ok_or(ParseError::InvalidLabNumber)
}

pub fn parse_score(raw: &str) -> Result<u32, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidScore);
    }
    trimmed.parse().map_err(|_| ParseError::InvalidScore)
}

fn parse_positive(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().filter(|value| *value > 0)
}
