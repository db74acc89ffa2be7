//! Weekly tutorial attendance.
//!
//! # Invariants
//! - An `AttendanceList` always holds exactly `WEEKS` entries.
//! - The encoded form is one digit per week, `0..=3`.

use crate::model::field::{Field, ValidationError};
use std::fmt::{Display, Formatter};

/// Number of teaching weeks tracked per person.
pub const WEEKS: usize = 13;

/// Attendance for weeks 1 and 2 is `NoTutorial`, the rest `Absent`.
pub const DEFAULT_ATTENDANCE: &str = "3300000000000";

/// Attendance state for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Absent,
    Attended,
    OnMc,
    NoTutorial,
}

impl AttendanceStatus {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Self::Absent),
            '1' => Some(Self::Attended),
            '2' => Some(Self::OnMc),
            '3' => Some(Self::NoTutorial),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Attended => '1',
            Self::OnMc => '2',
            Self::NoTutorial => '3',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Attended => "attended",
            Self::OnMc => "on MC",
            Self::NoTutorial => "no tutorial",
        }
    }
}

/// Per-week attendance for one person.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttendanceList {
    weeks: [AttendanceStatus; WEEKS],
}

impl AttendanceList {
    /// Parses the encoded attendance string.
    pub fn new(encoded: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::new(Field::AttendanceList, encoded);
        if encoded.chars().count() != WEEKS {
            return Err(invalid());
        }

        let mut weeks = [AttendanceStatus::Absent; WEEKS];
        for (slot, code) in weeks.iter_mut().zip(encoded.chars()) {
            *slot = AttendanceStatus::from_code(code).ok_or_else(invalid)?;
        }
        Ok(Self { weeks })
    }

    pub fn is_valid(encoded: &str) -> bool {
        encoded.chars().count() == WEEKS
            && encoded
                .chars()
                .all(|code| AttendanceStatus::from_code(code).is_some())
    }

    /// Returns the status for a 1-based week.
    pub fn get(&self, week: usize) -> Option<AttendanceStatus> {
        week.checked_sub(1)
            .and_then(|idx| self.weeks.get(idx))
            .copied()
    }

    /// Sets the status for a 1-based week. Returns `false` when out of range.
    pub fn set(&mut self, week: usize, status: AttendanceStatus) -> bool {
        match week.checked_sub(1).and_then(|idx| self.weeks.get_mut(idx)) {
            Some(slot) => {
                *slot = status;
                true
            }
            None => false,
        }
    }

    /// Counts weeks marked `Attended`.
    pub fn attended_count(&self) -> usize {
        self.weeks
            .iter()
            .filter(|status| **status == AttendanceStatus::Attended)
            .count()
    }

    /// Counts weeks in which a tutorial took place.
    pub fn session_count(&self) -> usize {
        self.weeks
            .iter()
            .filter(|status| **status != AttendanceStatus::NoTutorial)
            .count()
    }
}

impl Default for AttendanceList {
    fn default() -> Self {
        let mut weeks = [AttendanceStatus::Absent; WEEKS];
        weeks[0] = AttendanceStatus::NoTutorial;
        weeks[1] = AttendanceStatus::NoTutorial;
        Self { weeks }
    }
}

impl Display for AttendanceList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.weeks
            .iter()
            .try_for_each(|status| write!(f, "{}", status.code()))
    }
}
