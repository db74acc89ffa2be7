//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical student record managed by a teaching assistant.
//! - Provide identity semantics used for duplicate detection.
//!
//! # Invariants
//! - Every field holds an already-validated value object.
//! - Two persons are the same person when their `mat_num` matches.
//! - `tags` is a set; insertion order is not significant.

use crate::model::attendance::AttendanceList;
use crate::model::lab_score::LabScoreList;
use crate::model::values::{
    Email, Faculty, LabGroup, MatNum, Name, Phone, Remark, TeleHandle, Tag, TutGroup, Year,
};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Canonical domain record for one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub tele_handle: TeleHandle,
    pub email: Email,
    pub mat_num: MatNum,
    pub tut_group: TutGroup,
    pub lab_group: LabGroup,
    pub faculty: Faculty,
    pub year: Year,
    pub remark: Remark,
    pub attendance: AttendanceList,
    pub lab_scores: LabScoreList,
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a person with only the required fields set.
    ///
    /// # Invariants
    /// - Optional fields start empty.
    /// - Attendance and lab scores start at their defaults.
    pub fn new(name: Name, mat_num: MatNum) -> Self {
        Self {
            name,
            phone: Phone::default(),
            tele_handle: TeleHandle::default(),
            email: Email::default(),
            mat_num,
            tut_group: TutGroup::default(),
            lab_group: LabGroup::default(),
            faculty: Faculty::default(),
            year: Year::default(),
            remark: Remark::default(),
            attendance: AttendanceList::default(),
            lab_scores: LabScoreList::default(),
            tags: BTreeSet::new(),
        }
    }

    /// Weaker notion of equality used to reject duplicates.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.mat_num == other.mat_num
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; Mat Num: {}", self.name, self.mat_num)?;
        let optional = [
            ("Phone", self.phone.as_str()),
            ("Tele", self.tele_handle.as_str()),
            ("Email", self.email.as_str()),
            ("Tutorial", self.tut_group.as_str()),
            ("Lab", self.lab_group.as_str()),
            ("Faculty", self.faculty.as_str()),
            ("Year", self.year.as_str()),
            ("Remark", self.remark.as_str()),
        ];
        for (label, value) in optional {
            if !value.is_empty() {
                write!(f, "; {label}: {value}")?;
            }
        }
        write!(
            f,
            "; Attendance: {}/{}; Lab scores: {}",
            self.attendance.attended_count(),
            self.attendance.session_count(),
            self.lab_scores
        )?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}
