//! Lab assignment scores.
//!
//! # Invariants
//! - A `LabScoreList` always holds exactly `LABS` entries.
//! - A graded score never exceeds its lab maximum; maxima are positive.

use crate::model::field::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of labs tracked per person.
pub const LABS: usize = 4;

/// Default maximum score for each lab.
pub const DEFAULT_LAB_MAX: u32 = 25;

pub const DEFAULT_LAB_SCORES: &str = "-/25 -/25 -/25 -/25";

static LAB_SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-|[0-9]+)/([0-9]+)$").expect("valid lab score regex"));

/// Score for one lab. `score == None` means ungraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabScore {
    pub score: Option<u32>,
    pub max: u32,
}

impl LabScore {
    fn parse(token: &str) -> Option<Self> {
        let caps = LAB_SCORE_RE.captures(token)?;
        let max: u32 = caps.get(2)?.as_str().parse().ok()?;
        let score = match caps.get(1)?.as_str() {
            "-" => None,
            digits => Some(digits.parse::<u32>().ok()?),
        };
        if max == 0 || score.is_some_and(|value| value > max) {
            return None;
        }
        Some(Self { score, max })
    }
}

impl Default for LabScore {
    fn default() -> Self {
        Self {
            score: None,
            max: DEFAULT_LAB_MAX,
        }
    }
}

impl Display for LabScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.score {
            Some(score) => write!(f, "{score}/{}", self.max),
            None => write!(f, "-/{}", self.max),
        }
    }
}

/// Failure to update a single lab score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabScoreError {
    NoSuchLab(usize),
    ExceedsMax { lab: usize, score: u32, max: u32 },
}

impl Display for LabScoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchLab(lab) => write!(f, "lab number must be from 1 to {LABS}, got {lab}"),
            Self::ExceedsMax { lab, score, max } => write!(
                f,
                "score {score} for lab {lab} exceeds the maximum score of {max}"
            ),
        }
    }
}

impl Error for LabScoreError {}

/// Scores for all labs of one person.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabScoreList {
    labs: [LabScore; LABS],
}

impl LabScoreList {
    /// Parses `SCORE/MAX` entries separated by single spaces.
    pub fn new(encoded: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::new(Field::LabScoreList, encoded);
        let tokens: Vec<&str> = encoded.split(' ').collect();
        if tokens.len() != LABS {
            return Err(invalid());
        }

        let mut labs = [LabScore::default(); LABS];
        for (slot, token) in labs.iter_mut().zip(tokens) {
            *slot = LabScore::parse(token).ok_or_else(invalid)?;
        }
        Ok(Self { labs })
    }

    pub fn is_valid(encoded: &str) -> bool {
        Self::new(encoded).is_ok()
    }

    /// Returns the score entry for a 1-based lab number.
    pub fn get(&self, lab: usize) -> Option<LabScore> {
        lab.checked_sub(1).and_then(|idx| self.labs.get(idx)).copied()
    }

    /// Records a graded score for a 1-based lab number.
    pub fn set_score(&mut self, lab: usize, score: u32) -> Result<(), LabScoreError> {
        let slot = lab
            .checked_sub(1)
            .and_then(|idx| self.labs.get_mut(idx))
            .ok_or(LabScoreError::NoSuchLab(lab))?;
        if score > slot.max {
            return Err(LabScoreError::ExceedsMax {
                lab,
                score,
                max: slot.max,
            });
        }
        slot.score = Some(score);
        Ok(())
    }

}

impl Default for LabScoreList {
    fn default() -> Self {
        Self {
            labs: [LabScore::default(); LABS],
        }
    }
}

impl Display for LabScoreList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, lab) in self.labs.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{lab}")?;
        }
        Ok(())
    }
}
