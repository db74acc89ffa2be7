//! Prefix-based argument tokenizer.
//!
//! # Invariants
//! - A prefix is recognised only at the start of the argument string or
//!   right after whitespace.
//! - Values are trimmed; values of a repeated prefix keep input order.

use crate::parser::ParseError;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Argument prefix such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(raw: &'static str) -> Self {
        Self(raw)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_TELE_HANDLE: Prefix = Prefix::new("h/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_MAT_NUM: Prefix = Prefix::new("m/");
pub const PREFIX_TUT_GROUP: Prefix = Prefix::new("t/");
pub const PREFIX_LAB_GROUP: Prefix = Prefix::new("b/");
pub const PREFIX_FACULTY: Prefix = Prefix::new("f/");
pub const PREFIX_YEAR: Prefix = Prefix::new("y/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_TAG: Prefix = Prefix::new("tag/");
pub const PREFIX_WEEK: Prefix = Prefix::new("w/");
pub const PREFIX_STATUS: Prefix = Prefix::new("s/");
pub const PREFIX_LAB: Prefix = Prefix::new("l/");

/// Tokenized arguments: preamble plus values keyed by prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// All values given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails when any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Splits `args` into preamble and prefixed values.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded = format!(" {args}");

    // (start of the separating whitespace, prefix)
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        for (idx, ch) in padded.char_indices() {
            if ch.is_whitespace() && padded[idx + ch.len_utf8()..].starts_with(prefix.as_str()) {
                positions.push((idx, *prefix));
            }
        }
    }
    positions.sort_by_key(|(idx, _)| *idx);

    let preamble_end = positions.first().map_or(padded.len(), |(idx, _)| *idx);
    let mut multimap = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (pos, (idx, prefix)) in positions.iter().enumerate() {
        let ws_len = padded[*idx..].chars().next().map_or(1, char::len_utf8);
        let value_start = idx + ws_len + prefix.as_str().len();
        let value_end = positions.get(pos + 1).map_or(padded.len(), |(next, _)| *next);
        let value = padded[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}
