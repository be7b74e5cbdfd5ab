//! Normalization of loosely keyed input into a [`TransactionRecord`].
//!
//! Manual entry and uploaded JSON both arrive here as a [`RawInput`] and take
//! the same path:
//!
//! 1. For each field in wire order, look up the canonical key (`V7`,
//!    `Amount`), then the lowercase key (`v7`, `amount`).
//! 2. Neither present: [`FieldIssue::Missing`].
//! 3. Present: coerce with [`coerce_value`]. Anything that is not a finite
//!    number (or a string spelling one) is [`FieldIssue::NotNumeric`].
//!
//! In [`NormalizeMode::FirstFailure`] the walk stops at the first issue; in
//! [`NormalizeMode::Aggregate`] every issue is collected.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::field::Field;
use super::record::TransactionRecord;

/// How many problems a failed normalization reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// Stop at the first missing or non-numeric field.
    #[default]
    FirstFailure,
    /// Walk every field and report all problems.
    Aggregate,
}

/// Untyped string-keyed input, as produced by the form or a JSON upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput(Map<String, Value>);

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical key first, lowercase key second.
    fn lookup(&self, field: Field) -> Option<(String, &Value)> {
        let upper = field.canonical_key();
        if let Some(value) = self.0.get(&upper) {
            return Some((upper, value));
        }
        let lower = field.lower_key();
        self.0.get(&lower).map(|value| (lower, value))
    }
}

impl From<Map<String, Value>> for RawInput {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// A single problem found while normalizing one field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldIssue {
    #[error("Missing field: {} or {}", .0.lower_key(), .0.canonical_key())]
    Missing(Field),
    #[error("Invalid value for {key}: must be a valid number")]
    NotNumeric { field: Field, key: String },
}

impl FieldIssue {
    pub fn field(&self) -> Field {
        match self {
            FieldIssue::Missing(field) => *field,
            FieldIssue::NotNumeric { field, .. } => *field,
        }
    }
}

/// Normalization failed. Holds one issue in first-failure mode, all of them in
/// aggregate mode; never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeError {
    issues: Vec<FieldIssue>,
}

impl NormalizeError {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// The first issue in wire order.
    pub fn first(&self) -> &FieldIssue {
        &self.issues[0]
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for NormalizeError {}

/// The numeric rule shared by manual validation and normalization: non-blank
/// after trimming, parses as a number, and is finite.
pub fn coerce_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Numbers pass through, strings go through [`coerce_str`], everything else
/// (null, booleans, arrays, objects) is rejected.
pub fn coerce_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => coerce_str(text),
        _ => None,
    }
}

/// Normalize with the default first-failure policy.
pub fn normalize(raw: &RawInput) -> Result<TransactionRecord, NormalizeError> {
    normalize_with(raw, NormalizeMode::FirstFailure)
}

pub fn normalize_with(
    raw: &RawInput,
    mode: NormalizeMode,
) -> Result<TransactionRecord, NormalizeError> {
    let mut slots = [0.0_f64; 30];
    let mut issues = Vec::new();

    for field in Field::all() {
        let outcome = match raw.lookup(field) {
            None => Err(FieldIssue::Missing(field)),
            Some((key, value)) => {
                coerce_value(value).ok_or(FieldIssue::NotNumeric { field, key })
            }
        };

        match outcome {
            Ok(value) => slots[field.slot()] = value,
            Err(issue) => {
                issues.push(issue);
                if mode == NormalizeMode::FirstFailure {
                    break;
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(TransactionRecord::from_slots(slots))
    } else {
        Err(NormalizeError { issues })
    }
}
