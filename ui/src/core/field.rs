//! Names of the 30 transaction fields in both of their key spellings.

use std::fmt;

/// Number of anonymized `V` features the scoring service expects.
pub const FEATURE_COUNT: u8 = 28;

/// One of the 30 transaction fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// `V1`..`V28`. The index is 1-based.
    Feature(u8),
    Amount,
    Time,
}

impl Field {
    /// All fields in wire order: `V1`..`V28`, `Amount`, `Time`.
    pub fn all() -> impl Iterator<Item = Field> {
        (1..=FEATURE_COUNT)
            .map(Field::Feature)
            .chain([Field::Amount, Field::Time])
    }

    /// Key used by the scoring service (`V7`, `Amount`, `Time`).
    pub fn canonical_key(self) -> String {
        match self {
            Field::Feature(i) => format!("V{i}"),
            Field::Amount => "Amount".to_string(),
            Field::Time => "Time".to_string(),
        }
    }

    /// Lowercase spelling, also used as the manual form's field name.
    pub fn lower_key(self) -> String {
        match self {
            Field::Feature(i) => format!("v{i}"),
            Field::Amount => "amount".to_string(),
            Field::Time => "time".to_string(),
        }
    }

    /// Position in wire order (0..30).
    pub(crate) fn slot(self) -> usize {
        match self {
            Field::Feature(i) => usize::from(i) - 1,
            Field::Amount => usize::from(FEATURE_COUNT),
            Field::Time => usize::from(FEATURE_COUNT) + 1,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_key())
    }
}
