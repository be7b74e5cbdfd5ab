//! The canonical, service-facing transaction record.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::field::Field;

const SLOTS: usize = 30;

/// Fully numeric record in the exact shape the scoring service accepts.
///
/// Only [`crate::core::normalize`] builds one, so every slot is a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    values: [f64; SLOTS],
}

impl TransactionRecord {
    pub(crate) fn from_slots(values: [f64; SLOTS]) -> Self {
        Self { values }
    }

    pub fn get(&self, field: Field) -> f64 {
        self.values[field.slot()]
    }

    pub fn amount(&self) -> f64 {
        self.get(Field::Amount)
    }

    pub fn time(&self) -> f64 {
        self.get(Field::Time)
    }

    /// `(canonical key, value)` pairs in wire order.
    pub fn entries(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        Field::all().map(move |field| (field.canonical_key(), self.get(field)))
    }
}

impl Serialize for TransactionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SLOTS))?;
        for (key, value) in self.entries() {
            map.serialize_entry(&key, &value)?;
        }
        map.end()
    }
}
