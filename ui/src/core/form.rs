//! Manual entry: 30 string fields validated one by one.

use std::collections::BTreeMap;

use super::field::Field;
use super::normalize::{coerce_str, RawInput};
use super::sample;

/// Why a manual field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Blank, unparsable, or not finite.
    InvalidNumber,
}

/// Per-field validation failures; empty when the form is valid.
pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Current text of every manual field, keyed by [`Field`].
#[derive(Debug, Clone, PartialEq)]
pub struct ManualForm {
    values: BTreeMap<Field, String>,
}

impl Default for ManualForm {
    fn default() -> Self {
        Self::empty()
    }
}

impl ManualForm {
    /// All fields blank.
    pub fn empty() -> Self {
        Self {
            values: Field::all().map(|field| (field, String::new())).collect(),
        }
    }

    /// The demonstration fixture, as the form would hold it.
    pub fn sample() -> Self {
        let mut form = Self::empty();
        for (field, value) in sample::sample_values() {
            form.set(field, value);
        }
        form
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Validate a single field.
    pub fn check(&self, field: Field) -> Option<FieldError> {
        coerce_str(self.value(field))
            .is_none()
            .then_some(FieldError::InvalidNumber)
    }

    /// Validate every field independently.
    pub fn validate(&self) -> FieldErrors {
        Field::all()
            .filter_map(|field| self.check(field).map(|err| (field, err)))
            .collect()
    }

    /// Validated form contents as a [`RawInput`] under the lowercase keys,
    /// ready for the shared normalizer.
    pub fn to_raw(&self) -> Result<RawInput, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Field::all()
            .map(|field| (field.lower_key(), self.value(field).to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_flags_every_field() {
        let errors = ManualForm::empty().validate();
        assert_eq!(errors.len(), 30);
        assert!(errors
            .values()
            .all(|err| *err == FieldError::InvalidNumber));
    }

    #[test]
    fn only_the_bad_field_is_reported() {
        let mut form = ManualForm::sample();
        form.set(Field::Feature(4), "  ");
        form.set(Field::Amount, "12,50");
        let errors = form.validate();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Feature(4), Field::Amount]
        );
        assert!(form.to_raw().is_err());
    }

    #[test]
    fn raw_uses_lowercase_string_values() {
        let raw = ManualForm::sample().to_raw().unwrap();
        assert_eq!(raw.len(), 30);
        assert_eq!(raw.get("v1").and_then(|v| v.as_str()), Some("-1.3598"));
        assert_eq!(raw.get("amount").and_then(|v| v.as_str()), Some("100.00"));
        assert!(raw.get("V1").is_none());
    }
}
