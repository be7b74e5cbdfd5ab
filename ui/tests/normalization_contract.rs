//! Contract tests for the shared normalizer: key-case fallback, first-failure
//! reporting, purity, and the sample fixture.

use serde_json::{json, Value};
use ui::core::field::{Field, FEATURE_COUNT};
use ui::core::form::ManualForm;
use ui::core::normalize::{normalize, normalize_with, FieldIssue, NormalizeMode, RawInput};

fn value_for(field: Field) -> Value {
    match field {
        Field::Feature(i) => json!(f64::from(i) / 10.0 - 1.0),
        Field::Amount => json!("249.99"),
        Field::Time => json!(86_400),
    }
}

fn keyed(key_of: impl Fn(Field) -> String) -> RawInput {
    Field::all()
        .map(|field| (key_of(field), value_for(field)))
        .collect()
}

fn without(raw_of: impl Fn(Field) -> String, skip: &[Field]) -> RawInput {
    Field::all()
        .filter(|field| !skip.contains(field))
        .map(|field| (raw_of(field), value_for(field)))
        .collect()
}

#[test]
fn case_fallback_is_symmetric_for_every_field() {
    let baseline = normalize(&keyed(Field::canonical_key)).unwrap();

    for target in Field::all() {
        // Only `target` spelled lowercase, everything else canonical.
        let mixed = keyed(|field| {
            if field == target {
                field.lower_key()
            } else {
                field.canonical_key()
            }
        });
        assert_eq!(
            normalize(&mixed).unwrap(),
            baseline,
            "lowercase {target} should normalize like its canonical spelling"
        );
    }
}

#[test]
fn upper_and_lower_keyed_inputs_produce_equal_records() {
    let upper = normalize(&keyed(Field::canonical_key)).unwrap();
    let lower = normalize(&keyed(Field::lower_key)).unwrap();
    assert_eq!(upper, lower);
    for field in Field::all() {
        assert_eq!(upper.get(field), lower.get(field), "{field} differs");
    }
}

#[test]
fn every_missing_feature_is_named_in_both_spellings() {
    for i in 1..=FEATURE_COUNT {
        let field = Field::Feature(i);
        for key_of in [Field::canonical_key as fn(Field) -> String, Field::lower_key] {
            let err = normalize(&without(key_of, &[field])).unwrap_err();
            assert_eq!(err.issues(), &[FieldIssue::Missing(field)]);
            assert_eq!(err.to_string(), format!("Missing field: v{i} or V{i}"));
        }
    }
}

#[test]
fn missing_feature_is_reported_regardless_of_later_garbage() {
    let mut raw = without(Field::canonical_key, &[Field::Feature(4)]);
    raw.insert("V20", "not a number");
    raw.insert("Time", Value::Null);
    let err = normalize(&raw).unwrap_err();
    assert_eq!(err.to_string(), "Missing field: v4 or V4");
}

#[test]
fn amount_is_checked_before_time() {
    let err = normalize(&without(Field::lower_key, &[Field::Amount, Field::Time])).unwrap_err();
    assert_eq!(err.to_string(), "Missing field: amount or Amount");

    let err = normalize(&without(Field::lower_key, &[Field::Time])).unwrap_err();
    assert_eq!(err.to_string(), "Missing field: time or Time");
}

#[test]
fn non_numeric_upload_values_are_rejected() {
    let mut raw = keyed(Field::canonical_key);
    raw.insert("V7", "abc");
    let err = normalize(&raw).unwrap_err();
    assert_eq!(
        err.first(),
        &FieldIssue::NotNumeric {
            field: Field::Feature(7),
            key: "V7".into()
        }
    );

    let mut raw = keyed(Field::lower_key);
    raw.insert("amount", true);
    assert!(matches!(
        normalize(&raw).unwrap_err().first(),
        FieldIssue::NotNumeric {
            field: Field::Amount,
            ..
        }
    ));
}

#[test]
fn normalization_is_deterministic() {
    let good = keyed(Field::lower_key);
    let bad = without(Field::canonical_key, &[Field::Feature(17)]);
    for _ in 0..3 {
        assert_eq!(normalize(&good), normalize(&good));
        assert_eq!(normalize(&bad), normalize(&bad));
    }
}

#[test]
fn aggregate_mode_lists_all_missing_fields() {
    let raw = without(
        Field::canonical_key,
        &[Field::Feature(1), Field::Feature(28), Field::Amount],
    );
    let err = normalize_with(&raw, NormalizeMode::Aggregate).unwrap_err();
    let fields: Vec<Field> = err.issues().iter().map(FieldIssue::field).collect();
    assert_eq!(
        fields,
        vec![Field::Feature(1), Field::Feature(28), Field::Amount]
    );

    let single = normalize_with(&raw, NormalizeMode::FirstFailure).unwrap_err();
    assert_eq!(single.issues().len(), 1);
}

#[test]
fn sample_fixture_normalizes_to_documented_values() {
    let raw = ManualForm::sample().to_raw().expect("sample passes validation");
    let record = normalize(&raw).expect("sample normalizes");

    assert_eq!(record.get(Field::Feature(1)), -1.3598);
    assert_eq!(record.get(Field::Feature(2)), -0.07278);
    assert_eq!(record.get(Field::Feature(15)), 1.4681);
    assert_eq!(record.get(Field::Feature(28)), 0.0085);
    assert_eq!(record.amount(), 100.0);
    assert_eq!(record.time(), 45_000.0);

    let wire = serde_json::to_value(&record).unwrap();
    let object = wire.as_object().unwrap();
    assert_eq!(object.len(), 30);
    assert!(object.values().all(Value::is_number));
    assert_eq!(object["Amount"], 100.0);
    assert_eq!(object["Time"], 45_000.0);
}
