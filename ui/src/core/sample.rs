//! Demonstration fixture for the manual form.

use super::field::Field;

const SAMPLE_FEATURES: [&str; 28] = [
    "-1.3598", "-0.07278", "2.5363", "1.3781", "-0.3383", "0.4624", "0.2396", "0.0986",
    "0.3634", "0.0908", "-0.5514", "-0.6178", "-0.9913", "-0.3111", "1.4681", "-0.4704",
    "0.2079", "0.0257", "0.4034", "0.2514", "-0.0182", "-0.0351", "-0.1435", "0.1001",
    "-0.0458", "0.0616", "-0.0823", "0.0085",
];

const SAMPLE_AMOUNT: &str = "100.00";
const SAMPLE_TIME: &str = "45000";

/// `(field, text)` pairs in wire order.
pub fn sample_values() -> impl Iterator<Item = (Field, &'static str)> {
    SAMPLE_FEATURES
        .iter()
        .enumerate()
        .map(|(idx, value)| (Field::Feature(idx as u8 + 1), *value))
        .chain([(Field::Amount, SAMPLE_AMOUNT), (Field::Time, SAMPLE_TIME)])
}
