//! The scoring service's answer and its schema check.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_fraud: bool,
    pub fraud_probability: f64,
}

impl Verdict {
    /// Parse a success body. Unknown keys are ignored; a missing key, a wrong
    /// type, or a probability outside `[0, 1]` is an error.
    pub fn from_body(body: &str) -> Result<Self, String> {
        let verdict: Verdict = serde_json::from_str(body).map_err(|err| err.to_string())?;
        if !(0.0..=1.0).contains(&verdict.fraud_probability) {
            return Err(format!(
                "fraud_probability {} is outside [0, 1]",
                verdict.fraud_probability
            ));
        }
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_keys_are_ignored() {
        let verdict =
            Verdict::from_body(r#"{"is_fraud": true, "fraud_probability": 0.87, "model": "x"}"#)
                .unwrap();
        assert!(verdict.is_fraud);
        assert_eq!(verdict.fraud_probability, 0.87);
    }

    #[test]
    fn schema_violations_are_errors() {
        assert!(Verdict::from_body(r#"{"is_fraud": true}"#).is_err());
        assert!(Verdict::from_body(r#"{"is_fraud": "yes", "fraud_probability": 0.1}"#).is_err());
        assert!(Verdict::from_body(r#"{"is_fraud": false, "fraud_probability": 1.5}"#).is_err());
        assert!(Verdict::from_body("not json").is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Verdict::from_body(r#"{"is_fraud": false, "fraud_probability": 0}"#).is_ok());
        assert!(Verdict::from_body(r#"{"is_fraud": true, "fraud_probability": 1}"#).is_ok());
    }
}
