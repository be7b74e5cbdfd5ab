//! Formatting helpers for presenting verdicts.

/// `0.1234` -> `"12.34%"`.
pub fn format_risk(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(format_risk(0.1234), "12.34%");
        assert_eq!(format_risk(1.0), "100.00%");
        assert_eq!(format_risk(0.0), "0.00%");
    }
}
