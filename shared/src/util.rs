//! Small shared utilities

/// Current Unix timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Round to two decimal places (hours worked, money-adjacent display values)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(8.499999), 8.5);
        assert_eq!(round2(8.504), 8.5);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(7.125), 7.13);
    }
}
