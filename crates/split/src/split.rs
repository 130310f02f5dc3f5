//! Tip and per-person arithmetic

use tracing::debug;

use crate::parse::{parse_decimal, parse_integer};

/// Amount used when the bill field is empty, unreadable or zero
pub const DEFAULT_AMOUNT: f64 = 0.0;
/// Tip percentage used when the tip field is empty, unreadable or zero
pub const DEFAULT_TIP_PERCENT: f64 = 0.0;
/// Party size used when the people field is empty, unreadable or zero
pub const DEFAULT_PEOPLE: i64 = 1;

/// The three numbers a split is computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillInputs {
    pub amount: f64,
    pub tip_percent: f64,
    pub people: i64,
}

impl BillInputs {
    pub const fn new(amount: f64, tip_percent: f64, people: i64) -> Self {
        Self {
            amount,
            tip_percent,
            people,
        }
    }

    /// Read inputs from raw form values, substituting defaults for anything
    /// that does not parse or parses to zero
    pub fn from_raw(amount: &str, tip_percent: &str, people: &str) -> Self {
        Self {
            amount: decimal_or("amount", amount, DEFAULT_AMOUNT),
            tip_percent: decimal_or("tip", tip_percent, DEFAULT_TIP_PERCENT),
            people: integer_or("people", people, DEFAULT_PEOPLE),
        }
    }

    pub fn split(&self) -> Split {
        Split::compute(self)
    }
}

impl Default for BillInputs {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT, DEFAULT_TIP_PERCENT, DEFAULT_PEOPLE)
    }
}

/// Result of splitting a bill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub tip_amount: f64,
    pub per_person: f64,
}

impl Split {
    pub fn compute(inputs: &BillInputs) -> Self {
        let tip_amount = inputs.amount * inputs.tip_percent / 100.0;
        let total = inputs.amount + tip_amount;
        Self {
            tip_amount,
            per_person: total / inputs.people as f64,
        }
    }
}

fn decimal_or(field: &str, raw: &str, fallback: f64) -> f64 {
    match parse_decimal(raw) {
        Ok(value) if is_truthy(value) => value,
        Ok(value) => {
            debug!(field, value, fallback, "zero input, using default");
            fallback
        }
        Err(err) => {
            debug!(field, error = %err, fallback, "unreadable input, using default");
            fallback
        }
    }
}

fn integer_or(field: &str, raw: &str, fallback: i64) -> i64 {
    match parse_integer(raw) {
        Ok(0) => {
            debug!(field, fallback, "zero input, using default");
            fallback
        }
        Ok(value) => value,
        Err(err) => {
            debug!(field, error = %err, fallback, "unreadable input, using default");
            fallback
        }
    }
}

/// Zero and NaN count as "no value"
fn is_truthy(value: f64) -> bool {
    !value.is_nan() && value.abs() > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_compute_example() {
        let split = BillInputs::new(1000.0, 10.0, 4).split();
        assert!(close(split.tip_amount, 100.0));
        assert!(close(split.per_person, 275.0));
    }

    #[test]
    fn test_compute_without_tip() {
        let split = BillInputs::new(90.0, 0.0, 3).split();
        assert!(close(split.tip_amount, 0.0));
        assert!(close(split.per_person, 30.0));
    }

    #[test]
    fn test_compute_matches_formula() {
        for (amount, tip, people) in [(0.0, 15.0, 1), (59.99, 12.5, 3), (1234.5, 18.0, 7)] {
            let split = BillInputs::new(amount, tip, people).split();
            let expected_tip = amount * tip / 100.0;
            assert!(close(split.tip_amount, expected_tip));
            assert!(close(split.per_person, (amount + expected_tip) / people as f64));
        }
    }

    #[test]
    fn test_from_raw_reads_values() {
        let inputs = BillInputs::from_raw("1000", "10", "4");
        assert_eq!(inputs, BillInputs::new(1000.0, 10.0, 4));
    }

    #[test]
    fn test_from_raw_empty_uses_defaults() {
        let inputs = BillInputs::from_raw("", "", "");
        assert_eq!(inputs, BillInputs::default());
        let split = inputs.split();
        assert!(close(split.tip_amount, 0.0));
        assert!(close(split.per_person, 0.0));
    }

    #[test]
    fn test_from_raw_garbage_uses_defaults() {
        let inputs = BillInputs::from_raw("lots", "some", "many");
        assert_eq!(inputs, BillInputs::new(0.0, 0.0, 1));
    }

    #[test]
    fn test_from_raw_zero_people_falls_back() {
        let inputs = BillInputs::from_raw("100", "0", "0");
        assert_eq!(inputs.people, 1);
        assert!(close(inputs.split().per_person, 100.0));
    }

    #[test]
    fn test_from_raw_keeps_negative_people() {
        let inputs = BillInputs::from_raw("100", "", "-2");
        assert_eq!(inputs.people, -2);
        assert!(close(inputs.split().per_person, -50.0));
    }
}
