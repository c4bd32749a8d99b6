//! # Shared Utility Functions
//!
//! Money helpers used by the domain library and the frontend.
//!
//! ## Amounts
//!
//! Prices travel as decimal text and are summed as `f64`. Every amount that
//! leaves the program (rendered or stored) goes through [`format_amount`], so
//! it always carries exactly two fraction digits.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_amount, round_to_cents};
//!
//! assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
//! assert_eq!(format_amount(50.0), "50.00");
//! ```

/// Parse decimal text, falling back to `0.0` for empty, malformed or
/// non-finite input.
///
/// # Examples
///
/// ```rust
/// use shared::utils::parse_decimal;
///
/// assert_eq!(parse_decimal(" 19.90 "), 19.9);
/// assert_eq!(parse_decimal("abc"), 0.0);
/// assert_eq!(parse_decimal("NaN"), 0.0);
/// assert_eq!(parse_decimal("100 THB"), 0.0);
/// ```
pub fn parse_decimal(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Round to two decimal places (half away from zero).
pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid rendering "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format an amount with exactly two fraction digits.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(200.0), "200.00");
/// assert_eq!(format_amount(12.346), "12.35");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

/// Format an amount prefixed by its currency label, e.g. `"THB 250.00"`.
pub fn format_money(currency: &str, value: f64) -> String {
    format!("{} {}", currency, format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("100"), 100.0);
        assert_eq!(parse_decimal("-2.5"), -2.5);
        assert_eq!(parse_decimal(""), 0.0);
        assert_eq!(parse_decimal("inf"), 0.0);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(12.344), 12.34);
        assert_eq!(round_to_cents(12.346), 12.35);
        assert_eq!(round_to_cents(-0.001), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.0001), "0.00");
        assert_eq!(format_amount(1234.5), "1234.50");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("THB", 250.0), "THB 250.00");
    }
}
