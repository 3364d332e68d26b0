//! Amount parsing and display helpers.

/// Parses a user-supplied amount. Only finite, non-negative decimals are accepted.
pub fn parse_money(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Formats an amount with two decimals, prefixed by `symbol` when one is configured.
pub fn format_amount(value: f64, symbol: &str) -> String {
    if symbol.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{}{:.2}", symbol, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_decimal() {
        assert_eq!(parse_money("12.50"), Some(12.5));
        assert_eq!(parse_money(" 0 "), Some(0.0));
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert_eq!(parse_money("-3"), None);
        assert_eq!(parse_money("abc"), None);
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("$4"), None);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(parse_money("NaN"), None);
        assert_eq!(parse_money("inf"), None);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_amount(4.5, ""), "4.50");
        assert_eq!(format_amount(1200.0, "$"), "$1200.00");
    }
}
