//! Display formatting for US dollar amounts and percentages.
//!
//! # Examples
//!
//! ```
//! use coverage_core::format::{format_currency, format_currency_cents, format_percent};
//!
//! assert_eq!(format_currency(15000.0), "$15,000");
//! assert_eq!(format_currency_cents(260.32), "$260.32");
//! assert_eq!(format_percent(45.0), "45%");
//! ```

use crate::types::{Amount, Percent};

/// Whole dollars with thousands separators, e.g. `$1,200`.
pub fn format_currency(value: Amount) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let dollars = value.abs().round() as u64;
    format!("{}${}", sign, group_thousands(dollars))
}

/// Dollars and cents with thousands separators, e.g. `$1,200.00`.
pub fn format_currency_cents(value: Amount) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Percentage with no decimals, e.g. `45%`.
pub fn format_percent(value: Percent) -> String {
    format!("{:.0}%", value)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1200.0), "$1,200");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(8700.4), "$8,700");
    }

    #[test]
    fn test_format_currency_cents() {
        assert_eq!(format_currency_cents(0.0), "$0.00");
        assert_eq!(format_currency_cents(2.0), "$2.00");
        assert_eq!(format_currency_cents(1200.0), "$1,200.00");
        assert_eq!(format_currency_cents(-45.5), "-$45.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(44.6), "45%");
    }
}
