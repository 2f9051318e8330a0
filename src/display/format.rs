//! Number formatting for terminal output
//!
//! Amounts and percentages use the separators from `Settings`; index values
//! are always shown with one decimal and a `.` separator.

use crate::config::Settings;

/// Format an amount with two decimals and grouped thousands
pub fn format_amount(value: f64, settings: &Settings) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let negative = value < 0.0 && rounded != "0.00";
    format!(
        "{}{}{}{}",
        if negative { "-" } else { "" },
        group_thousands(int_part, settings.thousands_separator),
        settings.decimal_separator,
        frac_part
    )
}

/// Format a percentage with one decimal and an explicit sign (none for zero)
pub fn format_percentage(value: f64, settings: &Settings) -> String {
    let tenths = (value * 10.0).round();
    let body = format!("{:.1}", (tenths / 10.0).abs())
        .replace('.', &settings.decimal_separator.to_string());

    let sign = if tenths > 0.0 {
        "+"
    } else if tenths < 0.0 {
        "-"
    } else {
        ""
    };
    format!("{}{}%", sign, body)
}

/// Format an index value with one decimal
pub fn format_index(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format an amount followed by the configured currency code
pub fn format_money(value: f64, settings: &Settings) -> String {
    format!("{} {}", format_amount(value, settings), settings.currency_code)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_default_separators() {
        let settings = Settings::default();
        assert_eq!(format_amount(1000.0, &settings), "1 000,00");
        assert_eq!(format_amount(1982.6923, &settings), "1 982,69");
        assert_eq!(format_amount(999_999_999.99, &settings), "999 999 999,99");
        assert_eq!(format_amount(12.5, &settings), "12,50");
        assert_eq!(format_amount(0.004, &settings), "0,00");
        assert_eq!(format_amount(-1234.5, &settings), "-1 234,50");
    }

    #[test]
    fn test_format_amount_custom_separators() {
        let settings = Settings {
            decimal_separator: '.',
            thousands_separator: ',',
            ..Settings::default()
        };
        assert_eq!(format_amount(1234567.891, &settings), "1,234,567.89");
    }

    #[test]
    fn test_format_percentage() {
        let settings = Settings::default();
        assert_eq!(format_percentage(98.2692, &settings), "+98,3%");
        assert_eq!(format_percentage(-49.56, &settings), "-49,6%");
        assert_eq!(format_percentage(0.0, &settings), "0,0%");
        assert_eq!(format_percentage(-0.01, &settings), "0,0%");
    }

    #[test]
    fn test_format_index_and_money() {
        let settings = Settings::default();
        assert_eq!(format_index(52.0), "52.0");
        assert_eq!(format_index(103.1), "103.1");
        assert_eq!(format_money(1000.0, &settings), "1 000,00 NOK");
    }
}
