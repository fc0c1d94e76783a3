//! Display formatting and form validation shared by every page. Dates arrive
//! from the backend either as `YYYY-MM-DD` or as ISO date-times; both are
//! reduced to calendar dates before any arithmetic.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Default length for [`truncate_text`] callers without a layout constraint.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;
/// Minimum password length accepted by registration and password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Parses a backend date or date-time into a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.date_naive());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date_time.date());
    }
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// `"2023-05-15"` becomes `"May 15, 2023"`. Unparsable input is echoed back.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => value.trim().to_string(),
    }
}

/// Numeric `MM/DD/YYYY` rendering used in admin tables.
pub fn format_short_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%m/%d/%Y").to_string(),
        None => value.trim().to_string(),
    }
}

/// `YYYY-MM-DD` for `<input type="date">` values.
pub fn format_date_for_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats an amount with thousands separators and the currency suffix.
pub fn format_price(amount: f64) -> String {
    format!("{} kr", group_thousands(amount))
}

/// Compact `"{amount}:-"` notation used in tables and on car cards.
pub fn format_rate(amount: f64) -> String {
    format!("{}:-", plain_amount(amount))
}

/// Shortest exact decimal form; whole amounts drop the fraction.
fn plain_amount(amount: f64) -> String {
    amount.to_string()
}

fn group_thousands(amount: f64) -> String {
    let text = plain_amount(amount);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Keeps at most `max_length` characters and appends `...` when cut.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_length).collect();
    truncated.push_str("...");
    truncated
}

/// Whole days between two dates regardless of order.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs()
}

/// `"1 day"` / `"3 days"`.
pub fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(email))
}

/// At least eight characters containing both a letter and a digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|ch| ch.is_ascii_alphabetic())
        && password.chars().any(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn format_date_accepts_dates_and_date_times() {
        assert_eq!(format_date("2023-05-15"), "May 15, 2023");
        assert_eq!(format_date("2024-01-03T10:00:00"), "January 3, 2024");
        assert_eq!(format_date("2024-01-03T10:00:00Z"), "January 3, 2024");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn format_short_date_is_numeric() {
        assert_eq!(format_short_date("2023-05-15"), "05/15/2023");
    }

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(1000.0), "1,000 kr");
        assert_eq!(format_price(999.0), "999 kr");
        assert_eq!(format_price(1234567.0), "1,234,567 kr");
        assert_eq!(format_price(1234.5), "1,234.5 kr");
        assert_eq!(format_price(0.0), "0 kr");
    }

    #[test]
    fn prices_keep_every_decimal() {
        assert_eq!(format_price(1234.567), "1,234.567 kr");
        assert_eq!(format_price(4321.0625), "4,321.0625 kr");
        assert_eq!(format_rate(0.125), "0.125:-");
    }

    #[test]
    fn format_rate_uses_compact_suffix() {
        assert_eq!(format_rate(450.0), "450:-");
        assert_eq!(format_rate(99.5), "99.5:-");
    }

    #[test]
    fn truncate_text_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_text("", DEFAULT_TRUNCATE_LENGTH), "");
    }

    #[test]
    fn days_between_is_absolute() {
        assert_eq!(days_between(date("2024-03-01"), date("2024-03-04")), 3);
        assert_eq!(days_between(date("2024-03-04"), date("2024-03-01")), 3);
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(4), "4 days");
    }

    #[test]
    fn date_input_round_trips_through_parse() {
        let value = format_date_for_input(date("2024-12-09"));
        assert_eq!(value, "2024-12-09");
        assert_eq!(parse_date(&value), Some(date("2024-12-09")));
    }

    #[test]
    fn email_validation_matches_simple_shape() {
        assert!(is_valid_email("anna@wigell.se"));
        assert!(!is_valid_email("anna@wigell"));
        assert!(!is_valid_email("anna wigell@x.se"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn strong_password_needs_letters_and_digits() {
        assert!(is_strong_password("rental2024"));
        assert!(!is_strong_password("short1"));
        assert!(!is_strong_password("onlyletters"));
        assert!(!is_strong_password("1234567890"));
    }
}
