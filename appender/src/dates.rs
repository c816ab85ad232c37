//! FILENAME: appender/src/dates.rs
//! PURPOSE: Free-text date parsing for callers feeding the append boundary.

use chrono::NaiveDate;

/// Formats accepted for free-text dates, tried in order. Day-first formats
/// come after month-first, so ambiguous dates resolve month-first.
const DATE_FORMATS: [&str; 6] = [
    "%d-%b-%Y",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d/%m/%y",
];

/// Parse a date from flexible user input. Returns None for empty or
/// unrecognized text.
pub fn parse_flexible(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_accepted_formats() {
        assert_eq!(parse_flexible("01-May-2024"), Some(day(2024, 5, 1)));
        assert_eq!(parse_flexible("2024-05-01"), Some(day(2024, 5, 1)));
        assert_eq!(parse_flexible("5/1/2024"), Some(day(2024, 5, 1)));
        assert_eq!(parse_flexible("5/1/24"), Some(day(2024, 5, 1)));
    }

    #[test]
    fn test_month_first_wins_for_ambiguous_input() {
        assert_eq!(parse_flexible("03/04/2024"), Some(day(2024, 3, 4)));
    }

    #[test]
    fn test_day_first_fallback() {
        // 13 cannot be a month, so the day-first format picks it up.
        assert_eq!(parse_flexible("13/04/2024"), Some(day(2024, 4, 13)));
    }

    #[test]
    fn test_rejects_garbage_and_empty() {
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("   "), None);
        assert_eq!(parse_flexible("not a date"), None);
        assert_eq!(parse_flexible("2024-13-40"), None);
    }
}
