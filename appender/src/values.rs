//! FILENAME: appender/src/values.rs
//! PURPOSE: The row-value record accepted at the append boundary, its shape
//! validation, and the fixed destination-column layout.

use crate::error::AppendError;
use chrono::{Datelike, NaiveDate};

/// One positional value of an incoming row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Blank,
}

/// Number of positional values in a row.
pub const ROW_VALUE_COUNT: usize = 9;

/// 0-based destination column of the first value (the numeric code).
pub const CODE_COLUMN: u32 = 0;

/// 0-based destination column where the remaining eight values start.
pub const TAIL_START_COLUMN: u32 = 5;

/// 0-based date column (column J).
pub const DATE_COLUMN: u32 = 9;

/// Display pattern forced onto date values landing in the date column.
pub const DATE_NUMBER_FORMAT: &str = "dd-mmm-yyyy";

/// Number of leading columns whose look is copied from the template row.
pub const STYLE_SPAN: u32 = 13;

/// Days between 0001-01-01 (chrono's day 1) and the Excel epoch 1899-12-30.
const EXCEL_EPOCH_DAYS_FROM_CE: i32 = 693_594;

/// Convert a calendar date to an Excel date serial.
pub fn date_to_serial(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - EXCEL_EPOCH_DAYS_FROM_CE) as f64
}

/// Caller-boundary validation: exactly nine values, a numeric code first and
/// a non-empty title second. The engine trusts everything past this check.
pub fn validate_row(values: &[RowValue]) -> Result<(), AppendError> {
    if values.len() != ROW_VALUE_COUNT {
        return Err(AppendError::InvalidRow(format!(
            "expected {} values, got {}",
            ROW_VALUE_COUNT,
            values.len()
        )));
    }
    if !matches!(values[0], RowValue::Number(_)) {
        return Err(AppendError::InvalidRow(
            "first value (code) must be a number".to_string(),
        ));
    }
    match &values[1] {
        RowValue::Text(title) if !title.trim().is_empty() => Ok(()),
        _ => Err(AppendError::InvalidRow(
            "second value (title) must be non-empty text".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_row() -> Vec<RowValue> {
        let mut row = vec![
            RowValue::Number(101.0),
            RowValue::Text("Movie X".to_string()),
        ];
        row.resize(ROW_VALUE_COUNT, RowValue::Blank);
        row
    }

    #[test]
    fn test_date_to_serial() {
        let epoch_plus_one = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
        assert_eq!(date_to_serial(epoch_plus_one), 1.0);

        let unix_epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(date_to_serial(unix_epoch), 25569.0);

        let sample = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(date_to_serial(sample), 45413.0);
    }

    #[test]
    fn test_validate_accepts_well_formed_row() {
        assert!(validate_row(&valid_row()).is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_arity() {
        assert!(validate_row(&valid_row()[..5]).is_err());
        assert!(validate_row(&[]).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_code_or_title() {
        let mut row = valid_row();
        row[0] = RowValue::Text("not a number".to_string());
        assert!(validate_row(&row).is_err());

        let mut row = valid_row();
        row[1] = RowValue::Text("   ".to_string());
        assert!(validate_row(&row).is_err());

        let mut row = valid_row();
        row[1] = RowValue::Blank;
        assert!(validate_row(&row).is_err());
    }
}
