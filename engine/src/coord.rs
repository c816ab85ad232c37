//! FILENAME: engine/src/coord.rs
//! PURPOSE: Utilities for converting between spreadsheet coordinate formats.
//! CONTEXT: Converts between A1-style notation (e.g., "A1", "AA100") and the
//! 0-based (row, col) numeric indices used internally.
//! Column "A" = 0, "B" = 1, ..., "Z" = 25, "AA" = 26, etc.
//! Row 1 in A1 notation = row 0 internally.

use thiserror::Error;

/// A cell coordinate as (row, col) with 0-based indices.
pub type CellCoord = (u32, u32);

/// A coordinate string could not be split into a column-letter part and a
/// row-number part.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate: {0:?}")]
pub struct InvalidCoordinate(pub String);

/// Converts a column string (e.g., "A", "AA", "ABC") to a 0-based column index.
/// "A" -> 0, "B" -> 1, ..., "Z" -> 25, "AA" -> 26, "AB" -> 27, etc.
///
/// Fails on empty or non-alphabetic input, and on labels whose index does not
/// fit in a `u32` (eight or more letters). Range text arrives verbatim from
/// loaded documents, so oversized labels must surface as an error rather than
/// overflow.
pub fn col_to_index(col_str: &str) -> Result<u32, InvalidCoordinate> {
    if col_str.is_empty() {
        return Err(InvalidCoordinate(col_str.to_string()));
    }
    let mut result: u32 = 0;
    for c in col_str.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(InvalidCoordinate(col_str.to_string()));
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        result = result
            .checked_mul(26)
            .and_then(|r| r.checked_add(digit))
            .ok_or_else(|| InvalidCoordinate(col_str.to_string()))?;
    }
    Ok(result - 1) // Convert to 0-based
}

/// Converts a 0-based column index to a column string.
/// 0 -> "A", 1 -> "B", ..., 25 -> "Z", 26 -> "AA", 27 -> "AB", etc.
pub fn index_to_col(mut col_index: u32) -> String {
    let mut result = String::new();
    loop {
        let remainder = col_index % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if col_index < 26 {
            break;
        }
        col_index = col_index / 26 - 1;
    }
    result
}

/// Parses an A1-style coordinate string into its (column letters, 1-based row
/// number) parts.
///
/// Accepts one or more alphabetic characters immediately followed by one or
/// more decimal digits. Letters are normalized to uppercase. Validation is
/// purely lexical: no upper bound is enforced on either part, and the result
/// is not range-checked against any sheet.
pub fn parse_a1(text: &str) -> Result<(String, u32), InvalidCoordinate> {
    let split = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| InvalidCoordinate(text.to_string()))?;

    let (letters, digits) = text.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InvalidCoordinate(text.to_string()));
    }
    let row = digits
        .parse::<u32>()
        .map_err(|_| InvalidCoordinate(text.to_string()))?;

    Ok((letters.to_ascii_uppercase(), row))
}

/// Formats (column letters, 1-based row number) back into A1 notation.
/// The inverse of [`parse_a1`].
pub fn format_a1(col_str: &str, row_num: u32) -> String {
    format!("{}{}", col_str, row_num)
}

/// Converts an A1-style reference to a 0-based (row, col) coordinate.
/// "A1" -> (0, 0), "B2" -> (1, 1), "AA100" -> (99, 26)
///
/// [`parse_a1`] is purely lexical and lets "A0" through; the conversion to
/// 0-based indices is where row 0 becomes unrepresentable, so it is rejected
/// here along with unusable column labels.
pub fn a1_to_coord(col_str: &str, row_num: u32) -> Result<CellCoord, InvalidCoordinate> {
    let col = col_to_index(col_str)?;
    let row = row_num
        .checked_sub(1) // Convert 1-based to 0-based
        .ok_or_else(|| InvalidCoordinate(format_a1(col_str, row_num)))?;
    Ok((row, col))
}

/// Converts a 0-based (row, col) coordinate to an A1-style reference string.
/// (0, 0) -> "A1", (1, 1) -> "B2", (99, 26) -> "AA100"
pub fn coord_to_a1(coord: CellCoord) -> String {
    let (row, col) = coord;
    format_a1(&index_to_col(col), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_to_index() {
        assert_eq!(col_to_index("A"), Ok(0));
        assert_eq!(col_to_index("Z"), Ok(25));
        assert_eq!(col_to_index("AA"), Ok(26));
        assert_eq!(col_to_index("AZ"), Ok(51));
        assert_eq!(col_to_index("BA"), Ok(52));
        assert_eq!(col_to_index("ZZ"), Ok(701));
        assert_eq!(col_to_index("AAA"), Ok(702));
    }

    #[test]
    fn test_col_to_index_rejects_unusable_labels() {
        assert!(col_to_index("").is_err());
        assert!(col_to_index("A1").is_err());
        // "MWLQKWU" is the last label whose index fits in a u32; anything
        // past it must error instead of wrapping.
        assert_eq!(col_to_index("MWLQKWU"), Ok(u32::MAX - 1));
        assert!(col_to_index("MWLQKWV").is_err());
        assert!(col_to_index("ABCDEFGH").is_err());
    }

    #[test]
    fn test_index_to_col() {
        assert_eq!(index_to_col(0), "A");
        assert_eq!(index_to_col(25), "Z");
        assert_eq!(index_to_col(26), "AA");
        assert_eq!(index_to_col(51), "AZ");
        assert_eq!(index_to_col(701), "ZZ");
        assert_eq!(index_to_col(702), "AAA");
    }

    #[test]
    fn test_col_roundtrip() {
        for i in 0..1000 {
            let col_str = index_to_col(i);
            assert_eq!(
                col_to_index(&col_str),
                Ok(i),
                "Roundtrip failed for index {}",
                i
            );
        }
    }

    #[test]
    fn test_parse_a1() {
        assert_eq!(parse_a1("A1"), Ok(("A".to_string(), 1)));
        assert_eq!(parse_a1("m13"), Ok(("M".to_string(), 13)));
        assert_eq!(parse_a1("AA100"), Ok(("AA".to_string(), 100)));
    }

    #[test]
    fn test_parse_a1_rejects_missing_parts() {
        assert!(parse_a1("").is_err());
        assert!(parse_a1("A").is_err()); // no digits
        assert!(parse_a1("12").is_err()); // no letters
        assert!(parse_a1("A1B").is_err()); // trailing letters
        assert!(parse_a1("$A$1").is_err());
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for (col, row) in [("A", 1), ("M", 2), ("AA", 100), ("ZZ", 65536)] {
            let text = format_a1(col, row);
            assert_eq!(parse_a1(&text), Ok((col.to_string(), row)));
        }
    }

    #[test]
    fn test_a1_to_coord() {
        assert_eq!(a1_to_coord("A", 1), Ok((0, 0)));
        assert_eq!(a1_to_coord("B", 2), Ok((1, 1)));
        assert_eq!(a1_to_coord("AA", 100), Ok((99, 26)));
    }

    #[test]
    fn test_a1_to_coord_rejects_row_zero() {
        // parse_a1 lets "A0" through lexically; the index conversion is
        // where it has to stop.
        let (col, row) = parse_a1("A0").unwrap();
        assert_eq!(a1_to_coord(&col, row), Err(InvalidCoordinate("A0".to_string())));
    }

    #[test]
    fn test_coord_to_a1() {
        assert_eq!(coord_to_a1((0, 0)), "A1");
        assert_eq!(coord_to_a1((1, 1)), "B2");
        assert_eq!(coord_to_a1((99, 26)), "AA100");
    }
}
