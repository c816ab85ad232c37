//! FILENAME: engine/src/table.rs
//! PURPOSE: The structured-table declaration and its rectangular range.
//! CONTEXT: A sheet carries at most one table declaration. The range is kept
//! as A1 text ("A1:M5"), exactly as the document format declares it, and is
//! parsed on demand. Across a row append the table name and left/right column
//! bounds are immutable; only the bottom bound advances, by one row.

use crate::coord::{self, InvalidCoordinate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableRangeError {
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    #[error("malformed table range: {0:?}")]
    MalformedRange(String),
}

/// Style options for table formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyleOptions {
    /// Show alternating row colors
    pub banded_rows: bool,
    /// Show alternating column colors
    pub banded_columns: bool,
    /// Highlight first column
    pub first_column: bool,
    /// Highlight last column
    pub last_column: bool,
}

impl Default for TableStyleOptions {
    fn default() -> Self {
        Self {
            banded_rows: true,
            banded_columns: false,
            first_column: false,
            last_column: false,
        }
    }
}

/// A table declaration as the document carries it: a name, an A1 range, and
/// a visual-style descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDecl {
    /// Table name (unique across the workbook).
    pub name: String,
    /// Declared range in A1 notation, e.g. "A1:M5".
    pub range: String,
    /// Style name (e.g., "TableStyleMedium2"), if the document declared one.
    pub style_name: Option<String>,
    pub style_options: TableStyleOptions,
}

impl TableDecl {
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        TableDecl {
            name: name.into(),
            range: range.into(),
            style_name: None,
            style_options: TableStyleOptions::default(),
        }
    }

    /// Parse this declaration's range into numeric bounds.
    pub fn parsed_range(&self) -> Result<TableRange, TableRangeError> {
        TableRange::parse(&self.range)
    }

    /// Rebuild the declaration with the bottom bound moved to `new_end_row`
    /// (0-based). Name, column bounds, and style descriptor are preserved.
    pub fn extended(&self, new_end_row: u32) -> Result<TableDecl, TableRangeError> {
        let range = self.parsed_range()?.extended(new_end_row);
        Ok(TableDecl {
            name: self.name.clone(),
            range: range.to_ref(),
            style_name: self.style_name.clone(),
            style_options: self.style_options,
        })
    }
}

/// A parsed rectangular table range with 0-based inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl TableRange {
    /// Parse range text like "A1:M5" into numeric bounds.
    ///
    /// Fails with `MalformedRange` if the text does not split into exactly
    /// two coordinates, and with `InvalidCoordinate` if either endpoint does
    /// not decompose into column letters and a row number or names a column
    /// too wide to index.
    pub fn parse(range: &str) -> Result<TableRange, TableRangeError> {
        let mut parts = range.split(':');
        let (start, end) = match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(TableRangeError::MalformedRange(range.to_string())),
        };

        let (start_col, start_row) = coord::parse_a1(start)?;
        let (end_col, end_row) = coord::parse_a1(end)?;
        // A1 rows are 1-based; row 0 is unaddressable.
        if start_row == 0 || end_row == 0 {
            return Err(TableRangeError::MalformedRange(range.to_string()));
        }

        Ok(TableRange {
            start_row: start_row - 1,
            start_col: coord::col_to_index(&start_col)?,
            end_row: end_row - 1,
            end_col: coord::col_to_index(&end_col)?,
        })
    }

    /// Format back into A1 range text.
    pub fn to_ref(&self) -> String {
        format!(
            "{}:{}",
            coord::coord_to_a1((self.start_row, self.start_col)),
            coord::coord_to_a1((self.end_row, self.end_col)),
        )
    }

    /// The same range with its bottom bound moved to `new_end_row` (0-based).
    pub fn extended(&self, new_end_row: u32) -> TableRange {
        TableRange {
            end_row: new_end_row,
            ..*self
        }
    }
}
