//! FILENAME: engine/src/cell.rs
//! PURPOSE: Defines the fundamental data structures for a single spreadsheet cell.
//! CONTEXT: A cell carries either a literal value or formula source text (never
//! an evaluated result — evaluation is out of scope here), a style index into
//! the sheet's StyleRegistry, and an optional number-format code. The number
//! format lives on the cell rather than inside the style so the two can be
//! copied independently.

use serde::{Deserialize, Serialize};

/// Represents the raw data within a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

/// The atomic unit of the spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cell {
    pub value: CellValue,
    /// Formula source text, stored with its leading `=`. A cell with a
    /// formula stores the source text; `value` is whatever cached result the
    /// document carried, if any.
    pub formula: Option<String>,
    /// Index into the sheet's StyleRegistry. 0 is the default style; a cell
    /// with index 0 carries no explicit formatting.
    pub style_index: usize,
    /// Excel number-format code (e.g. "dd-mmm-yyyy"), if any.
    pub number_format: Option<String>,
}

impl Cell {
    pub fn new() -> Self {
        Cell::default()
    }

    pub fn new_number(num: f64) -> Self {
        Cell {
            value: CellValue::Number(num),
            ..Cell::default()
        }
    }

    pub fn new_text(text: String) -> Self {
        Cell {
            value: CellValue::Text(text),
            ..Cell::default()
        }
    }

    pub fn new_formula(formula: String) -> Self {
        Cell {
            formula: Some(formula),
            ..Cell::default()
        }
    }

    /// Whether this cell holds formula source text rather than a plain literal.
    pub fn is_formula(&self) -> bool {
        self.formula.as_deref().is_some_and(|f| !f.is_empty())
    }

    /// Whether this cell carries an explicit (non-default) style.
    pub fn has_style(&self) -> bool {
        self.style_index != 0
    }
}
