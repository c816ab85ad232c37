//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the spreadsheet model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod coord;
pub mod grid;
pub mod style;
pub mod table;

// Re-export commonly used types at the crate root
pub use cell::{Cell, CellValue};
pub use coord::{
    a1_to_coord, col_to_index, coord_to_a1, format_a1, index_to_col, parse_a1, CellCoord,
    InvalidCoordinate,
};
pub use grid::Grid;
pub use style::{
    BorderLineStyle, BorderStyle, Borders, CellStyle, Color, FontStyle, StyleRegistry, TextAlign,
    VerticalAlign,
};
pub use table::{TableDecl, TableRange, TableRangeError, TableStyleOptions};
