//! FILENAME: engine/src/grid.rs
//! PURPOSE: Manages the collection of cells (the sheet grid).
//! CONTEXT: Sparse storage (HashMap) so mostly-empty sheets stay cheap.
//! Row and Col are 0-based indices.

use crate::cell::Cell;
use std::collections::HashMap;

/// The Grid struct holds the state of one sheet's data.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Sparse storage: keys are (row, col), values are Cell instances.
    /// Row and Col are 0-based indices.
    pub cells: HashMap<(u32, u32), Cell>,

    /// Tracks the highest row index currently in use.
    pub max_row: u32,

    /// Tracks the highest column index currently in use.
    pub max_col: u32,
}

impl Grid {
    /// Creates a new, empty Grid.
    pub fn new() -> Self {
        Grid::default()
    }

    /// Sets a cell at the specified coordinates.
    /// Updates max_row/max_col boundaries automatically.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        if row > self.max_row {
            self.max_row = row;
        }
        if col > self.max_col {
            self.max_col = col;
        }
        self.cells.insert((row, col), cell);
    }

    /// Retrieves a reference to a cell at the specified coordinates.
    /// Returns None if the cell is empty (not stored).
    pub fn get_cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// The highest used 1-based row number, or 1 for an empty grid.
    /// Mirrors the document collaborator's "max row" query, which never
    /// reports less than one row.
    pub fn last_used_row(&self) -> u32 {
        self.max_row + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    #[test]
    fn it_manages_cells_and_bounds() {
        let mut grid = Grid::new();
        assert_eq!(grid.last_used_row(), 1);

        grid.set_cell(4, 2, Cell::new_text("Hello".to_string()));
        assert_eq!(grid.max_row, 4);
        assert_eq!(grid.max_col, 2);
        assert_eq!(grid.last_used_row(), 5);

        let retrieved = grid.get_cell(4, 2).expect("cell should exist");
        assert_eq!(retrieved.value, CellValue::Text("Hello".to_string()));
        assert!(grid.get_cell(0, 0).is_none());
    }
}
