//! FILENAME: persistence/src/lib.rs
//! Document persistence for the row-append engine.
//!
//! Handles loading and saving workbooks in XLSX format. XLSX value reading
//! cannot recover engine-level information (the style registry, per-cell
//! style assignments and number formats, the table declaration), so that
//! state round-trips through a hidden metadata sheet as JSON.

mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use error::PersistenceError;
pub use xlsx_reader::load_xlsx;
pub use xlsx_writer::save_xlsx;

use engine::grid::Grid;
use engine::style::StyleRegistry;
use engine::table::TableDecl;
use serde::{Deserialize, Serialize};

// ============================================================================
// METADATA SHEET NAME
// ============================================================================

/// Hidden metadata sheet name. This sheet is filtered out during load and
/// written during save.
pub const META_SHEET_NAME: &str = "_rowledger_meta";

// ============================================================================
// WORKBOOK
// ============================================================================

/// A complete in-memory workbook that can be saved and loaded.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
    pub active_sheet: usize,
}

impl Workbook {
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new("Sheet1".to_string())],
            active_sheet: 0,
        }
    }

    pub fn active_sheet(&self) -> Option<&Sheet> {
        self.sheets.get(self.active_sheet)
    }

    pub fn active_sheet_mut(&mut self) -> Option<&mut Sheet> {
        self.sheets.get_mut(self.active_sheet)
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SHEET
// ============================================================================

/// A single worksheet: a sparse grid, its style registry, and at most one
/// structured-table declaration.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub grid: Grid,
    pub styles: StyleRegistry,
    pub table: Option<TableDecl>,
}

impl Sheet {
    pub fn new(name: String) -> Self {
        Self {
            name,
            grid: Grid::new(),
            styles: StyleRegistry::new(),
            table: None,
        }
    }
}

// ============================================================================
// METADATA (stored as JSON in the hidden metadata sheet)
// ============================================================================

/// Engine-level state that does not survive XLSX value reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookMeta {
    pub version: u32,
    pub sheets: Vec<SheetMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMeta {
    pub name: String,
    pub table: Option<TableDecl>,
    /// The sheet's full style registry; index 0 is the default style.
    pub styles: Vec<engine::style::CellStyle>,
    /// (row, col, style_index) for every cell with a non-default style.
    pub cell_styles: Vec<(u32, u32, usize)>,
    /// (row, col, format_code) for every cell with a number format.
    pub number_formats: Vec<(u32, u32, String)>,
}

impl WorkbookMeta {
    pub fn from_workbook(workbook: &Workbook) -> Self {
        Self {
            version: 1,
            sheets: workbook.sheets.iter().map(SheetMeta::from_sheet).collect(),
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetMeta> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

impl SheetMeta {
    pub fn from_sheet(sheet: &Sheet) -> Self {
        let mut cell_styles = Vec::new();
        let mut number_formats = Vec::new();
        for (&(row, col), cell) in &sheet.grid.cells {
            if cell.style_index > 0 {
                cell_styles.push((row, col, cell.style_index));
            }
            if let Some(fmt) = &cell.number_format {
                if !fmt.is_empty() {
                    number_formats.push((row, col, fmt.clone()));
                }
            }
        }
        // HashMap iteration order is arbitrary; keep the JSON stable.
        cell_styles.sort_unstable();
        number_formats.sort_unstable();

        Self {
            name: sheet.name.clone(),
            table: sheet.table.clone(),
            styles: sheet.styles.all_styles().to_vec(),
            cell_styles,
            number_formats,
        }
    }

    /// Restore this metadata onto a freshly loaded sheet.
    pub fn apply(&self, sheet: &mut Sheet) {
        let mut styles = StyleRegistry::new();
        for style in self.styles.iter().skip(1) {
            styles.get_or_create(style.clone());
        }
        sheet.styles = styles;

        for &(row, col, index) in &self.cell_styles {
            if index >= sheet.styles.len() {
                continue;
            }
            let mut cell = sheet.grid.get_cell(row, col).cloned().unwrap_or_default();
            cell.style_index = index;
            sheet.grid.set_cell(row, col, cell);
        }

        for (row, col, fmt) in &self.number_formats {
            let mut cell = sheet.grid.get_cell(*row, *col).cloned().unwrap_or_default();
            cell.number_format = Some(fmt.clone());
            sheet.grid.set_cell(*row, *col, cell);
        }

        sheet.table = self.table.clone();
    }
}
