// FILENAME: persistence/src/xlsx_reader.rs

use crate::{PersistenceError, Sheet, Workbook, WorkbookMeta, META_SHEET_NAME};
use calamine::{open_workbook, Data, Reader, Xlsx};
use engine::cell::{Cell, CellValue};
use engine::grid::Grid;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_xlsx(path: &Path) -> Result<Workbook, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    if sheet_names.is_empty() {
        return Err(PersistenceError::InvalidFormat(
            "Workbook contains no sheets".to_string(),
        ));
    }

    let meta = read_meta(&mut workbook, &sheet_names);

    let mut sheets = Vec::new();
    for sheet_name in sheet_names.iter().filter(|n| n.as_str() != META_SHEET_NAME) {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;
        // One formula pass per sheet; absent on sheets without formulas.
        let formulas = workbook.worksheet_formula(sheet_name).ok();

        let mut grid = Grid::new();
        let start = range.start().unwrap_or((0, 0));

        for (row_idx, row) in range.rows().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                // Range rows are relative to the range origin.
                let abs_row = start.0 + row_idx as u32;
                let abs_col = start.1 + col_idx as u32;

                let formula = formulas
                    .as_ref()
                    .and_then(|f| f.get_value((abs_row, abs_col)))
                    .filter(|f| !f.is_empty())
                    .map(|f| format!("={}", f));

                let cell_value = match value {
                    Data::Empty => {
                        if formula.is_none() {
                            continue;
                        }
                        CellValue::Empty
                    }
                    Data::String(s) => CellValue::Text(s.clone()),
                    Data::Float(f) => CellValue::Number(*f),
                    Data::Int(i) => CellValue::Number(*i as f64),
                    Data::Bool(b) => CellValue::Boolean(*b),
                    Data::Error(e) => CellValue::Text(e.to_string()),
                    Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
                    Data::DateTimeIso(s) => CellValue::Text(s.clone()),
                    Data::DurationIso(s) => CellValue::Text(s.clone()),
                };

                grid.set_cell(
                    abs_row,
                    abs_col,
                    Cell {
                        value: cell_value,
                        formula,
                        style_index: 0,
                        number_format: None,
                    },
                );
            }
        }

        let mut sheet = Sheet::new(sheet_name.clone());
        sheet.grid = grid;
        if let Some(sheet_meta) = meta.as_ref().and_then(|m| m.sheet(sheet_name)) {
            sheet_meta.apply(&mut sheet);
        }
        sheets.push(sheet);
    }

    if sheets.is_empty() {
        return Err(PersistenceError::InvalidFormat(
            "Workbook contains no data sheets".to_string(),
        ));
    }

    Ok(Workbook {
        sheets,
        active_sheet: 0,
    })
}

/// The metadata payload lives in the first cell of the hidden metadata
/// sheet. Workbooks written by other tools simply have none.
fn read_meta(workbook: &mut Xlsx<BufReader<File>>, names: &[String]) -> Option<WorkbookMeta> {
    if !names.iter().any(|n| n == META_SHEET_NAME) {
        return None;
    }
    let range = workbook.worksheet_range(META_SHEET_NAME).ok()?;
    let start = range.start()?;
    match range.get_value(start) {
        Some(Data::String(json)) => WorkbookMeta::from_json(json),
        _ => None,
    }
}
