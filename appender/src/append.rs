//! FILENAME: appender/src/append.rs
//! PURPOSE: The row-append engine: template/insertion planning, style and
//! formula propagation, value writes, table-boundary extension, persistence.
//! CONTEXT: One call = load fresh, mutate in memory, save once at the end.
//! Nothing is persisted before the final save, so any failure leaves the
//! on-disk document exactly as it was.

use crate::copy::project_cell;
use crate::error::AppendError;
use crate::formula::relocate_formulas;
use crate::values::{
    date_to_serial, validate_row, RowValue, CODE_COLUMN, DATE_COLUMN, DATE_NUMBER_FORMAT,
    STYLE_SPAN, TAIL_START_COLUMN,
};
use engine::cell::CellValue;
use engine::grid::Grid;
use engine::table::TableRange;
use persistence::{load_xlsx, save_xlsx, PersistenceError};
use std::path::Path;

/// Append one row of values to the document at `path`.
///
/// Returns the 1-based row number the values were written to. Every failure
/// is logged here at the boundary and surfaced as a single [`AppendError`];
/// the stored document is never left half-written.
pub fn append_row(path: &Path, values: &[RowValue]) -> Result<u32, AppendError> {
    match try_append(path, values) {
        Ok(row) => {
            log::info!("appended row {} to {}", row, path.display());
            Ok(row)
        }
        Err(e) => {
            log::error!("append to {} failed: {}", path.display(), e);
            Err(e)
        }
    }
}

/// [`append_row`], preceded by a best-effort timestamped backup copy.
/// A failed backup is logged and never blocks the append.
pub fn append_row_with_backup(path: &Path, values: &[RowValue]) -> Result<u32, AppendError> {
    if let Err(e) = crate::backup::create_backup(path) {
        log::warn!("backup of {} failed: {}", path.display(), e);
    }
    append_row(path, values)
}

fn try_append(path: &Path, values: &[RowValue]) -> Result<u32, AppendError> {
    validate_row(values)?;

    let mut workbook = load_xlsx(path)?;
    let sheet = workbook
        .active_sheet_mut()
        .ok_or_else(|| PersistenceError::SheetNotFound("active sheet".to_string()))?;

    let range = sheet
        .table
        .as_ref()
        .map(|decl| decl.parsed_range())
        .transpose()?;
    let plan = plan_insertion(range.as_ref(), &sheet.grid);

    if let Some(template_row) = plan.template_row {
        for col in 0..STYLE_SPAN {
            // The date column receives its own fixed format later.
            let copy_number_format = col != DATE_COLUMN;
            project_cell(
                &mut sheet.grid,
                (template_row, col),
                (plan.target_row, col),
                copy_number_format,
            );
        }
        relocate_formulas(&mut sheet.grid, template_row, plan.target_row);
    }

    write_values(&mut sheet.grid, plan.target_row, values);

    // Discard the old declaration, install one with the bottom bound advanced.
    if let Some(decl) = sheet.table.take() {
        sheet.table = Some(decl.extended(plan.target_row)?);
    }

    save_xlsx(&workbook, path)?;
    Ok(plan.target_row + 1)
}

struct InsertionPlan {
    /// 0-based template row whose look and formulas carry forward, if any.
    template_row: Option<u32>,
    /// 0-based row the new values land on.
    target_row: u32,
}

/// Determine the template and insertion rows.
///
/// The bottom row is the table's declared bottom bound when a table exists,
/// otherwise the sheet's highest used row. A bottom bound at or above row 1
/// (1-based) means the table has no data rows yet: the new row is fixed at
/// row 2 and there is no template to copy from.
fn plan_insertion(range: Option<&TableRange>, grid: &Grid) -> InsertionPlan {
    let last_row = match range {
        Some(r) => r.end_row + 1, // declared bottom bound, 1-based
        None => grid.last_used_row(),
    };

    if last_row <= 1 {
        InsertionPlan {
            template_row: None,
            target_row: 1,
        }
    } else {
        InsertionPlan {
            template_row: Some(last_row - 1),
            target_row: last_row,
        }
    }
}

fn write_values(grid: &mut Grid, row: u32, values: &[RowValue]) {
    write_value(grid, row, CODE_COLUMN, &values[0]);
    for (i, value) in values[1..].iter().enumerate() {
        write_value(grid, row, TAIL_START_COLUMN + i as u32, value);
    }
}

/// Write one literal value, clearing any relocated formula at the target and
/// forcing the fixed date display pattern for dates in the date column.
fn write_value(grid: &mut Grid, row: u32, col: u32, value: &RowValue) {
    let mut cell = grid.get_cell(row, col).cloned().unwrap_or_default();
    cell.formula = None;

    match value {
        RowValue::Number(n) => cell.value = CellValue::Number(*n),
        RowValue::Text(s) => cell.value = CellValue::Text(s.clone()),
        RowValue::Date(d) => {
            cell.value = CellValue::Number(date_to_serial(*d));
            if col == DATE_COLUMN {
                cell.number_format = Some(DATE_NUMBER_FORMAT.to_string());
            }
        }
        RowValue::Blank => cell.value = CellValue::Empty,
    }

    grid.set_cell(row, col, cell);
}
