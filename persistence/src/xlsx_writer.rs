// FILENAME: persistence/src/xlsx_writer.rs

use crate::{PersistenceError, Sheet, Workbook, WorkbookMeta, META_SHEET_NAME};
use engine::cell::{Cell, CellValue};
use engine::style::{CellStyle, Color, TextAlign, VerticalAlign};
use engine::table::TableDecl;
use rust_xlsxwriter::{
    Format, FormatAlign, Table, TableColumn, Workbook as XlsxWorkbook, Worksheet,
};
use std::path::Path;

pub fn save_xlsx(workbook: &Workbook, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();

    for sheet in &workbook.sheets {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (&(row, col), cell) in &sheet.grid.cells {
            write_cell(worksheet, row, col_index(col)?, cell, cell_format(sheet, cell))?;
        }

        if let Some(decl) = &sheet.table {
            write_table(worksheet, sheet, decl)?;
        }
    }

    // Metadata sheet goes last and hidden so editors open on the real data.
    let meta = WorkbookMeta::from_workbook(workbook);
    let meta_sheet = xlsx.add_worksheet();
    meta_sheet.set_name(META_SHEET_NAME)?;
    meta_sheet.write_string(0, 0, meta.to_json())?;
    meta_sheet.set_hidden(true);

    xlsx.save(path)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: Option<Format>,
) -> Result<(), PersistenceError> {
    if let Some(formula) = cell.formula.as_deref().filter(|f| !f.is_empty()) {
        let clean_formula = formula.strip_prefix('=').unwrap_or(formula);
        if let Some(fmt) = format {
            worksheet.write_formula_with_format(row, col, clean_formula, &fmt)?;
        } else {
            worksheet.write_formula(row, col, clean_formula)?;
        }
        return Ok(());
    }

    match &cell.value {
        CellValue::Empty => {
            if let Some(fmt) = format {
                worksheet.write_blank(row, col, &fmt)?;
            }
        }
        CellValue::Number(n) => {
            if let Some(fmt) = format {
                worksheet.write_number_with_format(row, col, *n, &fmt)?;
            } else {
                worksheet.write_number(row, col, *n)?;
            }
        }
        CellValue::Text(s) => {
            if let Some(fmt) = format {
                worksheet.write_string_with_format(row, col, s, &fmt)?;
            } else {
                worksheet.write_string(row, col, s)?;
            }
        }
        CellValue::Boolean(b) => {
            if let Some(fmt) = format {
                worksheet.write_boolean_with_format(row, col, *b, &fmt)?;
            } else {
                worksheet.write_boolean(row, col, *b)?;
            }
        }
    }
    Ok(())
}

/// Install the sheet's table declaration as a native XLSX table so ordinary
/// spreadsheet editors see a structured table. Header texts come from the
/// declaration's header row in the grid.
fn write_table(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    decl: &TableDecl,
) -> Result<(), PersistenceError> {
    let range = decl
        .parsed_range()
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    // Native tables need at least one data row below the header. A
    // header-only declaration still round-trips via the metadata sheet.
    if range.end_row <= range.start_row {
        return Ok(());
    }

    let mut columns = Vec::new();
    for col in range.start_col..=range.end_col {
        let header = match sheet.grid.get_cell(range.start_row, col).map(|c| &c.value) {
            Some(CellValue::Text(s)) if !s.is_empty() => s.clone(),
            _ => format!("Column{}", col - range.start_col + 1),
        };
        columns.push(TableColumn::new().set_header(header));
    }

    let table = Table::new()
        .set_name(&decl.name)
        .set_columns(&columns)
        .set_banded_rows(decl.style_options.banded_rows)
        .set_banded_columns(decl.style_options.banded_columns)
        .set_first_column(decl.style_options.first_column)
        .set_last_column(decl.style_options.last_column);

    worksheet.add_table(
        range.start_row,
        col_index(range.start_col)?,
        range.end_row,
        col_index(range.end_col)?,
        &table,
    )?;
    Ok(())
}

/// Columns beyond u16 cannot exist in the file format; the metadata sheet is
/// plain JSON, so a hand-edited document can still carry one. Refuse it
/// instead of truncating the index.
fn col_index(col: u32) -> Result<u16, PersistenceError> {
    u16::try_from(col)
        .map_err(|_| PersistenceError::InvalidFormat(format!("column index {} out of range", col)))
}

fn cell_format(sheet: &Sheet, cell: &Cell) -> Option<Format> {
    let mut format = if cell.style_index > 0 {
        Some(convert_style_to_format(sheet.styles.get(cell.style_index)))
    } else {
        None
    };

    if let Some(num_format) = cell.number_format.as_deref().filter(|f| !f.is_empty()) {
        format = Some(format.unwrap_or_else(Format::new).set_num_format(num_format));
    }

    format
}

fn convert_style_to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    // Font settings
    if style.font.bold {
        format = format.set_bold();
    }
    if style.font.italic {
        format = format.set_italic();
    }
    if style.font.underline {
        format = format.set_underline(rust_xlsxwriter::FormatUnderline::Single);
    }
    if style.font.strikethrough {
        format = format.set_font_strikethrough();
    }

    format = format.set_font_size(style.font.size as f64);
    format = format.set_font_name(&style.font.family);

    // Colors
    if style.font.color != Color::black() {
        format = format.set_font_color(color_to_xlsx(&style.font.color));
    }
    if style.background != Color::white() {
        format = format.set_background_color(color_to_xlsx(&style.background));
    }

    // Horizontal alignment
    format = format.set_align(match style.text_align {
        TextAlign::Left => FormatAlign::Left,
        TextAlign::Center => FormatAlign::Center,
        TextAlign::Right => FormatAlign::Right,
        TextAlign::General => FormatAlign::General,
    });

    // Vertical alignment
    format = format.set_align(match style.vertical_align {
        VerticalAlign::Top => FormatAlign::Top,
        VerticalAlign::Middle => FormatAlign::VerticalCenter,
        VerticalAlign::Bottom => FormatAlign::Bottom,
    });

    // Word wrap
    if style.wrap_text {
        format = format.set_text_wrap();
    }

    format
}

fn color_to_xlsx(color: &Color) -> rust_xlsxwriter::Color {
    rust_xlsxwriter::Color::RGB(
        ((color.r as u32) << 16) | ((color.g as u32) << 8) | (color.b as u32),
    )
}
