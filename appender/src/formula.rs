//! FILENAME: appender/src/formula.rs
//! PURPOSE: Copies a row's formula-bearing cells to a new row, rewriting
//! row references so each formula stays self-consistent at its new row.
//! CONTEXT: Rewriting is a blind textual substitution over formula source
//! text; formulas are never parsed here. Only references to columns A and B
//! are relocated — references among the formula columns themselves are left
//! at the old row number, matching the shipped behavior (see DESIGN.md).

use engine::cell::CellValue;
use engine::grid::Grid;

/// 0-based columns B..E, the four formula-bearing columns immediately after
/// the row's primary identifying field.
pub const FORMULA_COLUMNS: [u32; 4] = [1, 2, 3, 4];

/// Column letters whose row references get relocated, in both cases.
const RELOCATED_LETTERS: [char; 2] = ['A', 'B'];

/// Copy the formula columns of `source_row` to `target_row` (both 0-based).
///
/// Cells holding formula text get every `A<srcRow>` / `B<srcRow>` occurrence
/// (upper or lower case) replaced with the target-row form; cells without a
/// formula have their literal value copied unchanged.
pub fn relocate_formulas(grid: &mut Grid, source_row: u32, target_row: u32) {
    let old_row = (source_row + 1).to_string();
    let new_row = (target_row + 1).to_string();

    let mut replacements = Vec::with_capacity(RELOCATED_LETTERS.len() * 2);
    for letter in RELOCATED_LETTERS {
        replacements.push((
            format!("{}{}", letter, old_row),
            format!("{}{}", letter, new_row),
        ));
        let lower = letter.to_ascii_lowercase();
        replacements.push((
            format!("{}{}", lower, old_row),
            format!("{}{}", lower, new_row),
        ));
    }

    for col in FORMULA_COLUMNS {
        let Some(source_cell) = grid.get_cell(source_row, col).cloned() else {
            continue;
        };
        let mut target_cell = grid.get_cell(target_row, col).cloned().unwrap_or_default();

        if let Some(formula) = source_cell.formula.as_deref().filter(|f| !f.is_empty()) {
            let mut relocated = formula.to_string();
            for (old_ref, new_ref) in &replacements {
                relocated = relocated.replace(old_ref, new_ref);
            }
            target_cell.formula = Some(relocated);
            target_cell.value = CellValue::Empty;
        } else {
            target_cell.value = source_cell.value.clone();
            target_cell.formula = None;
        }

        grid.set_cell(target_row, col, target_cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::cell::Cell;

    #[test]
    fn test_relocates_row_references() {
        let mut grid = Grid::new();
        grid.set_cell(4, 2, Cell::new_formula("=B5*2".to_string()));

        relocate_formulas(&mut grid, 4, 5);

        assert_eq!(
            grid.get_cell(5, 2).unwrap().formula.as_deref(),
            Some("=B6*2")
        );
    }

    #[test]
    fn test_relocates_both_cases_and_both_letters() {
        let mut grid = Grid::new();
        grid.set_cell(4, 1, Cell::new_formula("=a5+B5-b5".to_string()));

        relocate_formulas(&mut grid, 4, 5);

        assert_eq!(
            grid.get_cell(5, 1).unwrap().formula.as_deref(),
            Some("=a6+B6-b6")
        );
    }

    #[test]
    fn test_other_column_references_stay_put() {
        let mut grid = Grid::new();
        grid.set_cell(4, 3, Cell::new_formula("=C5+B5".to_string()));

        relocate_formulas(&mut grid, 4, 5);

        // C5 keeps the old row number; only A/B references move.
        assert_eq!(
            grid.get_cell(5, 3).unwrap().formula.as_deref(),
            Some("=C5+B6")
        );
    }

    #[test]
    fn test_literal_cells_copy_unchanged() {
        let mut grid = Grid::new();
        grid.set_cell(4, 1, Cell::new_text("Download".to_string()));

        relocate_formulas(&mut grid, 4, 5);

        let target = grid.get_cell(5, 1).unwrap();
        assert_eq!(target.value, CellValue::Text("Download".to_string()));
        assert_eq!(target.formula, None);
    }

    #[test]
    fn test_missing_source_cells_are_skipped() {
        let mut grid = Grid::new();
        relocate_formulas(&mut grid, 4, 5);
        for col in FORMULA_COLUMNS {
            assert!(grid.get_cell(5, col).is_none());
        }
    }
}
