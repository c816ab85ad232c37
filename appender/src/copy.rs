//! FILENAME: appender/src/copy.rs
//! PURPOSE: Copies one cell's look onto another (the style projector).

use engine::grid::Grid;

/// Copy formatting from a source cell to a target cell.
///
/// The style index is copied only when the source carries an explicit
/// (non-default) style; the number format is copied only when
/// `copy_number_format` is set and the source format is non-empty. The two
/// copies are independent switches: the date column suppresses the format
/// copy while still inheriting the base style.
pub fn project_cell(
    grid: &mut Grid,
    source: (u32, u32),
    target: (u32, u32),
    copy_number_format: bool,
) {
    let Some(source_cell) = grid.get_cell(source.0, source.1).cloned() else {
        return;
    };

    let mut target_cell = grid.get_cell(target.0, target.1).cloned().unwrap_or_default();
    let mut changed = false;

    if source_cell.has_style() {
        target_cell.style_index = source_cell.style_index;
        changed = true;
    }
    if copy_number_format {
        if let Some(fmt) = source_cell.number_format.as_deref().filter(|f| !f.is_empty()) {
            target_cell.number_format = Some(fmt.to_string());
            changed = true;
        }
    }

    if changed {
        grid.set_cell(target.0, target.1, target_cell);
    }
}
