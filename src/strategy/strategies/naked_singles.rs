use super::prelude::*;

// Cells are visited in row-major order and filled as soon as they are found,
// so cells later in the scan already see the new entries.
pub(crate) fn find_naked_singles(
    sudoku: &mut Sudoku,
    mut on_single: impl FnMut(Candidate),
) -> bool {
    let mut found = false;
    for cell in Cell::all() {
        // filled cells have no candidates, cells without any are left to stall
        if let Ok(Some(digit)) = cell_candidates(sudoku, cell).unique() {
            let candidate = Candidate { cell, digit };
            sudoku.enter(candidate);
            on_single(candidate);
            found = true;
        }
    }
    found
}
