use super::prelude::*;
use super::{block_lines, position_cells};
use crate::strategy::deduction::LineType;

// Detects a digit whose possible positions within a block are confined to
// one row or one column, tagging the move with the orientation. A lone
// position counts as confined, with the row check taking precedence.
// Detection only.
pub(crate) fn find_box_line_reductions(
    sudoku: &Sudoku,
    mut on_reduction: impl FnMut(Digit, Set<Cell>, LineType) -> bool,
) -> bool {
    let mut found = false;
    for block in Block::all() {
        let house = block.house();
        for digit in Digit::all() {
            let positions = house_positions(sudoku, house, digit);
            if positions.is_empty() {
                continue;
            }
            let (rows, cols) = block_lines(positions);
            let line = if rows.count_ones() == 1 {
                LineType::Row
            } else if cols.count_ones() == 1 {
                LineType::Col
            } else {
                continue;
            };
            found |= on_reduction(digit, position_cells(house, positions), line);
        }
    }
    found
}
