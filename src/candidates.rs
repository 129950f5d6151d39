// Candidate derivation for the solving strategies.
//
// Both queries recompute their answer from the grid state they are handed,
// so they can never disagree with it. Nothing here is cached and nothing
// here mutates.

use crate::bitset::Set;
use crate::board::positions::{Cell, House, Position};
use crate::board::{Digit, Sudoku};

/// The digits that could be entered in `cell` without clashing with a digit
/// already placed in its row, column or block. Empty for a filled cell.
pub(crate) fn cell_candidates(sudoku: &Sudoku, cell: Cell) -> Set<Digit> {
    if sudoku.get(cell).is_some() {
        return Set::NONE;
    }
    let mut candidates = Set::NONE;
    for digit in Digit::all() {
        if sudoku.is_valid(cell, digit) {
            candidates |= digit;
        }
    }
    candidates
}

/// The empty positions within `house` where `digit` could still be entered.
pub(crate) fn house_positions(sudoku: &Sudoku, house: House, digit: Digit) -> Set<Position<House>> {
    let mut positions = Set::NONE;
    for (pos, cell) in house.cells().into_iter().enumerate() {
        if sudoku.get(cell).is_none() && sudoku.is_valid(cell, digit) {
            positions |= Position::new(pos as u8);
        }
    }
    positions
}
