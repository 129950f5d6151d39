use super::prelude::*;
use super::{block_lines, position_cells};

// Detects a digit whose possible positions within a block (two or more of
// them) all fall on one row or one column. Detection only, like the other
// pattern strategies.
pub(crate) fn find_pointing_pairs(
    sudoku: &Sudoku,
    mut on_pair: impl FnMut(Digit, Set<Cell>) -> bool,
) -> bool {
    let mut found = false;
    for block in Block::all() {
        let house = block.house();
        for digit in Digit::all() {
            let positions = house_positions(sudoku, house, digit);
            if positions.len() < 2 {
                continue;
            }
            let (rows, cols) = block_lines(positions);
            if rows.count_ones() == 1 || cols.count_ones() == 1 {
                found |= on_pair(digit, position_cells(house, positions));
            }
        }
    }
    found
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_digit_pointing_along_a_row() {
        // the 1s in r2 and r3 confine the 1 of the top left block to r1
        let line = format!(
            "{}{}{}{}",
            "000000000",
            "000001000",
            "000000001",
            "000000000".repeat(6),
        );
        let sudoku = Sudoku::from_str_line(&line).unwrap();

        let mut pairs = vec![];
        let found = find_pointing_pairs(&sudoku, |digit, cells| {
            pairs.push((digit, cells));
            true
        });

        let expected = Cell::new(0).as_set() | Cell::new(1) | Cell::new(2);
        assert!(found);
        assert_eq!(pairs, vec![(Digit::new(1), expected)]);
    }
}
