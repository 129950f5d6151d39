use super::prelude::*;

// Detects a digit restricted to the same two columns in two different rows.
// Only the row-based form is searched. Detection only.
pub(crate) fn find_x_wings(
    sudoku: &Sudoku,
    mut on_x_wing: impl FnMut(Digit, [Row; 2], [Col; 2]) -> bool,
) -> bool {
    let mut found = false;
    for digit in Digit::all() {
        let mut row_positions: [Set<Position<House>>; 9] = [Set::NONE; 9];
        for row in Row::all() {
            row_positions[row.as_index()] = house_positions(sudoku, row.house(), digit);
        }

        for (upper, &positions) in row_positions.iter().enumerate() {
            if positions.len() != 2 {
                continue;
            }
            for (lower, &other) in row_positions.iter().enumerate().skip(upper + 1) {
                if other != positions {
                    continue;
                }
                // positions within a row house are column indices
                let mut cols = [Col::new(0); 2];
                for (slot, pos) in cols.iter_mut().zip(positions) {
                    *slot = Col::new(pos.get());
                }
                let rows = [Row::new(upper as u8), Row::new(lower as u8)];
                found |= on_x_wing(digit, rows, cols);
            }
        }
    }
    found
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_rectangle_of_restricted_columns() {
        // r1 misses 1 and 9, r4 misses 1 and 2; the 1 can only sit in
        // c5 or c8 of either row
        let line = format!(
            "{}{}{}{}",
            "234506708",
            "000000000".repeat(2),
            "345607809",
            "000000000".repeat(5),
        );
        let sudoku = Sudoku::from_str_line(&line).unwrap();

        let mut x_wings = vec![];
        let found = find_x_wings(&sudoku, |digit, rows, cols| {
            x_wings.push((digit, rows, cols));
            true
        });

        assert!(found);
        assert_eq!(
            x_wings,
            vec![(
                Digit::new(1),
                [Row::new(0), Row::new(3)],
                [Col::new(4), Col::new(7)],
            )],
        );
    }
}
