use super::prelude::*;
use crate::strategy::deduction::LineType;

// For every digit all rows are scanned before all columns; both scans enter
// their placements immediately, so the column scan of a digit already sees
// what its row scan entered. This ordering is fixed and part of the trace
// contract.
pub(crate) fn find_hidden_singles(
    sudoku: &mut Sudoku,
    mut on_single: impl FnMut(Candidate, LineType),
) -> bool {
    let mut found = false;
    for digit in Digit::all() {
        for row in Row::all() {
            let house = row.house();
            if let Ok(Some(pos)) = house_positions(sudoku, house, digit).unique() {
                let candidate = Candidate {
                    cell: house.cell_at(pos),
                    digit,
                };
                sudoku.enter(candidate);
                on_single(candidate, LineType::Row);
                found = true;
            }
        }
        for col in Col::all() {
            let house = col.house();
            if let Ok(Some(pos)) = house_positions(sudoku, house, digit).unique() {
                let candidate = Candidate {
                    cell: house.cell_at(pos),
                    digit,
                };
                sudoku.enter(candidate);
                on_single(candidate, LineType::Col);
                found = true;
            }
        }
    }
    found
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(sudoku: &mut Sudoku) -> Vec<(Candidate, LineType)> {
        let mut singles = vec![];
        find_hidden_singles(sudoku, |candidate, line| singles.push((candidate, line)));
        singles
    }

    #[test]
    fn finds_singles_in_rows() {
        // r1 misses 1 and 9; the 1 in c8 leaves only r1c9 for the 1,
        // after which the 9 is pinned to r1c8
        let line = format!(
            "{}{}{}{}",
            "234567800",
            "000000000".repeat(3),
            "000000010",
            "000000000".repeat(4),
        );
        let mut sudoku = Sudoku::from_str_line(&line).unwrap();

        assert_eq!(
            collect(&mut sudoku),
            vec![
                (Candidate::new(8, 1), LineType::Row),
                (Candidate::new(7, 9), LineType::Row),
            ],
        );
        assert_eq!(sudoku.get(Cell::new(8)), Some(Digit::new(1)));
        assert_eq!(sudoku.get(Cell::new(7)), Some(Digit::new(9)));
    }

    #[test]
    fn finds_singles_in_columns() {
        // c1 misses 1 and 9; the 1 in r8c5 leaves only r9c1 for the 1,
        // after which the 9 is pinned to r8c1
        let line = format!(
            "{}{}{}{}{}{}{}{}{}",
            "200000000",
            "300000000",
            "400000000",
            "500000000",
            "600000000",
            "700000000",
            "800000000",
            "000010000",
            "000000000",
        );
        let mut sudoku = Sudoku::from_str_line(&line).unwrap();

        assert_eq!(
            collect(&mut sudoku),
            vec![
                (Candidate::new(72, 1), LineType::Col),
                (Candidate::new(63, 9), LineType::Col),
            ],
        );
        assert_eq!(sudoku.get(Cell::new(72)), Some(Digit::new(1)));
        assert_eq!(sudoku.get(Cell::new(63)), Some(Digit::new(9)));
    }
}
