use crate::board::positions::{Cell, House};
use crate::board::{Candidate, Digit};
use crate::consts::N_CELLS;
use crate::parse_errors::{InvalidEntry, InvalidInputError};
use std::fmt;

/// The main structure exposing the grid state of a sudoku.
///
/// Cells are stored in row-major order, `0` marking an empty cell.
/// The grid upholds one invariant throughout: no row, column or block
/// ever contains the same digit twice.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from an 81 character line, row by row, with `'0'`
    /// marking an empty cell.
    ///
    /// Fails if the line is not exactly 81 characters long or contains
    /// anything other than the digits `'0'..='9'`.
    pub fn from_str_line(s: &str) -> Result<Sudoku, InvalidInputError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for (cell, ch) in s.chars().enumerate() {
            if cell >= N_CELLS {
                return Err(InvalidInputError::WrongLength(s.chars().count()));
            }
            match ch {
                '0'..='9' => grid[cell] = ch as u8 - b'0',
                _ => {
                    return Err(InvalidInputError::InvalidEntry(InvalidEntry {
                        cell: cell as u8,
                        ch,
                    }))
                }
            }
            n_cells += 1;
        }
        if n_cells != N_CELLS {
            return Err(InvalidInputError::WrongLength(n_cells));
        }
        Ok(Sudoku(grid))
    }

    /// Returns the digit in `cell`, if it contains one.
    pub fn get(self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Checks whether `digit` could be entered in `cell` without clashing
    /// with a digit already placed in the cell's row, column or block.
    ///
    /// This only inspects the current grid state and has no side effects.
    pub fn is_valid(&self, cell: Cell, digit: Digit) -> bool {
        cell.houses()
            .iter()
            .all(|&house| !self.house_contains(house, digit))
    }

    fn house_contains(&self, house: House, digit: Digit) -> bool {
        house.cells().into_iter().any(|cell| self.get(cell) == Some(digit))
    }

    // Placements only ever come from the solving strategies, which deduce
    // them from the candidate queries. The invariant is enforced here anyway
    // in debug builds.
    pub(crate) fn enter(&mut self, candidate: Candidate) {
        debug_assert!(self.get(candidate.cell).is_none());
        debug_assert!(self.is_valid(candidate.cell, candidate.digit));
        self.0[candidate.cell.as_index()] = candidate.digit.get();
    }

    /// Returns the number of empty cells.
    pub fn n_empty(&self) -> usize {
        self.0.iter().filter(|&&num| num == 0).count()
    }

    /// Checks whether every cell contains a digit.
    pub fn is_solved(&self) -> bool {
        self.n_empty() == 0
    }

    /// Returns an iterator over the grid, going from left to right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Returns a byte array of the grid contents, `0` marking an empty cell.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the 81 character line representation parsed by
    /// [`from_str_line`](Sudoku::from_str_line).
    pub fn to_str_line(&self) -> String {
        self.0.iter().map(|&num| (num + b'0') as char).collect()
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &num) in self.0.iter().enumerate() {
            let (row, col) = (cell / 9, cell % 9);
            match (row, col) {
                (_, 3) | (_, 6) => write!(f, " ")?,    // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) if row != 0 => writeln!(f)?,
                _ => (),
            }
            match num {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sudoku({})", self.to_str_line())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    #[test]
    fn line_roundtrip() {
        let sudoku = Sudoku::from_str_line(SOLVED).unwrap();
        assert_eq!(sudoku.to_str_line(), SOLVED);
        assert!(sudoku.is_solved());
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(
            Sudoku::from_str_line("123"),
            Err(InvalidInputError::WrongLength(3)),
        );
    }

    #[test]
    fn rejects_long_input() {
        let line = "0".repeat(82);
        assert_eq!(
            Sudoku::from_str_line(&line),
            Err(InvalidInputError::WrongLength(82)),
        );
    }

    #[test]
    fn rejects_non_digits() {
        let line = format!("{}x{}", "0".repeat(40), "0".repeat(40));
        assert_eq!(
            Sudoku::from_str_line(&line),
            Err(InvalidInputError::InvalidEntry(InvalidEntry {
                cell: 40,
                ch: 'x'
            })),
        );
    }

    #[test]
    fn is_valid_checks_row_col_and_block() {
        let mut line = "0".repeat(81).into_bytes();
        line[0] = b'5'; // r1c1
        let sudoku = Sudoku::from_str_line(std::str::from_utf8(&line).unwrap()).unwrap();

        let five = Digit::new(5);
        assert!(!sudoku.is_valid(Cell::new(8), five)); // same row
        assert!(!sudoku.is_valid(Cell::new(72), five)); // same col
        assert!(!sudoku.is_valid(Cell::new(10), five)); // same block
        assert!(sudoku.is_valid(Cell::new(40), five)); // unrelated cell
        assert!(sudoku.is_valid(Cell::new(8), Digit::new(6)));
    }
}
