use super::deduction::{Deduction, Deductions};
use super::strategies::{self, Strategy};
use crate::board::Sudoku;

/// Applies human style strategies to a sudoku until they run dry.
///
/// One `StrategySolver` is one solving session: it owns the grid it works
/// on and the [`Deductions`] it records, and shares nothing with other
/// sessions. Solving independent puzzles concurrently therefore needs no
/// synchronization, only independent solvers.
///
/// The strategy battery has no guarantee of finishing a puzzle. When it
/// stalls with empty cells left that is an ordinary terminal state, not an
/// error; inspect it through [`is_solved`](StrategySolver::is_solved) and
/// [`grid`](StrategySolver::grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategySolver {
    grid: Sudoku,
    deductions: Deductions,
}

impl StrategySolver {
    /// Creates a solver session for `sudoku` with an empty deduction record.
    pub fn from_sudoku(sudoku: Sudoku) -> StrategySolver {
        StrategySolver {
            grid: sudoku,
            deductions: Deductions::default(),
        }
    }

    /// Runs full passes of all strategies, in the order of
    /// [`Strategy::ALL`], until an entire pass makes no new deduction.
    ///
    /// Every pass runs every strategy, whether or not an earlier one in the
    /// same pass already found something; later strategies observe the grid
    /// state left by earlier ones. This always terminates: placements
    /// strictly shrink the number of empty cells, and the pattern
    /// strategies only count a deduction as progress the first time it is
    /// recorded.
    ///
    /// Calling `solve` again on a finished session finds nothing new and
    /// changes nothing.
    pub fn solve(&mut self) {
        loop {
            let mut progress = false;
            for &strategy in Strategy::ALL.iter() {
                progress |= strategy.apply_pass(self);
            }
            if !progress {
                break;
            }
        }
    }

    /// Checks whether every cell contains a digit.
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Returns the current state of the sudoku.
    pub fn grid(&self) -> Sudoku {
        self.grid
    }

    /// Returns the deductions recorded so far.
    pub fn deductions(&self) -> &Deductions {
        &self.deductions
    }

    /// Consumes the solver, returning the final grid and the deductions.
    pub fn into_parts(self) -> (Sudoku, Deductions) {
        (self.grid, self.deductions)
    }

    pub(crate) fn find_naked_singles(&mut self) -> bool {
        let moves = &mut self.deductions.naked_singles;
        strategies::naked_singles::find_naked_singles(&mut self.grid, |candidate| {
            moves.push(Deduction::NakedSingle(candidate))
        })
    }

    pub(crate) fn find_hidden_singles(&mut self) -> bool {
        let moves = &mut self.deductions.hidden_singles;
        strategies::hidden_singles::find_hidden_singles(&mut self.grid, |candidate, line| {
            moves.push(Deduction::HiddenSingle(candidate, line))
        })
    }

    pub(crate) fn find_naked_pairs(&mut self) -> bool {
        let moves = &mut self.deductions.naked_pairs;
        strategies::naked_pairs::find_naked_pairs(&self.grid, |cells, digits| {
            push_new(moves, Deduction::NakedPair { cells, digits })
        })
    }

    pub(crate) fn find_pointing_pairs(&mut self) -> bool {
        let moves = &mut self.deductions.pointing_pairs;
        strategies::pointing_pairs::find_pointing_pairs(&self.grid, |digit, cells| {
            push_new(moves, Deduction::PointingPair { digit, cells })
        })
    }

    pub(crate) fn find_box_line_reductions(&mut self) -> bool {
        let moves = &mut self.deductions.box_line_reductions;
        strategies::box_line_reductions::find_box_line_reductions(
            &self.grid,
            |digit, cells, line| push_new(moves, Deduction::BoxLineReduction { digit, cells, line }),
        )
    }

    pub(crate) fn find_x_wings(&mut self) -> bool {
        let moves = &mut self.deductions.x_wings;
        strategies::x_wings::find_x_wings(&self.grid, |digit, rows, cols| {
            push_new(moves, Deduction::XWing { digit, rows, cols })
        })
    }
}

// The pattern strategies rescan an unchanged grid every pass and would keep
// finding the same patterns. A move already in the record is therefore
// neither recorded again nor counted as progress; without this the solve
// loop could never reach its fixed point.
fn push_new(moves: &mut Vec<Deduction>, deduction: Deduction) -> bool {
    if moves.contains(&deduction) {
        return false;
    }
    moves.push(deduction);
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Candidate, Cell, Digit};
    use crate::board::positions::{Col, Row};

    const SOLVED: &str =
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    // SOLVED with one cell of each row removed
    const SINGLES_ONLY: &str =
        "023456789450789123789103456231564097564897230807231564312045978645970312978312605";

    fn solve(line: &str) -> StrategySolver {
        let sudoku = Sudoku::from_str_line(line).unwrap();
        let mut solver = StrategySolver::from_sudoku(sudoku);
        solver.solve();
        solver
    }

    #[test]
    fn solves_naked_singles_puzzle_with_exact_trace() {
        let solver = solve(SINGLES_ONLY);

        assert!(solver.is_solved());
        assert_eq!(solver.grid().to_str_line(), SOLVED);

        // one placement per removed cell, in row-major scan order
        let expected = [
            (0, 1),
            (11, 6),
            (22, 2),
            (33, 8),
            (44, 1),
            (46, 9),
            (57, 6),
            (68, 8),
            (79, 4),
        ]
        .iter()
        .map(|&(cell, digit)| Deduction::NakedSingle(Candidate::new(cell, digit)))
        .collect::<Vec<_>>();
        assert_eq!(solver.deductions().get(Strategy::NakedSingle), &expected[..]);

        for &strategy in Strategy::ALL.iter().skip(1) {
            assert!(solver.deductions().get(strategy).is_empty());
        }
    }

    #[test]
    fn full_grid_needs_no_deductions() {
        let solver = solve(SOLVED);
        assert!(solver.is_solved());
        assert!(solver.deductions().is_empty());
    }

    #[test]
    fn stalls_without_eliminations() {
        // two rows with a candidate pair each, everything else wide open;
        // the pattern strategies log their finds but cannot place anything
        let line = format!(
            "{}{}{}{}",
            "234506708",
            "000000000".repeat(2),
            "345607809",
            "000000000".repeat(5),
        );
        let solver = solve(&line);

        assert!(!solver.is_solved());
        assert_eq!(solver.grid().n_empty(), 67);

        let deductions = solver.deductions();
        assert!(deductions.get(Strategy::NakedSingle).is_empty());
        assert!(deductions.get(Strategy::HiddenSingle).is_empty());

        let pair_19 = Digit::new(1).as_set() | Digit::new(9);
        assert_eq!(
            deductions.get(Strategy::NakedPair).first(),
            Some(&Deduction::NakedPair {
                cells: [Cell::new(4), Cell::new(7)],
                digits: pair_19,
            }),
        );
        assert_eq!(
            deductions.get(Strategy::XWing),
            &[Deduction::XWing {
                digit: Digit::new(1),
                rows: [Row::new(0), Row::new(3)],
                cols: [Col::new(4), Col::new(7)],
            }],
        );
    }

    #[test]
    fn solving_again_is_a_no_op() {
        let line = format!(
            "{}{}{}{}",
            "234506708",
            "000000000".repeat(2),
            "345607809",
            "000000000".repeat(5),
        );
        let mut solver = solve(&line);
        let grid = solver.grid();
        let deductions = solver.deductions().clone();

        solver.solve();

        assert_eq!(solver.grid(), grid);
        assert_eq!(*solver.deductions(), deductions);
    }
}
