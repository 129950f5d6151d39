#![warn(missing_docs)]
//! The sudoku analyzer library
//!
//! ## Overview
//!
//! This library applies the solving strategies a human would use to a
//! sudoku and records which strategy deduced what, for analyzing puzzles
//! rather than merely solving them. It makes no attempt at backtracking:
//! when the strategies run dry the puzzle is handed back partially solved
//! together with everything that was deduced up to that point.
//!
//! ## Example
//!
//! ```
//! use sudoku_analyzer::strategy::{Strategy, StrategySolver};
//! use sudoku_analyzer::Sudoku;
//!
//! let sudoku_line = "023456789450789123789103456231564097564897230807231564312045978645970312978312605";
//!
//! // Sudokus are created from 81 character lines, '0' marking empty cells.
//! let sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//!
//! let mut solver = StrategySolver::from_sudoku(sudoku);
//! solver.solve();
//!
//! assert!(solver.is_solved());
//! for deduction in solver.deductions().get(Strategy::NakedSingle) {
//!     println!("{}", deduction);
//! }
//! ```

pub mod bitset;
pub mod board;
mod candidates;
mod consts;
pub mod parse_errors;
pub mod strategy;

pub use crate::board::{Candidate, Cell, Digit, Sudoku};
pub use crate::strategy::StrategySolver;
