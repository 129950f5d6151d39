//! Errors that may be encountered when reading a sudoku from a string
use crate::board::positions::{block, col, row};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// An invalid sudoku entry encountered during parsing.
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom. Example: Top-row is 0, 1, 2
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// A structure representing an error caused when parsing the sudoku
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidInputError {
    /// Input contains something other than the digits `'0'..='9'`
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Input is not exactly 81 cells long. Returns the number of cells supplied.
    #[error("input contains {0} cells instead of required 81")]
    WrongLength(usize),
}
