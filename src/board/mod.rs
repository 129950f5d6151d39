//! Types for cells, digits and other things on a sudoku board
mod candidate;
mod digit;
pub mod positions;
mod sudoku;

#[rustfmt::skip]
pub use self::{
    sudoku::Sudoku,
    digit::Digit,
    positions::Cell,
    candidate::Candidate,
};
