//! This module contains the [`StrategySolver`] that mimics human approaches
//! to sudoku solving. It applies its fixed battery of strategies over and
//! over, in a fixed priority order, until none of them finds anything new,
//! and records every deduction on the way. The per strategy records can be
//! obtained through [`Deductions`].
//!
//! Only the two single strategies enter digits. The pattern strategies
//! (naked pair, pointing pair, box-line reduction, x-wing) detect and
//! record their pattern without eliminating candidates, so they can
//! document a stall but never break one. Puzzles that need more than the
//! singles to progress are returned partially solved.

mod deduction;
mod solver;
mod strategies;

pub use self::deduction::{Deduction, Deductions, LineType};
pub use self::solver::StrategySolver;
pub use self::strategies::Strategy;
