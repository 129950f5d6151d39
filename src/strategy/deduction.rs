use super::strategies::Strategy;
use crate::bitset::Set;
use crate::board::positions::{Col, Row};
use crate::board::{Candidate, Cell, Digit};
use std::fmt;

/// Whether a deduction was found scanning along a row or a column.
///
/// For a box-line reduction this is the orientation of the line the digit
/// is confined to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum LineType {
    Row,
    Col,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineType::Row => write!(f, "row"),
            LineType::Col => write!(f, "column"),
        }
    }
}

/// A single deduction made by one strategy.
///
/// The single strategies produce placements; the remaining strategies
/// detect a pattern and record the cells and digit(s) involved without
/// changing the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Deduction {
    /// A cell with only one candidate left, entered into the grid.
    NakedSingle(Candidate),
    /// A digit with only one possible position in a line, entered into the
    /// grid. Tagged with the orientation of the scan that found it.
    HiddenSingle(Candidate, LineType),
    /// Two cells in a row sharing the same two candidates.
    NakedPair {
        /// The two cells, in scan order.
        cells: [Cell; 2],
        /// Their common candidate pair.
        digits: Set<Digit>,
    },
    /// A digit confined to a single line within a block, with at least two
    /// possible positions.
    PointingPair {
        #[allow(missing_docs)]
        digit: Digit,
        /// The possible positions of the digit within the block.
        cells: Set<Cell>,
    },
    /// A digit whose possible positions within a block all lie on one line.
    BoxLineReduction {
        #[allow(missing_docs)]
        digit: Digit,
        /// The possible positions of the digit within the block.
        cells: Set<Cell>,
        /// Orientation of the confining line.
        line: LineType,
    },
    /// Two rows in which a digit is restricted to the same two columns.
    XWing {
        #[allow(missing_docs)]
        digit: Digit,
        /// The two rows, in ascending order.
        rows: [Row; 2],
        /// The two shared columns, in ascending order.
        cols: [Col; 2],
    },
}

impl Deduction {
    /// Returns the strategy that produced this deduction.
    pub fn strategy(&self) -> Strategy {
        match self {
            Deduction::NakedSingle { .. } => Strategy::NakedSingle,
            Deduction::HiddenSingle { .. } => Strategy::HiddenSingle,
            Deduction::NakedPair { .. } => Strategy::NakedPair,
            Deduction::PointingPair { .. } => Strategy::PointingPair,
            Deduction::BoxLineReduction { .. } => Strategy::BoxLineReduction,
            Deduction::XWing { .. } => Strategy::XWing,
        }
    }
}

fn write_cell(f: &mut fmt::Formatter, cell: Cell) -> fmt::Result {
    write!(f, "r{}c{}", cell.row().get() + 1, cell.col().get() + 1)
}

fn write_cells(f: &mut fmt::Formatter, cells: impl IntoIterator<Item = Cell>) -> fmt::Result {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write_cell(f, cell)?;
    }
    Ok(())
}

impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Deduction::*;
        match *self {
            NakedSingle(candidate) => {
                write_cell(f, candidate.cell)?;
                write!(f, " {}", candidate.digit.get())
            }
            HiddenSingle(candidate, line) => {
                write_cell(f, candidate.cell)?;
                write!(f, " {} ({})", candidate.digit.get(), line)
            }
            NakedPair { cells, digits } => {
                write_cells(f, cells.iter().cloned())?;
                let mut digits = digits.into_iter();
                match (digits.next(), digits.next()) {
                    (Some(first), Some(second)) => {
                        write!(f, " {},{}", first.get(), second.get())
                    }
                    _ => unreachable!("naked pair always holds two digits"),
                }
            }
            PointingPair { digit, cells } => {
                write_cells(f, cells)?;
                write!(f, " {}", digit.get())
            }
            BoxLineReduction { digit, cells, line } => {
                write_cells(f, cells)?;
                write!(f, " {} ({})", digit.get(), line)
            }
            XWing { digit, rows, cols } => write!(
                f,
                "r{},r{} c{},c{} {}",
                rows[0].get() + 1,
                rows[1].get() + 1,
                cols[0].get() + 1,
                cols[1].get() + 1,
                digit.get()
            ),
        }
    }
}

/// The deductions made during one solving session, one insertion-ordered
/// list per strategy.
///
/// Owned by the [`StrategySolver`](super::StrategySolver) of the session;
/// lists are append-only while solving and never touched afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deductions {
    pub(crate) naked_singles: Vec<Deduction>,
    pub(crate) hidden_singles: Vec<Deduction>,
    pub(crate) naked_pairs: Vec<Deduction>,
    pub(crate) pointing_pairs: Vec<Deduction>,
    pub(crate) box_line_reductions: Vec<Deduction>,
    pub(crate) x_wings: Vec<Deduction>,
}

impl Deductions {
    /// Returns the deductions of one strategy, in the order they were found.
    pub fn get(&self, strategy: Strategy) -> &[Deduction] {
        match strategy {
            Strategy::NakedSingle => &self.naked_singles,
            Strategy::HiddenSingle => &self.hidden_singles,
            Strategy::NakedPair => &self.naked_pairs,
            Strategy::PointingPair => &self.pointing_pairs,
            Strategy::BoxLineReduction => &self.box_line_reductions,
            Strategy::XWing => &self.x_wings,
        }
    }

    /// Returns the total number of deductions across all strategies.
    pub fn len(&self) -> usize {
        Strategy::ALL.iter().map(|&strategy| self.get(strategy).len()).sum()
    }

    /// Checks whether any strategy made a deduction.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all deductions, grouped by strategy in
    /// application order, insertion-ordered within each strategy.
    pub fn iter(&self) -> impl Iterator<Item = &Deduction> {
        Strategy::ALL.iter().flat_map(move |&strategy| self.get(strategy).iter())
    }

    /// Returns how often each strategy was used, in application order.
    pub fn counts(&self) -> [(Strategy, usize); 6] {
        let mut counts = [(Strategy::NakedSingle, 0); 6];
        for (slot, &strategy) in counts.iter_mut().zip(Strategy::ALL.iter()) {
            *slot = (strategy, self.get(strategy).len());
        }
        counts
    }
}
