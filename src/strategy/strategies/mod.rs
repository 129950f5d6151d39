pub(crate) mod box_line_reductions;
pub(crate) mod hidden_singles;
pub(crate) mod naked_pairs;
pub(crate) mod naked_singles;
pub(crate) mod pointing_pairs;
pub(crate) mod prelude;
pub(crate) mod x_wings;

use super::solver::StrategySolver;
use crate::bitset::Set;
use crate::board::positions::{Cell, House, Position};
use std::fmt;

/// The strategies applied by the [`StrategySolver`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Strategy {
    NakedSingle,
    HiddenSingle,
    NakedPair,
    PointingPair,
    BoxLineReduction,
    XWing,
}

impl Strategy {
    /// All strategies, in application order.
    ///
    /// The order is part of the solver's contract: every pass runs the
    /// strategies in exactly this sequence, so later strategies observe the
    /// grid state left behind by the earlier ones.
    pub const ALL: &'static [Strategy] = &[
        Strategy::NakedSingle,
        Strategy::HiddenSingle,
        Strategy::NakedPair,
        Strategy::PointingPair,
        Strategy::BoxLineReduction,
        Strategy::XWing,
    ];

    /// The conventional name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::NakedSingle => "Naked Single",
            Strategy::HiddenSingle => "Hidden Single",
            Strategy::NakedPair => "Naked Pair",
            Strategy::PointingPair => "Pointing Pair",
            Strategy::BoxLineReduction => "Box-Line Reduction",
            Strategy::XWing => "X-Wing",
        }
    }

    // One full scan of the grid. Returns whether any new deduction was made.
    pub(crate) fn apply_pass(self, state: &mut StrategySolver) -> bool {
        match self {
            Strategy::NakedSingle => state.find_naked_singles(),
            Strategy::HiddenSingle => state.find_hidden_singles(),
            Strategy::NakedPair => state.find_naked_pairs(),
            Strategy::PointingPair => state.find_pointing_pairs(),
            Strategy::BoxLineReduction => state.find_box_line_reductions(),
            Strategy::XWing => state.find_x_wings(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helpers shared by the block scanning strategies.

// Bitmasks of the lines covered by a set of positions within a block house:
// position / 3 is the line of the block's band, position % 3 the line of its
// stack.
pub(crate) fn block_lines(positions: Set<Position<House>>) -> (u8, u8) {
    let mut rows = 0u8;
    let mut cols = 0u8;
    for pos in positions {
        rows |= 1 << (pos.as_index() / 3);
        cols |= 1 << (pos.as_index() % 3);
    }
    (rows, cols)
}

pub(crate) fn position_cells(house: House, positions: Set<Position<House>>) -> Set<Cell> {
    let mut cells = Set::NONE;
    for pos in positions {
        cells |= house.cell_at(pos);
    }
    cells
}
