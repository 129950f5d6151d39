pub(crate) use crate::bitset::Set;
pub(crate) use crate::candidates::{cell_candidates, house_positions};
#[rustfmt::skip]
pub(crate) use crate::board::{
    Candidate,
    Digit,
    Sudoku,
    positions::{
        Block,
        Cell,
        Col,
        House,
        IntoHouse,
        Position,
        Row,
    },
};
