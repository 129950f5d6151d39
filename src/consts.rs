pub(crate) const N_CELLS: usize = 81;

// house numbering: rows, then cols, then blocks
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
