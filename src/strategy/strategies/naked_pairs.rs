use super::prelude::*;

// Detects two cells of a row restricted to the same two candidates. The
// pair is only recorded; no candidates are eliminated anywhere (see the
// strategy module docs).
//
// `on_pair` reports whether the pair counts as progress.
pub(crate) fn find_naked_pairs(
    sudoku: &Sudoku,
    mut on_pair: impl FnMut([Cell; 2], Set<Digit>) -> bool,
) -> bool {
    let mut found = false;
    for row in Row::all() {
        // the first cell seen with each two-candidate set
        let mut seen: Vec<(Set<Digit>, Cell)> = vec![];
        for cell in row.cells() {
            let digits = cell_candidates(sudoku, cell);
            if digits.len() != 2 {
                continue;
            }
            let partner = seen
                .iter()
                .find(|&&(pair, _)| pair == digits)
                .map(|&(_, first_cell)| first_cell);
            match partner {
                Some(partner) => found |= on_pair([partner, cell], digits),
                None => seen.push((digits, cell)),
            }
        }
    }
    found
}
