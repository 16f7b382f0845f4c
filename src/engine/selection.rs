//! Warnsdorff candidate scoring
//!
//! Each legal move is scored by how many onward moves it would leave, counted
//! against the board as it stands before the move: the knight's own square is
//! still `Current` during look-ahead, so it counts as an onward target from a
//! candidate. The candidate with the fewest onward moves wins; ties keep the
//! candidate that appears first in canonical offset order.

use crate::board::grid::{Board, Position};
use crate::board::moves::legal_moves;

/// Count the onward moves each candidate would have on the unmutated board
///
/// Pure look-ahead: nothing is marked visited while counting.
pub fn onward_counts(board: &Board, candidates: &[Position]) -> Vec<usize> {
    candidates
        .iter()
        .map(|&candidate| legal_moves(board, candidate).len())
        .collect()
}

/// Index of the first strict minimum in `counts`
///
/// Scans left to right and replaces the best index only on a strict
/// improvement, so equal counts resolve to the earlier candidate. Returns
/// `None` for an empty slice.
pub fn first_minimum(counts: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for (index, &count) in counts.iter().enumerate() {
        match best {
            Some((_, smallest)) if count >= smallest => {}
            _ => best = Some((index, count)),
        }
    }

    best.map(|(index, _)| index)
}

/// Select the knight's next square from `from` under Warnsdorff's rule
///
/// Returns `None` when no legal move remains.
pub fn select_next(board: &Board, from: Position) -> Option<Position> {
    let candidates = legal_moves(board, from);
    let counts = onward_counts(board, &candidates);

    first_minimum(&counts).and_then(|index| candidates.get(index).copied())
}
