//! Knight move enumeration
//!
//! Candidates are produced in the fixed order of [`KNIGHT_OFFSETS`]. That
//! order is observable: the engine breaks scoring ties by taking the first
//! candidate, so reordering the table changes which tours are found.

use crate::board::grid::{Board, CellState, Position};

/// The eight knight offsets as (row delta, column delta), in canonical order
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Enumerate the legal knight moves from `from`
///
/// A candidate is legal when it lies on the board and its cell is still
/// `Unvisited`. The square the knight occupies is excluded by construction:
/// no knight offset maps a square onto itself. This is a pure query and may
/// be called with hypothetical positions for look-ahead scoring.
pub fn legal_moves(board: &Board, from: Position) -> Vec<Position> {
    let mut moves = Vec::with_capacity(KNIGHT_OFFSETS.len());

    for delta in KNIGHT_OFFSETS {
        if let Some(candidate) = offset_target(from, delta) {
            if matches!(board.state_at(candidate), Ok(CellState::Unvisited)) {
                moves.push(candidate);
            }
        }
    }

    moves
}

/// Apply an offset to a position, rejecting targets above or left of the board
const fn offset_target(from: Position, delta: (i32, i32)) -> Option<Position> {
    let row = from.row as i64 + delta.0 as i64;
    let col = from.col as i64 + delta.1 as i64;

    if row < 0 || col < 0 {
        return None;
    }

    Some(Position::new(row as usize, col as usize))
}
