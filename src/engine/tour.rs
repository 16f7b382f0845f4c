//! Tour state machine and step loop
//!
//! The engine owns the board for the duration of a run and mutates it in
//! place. Each step strictly grows the visited set, so the loop is bounded by
//! `rows * cols` iterations. Consumers either pull one [`Snapshot`] per move
//! with [`TourEngine::step`] or collect the whole run with
//! [`TourEngine::run`].

use crate::board::grid::{Board, Position};
use crate::engine::selection::select_next;
use crate::io::error::{Result, TourError};

/// Board state captured after a move, handed to consumers read-only
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The board as it stood after the move
    pub board: Board,
    /// The knight's square after the move
    pub knight: Position,
    /// How many moves had been made when this snapshot was taken
    ///
    /// Zero for the initial placement snapshot.
    pub move_number: usize,
}

/// Outcome of a full tour run
#[derive(Debug)]
pub struct TourReport {
    /// One snapshot for the initial placement, then one per move, in order
    pub snapshots: Vec<Snapshot>,
    /// Number of moves committed before the tour ended
    pub moves_made: usize,
    /// Whether every cell was reached (`moves_made == rows * cols - 1`)
    pub completed: bool,
}

/// Greedy tour driver
///
/// Two states: running (the knight has a square and may step again) and
/// terminated (no legal move remained). Termination is final; further `step`
/// calls return `None` without touching the board.
#[derive(Debug)]
pub struct TourEngine {
    board: Board,
    knight: Position,
    moves_made: usize,
    terminated: bool,
}

impl TourEngine {
    /// Place the knight on its starting square
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `start` is not on the board.
    pub fn new(mut board: Board, start: Position) -> Result<Self> {
        if !board.is_in_bounds(start) {
            return Err(TourError::OutOfBounds {
                position: (start.row, start.col),
                dimensions: (board.rows(), board.cols()),
            });
        }

        board.mark_current(start)?;

        Ok(Self {
            board,
            knight: start,
            moves_made: 0,
            terminated: false,
        })
    }

    /// Commit the next greedy move, if one exists
    ///
    /// Returns `Ok(Some(snapshot))` after a committed move, or `Ok(None)` once
    /// the tour has terminated. The terminating call emits no snapshot, and no
    /// call after it does either.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` only if the board rejects a generated move, which
    /// a correct move generator never produces.
    pub fn step(&mut self) -> Result<Option<Snapshot>> {
        if self.terminated {
            return Ok(None);
        }

        let Some(next) = select_next(&self.board, self.knight) else {
            self.terminated = true;
            return Ok(None);
        };

        self.board.mark_visited(self.knight)?;
        self.board.mark_current(next)?;
        self.knight = next;
        self.moves_made += 1;

        Ok(Some(self.snapshot()))
    }

    /// Run a tour from `start` to termination and collect every snapshot
    ///
    /// The first snapshot is the initial placement; each subsequent one
    /// records a committed move.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `start` is not on the board.
    pub fn run(board: Board, start: Position) -> Result<TourReport> {
        let mut engine = Self::new(board, start)?;
        let mut snapshots = Vec::with_capacity(engine.board.cell_count());
        snapshots.push(engine.snapshot());

        while let Some(snapshot) = engine.step()? {
            snapshots.push(snapshot);
        }

        Ok(TourReport {
            snapshots,
            moves_made: engine.moves_made,
            completed: engine.is_complete(),
        })
    }

    /// Capture the current board state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            knight: self.knight,
            move_number: self.moves_made,
        }
    }

    /// Number of moves committed so far
    pub const fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Whether the tour has ended
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Whether every cell has been reached
    pub const fn is_complete(&self) -> bool {
        self.moves_made == self.board.cell_count() - 1
    }

    /// The board in its current state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The knight's current square
    pub const fn knight(&self) -> Position {
        self.knight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid::CellState;
    use crate::board::moves::legal_moves;

    #[test]
    fn test_start_outside_board_is_rejected() {
        let Ok(board) = Board::new(3, 3) else {
            unreachable!("3x3 board must construct");
        };
        let result = TourEngine::new(board, Position::new(3, 0));
        assert!(matches!(result, Err(TourError::OutOfBounds { .. })));
    }

    #[test]
    fn test_initial_state_marks_start_current() {
        let Ok(board) = Board::new(4, 4) else {
            unreachable!("4x4 board must construct");
        };
        let Ok(engine) = TourEngine::new(board, Position::new(1, 2)) else {
            unreachable!("start square is on the board");
        };

        assert_eq!(engine.moves_made(), 0);
        assert!(!engine.is_terminated());
        assert_eq!(
            engine.board().state_at(Position::new(1, 2)).ok(),
            Some(CellState::Current)
        );
        assert_eq!(engine.board().unvisited_count(), 15);
    }

    #[test]
    fn test_termination_is_final() {
        // The center of a 3x3 board has no knight moves at all
        let Ok(board) = Board::new(3, 3) else {
            unreachable!("3x3 board must construct");
        };
        let Ok(mut engine) = TourEngine::new(board, Position::new(1, 1)) else {
            unreachable!("start square is on the board");
        };

        assert!(legal_moves(engine.board(), engine.knight()).is_empty());
        assert!(matches!(engine.step(), Ok(None)));
        assert!(engine.is_terminated());
        assert!(matches!(engine.step(), Ok(None)));
        assert_eq!(engine.moves_made(), 0);
        assert!(!engine.is_complete());
    }

    #[test]
    fn test_step_demotes_departed_square() {
        let Ok(board) = Board::new(5, 5) else {
            unreachable!("5x5 board must construct");
        };
        let start = Position::new(0, 0);
        let Ok(mut engine) = TourEngine::new(board, start) else {
            unreachable!("start square is on the board");
        };

        let Ok(Some(snapshot)) = engine.step() else {
            unreachable!("a corner start on 5x5 has legal moves");
        };

        assert_eq!(snapshot.move_number, 1);
        assert_eq!(snapshot.board.state_at(start).ok(), Some(CellState::Visited));
        assert_eq!(
            snapshot.board.state_at(snapshot.knight).ok(),
            Some(CellState::Current)
        );
    }
}
