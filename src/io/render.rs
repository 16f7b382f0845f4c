//! Text rendering of board snapshots
//!
//! Produces the full grid as a string so the session owns all writing; each
//! cell becomes one fixed-width token and the board ends with a blank line.

use crate::board::grid::{Board, CellState, Position};
use crate::io::configuration::{KNIGHT_TOKEN, UNVISITED_TOKEN, VISITED_TOKEN};

/// Render a board as rows of cell tokens followed by a blank line
pub fn render_board(board: &Board) -> String {
    let row_width = board.cols() * KNIGHT_TOKEN.len() + 1;
    let mut rendered = String::with_capacity((board.rows() + 1) * row_width);

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            rendered.push_str(cell_token(board, Position::new(row, col)));
        }
        rendered.push('\n');
    }
    rendered.push('\n');

    rendered
}

fn cell_token(board: &Board, pos: Position) -> &'static str {
    match board.state_at(pos) {
        Ok(CellState::Current) => KNIGHT_TOKEN,
        Ok(CellState::Visited) => VISITED_TOKEN,
        _ => UNVISITED_TOKEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_placement_renders_single_knight() {
        let Ok(mut board) = Board::new(3, 3) else {
            unreachable!("3x3 board must construct");
        };
        assert!(board.mark_current(Position::new(1, 2)).is_ok());

        let rendered = render_board(&board);
        assert_eq!(rendered.matches(KNIGHT_TOKEN).count(), 1);
        assert_eq!(rendered.matches(UNVISITED_TOKEN).count(), 8);
        assert_eq!(rendered, "[ ][ ][ ]\n[ ][ ][K]\n[ ][ ][ ]\n\n");
    }

    #[test]
    fn test_all_three_states_render_distinctly() {
        let Ok(mut board) = Board::new(3, 4) else {
            unreachable!("3x4 board must construct");
        };
        assert!(board.mark_visited(Position::new(0, 0)).is_ok());
        assert!(board.mark_current(Position::new(2, 1)).is_ok());

        let rendered = render_board(&board);
        assert_eq!(rendered, "[/][ ][ ][ ]\n[ ][ ][ ][ ]\n[ ][K][ ][ ]\n\n");
    }
}
