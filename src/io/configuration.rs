//! Runtime constants for the console session and visualization export

/// Smallest accepted board dimension
pub const MIN_BOARD_DIMENSION: usize = 3;
/// Largest accepted board dimension
pub const MAX_BOARD_DIMENSION: usize = 10;

// Render tokens are fixed-width so the rows line up as a grid
/// Token for the knight's square
pub const KNIGHT_TOKEN: &str = "[K]";
/// Token for a visited-and-departed square
pub const VISITED_TOKEN: &str = "[/]";
/// Token for an unvisited square
pub const UNVISITED_TOKEN: &str = "[ ]";

/// Description printed at the start of an interactive session
pub const SESSION_DESCRIPTION: &str = "This program attempts an open Knight Tour using Warnsdorff's algorithm. \
     Please specify square/rectangular board dimensions, and the Knight's starting square.";

/// Message printed when every cell was reached
pub const TOUR_COMPLETED_MESSAGE: &str = "Tour Completed!";
/// Message printed when the heuristic dead-ended early
pub const NO_MORE_MOVES_MESSAGE: &str = "No More Moves!";

// Output settings
/// Edge length of one board cell in exported GIF frames, in pixels
pub const CELL_PIXEL_SIZE: u32 = 24;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// How many frame delays the final board state is held for
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 8;

// Frame colors, RGBA
/// Color of the knight's square
pub const KNIGHT_COLOR: [u8; 4] = [52, 101, 164, 255];
/// Color of visited squares
pub const VISITED_COLOR: [u8; 4] = [186, 189, 182, 255];
/// Color of unvisited squares
pub const UNVISITED_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Color of the cell borders
pub const GRID_LINE_COLOR: [u8; 4] = [46, 52, 54, 255];
