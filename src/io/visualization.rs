//! Frame capture and GIF generation for tour visualization

use image::{Frame, Rgba, RgbaImage};

use crate::board::grid::{Board, CellState, Position};
use crate::io::configuration::{
    CELL_PIXEL_SIZE, FINAL_FRAME_HOLD_FACTOR, GRID_LINE_COLOR, KNIGHT_COLOR, UNVISITED_COLOR,
    VIEWER_MIN_FRAME_DELAY_MS, VISITED_COLOR,
};
use crate::io::error::{Result, TourError, invalid_parameter};

/// Captures board states for visualization
///
/// Records one board per emitted snapshot during a run to enable
/// post-processing export of the tour as an animated GIF
pub struct TourCapture {
    boards: Vec<Board>,
}

impl TourCapture {
    /// Create a capture sized for the expected number of snapshots
    pub fn new(expected_frames: usize) -> Self {
        Self {
            boards: Vec::with_capacity(expected_frames),
        }
    }

    /// Record the board state behind one snapshot
    pub fn record_snapshot(&mut self, board: &Board) {
        self.boards.push(board.clone());
    }

    /// Returns the number of captured board states
    pub const fn frame_count(&self) -> usize {
        self.boards.len()
    }

    /// Export the captured boards as an animated GIF
    ///
    /// Frame delays below what GIF viewers reliably support are honored by
    /// skipping frames instead, keeping the apparent animation speed. The
    /// final board state is held longer than the animation frames.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No board states were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.boards.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no board states captured for visualization",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let mut frames = Vec::with_capacity(self.boards.len() / skip_factor + 1);
        for (index, board) in self.boards.iter().enumerate() {
            if index % skip_factor == 0 {
                frames.push(render_frame(board, effective_delay_ms));
            }
        }

        // The last board always closes the animation, held for visibility
        if let Some(board) = self.boards.last() {
            frames.push(render_frame(
                board,
                effective_delay_ms * FINAL_FRAME_HOLD_FACTOR,
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| TourError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| TourError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| TourError::GifExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}

/// Render one board as an upscaled RGBA frame with cell borders
fn render_frame(board: &Board, delay_ms: u32) -> Frame {
    let width = board.cols() as u32 * CELL_PIXEL_SIZE;
    let height = board.rows() as u32 * CELL_PIXEL_SIZE;
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pos = Position::new(
                (y / CELL_PIXEL_SIZE) as usize,
                (x / CELL_PIXEL_SIZE) as usize,
            );

            let on_border = x % CELL_PIXEL_SIZE == 0
                || y % CELL_PIXEL_SIZE == 0
                || x == width - 1
                || y == height - 1;

            let color = if on_border {
                GRID_LINE_COLOR
            } else {
                match board.state_at(pos) {
                    Ok(CellState::Current) => KNIGHT_COLOR,
                    Ok(CellState::Visited) => VISITED_COLOR,
                    _ => UNVISITED_COLOR,
                }
            };

            img.put_pixel(x, y, Rgba(color));
        }
    }

    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::configuration::GIF_FRAME_DELAY_MS;

    #[test]
    fn test_empty_capture_refuses_export() {
        let capture = TourCapture::new(0);
        let result = capture.export_gif("unused.gif", GIF_FRAME_DELAY_MS);
        assert!(matches!(result, Err(TourError::InvalidParameter { .. })));
    }

    #[test]
    fn test_export_writes_gif_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory must be creatable");
        };
        let path = dir.path().join("tour.gif");
        let Some(path_str) = path.to_str() else {
            unreachable!("temp paths are valid UTF-8");
        };

        let Ok(mut board) = Board::new(3, 3) else {
            unreachable!("3x3 board must construct");
        };
        let mut capture = TourCapture::new(2);
        capture.record_snapshot(&board);
        assert!(board.mark_current(Position::new(0, 0)).is_ok());
        capture.record_snapshot(&board);

        assert_eq!(capture.frame_count(), 2);
        assert!(capture.export_gif(path_str, GIF_FRAME_DELAY_MS).is_ok());

        let metadata = std::fs::metadata(&path);
        assert!(metadata.is_ok_and(|m| m.len() > 0));
    }
}
