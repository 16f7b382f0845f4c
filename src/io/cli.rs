//! Command-line interface and interactive session orchestration

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::board::grid::{Board, Position};
use crate::engine::tour::TourEngine;
use crate::io::configuration::{
    GIF_FRAME_DELAY_MS, MAX_BOARD_DIMENSION, MIN_BOARD_DIMENSION, NO_MORE_MOVES_MESSAGE,
    SESSION_DESCRIPTION, TOUR_COMPLETED_MESSAGE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::input::prompt_bounded_integer;
use crate::io::render::render_board;
use crate::io::visualization::TourCapture;

#[derive(Parser)]
#[command(name = "greedyknight")]
#[command(
    author,
    version,
    about = "Compute an open knight's tour using Warnsdorff's greedy heuristic"
)]
/// Command-line arguments for the knight's tour session
///
/// Every value left unset is collected interactively; a fully-flagged
/// invocation runs without prompting at all.
pub struct Cli {
    /// Board rows, skips the rows prompt when given
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Board columns, skips the columns prompt when given
    #[arg(long, value_name = "N")]
    pub cols: Option<usize>,

    /// Starting row of the knight, 1-based, skips the prompt when given
    #[arg(long, value_name = "N")]
    pub start_row: Option<usize>,

    /// Starting column of the knight, 1-based, skips the prompt when given
    #[arg(long, value_name = "N")]
    pub start_col: Option<usize>,

    /// Suppress the description and per-move boards
    #[arg(short, long)]
    pub quiet: bool,

    /// Export the tour as an animated GIF
    #[arg(short, long, value_name = "PATH")]
    pub visualize: Option<PathBuf>,
}

impl Cli {
    /// Check if boards should be rendered to the console
    pub const fn should_show_boards(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one console session from configuration to verdict
pub struct TourSession {
    cli: Cli,
}

impl TourSession {
    /// Create a session from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the session against the process's standard streams
    ///
    /// # Errors
    ///
    /// Returns an error if flag validation, the input stream, or the
    /// visualization export fails. Malformed interactive input is retried,
    /// never an error.
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut input = stdin.lock();
        let mut output = stdout.lock();
        self.run_with(&mut input, &mut output)
    }

    /// Run the session against arbitrary streams
    ///
    /// # Errors
    ///
    /// Returns an error if flag validation, the input stream, or the
    /// visualization export fails.
    pub fn run_with<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        if self.cli.should_show_boards() {
            writeln!(output, "{SESSION_DESCRIPTION}")?;
        }

        let (rows, cols) = self.resolve_dimensions(input, output)?;
        let start = self.resolve_start(input, output, rows, cols)?;

        let board = Board::new(rows, cols)?;
        let mut engine = TourEngine::new(board, start)?;
        let mut capture = self
            .cli
            .visualize
            .is_some()
            .then(|| TourCapture::new(rows * cols));

        self.emit(output, capture.as_mut(), engine.board())?;
        while let Some(snapshot) = engine.step()? {
            self.emit(output, capture.as_mut(), &snapshot.board)?;
        }

        let verdict = if engine.is_complete() {
            TOUR_COMPLETED_MESSAGE
        } else {
            NO_MORE_MOVES_MESSAGE
        };
        writeln!(output, "{verdict}")?;

        if let (Some(path), Some(capture)) = (self.cli.visualize.as_ref(), capture.as_ref()) {
            let path_str = path.to_str().ok_or_else(|| {
                invalid_parameter(
                    "visualize",
                    &path.display(),
                    &"output path must be valid UTF-8",
                )
            })?;
            capture.export_gif(path_str, GIF_FRAME_DELAY_MS)?;
        }

        Ok(())
    }

    fn emit<W: Write>(
        &self,
        output: &mut W,
        capture: Option<&mut TourCapture>,
        board: &Board,
    ) -> Result<()> {
        if self.cli.should_show_boards() {
            write!(output, "{}", render_board(board))?;
        }
        if let Some(capture) = capture {
            capture.record_snapshot(board);
        }
        Ok(())
    }

    fn resolve_dimensions<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(usize, usize)> {
        let rows = match self.cli.rows {
            Some(value) => validate_flag("rows", value, MIN_BOARD_DIMENSION, MAX_BOARD_DIMENSION)?,
            None => prompt_bounded_integer(
                input,
                output,
                MIN_BOARD_DIMENSION,
                MAX_BOARD_DIMENSION,
                &format!(
                    "Enter number of rows (between {MIN_BOARD_DIMENSION}-{MAX_BOARD_DIMENSION}):"
                ),
            )?,
        };

        let cols = match self.cli.cols {
            Some(value) => validate_flag("cols", value, MIN_BOARD_DIMENSION, MAX_BOARD_DIMENSION)?,
            None => prompt_bounded_integer(
                input,
                output,
                MIN_BOARD_DIMENSION,
                MAX_BOARD_DIMENSION,
                &format!(
                    "Enter number of columns (between {MIN_BOARD_DIMENSION}-{MAX_BOARD_DIMENSION}):"
                ),
            )?,
        };

        Ok((rows, cols))
    }

    /// Resolve the start square, converting the console's 1-based
    /// coordinates to the board's 0-based ones
    fn resolve_start<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        rows: usize,
        cols: usize,
    ) -> Result<Position> {
        let start_row = match self.cli.start_row {
            Some(value) => validate_flag("start-row", value, 1, rows)?,
            None => prompt_bounded_integer(
                input,
                output,
                1,
                rows,
                "Enter starting row of knight:",
            )?,
        };

        let start_col = match self.cli.start_col {
            Some(value) => validate_flag("start-col", value, 1, cols)?,
            None => prompt_bounded_integer(
                input,
                output,
                1,
                cols,
                "Enter starting column of knight:",
            )?,
        };

        Ok(Position::new(start_row - 1, start_col - 1))
    }
}

fn validate_flag(parameter: &'static str, value: usize, lower: usize, upper: usize) -> Result<usize> {
    if (lower..=upper).contains(&value) {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between {lower} and {upper}"),
        ))
    }
}
