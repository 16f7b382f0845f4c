//! Error types for board construction, tour execution, and the console session

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tour operations
#[derive(Debug)]
pub enum TourError {
    /// Board construction received a zero-sized dimension
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// A position outside the board was passed to a board operation
    ///
    /// Indicates a caller bug: the move generator never produces
    /// out-of-bounds positions, and the session validates user input
    /// before it reaches the board.
    OutOfBounds {
        /// The offending (row, col) position
        position: (usize, usize),
        /// Board dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The input stream closed while a prompt was still awaiting a value
    InputClosed {
        /// The prompt that was being answered
        prompt: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode the tour visualization as a GIF
    GifExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions {rows}x{cols}: both must be at least 1")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} board",
                    position.0, position.1, dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InputClosed { prompt } => {
                write!(f, "Input stream closed while awaiting: {prompt}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::GifExport { path, source } => {
                write!(
                    f,
                    "Failed to export visualization to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TourError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::GifExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tour results
pub type Result<T> = std::result::Result<T, TourError>;

impl From<std::io::Error> for TourError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TourError {
    TourError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
