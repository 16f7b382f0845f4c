//! Console session and input/output operations
//!
//! This module contains the adapter around the core:
//! - Command-line flags and session orchestration
//! - Bounded-integer console prompting
//! - Text rendering of board snapshots
//! - Animated GIF export of a finished tour
//! - Error types

/// Command-line interface and session orchestration
pub mod cli;
/// Runtime constants: board size range, render tokens, GIF settings
pub mod configuration;
/// Error types for all tour operations
pub mod error;
/// Bounded-integer prompting from a console stream
pub mod input;
/// Text rendering of board snapshots
pub mod render;
/// Animated GIF export of the move sequence
pub mod visualization;
