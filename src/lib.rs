//! Open knight's tour search on small rectangular boards using Warnsdorff's heuristic
//!
//! The engine repeatedly moves the knight to the reachable unvisited square with
//! the fewest onward moves, committing greedily with no backtracking. Ties are
//! broken by candidate order, so every tour is fully deterministic.

#![forbid(unsafe_code)]

/// Board state, coordinates, and knight move generation
pub mod board;
/// Greedy tour engine: candidate scoring, step loop, and completion verdict
pub mod engine;
/// Console session, input validation, rendering, and error handling
pub mod io;

pub use io::error::{Result, TourError};
