//! Greedy tour engine
//!
//! - Warnsdorff candidate scoring with first-minimum tie-breaks
//! - The iterative step loop, snapshot emission, and completion verdict

/// Candidate scoring and first-minimum selection
pub mod selection;
/// Tour state machine, step loop, and snapshots
pub mod tour;

pub use tour::{Snapshot, TourEngine, TourReport};
