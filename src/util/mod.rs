//! Utility functions module
//!
//! Contains display formatting helpers and the attempt clock shared by
//! both front ends.

pub mod clock;
pub mod format;

// Re-export commonly used items
pub use clock::AttemptClock;
pub use format::{format_elapsed, format_percentage, format_score, progress_label};
