//! Disk scheduling engine and trace metrics.
//!
//! `DiskScheduler` dispatches a request batch to one policy, or compares
//! several over the same batch. `SeekStats` summarises a seek trace for
//! presentation and comparison.

mod engine;
mod stats;

pub use engine::{DiskScheduler, Outcome, PolicyComparison};
pub use stats::SeekStats;
