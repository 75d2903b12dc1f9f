//! Error type for disk scheduling runs.
//!
//! Every error is raised before a policy touches its working copy of the
//! request batch, so a failed call never yields a partial sequence.

use thiserror::Error;

use crate::models::Cylinder;
use crate::validation::ValidationError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Failure of a single scheduling call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A parallel weight/priority collection does not match the request count.
    #[error("{what} count {values} does not match request count {requests}")]
    LengthMismatch {
        what: &'static str,
        requests: usize,
        values: usize,
    },

    /// A request lies outside `[0, disk_size)`.
    #[error("request {cylinder} is outside the disk range [0, {disk_size})")]
    OutOfRange { cylinder: Cylinder, disk_size: u64 },

    /// The initial head position lies outside `[0, disk_size)`.
    #[error("head position {head} is outside the disk range [0, {disk_size})")]
    HeadOutOfRange { head: Cylinder, disk_size: u64 },

    /// Disk size must be positive.
    #[error("invalid disk size {0}: must be greater than zero")]
    InvalidGeometry(i64),

    /// Policy name not in the supported set.
    #[error("unknown scheduling policy '{0}'")]
    UnknownPolicy(String),

    /// Direction string not recognised.
    #[error("unknown direction '{0}': expected increasing/right or decreasing/left")]
    InvalidDirection(String),

    /// Weight is not a positive finite number.
    #[error("weight {weight} at index {index} must be a positive finite number")]
    InvalidWeight { index: usize, weight: f64 },

    /// Request text could not be parsed.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Batch validation found one or more problems.
    #[error("request batch failed validation ({} problem(s))", .0.len())]
    Invalid(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}
