//! Priority ordering.

use crate::error::{Result, ScheduleError};
use crate::models::Cylinder;

/// Reorders requests by ascending priority (lower value = serviced sooner).
///
/// Stable: equal priorities keep their original relative order. Reports no
/// movement cost; callers wanting one can feed the order to
/// [`fcfs`](super::fcfs).
///
/// # Errors
/// [`ScheduleError::LengthMismatch`] if `priorities.len() != requests.len()`.
pub fn priority_order(requests: &[Cylinder], priorities: &[i32]) -> Result<Vec<Cylinder>> {
    if priorities.len() != requests.len() {
        return Err(ScheduleError::LengthMismatch {
            what: "priority",
            requests: requests.len(),
            values: priorities.len(),
        });
    }

    let mut paired: Vec<(i32, Cylinder)> = priorities
        .iter()
        .copied()
        .zip(requests.iter().copied())
        .collect();
    paired.sort_by_key(|&(priority, _)| priority);

    Ok(paired.into_iter().map(|(_, request)| request).collect())
}
