//! Sweep (elevator) policies: SCAN, C-SCAN, LOOK, C-LOOK.
//!
//! All four split the batch around the initial head:
//!
//! - **ahead**: requests at or past the head in the sweep direction
//!   (`r >= head` when increasing, `r <= head` when decreasing), serviced
//!   first in sweep order.
//! - **behind**: everything else, serviced after the turn.
//!
//! They differ only in what happens between the two partitions:
//!
//! | Policy | At end of sweep | Behind partition order |
//! |--------|-----------------|------------------------|
//! | SCAN | visit edge, reverse | away from edge |
//! | C-SCAN | visit edge, wrap to opposite edge | same sweep order |
//! | LOOK | reverse immediately | away from last request |
//! | C-LOOK | jump to farthest behind request | same sweep order |
//!
//! An empty batch yields `[head]` with zero movement for every policy.

use crate::error::Result;
use crate::models::{Cylinder, Direction, Geometry, HeadTracker, SeekSchedule};

/// Requests split around the head, both sorted in sweep order.
struct Partition {
    ahead: Vec<Cylinder>,
    behind: Vec<Cylinder>,
}

impl Partition {
    fn split(requests: &[Cylinder], head: Cylinder, direction: Direction) -> Self {
        let mut sorted = requests.to_vec();
        sorted.sort_unstable();

        let (mut ahead, mut behind): (Vec<_>, Vec<_>) = match direction {
            Direction::Increasing => sorted.into_iter().partition(|&r| r >= head),
            Direction::Decreasing => sorted.into_iter().partition(|&r| r <= head),
        };
        if direction == Direction::Decreasing {
            ahead.reverse();
            behind.reverse();
        }
        Self { ahead, behind }
    }
}

fn check_bounds(requests: &[Cylinder], head: Cylinder, geometry: &Geometry) -> Result<()> {
    geometry.check_head(head)?;
    for &request in requests {
        geometry.check(request)?;
    }
    Ok(())
}

/// SCAN (elevator).
///
/// Services the ahead partition, travels on to the disk edge in the sweep
/// direction even when no request lies there, then reverses through the
/// behind partition. The edge is skipped only when the head already sits
/// on it.
///
/// # Errors
/// [`ScheduleError::HeadOutOfRange`](crate::ScheduleError::HeadOutOfRange) /
/// [`ScheduleError::OutOfRange`](crate::ScheduleError::OutOfRange) when the
/// head or a request falls outside `geometry`.
pub fn scan(
    requests: &[Cylinder],
    head: Cylinder,
    direction: Direction,
    geometry: &Geometry,
) -> Result<SeekSchedule> {
    check_bounds(requests, head, geometry)?;
    let mut tracker = HeadTracker::new(head, requests.len() + 1);
    if requests.is_empty() {
        return Ok(tracker.finish());
    }

    let Partition { ahead, behind } = Partition::split(requests, head, direction);
    tracker.visit_all(ahead);

    let edge = geometry.boundary(direction);
    if tracker.position() != edge {
        tracker.visit_boundary(edge);
    }

    tracker.visit_all(behind.into_iter().rev());
    Ok(tracker.finish())
}

/// Circular SCAN.
///
/// Services the ahead partition, travels to the edge, wraps across the
/// whole disk to the opposite edge (both edges are recorded as stops and
/// the wrap is charged its full `disk_size - 1` distance), then services
/// the behind partition in the same sweep order. Nothing is visited for an
/// empty batch.
///
/// # Errors
/// Same as [`scan`].
pub fn c_scan(
    requests: &[Cylinder],
    head: Cylinder,
    direction: Direction,
    geometry: &Geometry,
) -> Result<SeekSchedule> {
    check_bounds(requests, head, geometry)?;
    let mut tracker = HeadTracker::new(head, requests.len() + 2);
    if requests.is_empty() {
        return Ok(tracker.finish());
    }

    let Partition { ahead, behind } = Partition::split(requests, head, direction);
    tracker.visit_all(ahead);

    let near = geometry.boundary(direction);
    let far = geometry.boundary(direction.reversed());
    if tracker.position() != near {
        tracker.visit_boundary(near);
    }
    if near != far {
        tracker.visit_boundary(far);
    }

    tracker.visit_all(behind);
    Ok(tracker.finish())
}

/// LOOK.
///
/// SCAN without the edge visit: reverses as soon as the ahead partition is
/// exhausted. No geometry required.
pub fn look(requests: &[Cylinder], head: Cylinder, direction: Direction) -> SeekSchedule {
    let mut tracker = HeadTracker::new(head, requests.len());
    let Partition { ahead, behind } = Partition::split(requests, head, direction);
    tracker.visit_all(ahead);
    tracker.visit_all(behind.into_iter().rev());
    tracker.finish()
}

/// Circular LOOK.
///
/// After the ahead partition, jumps directly to the far end of the behind
/// partition (its minimum when increasing, maximum when decreasing) and
/// continues in the same sweep order. The jump is charged its direct
/// distance. No geometry required.
pub fn c_look(requests: &[Cylinder], head: Cylinder, direction: Direction) -> SeekSchedule {
    let mut tracker = HeadTracker::new(head, requests.len());
    let Partition { ahead, behind } = Partition::split(requests, head, direction);
    tracker.visit_all(ahead);

    if let Some(&first) = behind.first() {
        tracing::trace!(
            target: "disk_schedule::c_look",
            from = tracker.position(),
            to = first,
            "jump"
        );
    }
    tracker.visit_all(behind);
    tracker.finish()
}
