//! Seek schedule (solution) model and cost accounting.
//!
//! A seek schedule is the visit sequence a policy produced for one request
//! batch, starting at the initial head position, together with the total
//! head displacement it incurs.
//!
//! # Cost Rule
//! `total = Σ |sequence[i] - sequence[i-1]|`, applied identically to every
//! policy that reports movement.
//!
//! Totals are `u128`: a single step between two `i64` cylinders fits in
//! `u64`, so the sum of any in-memory sequence cannot overflow.

use serde::Serialize;

use super::Cylinder;

/// Sums absolute consecutive differences of a visit sequence.
///
/// Independent of any policy; used to verify that a reported total matches
/// its sequence.
pub fn total_movement(sequence: &[Cylinder]) -> u128 {
    sequence
        .windows(2)
        .map(|w| u128::from(w[0].abs_diff(w[1])))
        .sum()
}

/// Result of one scheduling run.
///
/// `sequence[0]` is always the initial head position and the last element
/// is the final head position. Indices listed in `boundary_stops` are
/// boundary cylinders visited en route (SCAN / C-SCAN), not requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeekSchedule {
    sequence: Vec<Cylinder>,
    total_movement: u128,
    boundary_stops: Vec<usize>,
}

impl SeekSchedule {
    /// Visit sequence, beginning with the initial head.
    #[inline]
    pub fn sequence(&self) -> &[Cylinder] {
        &self.sequence
    }

    /// Consumes the schedule, returning `(sequence, total_movement)`.
    pub fn into_parts(self) -> (Vec<Cylinder>, u128) {
        (self.sequence, self.total_movement)
    }

    /// Total head displacement.
    #[inline]
    pub fn total_movement(&self) -> u128 {
        self.total_movement
    }

    /// Positions in `sequence` that are boundary insertions.
    #[inline]
    pub fn boundary_stops(&self) -> &[usize] {
        &self.boundary_stops
    }

    /// Initial head position.
    pub fn initial_head(&self) -> Cylinder {
        self.sequence[0]
    }

    /// Final head position.
    pub fn final_head(&self) -> Cylinder {
        self.sequence[self.sequence.len() - 1]
    }

    /// Requests in service order (initial head and boundary stops removed).
    pub fn serviced(&self) -> Vec<Cylinder> {
        self.sequence
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(i, _)| !self.boundary_stops.contains(i))
            .map(|(_, &c)| c)
            .collect()
    }

    /// Number of requests serviced.
    pub fn request_count(&self) -> usize {
        self.sequence.len() - 1 - self.boundary_stops.len()
    }

    /// Whether the reported total agrees with [`total_movement`].
    pub fn is_consistent(&self) -> bool {
        total_movement(&self.sequence) == self.total_movement
    }
}

/// Head state during a single run.
///
/// The only mutable state a policy holds; accumulates cost as it visits
/// cylinders so sequence and total cannot drift apart.
#[derive(Debug)]
pub(crate) struct HeadTracker {
    position: Cylinder,
    sequence: Vec<Cylinder>,
    total: u128,
    boundary_stops: Vec<usize>,
}

impl HeadTracker {
    pub(crate) fn new(head: Cylinder, capacity: usize) -> Self {
        let mut sequence = Vec::with_capacity(capacity + 1);
        sequence.push(head);
        Self {
            position: head,
            sequence,
            total: 0,
            boundary_stops: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> Cylinder {
        self.position
    }

    /// Moves to a request cylinder.
    pub(crate) fn visit(&mut self, cylinder: Cylinder) {
        self.total += u128::from(self.position.abs_diff(cylinder));
        self.position = cylinder;
        self.sequence.push(cylinder);
    }

    /// Visits each cylinder in order.
    pub(crate) fn visit_all<I: IntoIterator<Item = Cylinder>>(&mut self, cylinders: I) {
        for c in cylinders {
            self.visit(c);
        }
    }

    /// Moves to a boundary cylinder that is not a request.
    pub(crate) fn visit_boundary(&mut self, cylinder: Cylinder) {
        tracing::trace!(
            target: "disk_schedule::head",
            from = self.position,
            to = cylinder,
            "boundary_stop"
        );
        self.boundary_stops.push(self.sequence.len());
        self.visit(cylinder);
    }

    pub(crate) fn finish(self) -> SeekSchedule {
        SeekSchedule {
            sequence: self.sequence,
            total_movement: self.total,
            boundary_stops: self.boundary_stops,
        }
    }
}
