//! Seek trace metrics.
//!
//! Computes comparison figures from a completed seek schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total movement | Sum of all seek distances |
//! | Request count | Requests serviced (boundary stops excluded) |
//! | Mean seek | Total movement / request count |
//! | Max seek | Longest single head move |
//! | Boundary stops | Edge visits that were not requests |
//! | Reversals | Changes of travel direction between non-zero moves |

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::SeekSchedule;

/// Seek trace performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekStats {
    /// Sum of seek distances.
    pub total_movement: u128,
    /// Requests serviced.
    pub request_count: usize,
    /// Mean movement per serviced request (0.0 for an empty batch).
    pub mean_seek: f64,
    /// Longest single move.
    pub max_seek: u64,
    /// Boundary cylinders visited that were not requests.
    pub boundary_stops: usize,
    /// Direction changes along the trace.
    pub reversals: usize,
}

impl SeekStats {
    /// Computes stats from a seek schedule.
    pub fn calculate(schedule: &SeekSchedule) -> Self {
        let sequence = schedule.sequence();
        let request_count = schedule.request_count();

        let mut max_seek = 0u64;
        let mut reversals = 0;
        let mut last_heading = Ordering::Equal;
        for w in sequence.windows(2) {
            max_seek = max_seek.max(w[0].abs_diff(w[1]));

            let heading = w[1].cmp(&w[0]);
            if heading != Ordering::Equal {
                if last_heading != Ordering::Equal && heading != last_heading {
                    reversals += 1;
                }
                last_heading = heading;
            }
        }

        let total_movement = schedule.total_movement();
        let mean_seek = if request_count == 0 {
            0.0
        } else {
            total_movement as f64 / request_count as f64
        };

        Self {
            total_movement,
            request_count,
            mean_seek,
            max_seek,
            boundary_stops: schedule.boundary_stops().len(),
            reversals,
        }
    }

    /// Whether total movement stays within `max_total`.
    pub fn within_budget(&self, max_total: u128) -> bool {
        self.total_movement <= max_total
    }
}
