//! Arrival-order and nearest-neighbour policies.
//!
//! # Tie-breaking
//! SSTF and WSTSF pick the first minimum in the caller's original request
//! order: among equally close candidates the earliest-submitted one wins.
//! The working set is an order-preserving copy, so this stays true as
//! requests are removed.

use std::cmp::Ordering;

use crate::error::{Result, ScheduleError};
use crate::models::{Cylinder, Geometry, HeadTracker, SeekSchedule};

/// First-Come, First-Served.
///
/// Sequence is `[head] + requests`, unchanged. No geometry required.
pub fn fcfs(requests: &[Cylinder], head: Cylinder) -> SeekSchedule {
    let mut tracker = HeadTracker::new(head, requests.len());
    tracker.visit_all(requests.iter().copied());
    tracker.finish()
}

/// Shortest Seek Time First.
///
/// Repeatedly moves to the pending request nearest the head.
///
/// # Complexity
/// O(n²) for n requests.
pub fn sstf(requests: &[Cylinder], head: Cylinder) -> SeekSchedule {
    let mut remaining = requests.to_vec();
    let mut tracker = HeadTracker::new(head, requests.len());

    while !remaining.is_empty() {
        let pos = tracker.position();
        let Some((idx, _)) = remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &c)| c.abs_diff(pos))
        else {
            break;
        };
        let next = remaining.remove(idx);

        tracing::trace!(target: "disk_schedule::sstf", from = pos, to = next, "select");
        tracker.visit(next);
    }

    tracker.finish()
}

/// Weighted Shortest Seek Time First.
///
/// Picks the pending request minimising `distance × weight`; the weight
/// only steers selection, the reported total is raw distance. When
/// `geometry` is given every request must lie in `[0, disk_size)`; this is
/// checked before scheduling starts.
///
/// # Errors
/// - [`ScheduleError::LengthMismatch`] if `weights.len() != requests.len()`
/// - [`ScheduleError::InvalidWeight`] for a non-positive or non-finite weight
/// - [`ScheduleError::OutOfRange`] for a request outside the geometry
pub fn wstsf(
    requests: &[Cylinder],
    head: Cylinder,
    weights: &[f64],
    geometry: Option<&Geometry>,
) -> Result<SeekSchedule> {
    if weights.len() != requests.len() {
        return Err(ScheduleError::LengthMismatch {
            what: "weight",
            requests: requests.len(),
            values: weights.len(),
        });
    }
    if let Some((index, &weight)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(ScheduleError::InvalidWeight { index, weight });
    }
    if let Some(geometry) = geometry {
        for &request in requests {
            geometry.check(request)?;
        }
    }

    let mut remaining: Vec<(Cylinder, f64)> =
        requests.iter().copied().zip(weights.iter().copied()).collect();
    let mut tracker = HeadTracker::new(head, requests.len());

    while !remaining.is_empty() {
        let pos = tracker.position();
        let (mut best, mut best_distance, mut best_cost) = (0, 0, f64::INFINITY);
        for (i, &(cylinder, weight)) in remaining.iter().enumerate() {
            let distance = cylinder.abs_diff(pos);
            // Weighted costs may saturate to infinity; equal costs fall back
            // to raw distance, then to input order.
            let cost = distance as f64 * weight;
            let closer = match cost.total_cmp(&best_cost) {
                Ordering::Less => true,
                Ordering::Equal => distance < best_distance,
                Ordering::Greater => false,
            };
            if i == 0 || closer {
                best = i;
                best_distance = distance;
                best_cost = cost;
            }
        }
        let (next, weight) = remaining.remove(best);

        tracing::trace!(
            target: "disk_schedule::wstsf",
            from = pos,
            to = next,
            weight,
            weighted_cost = best_cost,
            "select"
        );
        tracker.visit(next);
    }

    Ok(tracker.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUESTS: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_fcfs_preserves_order() {
        let s = fcfs(&REQUESTS, 50);
        assert_eq!(s.sequence(), &[50, 98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(s.total_movement(), 643);
    }

    #[test]
    fn test_fcfs_empty() {
        let s = fcfs(&[], 10);
        assert_eq!(s.sequence(), &[10]);
        assert_eq!(s.total_movement(), 0);
    }

    #[test]
    fn test_sstf_canonical() {
        let s = sstf(&REQUESTS, 50);
        // 37 (13 away) beats 65 (15 away), then 14 (23) beats 65 (28).
        assert_eq!(s.sequence(), &[50, 37, 14, 65, 67, 98, 122, 124, 183]);
        assert_eq!(s.total_movement(), 205);
        assert!(s.total_movement() < 643);
    }

    #[test]
    fn test_sstf_tie_prefers_earlier_request() {
        let s = sstf(&[60, 40], 50);
        assert_eq!(s.sequence(), &[50, 60, 40]);
        let s = sstf(&[40, 60], 50);
        assert_eq!(s.sequence(), &[50, 40, 60]);
    }

    #[test]
    fn test_sstf_duplicates_and_negatives() {
        let s = sstf(&[5, -5, 5], 0);
        assert_eq!(s.sequence(), &[0, 5, 5, -5]);
        assert_eq!(s.total_movement(), 15);
    }

    #[test]
    fn test_sstf_does_not_touch_input() {
        let requests = vec![3, 1, 2];
        let _ = sstf(&requests, 0);
        assert_eq!(requests, vec![3, 1, 2]);
    }

    #[test]
    fn test_wstsf_weight_steers_selection() {
        // 40 is closer but heavily weighted; 70 wins (20*1 < 10*5).
        let s = wstsf(&[40, 70], 50, &[5.0, 1.0], None).unwrap();
        assert_eq!(s.sequence(), &[50, 70, 40]);
        // Raw distance: 20 + 30.
        assert_eq!(s.total_movement(), 50);
    }

    #[test]
    fn test_wstsf_equal_weights_match_sstf() {
        let weights = vec![2.0; REQUESTS.len()];
        let w = wstsf(&REQUESTS, 50, &weights, None).unwrap();
        assert_eq!(w, sstf(&REQUESTS, 50));
    }

    #[test]
    fn test_wstsf_saturated_weights_fall_back_to_distance() {
        let w = wstsf(&[10, 5], 0, &[1e308, 1e308], None).unwrap();
        assert_eq!(w, sstf(&[10, 5], 0));

        let weights = vec![f64::MAX; REQUESTS.len()];
        let w = wstsf(&REQUESTS, 50, &weights, None).unwrap();
        assert_eq!(w, sstf(&REQUESTS, 50));
    }

    #[test]
    fn test_wstsf_finite_cost_beats_saturated() {
        // 100 * 1e308 saturates; 90 * 1.0 does not.
        let w = wstsf(&[100, -90], 0, &[1e308, 1.0], None).unwrap();
        assert_eq!(w.sequence(), &[0, -90, 100]);
    }

    #[test]
    fn test_wstsf_length_mismatch() {
        let err = wstsf(&[1, 2, 3], 0, &[1.0], None).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::LengthMismatch {
                what: "weight",
                requests: 3,
                values: 1
            }
        );
    }

    #[test]
    fn test_wstsf_out_of_range() {
        let g = Geometry::new(100).unwrap();
        let err = wstsf(&[10, 150], 0, &[1.0, 1.0], Some(&g)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutOfRange {
                cylinder: 150,
                disk_size: 100
            }
        );
        // Without geometry the same batch schedules.
        assert!(wstsf(&[10, 150], 0, &[1.0, 1.0], None).is_ok());
    }

    #[test]
    fn test_wstsf_rejects_bad_weights() {
        assert!(matches!(
            wstsf(&[1, 2], 0, &[1.0, 0.0], None),
            Err(ScheduleError::InvalidWeight { index: 1, .. })
        ));
        assert!(matches!(
            wstsf(&[1], 0, &[f64::NAN], None),
            Err(ScheduleError::InvalidWeight { index: 0, .. })
        ));
    }
}
