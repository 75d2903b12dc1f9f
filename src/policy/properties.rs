//! Property tests across all policies.

use proptest::prelude::*;

use super::*;
use crate::error::ScheduleError;
use crate::models::{total_movement, Cylinder, Direction, Geometry, SeekSchedule};

/// (geometry, head, requests) with everything in range.
fn batch() -> impl Strategy<Value = (Geometry, Cylinder, Vec<Cylinder>)> {
    (1_i64..300).prop_flat_map(|size| {
        (
            Just(Geometry::new(size).unwrap()),
            0..size,
            proptest::collection::vec(0..size, 0..30),
        )
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Increasing), Just(Direction::Decreasing)]
}

fn sorted(mut v: Vec<Cylinder>) -> Vec<Cylinder> {
    v.sort_unstable();
    v
}

fn all_schedules(
    requests: &[Cylinder],
    head: Cylinder,
    direction: Direction,
    geometry: &Geometry,
) -> Vec<(&'static str, SeekSchedule)> {
    let ones = vec![1.0; requests.len()];
    vec![
        ("FCFS", fcfs(requests, head)),
        ("SSTF", sstf(requests, head)),
        ("SCAN", scan(requests, head, direction, geometry).unwrap()),
        ("C-SCAN", c_scan(requests, head, direction, geometry).unwrap()),
        ("LOOK", look(requests, head, direction)),
        ("C-LOOK", c_look(requests, head, direction)),
        ("WSTSF", wstsf(requests, head, &ones, Some(geometry)).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_reported_total_matches_sequence(
        (geometry, head, requests) in batch(),
        dir in direction(),
    ) {
        for (name, s) in all_schedules(&requests, head, dir, &geometry) {
            prop_assert_eq!(
                s.total_movement(),
                total_movement(s.sequence()),
                "{} reported a total that disagrees with its sequence", name
            );
            prop_assert_eq!(s.initial_head(), head);
        }
    }

    #[test]
    fn prop_every_request_serviced_once(
        (geometry, head, requests) in batch(),
        dir in direction(),
    ) {
        let expected = sorted(requests.clone());
        for (name, s) in all_schedules(&requests, head, dir, &geometry) {
            prop_assert_eq!(sorted(s.serviced()), expected.clone(), "{}", name);
            prop_assert!(s.boundary_stops().len() <= 2, "{}", name);
            for &i in s.boundary_stops() {
                let c = s.sequence()[i];
                prop_assert!(c == 0 || c == geometry.max_cylinder(), "{}", name);
            }
        }
    }

    #[test]
    fn prop_fcfs_keeps_order(
        head in -1000_i64..1000,
        requests in proptest::collection::vec(-1000_i64..1000, 0..30),
    ) {
        let s = fcfs(&requests, head);
        let mut expected = vec![head];
        expected.extend_from_slice(&requests);
        prop_assert_eq!(s.sequence(), expected.as_slice());
    }

    #[test]
    fn prop_sstf_is_greedy(
        head in -500_i64..500,
        requests in proptest::collection::vec(-500_i64..500, 0..30),
    ) {
        let s = sstf(&requests, head);
        let mut remaining = requests.clone();
        for w in s.sequence().windows(2) {
            let (pos, chosen) = (w[0], w[1]);
            let step = pos.abs_diff(chosen);
            prop_assert!(remaining.iter().all(|r| r.abs_diff(pos) >= step));
            let idx = remaining.iter().position(|&r| r == chosen).unwrap();
            remaining.remove(idx);
        }
        prop_assert!(remaining.is_empty());
    }

    #[test]
    fn prop_scan_never_cheaper_than_look(
        (geometry, head, requests) in batch(),
        dir in direction(),
    ) {
        let s = scan(&requests, head, dir, &geometry).unwrap();
        let l = look(&requests, head, dir);
        prop_assert!(s.total_movement() >= l.total_movement());
    }

    #[test]
    fn prop_c_look_never_costlier_than_c_scan(
        (geometry, head, requests) in batch(),
        dir in direction(),
    ) {
        let cs = c_scan(&requests, head, dir, &geometry).unwrap();
        let cl = c_look(&requests, head, dir);
        prop_assert!(cl.total_movement() <= cs.total_movement());
    }

    #[test]
    fn prop_priority_is_stable_sort(
        pairs in proptest::collection::vec((0_i64..200, -5_i32..5), 0..30),
    ) {
        let requests: Vec<_> = pairs.iter().map(|p| p.0).collect();
        let priorities: Vec<_> = pairs.iter().map(|p| p.1).collect();
        let order = priority_order(&requests, &priorities).unwrap();

        let mut expected = pairs.clone();
        expected.sort_by_key(|p| p.1);
        let expected: Vec<_> = expected.into_iter().map(|p| p.0).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn prop_priority_length_mismatch(
        requests in proptest::collection::vec(0_i64..200, 1..20),
    ) {
        let priorities = vec![0; requests.len() - 1];
        let is_mismatch = matches!(
            priority_order(&requests, &priorities),
            Err(ScheduleError::LengthMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn prop_wstsf_equal_weights_is_sstf(
        (geometry, head, requests) in batch(),
        weight in prop_oneof![Just(0.5), Just(1.0), Just(3.0), Just(1e308)],
    ) {
        let weights = vec![weight; requests.len()];
        let w = wstsf(&requests, head, &weights, Some(&geometry)).unwrap();
        prop_assert_eq!(w, sstf(&requests, head));
    }

    #[test]
    fn prop_wstsf_rejects_out_of_range(
        (geometry, head, mut requests) in batch(),
        overshoot in 0_i64..100,
    ) {
        requests.push(geometry.max_cylinder() + 1 + overshoot);
        let weights = vec![1.0; requests.len()];
        let is_out_of_range = matches!(
            wstsf(&requests, head, &weights, Some(&geometry)),
            Err(ScheduleError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }
}
