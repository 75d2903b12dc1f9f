//! Disk scheduling engine.
//!
//! # Algorithm
//!
//! 1. Optionally validate head and requests against the geometry.
//! 2. Dispatch to the selected policy with its own copy of the batch.
//! 3. Return the seek trace (or bare order, for PRIORITY).
//!
//! The engine holds no mutable state; a single instance may serve any
//! number of runs, from any number of threads.

use crate::error::{Result, ScheduleError};
use crate::models::{Cylinder, Direction, Geometry, SeekSchedule};
use crate::policy::{self, Policy, PolicyKind};
use crate::validation::validate_batch;

use super::SeekStats;

/// Product of one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Visit sequence with movement cost.
    Seek(SeekSchedule),
    /// Service order only (PRIORITY).
    Order(Vec<Cylinder>),
}

impl Outcome {
    /// The seek trace, if the policy reports movement.
    pub fn as_seek(&self) -> Option<&SeekSchedule> {
        match self {
            Self::Seek(s) => Some(s),
            Self::Order(_) => None,
        }
    }

    /// Consumes the outcome, returning the seek trace if present.
    pub fn into_seek(self) -> Option<SeekSchedule> {
        match self {
            Self::Seek(s) => Some(s),
            Self::Order(_) => None,
        }
    }

    /// Requests in service order.
    pub fn order(&self) -> Vec<Cylinder> {
        match self {
            Self::Seek(s) => s.serviced(),
            Self::Order(order) => order.clone(),
        }
    }

    /// Total movement, if the policy reports one.
    pub fn total_movement(&self) -> Option<u128> {
        self.as_seek().map(SeekSchedule::total_movement)
    }
}

/// One row of a multi-policy comparison.
#[derive(Debug, Clone)]
pub struct PolicyComparison {
    /// Policy that produced the row.
    pub policy: Policy,
    /// Its seek trace.
    pub schedule: SeekSchedule,
    /// Metrics over the trace.
    pub stats: SeekStats,
}

/// Stateless disk scheduling engine.
///
/// Geometry and initial head are explicit, immutable inputs.
///
/// # Example
///
/// ```
/// use u_disk_schedule::models::{Direction, Geometry};
/// use u_disk_schedule::policy::Policy;
/// use u_disk_schedule::scheduler::DiskScheduler;
///
/// let scheduler = DiskScheduler::new(Geometry::new(200).unwrap(), 50);
/// let requests = [98, 183, 37, 122, 14, 124, 65, 67];
///
/// let outcome = scheduler.run(&requests, &Policy::Fcfs).unwrap();
/// assert_eq!(outcome.total_movement(), Some(643));
///
/// let outcome = scheduler
///     .run(&requests, &Policy::CLook { direction: Direction::Increasing })
///     .unwrap();
/// assert_eq!(outcome.as_seek().unwrap().final_head(), 37);
/// ```
#[derive(Debug, Clone)]
pub struct DiskScheduler {
    geometry: Geometry,
    head: Cylinder,
    bounds_check: bool,
}

impl DiskScheduler {
    /// Creates an engine for `geometry` with the head at `head`.
    ///
    /// Bounds checking is on by default.
    pub fn new(geometry: Geometry, head: Cylinder) -> Self {
        Self {
            geometry,
            head,
            bounds_check: true,
        }
    }

    /// Enables or disables the pre-flight bounds check.
    ///
    /// When disabled, FCFS, SSTF, LOOK, C-LOOK and PRIORITY accept any
    /// integer. SCAN, C-SCAN and WSTSF always check, since they depend on
    /// the geometry.
    pub fn with_bounds_check(mut self, enabled: bool) -> Self {
        self.bounds_check = enabled;
        self
    }

    /// Device geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Initial head position.
    pub fn head(&self) -> Cylinder {
        self.head
    }

    /// Schedules `requests` under `policy`.
    ///
    /// # Errors
    /// - [`ScheduleError::Invalid`] when bounds checking finds out-of-range
    ///   head or requests
    /// - Any error the policy itself reports (length mismatch, bad weight,
    ///   out of range)
    pub fn run(&self, requests: &[Cylinder], policy: &Policy) -> Result<Outcome> {
        if self.bounds_check {
            if let Err(errors) = validate_batch(requests, self.head, &self.geometry) {
                tracing::warn!(
                    target: "disk_schedule::engine",
                    policy = %policy.kind(),
                    problems = errors.len(),
                    "run_rejected"
                );
                return Err(ScheduleError::Invalid(errors));
            }
        }

        let head = self.head;
        let geometry = &self.geometry;
        let outcome = match policy {
            Policy::Fcfs => Outcome::Seek(policy::fcfs(requests, head)),
            Policy::Sstf => Outcome::Seek(policy::sstf(requests, head)),
            Policy::Scan { direction } => {
                Outcome::Seek(policy::scan(requests, head, *direction, geometry)?)
            }
            Policy::CScan { direction } => {
                Outcome::Seek(policy::c_scan(requests, head, *direction, geometry)?)
            }
            Policy::Look { direction } => Outcome::Seek(policy::look(requests, head, *direction)),
            Policy::CLook { direction } => {
                Outcome::Seek(policy::c_look(requests, head, *direction))
            }
            Policy::Priority { priorities } => {
                Outcome::Order(policy::priority_order(requests, priorities)?)
            }
            Policy::Wstsf { weights } => {
                Outcome::Seek(policy::wstsf(requests, head, weights, Some(geometry))?)
            }
        };

        tracing::debug!(
            target: "disk_schedule::engine",
            policy = %policy,
            head,
            requests = requests.len(),
            total_movement = ?outcome.total_movement(),
            "run_complete"
        );

        Ok(outcome)
    }

    /// Runs a policy selected by name.
    ///
    /// Unknown names fail with [`ScheduleError::UnknownPolicy`] before any
    /// work is done.
    pub fn run_named(
        &self,
        name: &str,
        requests: &[Cylinder],
        direction: Direction,
        weights: Option<Vec<f64>>,
        priorities: Option<Vec<i32>>,
    ) -> Result<Outcome> {
        let kind: PolicyKind = name.parse()?;
        let policy = Policy::from_kind(kind, direction, weights, priorities);
        self.run(requests, &policy)
    }

    /// Runs each movement-reporting policy over the same batch.
    ///
    /// PRIORITY produces no movement and is skipped. Rows keep the order of
    /// `policies`; the first failing policy aborts the comparison.
    pub fn compare(
        &self,
        requests: &[Cylinder],
        policies: &[Policy],
    ) -> Result<Vec<PolicyComparison>> {
        let mut rows = Vec::with_capacity(policies.len());
        for policy in policies {
            if let Outcome::Seek(schedule) = self.run(requests, policy)? {
                let stats = SeekStats::calculate(&schedule);
                rows.push(PolicyComparison {
                    policy: policy.clone(),
                    schedule,
                    stats,
                });
            }
        }
        Ok(rows)
    }
}
