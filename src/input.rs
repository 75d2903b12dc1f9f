//! Request sources: text parsing, random batches, and run descriptions.
//!
//! This is the boundary where external input becomes validated integers.
//! It is also the only place a default geometry exists: the engine itself
//! always receives an explicit one.
//!
//! # Usage
//!
//! ```
//! use u_disk_schedule::input::SimulationRequest;
//!
//! let json = r#"{
//!     "policy": "C-LOOK",
//!     "requests": [98, 183, 37, 122, 14, 124, 65, 67],
//!     "head": 50,
//!     "direction": "right"
//! }"#;
//! let request: SimulationRequest = serde_json::from_str(json).unwrap();
//! let outcome = request.run().unwrap();
//! assert_eq!(outcome.as_seek().unwrap().final_head(), 37);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{Cylinder, Direction, Geometry};
use crate::policy::{Policy, PolicyKind};
use crate::scheduler::{DiskScheduler, Outcome};
use crate::validation::{validate_batch, validate_priorities, validate_weights, ValidationResult};

/// Disk size used when a run description omits one.
pub const DEFAULT_DISK_SIZE: i64 = 200;

/// Parses a request list such as `"98, 183, 37"`.
///
/// Entries may be separated by commas, whitespace, or both; empty entries
/// are skipped.
///
/// # Errors
/// [`ScheduleError::MalformedInput`] naming the first entry that is not an
/// integer.
pub fn parse_requests(text: &str) -> Result<Vec<Cylinder>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Cylinder>().map_err(|_| {
                ScheduleError::MalformedInput(format!("'{token}' is not an integer cylinder"))
            })
        })
        .collect()
}

/// Draws `count` uniformly random cylinders within `geometry`.
pub fn random_requests<R: Rng + ?Sized>(
    count: usize,
    geometry: &Geometry,
    rng: &mut R,
) -> Vec<Cylinder> {
    let max = geometry.max_cylinder();
    (0..count).map(|_| rng.random_range(0..=max)).collect()
}

/// Reproducible variant of [`random_requests`].
pub fn seeded_requests(count: usize, geometry: &Geometry, seed: u64) -> Vec<Cylinder> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_requests(count, geometry, &mut rng)
}

/// A complete, serialisable description of one scheduling run.
///
/// Policy is named by string so that unknown names surface as
/// [`ScheduleError::UnknownPolicy`] when the run is resolved rather than as
/// a deserialisation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    /// Policy name (e.g., "SCAN", "c-look").
    pub policy: String,
    /// Pending cylinders.
    pub requests: Vec<Cylinder>,
    /// Initial head position.
    pub head: Cylinder,
    /// Number of cylinders.
    pub disk_size: i64,
    /// Sweep direction for the SCAN family.
    pub direction: Direction,
    /// Per-request weights for WSTSF.
    pub weights: Option<Vec<f64>>,
    /// Per-request priorities for PRIORITY.
    pub priorities: Option<Vec<i32>>,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Fcfs.name().to_string(),
            requests: Vec::new(),
            head: 0,
            disk_size: DEFAULT_DISK_SIZE,
            direction: Direction::Increasing,
            weights: None,
            priorities: None,
        }
    }
}

impl SimulationRequest {
    /// Creates a request for the named policy.
    pub fn new(policy: impl Into<String>, requests: Vec<Cylinder>, head: Cylinder) -> Self {
        Self {
            policy: policy.into(),
            requests,
            head,
            ..Default::default()
        }
    }

    /// Sets the disk size.
    pub fn with_disk_size(mut self, disk_size: i64) -> Self {
        self.disk_size = disk_size;
        self
    }

    /// Sets the sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets WSTSF weights.
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Sets priorities.
    pub fn with_priorities(mut self, priorities: Vec<i32>) -> Self {
        self.priorities = Some(priorities);
        self
    }

    /// Resolves the declared geometry.
    pub fn geometry(&self) -> Result<Geometry> {
        Geometry::new(self.disk_size)
    }

    /// Resolves the policy name and its extras.
    pub fn policy(&self) -> Result<Policy> {
        let kind: PolicyKind = self.policy.parse()?;
        Ok(Policy::from_kind(
            kind,
            self.direction,
            self.weights.clone(),
            self.priorities.clone(),
        ))
    }

    /// Builds an engine for this request's geometry and head.
    pub fn scheduler(&self) -> Result<DiskScheduler> {
        Ok(DiskScheduler::new(self.geometry()?, self.head))
    }

    /// Collects every problem with this request's data.
    ///
    /// Covers bounds, and weight/priority lists when the selected policy
    /// uses them. Policy name and disk size are checked by [`Self::run`].
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if let Ok(geometry) = self.geometry() {
            if let Err(mut e) = validate_batch(&self.requests, self.head, &geometry) {
                errors.append(&mut e);
            }
        }

        match self.policy.parse::<PolicyKind>() {
            Ok(PolicyKind::Wstsf) => {
                let weights = self.weights.as_deref().unwrap_or_default();
                if let Err(mut e) = validate_weights(&self.requests, weights) {
                    errors.append(&mut e);
                }
            }
            Ok(PolicyKind::Priority) => {
                let priorities = self.priorities.as_deref().unwrap_or_default();
                if let Err(mut e) = validate_priorities(&self.requests, priorities) {
                    errors.append(&mut e);
                }
            }
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates, resolves, and runs the request.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidGeometry`] and [`ScheduleError::UnknownPolicy`]
    /// first, then [`ScheduleError::Invalid`] listing every data problem.
    pub fn run(&self) -> Result<Outcome> {
        let scheduler = self.scheduler()?;
        let policy = self.policy()?;
        self.validate()?;
        scheduler.run(&self.requests, &policy)
    }
}
