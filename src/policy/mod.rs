//! Disk head scheduling policies.
//!
//! Eight policies turn an unordered request batch plus head state into a
//! visit sequence. Each is a free function taking exactly the inputs it
//! needs; [`Policy`] bundles a policy with its parameters for dispatch.
//!
//! # Usage
//!
//! ```
//! use u_disk_schedule::models::Direction;
//! use u_disk_schedule::policy;
//!
//! let schedule = policy::look(&[98, 183, 37, 122], 50, Direction::Increasing);
//! assert_eq!(schedule.sequence(), &[50, 98, 122, 183, 37]);
//! assert_eq!(schedule.total_movement(), 279);
//! ```
//!
//! # Families
//!
//! - **Greedy**: FCFS, SSTF, WSTSF
//! - **Sweep**: SCAN, C-SCAN, LOOK, C-LOOK
//! - **Ordering only**: PRIORITY (no movement cost)
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

mod greedy;
mod priority;
mod sweep;

#[cfg(test)]
mod properties;

pub use greedy::{fcfs, sstf, wstsf};
pub use priority::priority_order;
pub use sweep::{c_look, c_scan, look, scan};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;
use crate::models::Direction;

/// Identifier of a scheduling policy, independent of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum PolicyKind {
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
    Priority,
    Wstsf,
}

impl PolicyKind {
    /// Every supported policy, in presentation order.
    pub const ALL: [PolicyKind; 8] = [
        Self::Fcfs,
        Self::Sstf,
        Self::Scan,
        Self::CScan,
        Self::Look,
        Self::CLook,
        Self::Priority,
        Self::Wstsf,
    ];

    /// Short name (e.g., "C-SCAN").
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sstf => "SSTF",
            Self::Scan => "SCAN",
            Self::CScan => "C-SCAN",
            Self::Look => "LOOK",
            Self::CLook => "C-LOOK",
            Self::Priority => "PRIORITY",
            Self::Wstsf => "WSTSF",
        }
    }

    /// One-line description for presenters.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served: services requests in arrival order.",
            Self::Sstf => "Shortest Seek Time First: always moves to the closest pending request.",
            Self::Scan => "Elevator: sweeps to the disk edge servicing requests, then reverses.",
            Self::CScan => {
                "Circular SCAN: sweeps to the edge, wraps to the opposite edge, keeps direction."
            }
            Self::Look => "Like SCAN, but reverses at the last request instead of the edge.",
            Self::CLook => {
                "Circular LOOK: after the last request, jumps to the farthest pending one."
            }
            Self::Priority => "Orders requests by ascending priority value; reports no movement.",
            Self::Wstsf => "Weighted SSTF: picks the request minimising distance x weight.",
        }
    }

    /// Whether the policy takes a sweep direction.
    pub fn uses_direction(self) -> bool {
        matches!(self, Self::Scan | Self::CScan | Self::Look | Self::CLook)
    }

    /// Whether the policy reports head movement.
    pub fn reports_movement(self) -> bool {
        !matches!(self, Self::Priority)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ScheduleError;

    /// Parses a policy name case-insensitively; `_` and `-` are interchangeable
    /// and may be omitted ("c-scan", "CSCAN", "c_scan").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match key.as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SSTF" => Ok(Self::Sstf),
            "SCAN" => Ok(Self::Scan),
            "CSCAN" => Ok(Self::CScan),
            "LOOK" => Ok(Self::Look),
            "CLOOK" => Ok(Self::CLook),
            "PRIORITY" => Ok(Self::Priority),
            "WSTSF" => Ok(Self::Wstsf),
            _ => Err(ScheduleError::UnknownPolicy(s.to_string())),
        }
    }
}

/// A scheduling policy together with the parameters it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Policy {
    Fcfs,
    Sstf,
    Scan {
        #[serde(default)]
        direction: Direction,
    },
    CScan {
        #[serde(default)]
        direction: Direction,
    },
    Look {
        #[serde(default)]
        direction: Direction,
    },
    CLook {
        #[serde(default)]
        direction: Direction,
    },
    /// Lower value = serviced sooner; one entry per request.
    Priority { priorities: Vec<i32> },
    /// Lower weight = effectively closer; one entry per request.
    Wstsf { weights: Vec<f64> },
}

impl Policy {
    /// The policy's identifier.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs => PolicyKind::Fcfs,
            Self::Sstf => PolicyKind::Sstf,
            Self::Scan { .. } => PolicyKind::Scan,
            Self::CScan { .. } => PolicyKind::CScan,
            Self::Look { .. } => PolicyKind::Look,
            Self::CLook { .. } => PolicyKind::CLook,
            Self::Priority { .. } => PolicyKind::Priority,
            Self::Wstsf { .. } => PolicyKind::Wstsf,
        }
    }

    /// Sweep direction, for the SCAN family.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Scan { direction }
            | Self::CScan { direction }
            | Self::Look { direction }
            | Self::CLook { direction } => Some(*direction),
            _ => None,
        }
    }

    /// Builds a policy from its kind and the caller-supplied extras.
    ///
    /// Extras a policy does not use are ignored; a missing weight or
    /// priority list becomes empty and fails later on length mismatch
    /// unless the batch is empty too.
    pub fn from_kind(
        kind: PolicyKind,
        direction: Direction,
        weights: Option<Vec<f64>>,
        priorities: Option<Vec<i32>>,
    ) -> Self {
        match kind {
            PolicyKind::Fcfs => Self::Fcfs,
            PolicyKind::Sstf => Self::Sstf,
            PolicyKind::Scan => Self::Scan { direction },
            PolicyKind::CScan => Self::CScan { direction },
            PolicyKind::Look => Self::Look { direction },
            PolicyKind::CLook => Self::CLook { direction },
            PolicyKind::Priority => Self::Priority {
                priorities: priorities.unwrap_or_default(),
            },
            PolicyKind::Wstsf => Self::Wstsf {
                weights: weights.unwrap_or_default(),
            },
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(direction) => write!(f, "{} ({direction})", self.kind()),
            None => write!(f, "{}", self.kind()),
        }
    }
}
