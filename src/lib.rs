//! Disk head scheduling engine for the U-Engine ecosystem.
//!
//! Given a batch of pending cylinder requests, a head position and the
//! device geometry, computes the order in which a policy services the
//! requests and the total head displacement that order incurs. Purely
//! analytical: no device is touched.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Cylinder`, `Geometry`, `Direction`,
//!   `SeekSchedule`, and the `total_movement` cost rule
//! - **`policy`**: The eight policies (FCFS, SSTF, SCAN, C-SCAN, LOOK,
//!   C-LOOK, PRIORITY, WSTSF) and the `Policy` dispatch enum
//! - **`scheduler`**: `DiskScheduler` engine, multi-policy comparison,
//!   `SeekStats` metrics
//! - **`validation`**: Batch integrity checks (bounds, parallel list lengths)
//! - **`input`**: Request parsing, random batches, serialisable run descriptions
//!
//! # Example
//!
//! ```
//! use u_disk_schedule::models::{Direction, Geometry};
//! use u_disk_schedule::policy::Policy;
//! use u_disk_schedule::scheduler::DiskScheduler;
//!
//! let scheduler = DiskScheduler::new(Geometry::new(200)?, 50);
//! let outcome = scheduler.run(
//!     &[98, 183, 37, 122, 14, 124, 65, 67],
//!     &Policy::Look { direction: Direction::Increasing },
//! )?;
//! assert_eq!(outcome.as_seek().map(|s| s.final_head()), Some(14));
//! # Ok::<(), u_disk_schedule::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"
//! - Worthington et al. (1994), "Scheduling Algorithms for Modern Disk Drives"

pub mod error;
pub mod input;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
