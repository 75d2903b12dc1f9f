//! Disk scheduling domain models.
//!
//! Provides the geometry of the simulated device and the shape of a
//! scheduling result. Pure data with bounds checks; no policy logic.
//!
//! # Domain Mappings
//!
//! | u-disk-schedule | Hardware | Simulation |
//! |-----------------|----------|------------|
//! | Cylinder | Track group under the head | Integer position |
//! | Geometry | Platter layout | Range `[0, disk_size)` |
//! | Direction | Arm sweep | Increasing / decreasing |
//! | SeekSchedule | Head trace | Visit sequence + total |

mod geometry;
mod schedule;

pub(crate) use schedule::HeadTracker;

pub use geometry::{Cylinder, Direction, Geometry};
pub use schedule::{total_movement, SeekSchedule};
