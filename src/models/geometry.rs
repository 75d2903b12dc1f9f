//! Disk geometry and scan direction.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};

/// A cylinder number on the simulated device.
///
/// Signed so that unchecked policies (FCFS, SSTF, LOOK, C-LOOK) accept any
/// integer; geometry-aware paths reject negatives via [`Geometry::check`].
pub type Cylinder = i64;

/// Addressable cylinder range `[0, disk_size - 1]`.
///
/// Always passed explicitly to the engine; there is no implicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Geometry {
    disk_size: u64,
}

impl Geometry {
    /// Creates a geometry with `disk_size` cylinders.
    ///
    /// Fails with [`ScheduleError::InvalidGeometry`] unless `disk_size > 0`.
    pub fn new(disk_size: i64) -> Result<Self> {
        if disk_size <= 0 {
            return Err(ScheduleError::InvalidGeometry(disk_size));
        }
        Ok(Self {
            disk_size: disk_size as u64,
        })
    }

    /// Number of cylinders.
    #[inline]
    pub fn disk_size(&self) -> u64 {
        self.disk_size
    }

    /// Highest addressable cylinder (`disk_size - 1`).
    #[inline]
    pub fn max_cylinder(&self) -> Cylinder {
        self.disk_size as Cylinder - 1
    }

    /// Full-disk traversal distance (`disk_size - 1`).
    #[inline]
    pub fn span(&self) -> u64 {
        self.disk_size - 1
    }

    /// Whether `cylinder` lies in `[0, disk_size)`.
    #[inline]
    pub fn contains(&self, cylinder: Cylinder) -> bool {
        cylinder >= 0 && (cylinder as u64) < self.disk_size
    }

    /// Checks a request cylinder against the range.
    pub fn check(&self, cylinder: Cylinder) -> Result<()> {
        if self.contains(cylinder) {
            Ok(())
        } else {
            Err(ScheduleError::OutOfRange {
                cylinder,
                disk_size: self.disk_size,
            })
        }
    }

    /// Checks a head position against the range.
    pub fn check_head(&self, head: Cylinder) -> Result<()> {
        if self.contains(head) {
            Ok(())
        } else {
            Err(ScheduleError::HeadOutOfRange {
                head,
                disk_size: self.disk_size,
            })
        }
    }

    /// Boundary cylinder reached when sweeping in `direction`.
    pub fn boundary(&self, direction: Direction) -> Cylinder {
        match direction {
            Direction::Increasing => self.max_cylinder(),
            Direction::Decreasing => 0,
        }
    }
}

/// Sense in which the head is sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher cylinder numbers ("right").
    #[default]
    #[serde(alias = "right", alias = "Right", alias = "up")]
    Increasing,
    /// Toward lower cylinder numbers ("left").
    #[serde(alias = "left", alias = "Left", alias = "down")]
    Decreasing,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increasing" | "right" | "up" => Ok(Self::Increasing),
            "decreasing" | "left" | "down" => Ok(Self::Decreasing),
            _ => Err(ScheduleError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_bounds() {
        let g = Geometry::new(200).unwrap();
        assert_eq!(g.disk_size(), 200);
        assert_eq!(g.max_cylinder(), 199);
        assert_eq!(g.span(), 199);
        assert!(g.contains(0));
        assert!(g.contains(199));
        assert!(!g.contains(200));
        assert!(!g.contains(-1));
    }

    #[test]
    fn test_geometry_rejects_non_positive() {
        assert_eq!(Geometry::new(0), Err(ScheduleError::InvalidGeometry(0)));
        assert_eq!(Geometry::new(-5), Err(ScheduleError::InvalidGeometry(-5)));
    }

    #[test]
    fn test_single_cylinder_disk() {
        let g = Geometry::new(1).unwrap();
        assert_eq!(g.max_cylinder(), 0);
        assert_eq!(g.boundary(Direction::Increasing), 0);
        assert_eq!(g.boundary(Direction::Decreasing), 0);
    }

    #[test]
    fn test_check_errors() {
        let g = Geometry::new(10).unwrap();
        assert!(g.check(9).is_ok());
        assert_eq!(
            g.check(10),
            Err(ScheduleError::OutOfRange {
                cylinder: 10,
                disk_size: 10
            })
        );
        assert_eq!(
            g.check_head(-1),
            Err(ScheduleError::HeadOutOfRange {
                head: -1,
                disk_size: 10
            })
        );
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Increasing);
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Decreasing);
        assert_eq!(
            " INCREASING ".parse::<Direction>().unwrap(),
            Direction::Increasing
        );
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(ScheduleError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_direction_serde_aliases() {
        let d: Direction = serde_json::from_str("\"Right\"").unwrap();
        assert_eq!(d, Direction::Increasing);
        let d: Direction = serde_json::from_str("\"decreasing\"").unwrap();
        assert_eq!(d, Direction::Decreasing);
        assert_eq!(
            serde_json::to_string(&Direction::Decreasing).unwrap(),
            "\"decreasing\""
        );
        assert_eq!(Direction::Decreasing.reversed(), Direction::Increasing);
    }
}
