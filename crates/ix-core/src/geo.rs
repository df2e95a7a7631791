//! World-frame coordinates.
//!
//! The simulator reports positions in a right-handed metric frame (metres),
//! `z` up.  Double precision is used throughout: junction geometry is tested
//! against thresholds of a few metres and sim maps span kilometres.

use std::fmt;

/// A point in the simulator's world frame, in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance(self, other: Location) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance in the horizontal plane, ignoring `z`.
    #[inline]
    pub fn distance_2d(self, other: Location) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// `true` when all three components are finite (no NaN / infinity).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise mean of `points`.  Returns the origin for an empty
    /// iterator.
    pub fn mean<I: IntoIterator<Item = Location>>(points: I) -> Location {
        let mut sum = Location::default();
        let mut n = 0usize;
        for p in points {
            sum.x += p.x;
            sum.y += p.y;
            sum.z += p.z;
            n += 1;
        }
        let n = n.max(1) as f64;
        Location::new(sum.x / n, sum.y / n, sum.z / n)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A location plus heading.  Spawn points are transforms.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub location: Location,
    /// Heading in degrees, counter-clockwise from +x.
    pub yaw_deg: f64,
}

impl Transform {
    #[inline]
    pub const fn new(location: Location, yaw_deg: f64) -> Self {
        Self { location, yaw_deg }
    }
}
