//! Vehicle identifiers.
//!
//! The simulator assigns ids when it spawns a vehicle.  The `Ord` impl on
//! `VehicleId` is load-bearing: it is the tie-break between vehicles that
//! arrive at the intersection on the same tick.

use std::fmt;

/// Identifier the simulator assigns to a spawned vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
