//! The crossing token.

use ix_core::VehicleId;

/// Exclusive right to cross the intersection.
///
/// The token is reserved when permission is granted and occupied when the
/// holder enters the box.  Exit returns it to `Free`.  Only
/// [`AdmissionPolicy`][crate::AdmissionPolicy] mutates it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Free,
    /// Granted to a vehicle that has not reached the box yet.
    Reserved(VehicleId),
    /// Holder is inside the box.
    Occupied(VehicleId),
}

impl Occupancy {
    #[inline]
    pub fn is_free(self) -> bool {
        self == Occupancy::Free
    }

    /// The vehicle holding the token, if any.
    #[inline]
    pub fn holder(self) -> Option<VehicleId> {
        match self {
            Occupancy::Free => None,
            Occupancy::Reserved(v) | Occupancy::Occupied(v) => Some(v),
        }
    }

    /// The vehicle physically in the box, if any.
    #[inline]
    pub fn occupant(self) -> Option<VehicleId> {
        match self {
            Occupancy::Occupied(v) => Some(v),
            _ => None,
        }
    }
}
