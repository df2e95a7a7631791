//! Per-vehicle lifecycle record.

use std::fmt;

use ix_core::{Location, VehicleId};

/// Where a tracked vehicle is in its crossing lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleState {
    /// Registered this tick; not yet considered for permission.
    Approaching,
    /// Queued behind another vehicle or a held token.
    Waiting,
    /// Holds the token, not yet inside the box.
    Permitted,
    /// Inside the box, holding the token.
    InBox,
    /// Left the box.  Terminal.
    Exited,
}

impl VehicleState {
    /// `true` while the vehicle holds crossing permission.
    #[inline]
    pub fn has_permission(self) -> bool {
        matches!(self, VehicleState::Permitted | VehicleState::InBox)
    }

    /// `true` while the vehicle is queued and may be granted permission.
    #[inline]
    pub fn is_queued(self) -> bool {
        matches!(self, VehicleState::Approaching | VehicleState::Waiting)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleState::Approaching => "APPROACHING",
            VehicleState::Waiting     => "WAITING",
            VehicleState::Permitted   => "PERMITTED",
            VehicleState::InBox       => "IN_BOX",
            VehicleState::Exited      => "EXITED",
        }
    }
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the policy knows about one vehicle.
///
/// Created when the vehicle first enters the approach radius and kept until
/// the run ends (or the vehicle is forgotten) so the full lifecycle can be
/// logged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRecord {
    pub vehicle_id:      VehicleId,
    /// Last observed position.
    pub position:        Location,
    pub state:           VehicleState,
    pub arrival_time:    f64,
    pub permission_time: Option<f64>,
    pub entry_time:      Option<f64>,
    pub exit_time:       Option<f64>,
    pub(crate) exported: bool,
}

impl VehicleRecord {
    pub(crate) fn new(vehicle_id: VehicleId, position: Location, arrival_time: f64) -> Self {
        Self {
            vehicle_id,
            position,
            state: VehicleState::Approaching,
            arrival_time,
            permission_time: None,
            entry_time: None,
            exit_time: None,
            exported: false,
        }
    }

    /// `true` once the vehicle has left the box.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == VehicleState::Exited
    }

    /// `true` once the record has been handed out by
    /// [`AdmissionPolicy::drain_completed`][crate::AdmissionPolicy::drain_completed].
    #[inline]
    pub fn is_exported(&self) -> bool {
        self.exported
    }
}
