//! `VehicleAgent<H>`: the permission-to-control adapter.

use ix_core::{Location, VehicleId};

use crate::{ControlCommand, DrivingHelper, Pose};

/// Wraps a [`DrivingHelper`] for one vehicle and exposes a stop/go step.
pub struct VehicleAgent<H: DrivingHelper> {
    vehicle: VehicleId,
    helper:  H,
}

impl<H: DrivingHelper> VehicleAgent<H> {
    /// Bind `helper` to `vehicle` and point it at `destination`.
    pub fn new(vehicle: VehicleId, mut helper: H, destination: Location) -> Self {
        helper.set_destination(destination);
        Self { vehicle, helper }
    }

    #[inline]
    pub fn vehicle(&self) -> VehicleId {
        self.vehicle
    }

    #[inline]
    pub fn helper(&self) -> &H {
        &self.helper
    }

    /// Full brake without permission; otherwise whatever the helper says.
    pub fn update(&mut self, permission: bool, pose: &Pose) -> ControlCommand {
        if permission {
            self.helper.run_step(pose)
        } else {
            ControlCommand::full_brake()
        }
    }
}
