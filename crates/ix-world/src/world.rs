//! The `World` trait: what the driver loop needs from a simulator.

use ix_agent::{ControlCommand, Pose};
use ix_core::{Location, Transform, VehicleId};

use crate::{RoadMap, WorldResult};

/// A synchronously stepped driving simulator.
///
/// The driver loop owns the world and calls [`tick`][Self::tick] once per
/// iteration; nothing advances between calls.  Physics, path following, and
/// rendering all live behind this trait.
pub trait World {
    /// The loaded map (spawn-point enumerator and junction list).
    fn map(&self) -> &RoadMap;

    /// Spawn a vehicle at `at`.  The world assigns the id.
    fn spawn_vehicle(&mut self, at: Transform) -> WorldResult<VehicleId>;

    /// Advance one fixed step.  Returns elapsed simulated seconds after the
    /// step.
    fn tick(&mut self) -> f64;

    /// Current pose of `vehicle`, or `None` if it does not exist.
    fn pose(&self, vehicle: VehicleId) -> Option<Pose>;

    /// Input applied on the next [`tick`][Self::tick].
    fn apply_control(&mut self, vehicle: VehicleId, control: ControlCommand) -> WorldResult<()>;

    /// Remove `vehicle`.  Returns `false` if it did not exist.
    fn destroy(&mut self, vehicle: VehicleId) -> bool;

    /// Current position of `vehicle`.
    fn location(&self, vehicle: VehicleId) -> Option<Location> {
        self.pose(vehicle).map(|p| p.location)
    }

    fn is_alive(&self, vehicle: VehicleId) -> bool {
        self.pose(vehicle).is_some()
    }
}
