//! The `DrivingHelper` trait: the seam to the simulator's autopilot.

use ix_core::Location;

use crate::{ControlCommand, Pose};

/// An autonomous-driving helper that produces steering and throttle toward a
/// destination.
///
/// Implementations keep whatever planning state they need (route, PID
/// integrators, …); the [`VehicleAgent`][crate::VehicleAgent] only calls
/// [`run_step`][Self::run_step] on ticks where the vehicle may move.
///
/// # Example
///
/// ```rust,ignore
/// struct Creep;
///
/// impl DrivingHelper for Creep {
///     fn set_destination(&mut self, _dest: Location) {}
///     fn run_step(&mut self, _pose: &Pose) -> ControlCommand {
///         ControlCommand::new(0.2, 0.0, 0.0)
///     }
/// }
/// ```
pub trait DrivingHelper {
    /// Replace the current destination.
    fn set_destination(&mut self, destination: Location);

    /// Produce this tick's command from the vehicle's current pose.
    fn run_step(&mut self, pose: &Pose) -> ControlCommand;
}
