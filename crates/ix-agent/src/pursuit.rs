//! A minimal pursuit-style helper.
//!
//! Steers straight at the destination and holds a target speed with a
//! proportional throttle.  Good enough to drive the stand-in world across a
//! junction; real runs plug in the simulator's own agent instead.

use std::f64::consts::PI;

use ix_core::Location;

use crate::{ControlCommand, DrivingHelper, Pose};

/// Heading error (radians) that maps to full steering lock.
const MAX_STEER_ANGLE: f64 = PI / 3.0;

/// Proportional gain from speed error (m/s) to throttle.
const THROTTLE_GAIN: f64 = 0.25;

/// Throttle ceiling, so the stand-in vehicle does not overshoot.
const MAX_THROTTLE: f64 = 0.75;

/// Within this distance of the destination (m) the helper brakes to a stop.
const ARRIVAL_TOLERANCE: f64 = 2.0;

/// Start slowing down this far (m) from the destination.
const SLOWDOWN_DISTANCE: f64 = 10.0;

/// Steers toward a destination at a constant target speed.
#[derive(Clone, Debug)]
pub struct PursuitHelper {
    target_speed_mps: f64,
    destination:      Option<Location>,
}

impl PursuitHelper {
    /// Create a helper cruising at `target_speed_kmh`.
    pub fn new(target_speed_kmh: f64) -> Self {
        Self {
            target_speed_mps: target_speed_kmh / 3.6,
            destination:      None,
        }
    }

    #[inline]
    pub fn target_speed_mps(&self) -> f64 {
        self.target_speed_mps
    }

    #[inline]
    pub fn destination(&self) -> Option<Location> {
        self.destination
    }
}

impl Default for PursuitHelper {
    /// 25 km/h.
    fn default() -> Self {
        Self::new(25.0)
    }
}

/// Wrap an angle to `(-PI, PI]`.
fn wrap_angle(a: f64) -> f64 {
    let mut a = a % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    } else if a <= -PI {
        a += 2.0 * PI;
    }
    a
}

impl DrivingHelper for PursuitHelper {
    fn set_destination(&mut self, destination: Location) {
        self.destination = Some(destination);
    }

    fn run_step(&mut self, pose: &Pose) -> ControlCommand {
        let Some(dest) = self.destination else {
            return ControlCommand::full_brake();
        };
        let remaining = pose.location.distance_2d(dest);
        if remaining <= ARRIVAL_TOLERANCE {
            return ControlCommand::full_brake();
        }

        let bearing = (dest.y - pose.location.y).atan2(dest.x - pose.location.x);
        let error = wrap_angle(bearing - pose.yaw_deg.to_radians());
        let steer = error / MAX_STEER_ANGLE;

        let target = self.target_speed_mps * (remaining / SLOWDOWN_DISTANCE).min(1.0);
        let speed_error = target - pose.speed_mps;
        if speed_error >= 0.0 {
            ControlCommand::new((speed_error * THROTTLE_GAIN).min(MAX_THROTTLE), steer, 0.0)
        } else {
            ControlCommand::new(0.0, steer, -speed_error * THROTTLE_GAIN)
        }
    }
}
