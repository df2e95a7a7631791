//! Actuator commands and the vehicle state helpers steer from.

use ix_core::{Location, Transform};

/// One tick's actuator input for a vehicle.
///
/// `throttle` and `brake` lie in `[0, 1]`; `steer` lies in `[-1, 1]`, positive
/// turning counter-clockwise (toward +yaw).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlCommand {
    pub throttle: f64,
    pub steer:    f64,
    pub brake:    f64,
}

impl ControlCommand {
    /// Build a command, clamping each channel into range.  NaN becomes 0.
    pub fn new(throttle: f64, steer: f64, brake: f64) -> Self {
        let unit = |x: f64| if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        Self {
            throttle: unit(throttle),
            steer:    if steer.is_nan() { 0.0 } else { steer.clamp(-1.0, 1.0) },
            brake:    unit(brake),
        }
    }

    /// Zero throttle, full brake, wheels straight.
    #[inline]
    pub const fn full_brake() -> Self {
        Self { throttle: 0.0, steer: 0.0, brake: 1.0 }
    }

    #[inline]
    pub fn is_full_brake(&self) -> bool {
        self.throttle == 0.0 && self.brake >= 1.0
    }
}

/// Kinematic state of a vehicle as reported by the world.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub location:  Location,
    /// Heading in degrees, counter-clockwise from +x.
    pub yaw_deg:   f64,
    /// Forward speed in m/s.
    pub speed_mps: f64,
}

impl Pose {
    /// A stationary pose at a spawn transform.
    pub fn at_rest(transform: Transform) -> Self {
        Self {
            location:  transform.location,
            yaw_deg:   transform.yaw_deg,
            speed_mps: 0.0,
        }
    }
}
