//! `KinematicWorld`: a stand-in simulator with unicycle kinematics.
//!
//! Each step integrates, per vehicle:
//!
//! ```text
//! accel  = throttle * max_accel - brake * max_decel
//! speed  = max(0, speed + accel * dt)
//! yaw   += steer * max_yaw_rate * min(1, speed / full_turn_speed) * dt
//! pos   += speed * dt * (cos yaw, sin yaw)
//! ```
//!
//! No collisions, no lanes, no tyre model.  Controls persist until replaced.

use std::collections::BTreeMap;

use ix_agent::{ControlCommand, Pose};
use ix_core::{SimClock, SimConfig, Transform, VehicleId};

use crate::{RoadMap, World, WorldError, WorldResult};

/// Two vehicles closer than this (m) at spawn time collide.
const SPAWN_CLEARANCE: f64 = 2.0;

/// Vehicle limits for [`KinematicWorld`].
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicParams {
    /// Acceleration at full throttle, m/s².
    pub max_accel: f64,
    /// Deceleration at full brake, m/s².
    pub max_decel: f64,
    /// Yaw rate at full steering lock, deg/s.
    pub max_yaw_rate_deg: f64,
    /// Below this speed (m/s) the yaw rate scales down linearly.
    pub full_turn_speed: f64,
}

impl Default for KinematicParams {
    fn default() -> Self {
        Self {
            max_accel:        3.0,
            max_decel:        8.0,
            max_yaw_rate_deg: 60.0,
            full_turn_speed:  3.0,
        }
    }
}

struct KinematicVehicle {
    pose:    Pose,
    control: ControlCommand,
}

/// Stand-in [`World`] used by the command-line tool and tests.
pub struct KinematicWorld {
    map:      RoadMap,
    clock:    SimClock,
    params:   KinematicParams,
    vehicles: BTreeMap<VehicleId, KinematicVehicle>,
    next_id:  u32,
}

impl KinematicWorld {
    pub fn new(map: RoadMap, config: &SimConfig) -> Self {
        Self::with_params(map, config, KinematicParams::default())
    }

    pub fn with_params(map: RoadMap, config: &SimConfig, params: KinematicParams) -> Self {
        Self {
            map,
            clock: config.make_clock(),
            params,
            vehicles: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    fn step_vehicle(params: &KinematicParams, v: &mut KinematicVehicle, dt: f64) {
        let c = v.control;
        let accel = c.throttle * params.max_accel - c.brake * params.max_decel;
        let speed = (v.pose.speed_mps + accel * dt).max(0.0);

        let turn_scale = if params.full_turn_speed > 0.0 {
            (speed / params.full_turn_speed).min(1.0)
        } else {
            1.0
        };
        let yaw_deg = v.pose.yaw_deg + c.steer * params.max_yaw_rate_deg * turn_scale * dt;
        let yaw = yaw_deg.to_radians();

        v.pose.location.x += speed * dt * yaw.cos();
        v.pose.location.y += speed * dt * yaw.sin();
        v.pose.yaw_deg = yaw_deg.rem_euclid(360.0);
        v.pose.speed_mps = speed;
    }
}

impl World for KinematicWorld {
    fn map(&self) -> &RoadMap {
        &self.map
    }

    fn spawn_vehicle(&mut self, at: Transform) -> WorldResult<VehicleId> {
        let blocked = self
            .vehicles
            .values()
            .any(|v| v.pose.location.distance(at.location) < SPAWN_CLEARANCE);
        if blocked {
            return Err(WorldError::SpawnCollision(at.location));
        }
        let id = VehicleId(self.next_id);
        self.next_id += 1;
        self.vehicles.insert(
            id,
            KinematicVehicle {
                pose:    Pose::at_rest(at),
                control: ControlCommand::full_brake(),
            },
        );
        Ok(id)
    }

    fn tick(&mut self) -> f64 {
        let dt = self.clock.delta_secs;
        for v in self.vehicles.values_mut() {
            Self::step_vehicle(&self.params, v, dt);
        }
        self.clock.advance();
        self.clock.elapsed_secs()
    }

    fn pose(&self, vehicle: VehicleId) -> Option<Pose> {
        self.vehicles.get(&vehicle).map(|v| v.pose)
    }

    fn apply_control(&mut self, vehicle: VehicleId, control: ControlCommand) -> WorldResult<()> {
        let v = self
            .vehicles
            .get_mut(&vehicle)
            .ok_or(WorldError::VehicleNotFound(vehicle))?;
        v.control = control;
        Ok(())
    }

    fn destroy(&mut self, vehicle: VehicleId) -> bool {
        self.vehicles.remove(&vehicle).is_some()
    }
}
