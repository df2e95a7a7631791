//! Plain data row types written by output backends.

use ix_admission::{AdmissionEvent, EventKind, VehicleRecord};
use serde::Serialize;

/// One lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventRow {
    pub vehicle_id: u32,
    /// `ARRIVAL`, `PERMISSION`, `ENTRY` or `EXIT`.
    pub event_kind: &'static str,
    pub sim_time:   f64,
}

impl EventRow {
    pub fn new(vehicle_id: u32, event_kind: EventKind, sim_time: f64) -> Self {
        Self { vehicle_id, event_kind: event_kind.as_str(), sim_time }
    }
}

impl From<&AdmissionEvent> for EventRow {
    fn from(e: &AdmissionEvent) -> Self {
        Self::new(e.vehicle.0, e.kind, e.sim_time)
    }
}

/// All timestamps of one vehicle's crossing.  Missing stages serialize as
/// empty fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifecycleRow {
    pub vehicle_id:      u32,
    pub arrival_time:    f64,
    pub permission_time: Option<f64>,
    pub enter_time:      Option<f64>,
    pub exit_time:       Option<f64>,
}

impl From<&VehicleRecord> for LifecycleRow {
    fn from(r: &VehicleRecord) -> Self {
        Self {
            vehicle_id:      r.vehicle_id.0,
            arrival_time:    r.arrival_time,
            permission_time: r.permission_time,
            enter_time:      r.entry_time,
            exit_time:       r.exit_time,
        }
    }
}
