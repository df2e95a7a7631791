//! Lifecycle transitions reported by the policy.

use std::fmt;

use ix_core::VehicleId;

/// The four logged lifecycle transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EventKind {
    /// Vehicle entered the approach radius and joined the queue.
    Arrival,
    /// Vehicle was granted the crossing token.
    Permission,
    /// Vehicle entered the intersection box.
    Entry,
    /// Vehicle left the intersection box and released the token.
    Exit,
}

impl EventKind {
    /// Label written to the `event_kind` CSV column.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arrival    => "ARRIVAL",
            EventKind::Permission => "PERMISSION",
            EventKind::Entry      => "ENTRY",
            EventKind::Exit       => "EXIT",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transition of one vehicle at one simulated instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdmissionEvent {
    pub vehicle:  VehicleId,
    pub kind:     EventKind,
    pub sim_time: f64,
}
