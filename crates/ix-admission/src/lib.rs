//! `ix-admission`: the FCFS intersection admission policy.
//!
//! # Crate layout
//!
//! | Module             | Contents                                                   |
//! |--------------------|------------------------------------------------------------|
//! | [`intersection`]   | `IntersectionConfig`, `IntersectionBox` membership tests   |
//! | [`record`]         | `VehicleState`, `VehicleRecord`                            |
//! | [`queue`]          | `ArrivalQueue` ordered by `(arrival_time, vehicle_id)`     |
//! | [`occupancy`]      | `Occupancy`: the single crossing token                    |
//! | [`event`]          | `EventKind`, `AdmissionEvent`                              |
//! | [`policy`]         | `AdmissionPolicy`: the state machine                      |
//! | [`error`]          | `AdmissionError`, `AdmissionResult<T>`                     |
//!
//! # Lifecycle
//!
//! ```text
//!   (untracked) ──enter approach radius──▶ Approaching ──not granted──▶ Waiting
//!                                              │                          │
//!                                              └──── token free + head ───┤
//!                                                                         ▼
//!   Exited ◀──leave box── InBox ◀──enter box── Permitted
//! ```
//!
//! At most one vehicle holds the token (is `Permitted` or `InBox`) at a time.
//! A permitted vehicle that never reaches the box keeps the token forever;
//! there is no stall timeout.

pub mod error;
pub mod event;
pub mod intersection;
pub mod occupancy;
pub mod policy;
pub mod queue;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::{AdmissionError, AdmissionResult};
pub use event::{AdmissionEvent, EventKind};
pub use intersection::{IntersectionBox, IntersectionConfig};
pub use occupancy::Occupancy;
pub use policy::AdmissionPolicy;
pub use queue::{ArrivalKey, ArrivalQueue};
pub use record::{VehicleRecord, VehicleState};
