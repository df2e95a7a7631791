//! Simulation observer trait for logging and progress reporting.

use ix_admission::{AdmissionEvent, AdmissionPolicy, VehicleRecord};
use ix_core::VehicleId;

use crate::ObserverError;

/// Result type of every observer hook.
pub type ObserverResult = Result<(), ObserverError>;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  An `Err` from any hook aborts the run
/// with [`SimError::Observer`][crate::SimError::Observer].
///
/// # Example: transition printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &AdmissionEvent) -> ObserverResult {
///         println!("{:.2} {} {}", event.sim_time, event.vehicle, event.kind);
///         Ok(())
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the world steps, before any admission processing.
    fn on_tick_start(&mut self, _sim_time: f64) -> ObserverResult {
        Ok(())
    }

    /// Called once per lifecycle transition, in the order they occurred.
    fn on_event(&mut self, _event: &AdmissionEvent) -> ObserverResult {
        Ok(())
    }

    /// Called once for each vehicle that has left the box, after controls
    /// for the tick were applied.
    fn on_vehicle_completed(&mut self, _record: &VehicleRecord) -> ObserverResult {
        Ok(())
    }

    /// Called when a vehicle disappears from the world and is dropped from
    /// tracking.
    fn on_vehicle_removed(&mut self, _vehicle: VehicleId, _record: Option<&VehicleRecord>) -> ObserverResult {
        Ok(())
    }

    /// Called at the end of each tick with read-only access to the policy.
    fn on_tick_end(&mut self, _sim_time: f64, _policy: &AdmissionPolicy) -> ObserverResult {
        Ok(())
    }

    /// Called once after the final tick.
    fn on_sim_end(&mut self, _sim_time: f64) -> ObserverResult {
        Ok(())
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
