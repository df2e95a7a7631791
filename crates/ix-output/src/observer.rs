//! `EventLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use ix_admission::{AdmissionEvent, VehicleRecord};
use ix_sim::{ObserverResult, SimObserver};

use crate::row::{EventRow, LifecycleRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that logs every transition and completed crossing to
/// any [`OutputWriter`].
///
/// A failed write is returned from the hook, which aborts the run.
pub struct EventLogObserver<W: OutputWriter> {
    writer: W,
}

impl<W: OutputWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> SimObserver for EventLogObserver<W> {
    fn on_event(&mut self, event: &AdmissionEvent) -> ObserverResult {
        self.writer.write_event(&EventRow::from(event))?;
        Ok(())
    }

    fn on_vehicle_completed(&mut self, record: &VehicleRecord) -> ObserverResult {
        self.writer.write_lifecycle(&LifecycleRow::from(record))?;
        Ok(())
    }

    fn on_sim_end(&mut self, _sim_time: f64) -> ObserverResult {
        self.writer.finish()?;
        Ok(())
    }
}
