//! CSV output backend.
//!
//! Writes the event log and, optionally, the lifecycle summary.  Headers are
//! written when the files are opened; each row is flushed immediately.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use ix_admission::EventKind;
use ix_core::VehicleId;

use crate::writer::OutputWriter;
use crate::{EventRow, LifecycleRow, OutputError, OutputResult};

pub const EVENT_HEADER: [&str; 3] = ["vehicle_id", "event_kind", "sim_time"];

pub const SUMMARY_HEADER: [&str; 5] =
    ["vehicle_id", "arrival_time", "permission_time", "enter_time", "exit_time"];

/// Writes the event log (and optional summary) as CSV.
pub struct CsvWriter {
    events:   Writer<File>,
    summary:  Option<Writer<File>>,
    rows:     u64,
    finished: bool,
}

/// Create `path`, truncating it, and write `header`.
fn open(path: &Path, header: &[&str]) -> OutputResult<Writer<File>> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    w.write_record(header)?;
    w.flush()?;
    Ok(w)
}

impl CsvWriter {
    /// Create (or truncate) the event log at `path` and write its header.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let events = open(path, &EVENT_HEADER)?;
        log::info!("output: logging events to {}", path.display());
        Ok(Self {
            events,
            summary:  None,
            rows:     0,
            finished: false,
        })
    }

    /// Also write one lifecycle row per completed crossing to `path`.
    pub fn with_summary(mut self, path: &Path) -> OutputResult<Self> {
        self.summary = Some(open(path, &SUMMARY_HEADER)?);
        log::info!("output: writing crossing summary to {}", path.display());
        Ok(self)
    }

    /// Append one `vehicle_id,event_kind,sim_time` row and flush it.
    pub fn record(&mut self, vehicle: VehicleId, event_kind: EventKind, sim_time: f64) -> OutputResult<()> {
        self.write_event(&EventRow::new(vehicle.0, event_kind, sim_time))
    }

    /// Event rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        self.events.serialize(row)?;
        self.events.flush()?;
        self.rows += 1;
        Ok(())
    }

    fn write_lifecycle(&mut self, row: &LifecycleRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        if let Some(summary) = self.summary.as_mut() {
            summary.serialize(row)?;
            summary.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        if let Some(summary) = self.summary.as_mut() {
            summary.flush()?;
        }
        log::debug!("output: closed event log after {} rows", self.rows);
        Ok(())
    }
}
