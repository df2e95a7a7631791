//! `ix-output`: CSV logging of admission transitions.
//!
//! | File                | Columns                                                         | Rows                 |
//! |---------------------|-----------------------------------------------------------------|----------------------|
//! | event log           | `vehicle_id,event_kind,sim_time`                                | one per transition   |
//! | lifecycle summary   | `vehicle_id,arrival_time,permission_time,enter_time,exit_time`  | one per crossing     |
//!
//! The summary file is optional.  Every row is flushed as soon as it is
//! written, so a crashed run still leaves a usable log.
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`EventLogObserver`], which implements `ix_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ix_output::{CsvWriter, EventLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("metrics.csv"))?
//!     .with_summary(Path::new("lifecycle.csv"))?;
//! let mut obs = EventLogObserver::new(writer);
//! sim.run(&mut obs)?; // a failed write aborts the run
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::{CsvWriter, EVENT_HEADER, SUMMARY_HEADER};
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{EventRow, LifecycleRow};
pub use writer::OutputWriter;
