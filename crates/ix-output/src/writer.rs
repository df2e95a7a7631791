//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, LifecycleRow, OutputResult};

/// A sink for admission output.
///
/// Errors are returned to the caller; the observer turns them into a fatal
/// simulation error.  There is no retry.
pub trait OutputWriter {
    /// Append one transition row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Append one completed-crossing row.  Backends without a summary sink
    /// ignore it.
    fn write_lifecycle(&mut self, row: &LifecycleRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
