//! The `TraceWriter` trait implemented by trace backends.

use crate::{LocationRow, NoticeRow, OutputResult, TrackRow};

/// Sink for session traces.
///
/// Errors are returned here but stored by
/// [`TraceObserver`][crate::TraceObserver], since observer callbacks have no
/// return value.
pub trait TraceWriter {
    fn write_track(&mut self, row: &TrackRow) -> OutputResult<()>;

    fn write_notice(&mut self, row: &NoticeRow) -> OutputResult<()>;

    /// Dump the location table.  Usually called once, after the model loads.
    fn write_locations(&mut self, rows: &[LocationRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Calling it again after the first flush is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
