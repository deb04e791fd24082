//! `TraceObserver<W>` bridges `NavObserver` to a `TraceWriter`.

use nav_core::Frame;
use nav_mobility::{PathStore, TickOutcome};
use nav_request::LocationMap;
use nav_sim::{NavObserver, Notice};

use crate::row::{LocationRow, NoticeRow, TrackRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`NavObserver`] that records the agent track, notices, and the location
/// table to any [`TraceWriter`].
///
/// Errors from the writer are stored internally because `NavObserver` methods
/// have no return value.  After the session finishes, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    /// Record a track row every `interval` frames.  Notices are always
    /// recorded.
    interval:   u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`.  An `interval` of 0 is treated
    /// as 1.
    pub fn new(writer: W, interval: u64) -> Self {
        Self {
            writer,
            interval: interval.max(1),
            last_error: None,
        }
    }

    /// Write the location table now.  For tables that were in hand before the
    /// session started.
    pub fn dump_locations(&mut self, locations: &LocationMap) {
        let rows: Vec<LocationRow> = locations
            .iter()
            .map(|(name, position)| LocationRow::new(name, position))
            .collect();
        let result = self.writer.write_locations(&rows);
        self.store_err(result);
    }

    /// Flush the writer.  [`NavObserver::on_session_end`] does this too.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the session).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> NavObserver for TraceObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, elapsed_secs: f64, store: &PathStore, _outcome: &TickOutcome) {
        if !frame.0.is_multiple_of(self.interval) {
            return;
        }
        let p = store.agent_position();
        let row = TrackRow {
            frame: frame.0,
            elapsed_secs,
            x: p.x,
            y: p.y,
            z: p.z,
            remaining: store.remaining() as u32,
        };
        let result = self.writer.write_track(&row);
        self.store_err(result);
    }

    fn on_notice(&mut self, frame: Frame, notice: &Notice) {
        let row = NoticeRow {
            frame:   frame.0,
            failure: notice.is_failure(),
            message: notice.to_string(),
        };
        let result = self.writer.write_notice(&row);
        self.store_err(result);
    }

    fn on_locations(&mut self, _frame: Frame, locations: &LocationMap) {
        self.dump_locations(locations);
    }

    fn on_session_end(&mut self, _final_frame: Frame) {
        self.finish();
    }
}
