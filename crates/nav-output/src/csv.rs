//! CSV trace backend.
//!
//! Creates three files in the configured directory:
//! - `agent_track.csv`
//! - `notices.csv`
//! - `locations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{LocationRow, NoticeRow, OutputResult, TrackRow};

/// Writes session traces to CSV files.
pub struct CsvTraceWriter {
    track:     Writer<File>,
    notices:   Writer<File>,
    locations: Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Create `dir` if needed, open the three files, and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut track = Writer::from_path(dir.join("agent_track.csv"))?;
        track.write_record(["frame", "elapsed_secs", "x", "y", "z", "remaining"])?;

        let mut notices = Writer::from_path(dir.join("notices.csv"))?;
        notices.write_record(["frame", "failure", "message"])?;

        let mut locations = Writer::from_path(dir.join("locations.csv"))?;
        locations.write_record(["name", "x", "y", "z"])?;

        Ok(Self { track, notices, locations, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_track(&mut self, row: &TrackRow) -> OutputResult<()> {
        self.track.write_record(&[
            row.frame.to_string(),
            format!("{:.4}", row.elapsed_secs),
            row.x.to_string(),
            row.y.to_string(),
            row.z.to_string(),
            row.remaining.to_string(),
        ])?;
        Ok(())
    }

    fn write_notice(&mut self, row: &NoticeRow) -> OutputResult<()> {
        self.notices.write_record(&[
            row.frame.to_string(),
            (row.failure as u8).to_string(),
            row.message.clone(),
        ])?;
        Ok(())
    }

    fn write_locations(&mut self, rows: &[LocationRow]) -> OutputResult<()> {
        for row in rows {
            self.locations.write_record(&[
                row.name.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.track.flush()?;
        self.notices.flush()?;
        self.locations.flush()?;
        Ok(())
    }
}
