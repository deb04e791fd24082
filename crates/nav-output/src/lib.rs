//! `nav-output` — debug traces of a navigation session.
//!
//! | File               | Contents                                         |
//! |--------------------|--------------------------------------------------|
//! | `agent_track.csv`  | agent position and route length per frame       |
//! | `notices.csv`      | every user-facing notice, in order               |
//! | `locations.csv`    | the named points the station model exposed       |
//!
//! The writer implements [`TraceWriter`] and is driven by [`TraceObserver`],
//! which implements `nav_sim::NavObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer, 10);
//! session.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{LocationRow, NoticeRow, TrackRow};
pub use writer::TraceWriter;
