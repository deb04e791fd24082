//! Named points of the station model.
//!
//! # CSV format
//!
//! One row per named point, exported from the model's empty `Object3D`
//! markers:
//!
//! ```csv
//! name,x,y,z
//! Gate A,0.0,1.0,0.0
//! Ticket Office,4.5,1.0,12.0
//! ```
//!
//! The map is filled once at load time and read-only afterwards.  A name that
//! appears twice keeps its first slot in the listing but takes the later
//! position.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::{Position, point};

use crate::LocationError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name: String,
    x:    f32,
    y:    f32,
    z:    f32,
}

// ── LocationMap ───────────────────────────────────────────────────────────────

/// Name → position lookup, remembering the order names were first seen so
/// hosts can list them in model order.
#[derive(Debug, Clone, Default)]
pub struct LocationMap {
    names:     Vec<String>,
    positions: HashMap<String, Position>,
}

impl LocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a CSV file.
    pub fn from_csv_path(path: &Path) -> Result<Self, LocationError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Like [`from_csv_path`](Self::from_csv_path) but accepts any `Read`
    /// source.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LocationError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut map = Self::new();

        for (row, result) in csv_reader.deserialize::<LocationRecord>().enumerate() {
            let rec = result.map_err(|e| LocationError::Parse(e.to_string()))?;
            if rec.name.is_empty() {
                return Err(LocationError::EmptyName { row: row + 1 });
            }
            if !(rec.x.is_finite() && rec.y.is_finite() && rec.z.is_finite()) {
                return Err(LocationError::NonFinite { name: rec.name });
            }
            map.insert(rec.name, point(rec.x, rec.y, rec.z));
        }

        tracing::debug!(locations = map.len(), "loaded location map");
        Ok(map)
    }

    /// Insert or overwrite one location.
    pub fn insert(&mut self, name: impl Into<String>, position: Position) {
        let name = name.into();
        if self.positions.insert(name.clone(), position).is_none() {
            self.names.push(name);
        }
    }

    #[inline]
    pub fn resolve(&self, name: &str) -> Option<Position> {
        self.positions.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// `(name, position)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.names
            .iter()
            .filter_map(|n| self.positions.get(n).map(|p| (n.as_str(), *p)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Position)> for LocationMap {
    fn from_iter<I: IntoIterator<Item = (S, Position)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, position) in iter {
            map.insert(name, position);
        }
        map
    }
}
