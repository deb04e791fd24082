//! Plain data row types written by trace backends.

use nav_core::Position;

/// The agent at the end of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRow {
    pub frame:        u64,
    pub elapsed_secs: f64,
    pub x:            f32,
    pub y:            f32,
    pub z:            f32,
    /// Waypoints still ahead; 0 when idle.
    pub remaining:    u32,
}

/// One user-facing notice.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeRow {
    pub frame:   u64,
    pub failure: bool,
    pub message: String,
}

/// One named point of the station model.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub name: String,
    pub x:    f32,
    pub y:    f32,
    pub z:    f32,
}

impl LocationRow {
    pub fn new(name: &str, position: Position) -> Self {
        Self { name: name.to_owned(), x: position.x, y: position.y, z: position.z }
    }
}
