//! `nav-core` — foundational types for the station navigation workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and few external ones (`nalgebra` for vector math,
//! `serde` + `toml` for configuration, `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `ZoneId`, `GroupId`, `NodeId`                            |
//! | [`geo`]    | `Position`, `Waypoint`, `Heading`, path length helpers   |
//! | [`time`]   | `Frame`, `FrameClock`                                    |
//! | [`config`] | `NavConfig`, `CameraConfig`                              |
//! | [`error`]  | `NavError`, `NavResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to positions and `Frame`.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CameraConfig, NavConfig};
pub use error::{NavError, NavResult};
pub use geo::{Heading, Position, Waypoint, path_length, point};
pub use ids::{GroupId, NodeId, ZoneId};
pub use time::{Frame, FrameClock};
