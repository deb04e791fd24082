//! Mesh-subsystem error type.

use thiserror::Error;

use nav_core::{GroupId, ZoneId};

/// Errors produced by `nav-mesh`.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("zone {0} has no navigation data")]
    UnknownZone(ZoneId),

    #[error("zone {0} has no polygons")]
    EmptyZone(ZoneId),

    #[error("no polygon of {group} in zone {zone}")]
    NoNode { zone: ZoneId, group: GroupId },

    #[error("no path in zone {zone} within {group}")]
    NoPath { zone: ZoneId, group: GroupId },

    #[error("invalid geometry: {0}")]
    Geometry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MeshResult<T> = Result<T, MeshError>;
