//! Top-level navigation configuration.
//!
//! Typically loaded from a TOML file by the application and passed to
//! `nav_sim::SessionBuilder`.  Every field has a default matching the
//! station demo, so a config file only needs to list what it overrides:
//!
//! ```toml
//! zone  = "level1"
//! speed = 2.0
//!
//! [camera]
//! follow = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{NavError, NavResult, Position, ZoneId};

/// Camera presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Re-aim a trailing camera behind the agent every frame it moves.
    pub follow: bool,

    /// Offset from the agent to the camera eye while following.
    pub offset: [f32; 3],

    /// Eye height of the fixed top-down camera used when not following.
    pub top_down_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow:          true,
            offset:          [0.0, 2.0, -5.0],
            top_down_height: 50.0,
        }
    }
}

/// Navigation and movement settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Navmesh zone queried for every request.
    pub zone: ZoneId,

    /// Agent speed in world units per second.  Must be positive.
    pub speed: f32,

    /// Distance under which a waypoint counts as reached.  Must be positive.
    pub arrival_threshold: f32,

    /// Where the agent stands before the first request.
    pub agent_start: [f32; 3],

    /// Frame rate the host loop targets.  Only used by hosts that generate
    /// their own frame deltas.
    pub frame_rate_hz: f32,

    /// Stop the host loop after this many frames.  `None` runs until the host
    /// decides otherwise.
    pub max_frames: Option<u64>,

    pub camera: CameraConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            zone:              ZoneId::from("level1"),
            speed:             2.0,
            arrival_threshold: 0.1,
            agent_start:       [0.0, 1.0, 0.0],
            frame_rate_hz:     60.0,
            max_frames:        None,
            camera:            CameraConfig::default(),
        }
    }
}

impl NavConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> NavResult<Self> {
        let config: NavConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject values that would make movement meaningless.
    ///
    /// Called at startup so a bad speed never surfaces mid-traversal.
    pub fn validate(&self) -> NavResult<()> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(NavError::Config(format!(
                "speed must be a positive number, got {}",
                self.speed
            )));
        }
        if !(self.arrival_threshold.is_finite() && self.arrival_threshold > 0.0) {
            return Err(NavError::Config(format!(
                "arrival_threshold must be a positive number, got {}",
                self.arrival_threshold
            )));
        }
        if !(self.frame_rate_hz.is_finite() && self.frame_rate_hz > 0.0) {
            return Err(NavError::Config(format!(
                "frame_rate_hz must be a positive number, got {}",
                self.frame_rate_hz
            )));
        }
        if self.zone.as_str().is_empty() {
            return Err(NavError::Config("zone name must not be empty".into()));
        }
        Ok(())
    }

    /// Seconds per frame at `frame_rate_hz`.
    #[inline]
    pub fn frame_secs(&self) -> f32 {
        1.0 / self.frame_rate_hz
    }

    #[inline]
    pub fn agent_start_position(&self) -> Position {
        Position::from(self.agent_start)
    }
}
