//! Camera placement derived from the agent's motion.
//!
//! Nothing here writes to the route or the agent; the rig only reads the
//! position and heading a tick produced.

use nav_core::{CameraConfig, Heading, Position, point};

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye:     Position,
    pub look_at: Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraRig {
    /// Trails the agent at a fixed offset, looking one unit ahead along the
    /// direction of travel.
    Follow { offset: Heading },

    /// Fixed overhead view of the whole station.
    TopDown { height: f32 },
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        if config.follow {
            CameraRig::Follow { offset: Heading::from(config.offset) }
        } else {
            CameraRig::TopDown { height: config.top_down_height }
        }
    }

    /// Pose before the agent has moved, or whenever it stands still.
    pub fn rest_pose(&self, agent: Position) -> CameraPose {
        match *self {
            CameraRig::Follow { offset } => CameraPose { eye: agent + offset, look_at: agent },
            CameraRig::TopDown { height } => CameraPose {
                eye:     point(0.0, height, 0.0),
                look_at: Position::origin(),
            },
        }
    }

    /// New pose after a tick, or `None` if the camera stays where it is.
    ///
    /// Only a following rig moves, and only on ticks that moved the agent.
    pub fn track(&self, agent: Position, heading: Option<Heading>) -> Option<CameraPose> {
        match (*self, heading) {
            (CameraRig::Follow { offset }, Some(direction)) => Some(CameraPose {
                eye:     agent + offset,
                look_at: agent + direction,
            }),
            _ => None,
        }
    }

    #[inline]
    pub fn is_following(&self) -> bool {
        matches!(self, CameraRig::Follow { .. })
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
