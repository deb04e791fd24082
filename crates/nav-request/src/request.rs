//! Navigation requests as they arrive from the host UI.

use nav_core::Position;

/// One user action asking the agent to go somewhere.
///
/// Selections are optional because UI widgets can be left blank; the handler
/// reports that as [`RequestError::MissingSelection`][crate::RequestError].
#[derive(Debug, Clone, PartialEq)]
pub enum NavRequest {
    /// Start and destination picked by name (dropdowns).  On success the
    /// agent is teleported to the start.
    Locations {
        start:       Option<String>,
        destination: Option<String>,
    },

    /// Destination picked by clicking the model.  `hit` is the first
    /// ray-intersection point, `None` when the click missed.  Without a named
    /// start the agent sets off from where it stands.
    Click {
        start: Option<String>,
        hit:   Option<Position>,
    },
}

impl NavRequest {
    pub fn locations(start: impl Into<String>, destination: impl Into<String>) -> Self {
        NavRequest::Locations {
            start:       Some(start.into()),
            destination: Some(destination.into()),
        }
    }

    /// Click request starting from the agent's current position.
    pub fn click(hit: Position) -> Self {
        NavRequest::Click { start: None, hit: Some(hit) }
    }

    pub fn click_from(start: impl Into<String>, hit: Position) -> Self {
        NavRequest::Click { start: Some(start.into()), hit: Some(hit) }
    }
}
