//! User-facing notices.

use std::fmt;

use nav_request::RequestError;

/// A message meant for the person driving the demo: shown as an alert,
/// spoken, or logged, depending on the observer.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A request succeeded and the agent is setting off.
    Navigating { from: String, to: String },

    /// The agent consumed the last waypoint of its route.
    DestinationReached,

    /// A request was rejected; nothing changed.
    RequestFailed(RequestError),

    /// A background load gave up.  Requests that need it keep failing.
    AssetFailed { asset: &'static str, reason: String },
}

impl Notice {
    /// Failures deserve more attention than progress messages.
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::RequestFailed(_) | Notice::AssetFailed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Navigating { from, to }    => write!(f, "navigating from {from} to {to}"),
            Notice::DestinationReached          => f.write_str("Destination is reached!"),
            Notice::RequestFailed(err)          => f.write_str(err.user_message()),
            Notice::AssetFailed { asset, .. }   => write!(f, "The {asset} could not be loaded."),
        }
    }
}
