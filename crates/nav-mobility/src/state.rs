//! Agent state and per-tick movement results.

use nav_core::{Heading, Position, Waypoint};

/// The moving entity's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    pub position: Position,
}

impl AgentState {
    #[inline]
    pub fn at(position: Position) -> Self {
        Self { position }
    }
}

/// What happened to the route during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveEvent {
    /// No active route.
    Idle,

    /// Moving toward the front waypoint, not there yet.
    EnRoute,

    /// The front waypoint was reached and popped; `remaining` waypoints are
    /// still ahead.
    Reached { waypoint: Waypoint, remaining: usize },

    /// The last waypoint was reached.  Reported once per completed route.
    Arrived { waypoint: Waypoint },
}

/// Result of [`MovementController::tick`][crate::MovementController::tick].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Unit direction of travel when the agent was stepped this tick.
    pub heading: Option<Heading>,
    pub event:   MoveEvent,
}

impl TickOutcome {
    pub const IDLE: TickOutcome = TickOutcome { heading: None, event: MoveEvent::Idle };

    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self.event, MoveEvent::Arrived { .. })
    }
}
