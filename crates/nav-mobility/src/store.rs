//! `PathStore`: the active route and the agent it drives.

use std::collections::VecDeque;

use nav_core::{Position, Waypoint};

use crate::AgentState;

/// Holds zero-or-one active route plus the agent state.
///
/// The route's front element is always the next unreached target.  Elements
/// leave only from the front, through [`advance`](Self::advance).  An empty
/// route means there is nothing to follow.
#[derive(Debug, Clone)]
pub struct PathStore {
    route: VecDeque<Waypoint>,
    agent: AgentState,
}

impl PathStore {
    /// An idle store with the agent standing at `start`.
    pub fn new(start: Position) -> Self {
        Self {
            route: VecDeque::new(),
            agent: AgentState::at(start),
        }
    }

    /// Replace the active route.  Progress on the previous route is dropped;
    /// there is no merging.
    pub fn set_route(&mut self, route: impl IntoIterator<Item = Waypoint>) {
        self.route = route.into_iter().collect();
    }

    /// Front waypoint, or `None` when idle.
    #[inline]
    pub fn current_target(&self) -> Option<Waypoint> {
        self.route.front().copied()
    }

    /// Pop the front waypoint.  A no-op returning `None` when already empty.
    #[inline]
    pub fn advance(&mut self) -> Option<Waypoint> {
        self.route.pop_front()
    }

    /// Drop the active route without moving the agent.
    pub fn clear(&mut self) {
        self.route.clear();
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.route.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.route.is_empty()
    }

    /// Unconsumed waypoints, front first.
    pub fn route(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.route.iter()
    }

    #[inline]
    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    #[inline]
    pub fn agent_position(&self) -> Position {
        self.agent.position
    }

    /// Teleport the agent without touching the route.
    #[inline]
    pub fn place_agent(&mut self, position: Position) {
        self.agent.position = position;
    }
}
