//! Constant-speed waypoint following.

use nav_core::{Heading, NavConfig};
use nav_core::time::sanitize_delta;

use crate::{MobilityError, MobilityResult, MoveEvent, PathStore, TickOutcome};

/// Moves the agent held by a [`PathStore`] along its route.
///
/// The controller itself is stateless between ticks; everything that changes
/// lives in the store.  Parameters are validated once at construction so a bad
/// speed is reported at startup rather than half-way along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementController {
    speed:             f32,
    arrival_threshold: f32,
}

impl MovementController {
    pub fn new(speed: f32, arrival_threshold: f32) -> MobilityResult<Self> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(MobilityError::InvalidSpeed(speed));
        }
        if !(arrival_threshold.is_finite() && arrival_threshold > 0.0) {
            return Err(MobilityError::InvalidThreshold(arrival_threshold));
        }
        Ok(Self { speed, arrival_threshold })
    }

    pub fn from_config(config: &NavConfig) -> MobilityResult<Self> {
        Self::new(config.speed, config.arrival_threshold)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn arrival_threshold(&self) -> f32 {
        self.arrival_threshold
    }

    /// Advance the agent by one frame of `elapsed_secs`.
    ///
    /// * Empty route: [`MoveEvent::Idle`], nothing changes.
    /// * Front waypoint farther than the threshold: step toward it by
    ///   `speed × dt`.  If the step lands within the threshold the waypoint is
    ///   consumed in this same tick.
    /// * Front waypoint already within the threshold: consume it.
    ///
    /// At most one waypoint is consumed per tick.  Negative or NaN deltas are
    /// treated as zero.
    pub fn tick(&self, store: &mut PathStore, elapsed_secs: f32) -> TickOutcome {
        let Some(target) = store.current_target() else {
            return TickOutcome::IDLE;
        };
        let dt = sanitize_delta(elapsed_secs);

        let delta    = target - store.agent_position();
        let distance = delta.norm();
        if distance <= self.arrival_threshold {
            return Self::reach(store, None);
        }

        let heading = delta / distance;
        let moved   = store.agent_position() + heading * (self.speed * dt);
        store.place_agent(moved);

        if (target - moved).norm() <= self.arrival_threshold {
            Self::reach(store, Some(heading))
        } else {
            TickOutcome { heading: Some(heading), event: MoveEvent::EnRoute }
        }
    }

    fn reach(store: &mut PathStore, heading: Option<Heading>) -> TickOutcome {
        let Some(waypoint) = store.advance() else {
            return TickOutcome::IDLE;
        };
        let remaining = store.remaining();
        let event = if remaining == 0 {
            tracing::debug!(x = waypoint.x, y = waypoint.y, z = waypoint.z, "route complete");
            MoveEvent::Arrived { waypoint }
        } else {
            MoveEvent::Reached { waypoint, remaining }
        };
        TickOutcome { heading, event }
    }
}
