//! Debug overlay for the installed route.

use nav_core::{Position, Waypoint};

/// Presentational helper refreshed after every successful request.
///
/// Purely cosmetic: implementations must not feed anything back into
/// movement.  Never called for a failed request.
pub trait RouteVisualizer {
    fn reset(&mut self);
    fn set_player_position(&mut self, position: Position);
    fn set_target_position(&mut self, position: Position);
    fn set_path(&mut self, path: &[Waypoint]);
}

/// A [`RouteVisualizer`] that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisualizer;

impl RouteVisualizer for NoopVisualizer {
    fn reset(&mut self) {}
    fn set_player_position(&mut self, _position: Position) {}
    fn set_target_position(&mut self, _position: Position) {}
    fn set_path(&mut self, _path: &[Waypoint]) {}
}
