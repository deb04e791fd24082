//! Session observer trait for presentation and data collection.

use nav_core::Frame;
use nav_mobility::{CameraPose, PathStore, TickOutcome};
use nav_request::{LocationMap, RouteSummary};

use crate::Notice;

/// Callbacks invoked by [`NavSession`][crate::NavSession] as frames run and
/// requests are handled.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is where a renderer, a speech
/// synthesizer, or a trace writer plugs in.
pub trait NavObserver {
    /// Called at the very start of each frame, before assets are polled.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called at the end of each frame with the post-tick state.
    ///
    /// `elapsed_secs` includes this frame's delta.
    fn on_frame_end(
        &mut self,
        _frame:        Frame,
        _elapsed_secs: f64,
        _store:        &PathStore,
        _outcome:      &TickOutcome,
    ) {}

    /// Called when the camera pose changed this frame.
    fn on_camera(&mut self, _frame: Frame, _pose: &CameraPose) {}

    /// Called for every user-facing notice.
    fn on_notice(&mut self, _frame: Frame, _notice: &Notice) {}

    /// Called after a request installed a new route.
    fn on_route_installed(&mut self, _frame: Frame, _summary: &RouteSummary) {}

    /// Called once when a background asset load completes successfully.
    fn on_asset_loaded(&mut self, _frame: Frame, _asset: &'static str) {}

    /// Called with the location table right after it finished loading.
    fn on_locations(&mut self, _frame: Frame, _locations: &LocationMap) {}

    /// Called once after [`NavSession::run`][crate::NavSession::run] finishes.
    fn on_session_end(&mut self, _final_frame: Frame) {}
}

/// A [`NavObserver`] that does nothing.
pub struct NoopObserver;

impl NavObserver for NoopObserver {}

/// A [`NavObserver`] that reports notices and route changes through
/// `tracing`.  Frames themselves are only logged at `trace` level.
pub struct LogObserver;

impl NavObserver for LogObserver {
    fn on_frame_end(&mut self, frame: Frame, elapsed_secs: f64, store: &PathStore, _outcome: &TickOutcome) {
        let p = store.agent_position();
        tracing::trace!(%frame, elapsed_secs, x = p.x, y = p.y, z = p.z, remaining = store.remaining(), "frame");
    }

    fn on_notice(&mut self, frame: Frame, notice: &Notice) {
        if notice.is_failure() {
            tracing::warn!(%frame, "{notice}");
        } else {
            tracing::info!(%frame, "{notice}");
        }
    }

    fn on_route_installed(&mut self, frame: Frame, summary: &RouteSummary) {
        tracing::info!(
            %frame,
            waypoints = summary.waypoints,
            length = summary.length,
            "route installed"
        );
    }

    fn on_asset_loaded(&mut self, frame: Frame, asset: &'static str) {
        tracing::info!(%frame, asset, "asset loaded");
    }

    fn on_session_end(&mut self, final_frame: Frame) {
        tracing::info!(frame = %final_frame, "session finished");
    }
}
