//! The `NavSession` struct and its frame loop.

use nav_core::{Frame, FrameClock, NavConfig};
use nav_mesh::NavMesh;
use nav_mobility::{CameraPose, CameraRig, MovementController, PathStore, TickOutcome};
use nav_request::{
    LocationMap, NavRequest, RequestHandler, RequestResult, RouteSummary, RouteVisualizer,
};

use crate::{AssetPoll, NavObserver, Notice, PendingAsset, SimError, SimResult};

const MESH_ASSET: &str = "navigation mesh";
const LOCATIONS_ASSET: &str = "station model";

/// Everything one navigation demo needs, owned in one place.
///
/// There is no global state: the route, the agent, the camera, the mesh and
/// the location table all live here and are only touched through
/// [`frame`](Self::frame) and [`request`](Self::request).
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct NavSession<M: NavMesh, V: RouteVisualizer> {
    pub config: NavConfig,

    /// Frame counter and accumulated time.
    pub clock: FrameClock,

    /// Active route and agent position.
    pub store: PathStore,

    pub controller: MovementController,

    pub camera: CameraRig,

    /// Pose after the most recent frame.
    pub camera_pose: CameraPose,

    pub handler: RequestHandler,

    /// Mesh provider.  Its zone is registered once the pending load resolves.
    pub mesh: M,

    /// Named locations.  Empty until the model finishes loading.
    pub locations: LocationMap,

    pub visualizer: V,

    pub(crate) pending_zone:      Option<PendingAsset<M::Zone>>,
    pub(crate) pending_locations: Option<PendingAsset<LocationMap>>,
}

impl<M: NavMesh, V: RouteVisualizer> NavSession<M, V> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run one frame of `elapsed_secs`.
    ///
    /// Polls assets, moves the agent, re-aims the camera, and raises the
    /// arrival notice.  Returns what the controller did.
    pub fn frame<O: NavObserver>(&mut self, elapsed_secs: f32, observer: &mut O) -> TickOutcome {
        let frame = self.clock.current_frame;
        observer.on_frame_start(frame);

        self.poll_assets(frame, observer);

        let dt = self.clock.advance(elapsed_secs);
        let outcome = self.controller.tick(&mut self.store, dt);

        if let Some(pose) = self.camera.track(self.store.agent_position(), outcome.heading) {
            self.camera_pose = pose;
            observer.on_camera(frame, &pose);
        }

        if outcome.is_arrival() {
            observer.on_notice(frame, &Notice::DestinationReached);
        }

        observer.on_frame_end(frame, self.clock.elapsed_secs, &self.store, &outcome);
        outcome
    }

    /// Handle one navigation request to completion.
    ///
    /// On failure a notice explains why and the session is unchanged.
    pub fn request<O: NavObserver>(
        &mut self,
        request:  &NavRequest,
        observer: &mut O,
    ) -> RequestResult<RouteSummary> {
        let frame = self.clock.current_frame;
        let result = self.handler.handle(
            request,
            Some(&self.mesh),
            &self.locations,
            &mut self.store,
            &mut self.visualizer,
        );

        match &result {
            Ok(summary) => {
                observer.on_notice(frame, &Notice::Navigating {
                    from: summary.start_label.clone(),
                    to:   summary.destination_label.clone(),
                });
                observer.on_route_installed(frame, summary);
            }
            Err(err) => {
                tracing::debug!(%frame, error = %err, ?request, "request rejected");
                observer.on_notice(frame, &Notice::RequestFailed(err.clone()));
            }
        }
        result
    }

    /// Run frames at the configured rate until `config.max_frames` is reached.
    pub fn run<O: NavObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.max_frames.ok_or(SimError::Unbounded)?;
        let dt  = self.config.frame_secs();
        while self.clock.current_frame.0 < end {
            self.frame(dt, observer);
        }
        observer.on_session_end(self.clock.current_frame);
        Ok(())
    }

    /// Run exactly `n` frames of `elapsed_secs` each (ignores `max_frames`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: NavObserver>(&mut self, n: u64, elapsed_secs: f32, observer: &mut O) {
        for _ in 0..n {
            self.frame(elapsed_secs, observer);
        }
    }

    /// `true` once the configured zone is registered with the mesh provider.
    pub fn is_mesh_ready(&self) -> bool {
        self.mesh.has_zone(&self.config.zone)
    }

    /// `true` while a mesh or location load is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_zone.is_some() || self.pending_locations.is_some()
    }

    #[inline]
    pub fn current_frame(&self) -> Frame {
        self.clock.current_frame
    }

    // ── Asset polling ─────────────────────────────────────────────────────

    fn poll_assets<O: NavObserver>(&mut self, frame: Frame, observer: &mut O) {
        if let Some(data) = take_resolved(&mut self.pending_zone, MESH_ASSET, frame, observer) {
            self.mesh.set_zone_data(self.config.zone.clone(), data);
            tracing::info!(zone = %self.config.zone, "navigation mesh ready");
            observer.on_asset_loaded(frame, MESH_ASSET);
        }

        if let Some(map) = take_resolved(&mut self.pending_locations, LOCATIONS_ASSET, frame, observer) {
            tracing::info!(locations = map.len(), "station locations ready");
            self.locations = map;
            observer.on_asset_loaded(frame, LOCATIONS_ASSET);
            observer.on_locations(frame, &self.locations);
        }
    }
}

/// Poll `slot`; on resolution empty it and return the value.  A failed load
/// empties the slot too and raises a notice.
fn take_resolved<T, O: NavObserver>(
    slot:     &mut Option<PendingAsset<T>>,
    asset:    &'static str,
    frame:    Frame,
    observer: &mut O,
) -> Option<T> {
    let pending = slot.as_mut()?;
    match pending.poll() {
        AssetPoll::Pending => None,
        AssetPoll::Ready(value) => {
            *slot = None;
            Some(value)
        }
        AssetPoll::Failed(reason) => {
            *slot = None;
            tracing::warn!(asset, %reason, "asset load failed");
            observer.on_notice(frame, &Notice::AssetFailed { asset, reason });
            None
        }
    }
}
