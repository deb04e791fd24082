//! Integration tests for nav-sim.

use nav_core::{Frame, NavConfig, point};
use nav_mesh::{GraphNavMesh, MeshGeometry, NavMesh, ZoneGraph};
use nav_mobility::{CameraPose, PathStore, TickOutcome};
use nav_request::{LocationMap, RouteSummary};

use crate::{NavObserver, NavSession, Notice, SessionBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Straight corridor x -1..1, z 0..10.
fn corridor() -> MeshGeometry {
    let mut g = MeshGeometry::new();
    let mut rows = Vec::new();
    for k in 0..=5 {
        let z = k as f32 * 2.0;
        rows.push((g.add_vertex(point(-1.0, 0.0, z)), g.add_vertex(point(1.0, 0.0, z))));
    }
    for k in 0..5 {
        let (a, b) = rows[k];
        let (d, c) = rows[k + 1];
        g.add_quad(a, b, c, d);
    }
    g
}

fn zone_data() -> ZoneGraph {
    GraphNavMesh::create_zone(&corridor()).unwrap()
}

fn station() -> LocationMap {
    [("Gate A", point(0.0, 0.0, 0.5)), ("Platform 2", point(0.0, 0.0, 9.5))]
        .into_iter()
        .collect()
}

fn ready_session() -> NavSession<GraphNavMesh, nav_request::NoopVisualizer> {
    SessionBuilder::new(NavConfig::default(), GraphNavMesh::new())
        .zone_data(zone_data())
        .locations(station())
        .build()
        .unwrap()
}

#[derive(Default)]
struct Recorder {
    notices:      Vec<Notice>,
    cameras:      Vec<CameraPose>,
    routes:       Vec<RouteSummary>,
    loaded:       Vec<&'static str>,
    frames_ended: u64,
    ended:        Option<Frame>,
}

impl Recorder {
    fn count(&self, wanted: &Notice) -> usize {
        self.notices.iter().filter(|n| *n == wanted).count()
    }
}

impl NavObserver for Recorder {
    fn on_frame_end(&mut self, _frame: Frame, _elapsed: f64, _store: &PathStore, _outcome: &TickOutcome) {
        self.frames_ended += 1;
    }
    fn on_camera(&mut self, _frame: Frame, pose: &CameraPose) {
        self.cameras.push(*pose);
    }
    fn on_notice(&mut self, _frame: Frame, notice: &Notice) {
        self.notices.push(notice.clone());
    }
    fn on_route_installed(&mut self, _frame: Frame, summary: &RouteSummary) {
        self.routes.push(summary.clone());
    }
    fn on_asset_loaded(&mut self, _frame: Frame, asset: &'static str) {
        self.loaded.push(asset);
    }
    fn on_session_end(&mut self, final_frame: Frame) {
        self.ended = Some(final_frame);
    }
}

// ── SessionBuilder ────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::new()).build().unwrap();
        assert_eq!(session.store.agent_position(), point(0.0, 1.0, 0.0));
        assert!(session.store.is_idle());
        assert!(!session.is_mesh_ready());
        assert!(!session.is_loading());
        assert_eq!(session.camera_pose.eye, point(0.0, 3.0, -5.0));
    }

    #[test]
    fn zone_data_registers_immediately() {
        assert!(ready_session().is_mesh_ready());
    }

    #[test]
    fn invalid_config_rejected() {
        let config = NavConfig { speed: 0.0, ..NavConfig::default() };
        let err = SessionBuilder::new(config, GraphNavMesh::new()).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn top_down_camera_from_config() {
        let mut config = NavConfig::default();
        config.camera.follow = false;
        let session = SessionBuilder::new(config, GraphNavMesh::new()).build().unwrap();
        assert_eq!(session.camera_pose.eye, point(0.0, 50.0, 0.0));
    }
}

// ── Requests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod request_tests {
    use nav_request::{NavRequest, RequestError};

    use super::*;

    #[test]
    fn request_before_mesh_is_not_ready() {
        let mut session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::new())
            .locations(station())
            .build()
            .unwrap();
        let mut obs = Recorder::default();

        let err = session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap_err();
        assert_eq!(err, RequestError::MeshNotReady);
        assert_eq!(obs.notices, vec![Notice::RequestFailed(RequestError::MeshNotReady)]);
        assert_eq!(obs.notices[0].to_string(), "Navigation mesh is still loading.");

        session.run_frames(3, 0.016, &mut obs);
        assert!(session.store.is_idle());
        assert_eq!(session.store.agent_position(), point(0.0, 1.0, 0.0));
    }

    #[test]
    fn success_announces_and_installs() {
        let mut session = ready_session();
        let mut obs = Recorder::default();

        session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap();

        assert_eq!(obs.notices.len(), 1);
        assert_eq!(obs.notices[0].to_string(), "navigating from Gate A to Platform 2");
        assert_eq!(obs.routes.len(), 1);
        assert_eq!(session.store.agent_position(), point(0.0, 0.0, 0.5));
        assert!(!session.store.is_idle());
    }

    #[test]
    fn failed_request_mid_route_keeps_route() {
        let mut session = ready_session();
        let mut obs = Recorder::default();
        session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap();
        session.run_frames(30, 1.0 / 60.0, &mut obs);

        let before_pos   = session.store.agent_position();
        let before_route: Vec<_> = session.store.route().copied().collect();

        let missing = NavRequest::Locations { start: Some("Gate A".into()), destination: None };
        let err = session.request(&missing, &mut obs).unwrap_err();

        assert_eq!(err, RequestError::MissingSelection);
        assert_eq!(
            obs.notices.last().map(ToString::to_string).as_deref(),
            Some("Please select both start and destination points.")
        );
        assert_eq!(session.store.agent_position(), before_pos);
        assert_eq!(session.store.route().copied().collect::<Vec<_>>(), before_route);
    }

    #[test]
    fn arrival_notice_fires_once() {
        let mut session = ready_session();
        let mut obs = Recorder::default();
        session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap();

        // ~9 units at 2 units/s is under five seconds of frames.
        session.run_frames(600, 1.0 / 60.0, &mut obs);

        assert!(session.store.is_idle());
        assert_eq!(obs.count(&Notice::DestinationReached), 1);
        assert_eq!(obs.notices.last().map(ToString::to_string).as_deref(), Some("Destination is reached!"));
    }

    #[test]
    fn following_camera_tracks_movement() {
        let mut session = ready_session();
        let mut obs = Recorder::default();
        session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap();
        session.run_frames(10, 1.0 / 60.0, &mut obs);

        assert_eq!(obs.cameras.len(), 10);
        let agent = session.store.agent_position();
        assert_eq!(session.camera_pose.eye, agent + nav_core::Heading::new(0.0, 2.0, -5.0));
    }

    #[test]
    fn top_down_camera_never_moves() {
        let mut config = NavConfig::default();
        config.camera.follow = false;
        let mut session = SessionBuilder::new(config, GraphNavMesh::new())
            .zone_data(zone_data())
            .locations(station())
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap();
        session.run_frames(10, 1.0 / 60.0, &mut obs);
        assert!(obs.cameras.is_empty());
    }
}

// ── Assets ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod asset_tests {
    use nav_request::{NavRequest, RequestError};

    use super::*;
    use crate::{AssetPoll, PendingAsset, SimError};

    #[test]
    fn poll_is_pending_until_resolved() {
        let (loader, mut pending) = PendingAsset::<u32>::channel();
        assert!(matches!(pending.poll(), AssetPoll::Pending));
        loader.resolve(7);
        assert!(matches!(pending.poll(), AssetPoll::Ready(7)));
    }

    #[test]
    fn dropped_loader_is_failure() {
        let (loader, mut pending) = PendingAsset::<u32>::channel();
        drop(loader);
        assert!(matches!(pending.poll(), AssetPoll::Failed(_)));
    }

    #[test]
    fn mesh_registers_on_next_frame() {
        let (loader, pending) = PendingAsset::channel();
        let mut session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::new())
            .locations(station())
            .pending_zone(pending)
            .build()
            .unwrap();
        let mut obs = Recorder::default();

        session.frame(0.016, &mut obs);
        assert!(!session.is_mesh_ready());
        assert!(session.is_loading());

        loader.resolve(zone_data());
        session.frame(0.016, &mut obs);
        assert!(session.is_mesh_ready());
        assert!(!session.is_loading());
        assert_eq!(obs.loaded, vec!["navigation mesh"]);

        session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap();
    }

    #[test]
    fn failed_mesh_load_keeps_requests_failing() {
        let (loader, pending) = PendingAsset::<ZoneGraph>::channel();
        let mut session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::new())
            .locations(station())
            .pending_zone(pending)
            .build()
            .unwrap();
        let mut obs = Recorder::default();

        loader.fail("corrupt navmesh");
        session.frame(0.016, &mut obs);
        assert!(!session.is_loading());
        assert!(matches!(&obs.notices[0], Notice::AssetFailed { reason, .. } if reason == "corrupt navmesh"));

        let err = session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap_err();
        assert_eq!(err, RequestError::MeshNotReady);
    }

    #[test]
    fn request_while_both_assets_load_is_not_ready() {
        let (_mesh_loader, mesh_pending) = PendingAsset::<ZoneGraph>::channel();
        let (_loc_loader, loc_pending) = PendingAsset::<LocationMap>::channel();
        let mut session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::new())
            .pending_zone(mesh_pending)
            .pending_locations(loc_pending)
            .build()
            .unwrap();
        let mut obs = Recorder::default();

        session.frame(0.016, &mut obs);
        assert!(session.is_loading());
        let err = session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap_err();
        assert_eq!(err, RequestError::MeshNotReady);
        assert_eq!(obs.notices, vec![Notice::RequestFailed(RequestError::MeshNotReady)]);
        assert!(session.store.is_idle());
    }

    #[test]
    fn locations_arrive_later() {
        let (loader, pending) = PendingAsset::channel();
        let mut session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::new())
            .zone_data(zone_data())
            .pending_locations(pending)
            .build()
            .unwrap();
        let mut obs = Recorder::default();

        let err = session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap_err();
        assert_eq!(err, RequestError::UnknownLocation("Gate A".into()));

        loader.resolve(station());
        session.frame(0.0, &mut obs);
        assert_eq!(session.locations.len(), 2);
        session.request(&NavRequest::locations("Gate A", "Platform 2"), &mut obs).unwrap();
    }

    #[tokio::test]
    async fn wait_returns_value_or_error() {
        let (loader, pending) = PendingAsset::channel();
        loader.resolve(station());
        assert_eq!(pending.wait("station model").await.unwrap().len(), 2);

        let (loader, pending) = PendingAsset::<LocationMap>::channel();
        loader.fail("missing file");
        let err = pending.wait("station model").await.unwrap_err();
        assert!(matches!(err, SimError::Asset { asset: "station model", .. }));
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn run_needs_max_frames() {
        let mut session = ready_session();
        let err = session.run(&mut Recorder::default()).unwrap_err();
        assert!(matches!(err, SimError::Unbounded));
    }

    #[test]
    fn run_stops_at_max_frames() {
        let config = NavConfig { max_frames: Some(12), ..NavConfig::default() };
        let mut session = SessionBuilder::new(config, GraphNavMesh::new()).build().unwrap();
        let mut obs = Recorder::default();
        session.run(&mut obs).unwrap();

        assert_eq!(obs.frames_ended, 12);
        assert_eq!(obs.ended, Some(Frame(12)));
        assert!((session.clock.elapsed_secs - 12.0 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn negative_delta_does_not_move_agent() {
        let mut session = ready_session();
        let mut obs = Recorder::default();
        session
            .request(&nav_request::NavRequest::locations("Gate A", "Platform 2"), &mut obs)
            .unwrap();
        let before = session.store.agent_position();
        session.frame(-1.0, &mut obs);
        assert_eq!(session.store.agent_position(), before);
        assert_eq!(session.clock.elapsed_secs, 0.0);
    }
}
