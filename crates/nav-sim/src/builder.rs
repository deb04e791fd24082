//! Fluent builder for constructing a [`NavSession`].

use nav_core::{FrameClock, NavConfig};
use nav_mesh::NavMesh;
use nav_mobility::{CameraRig, MovementController, PathStore};
use nav_request::{LocationMap, NoopVisualizer, RequestHandler, RouteVisualizer};

use crate::{NavSession, PendingAsset, SimResult};

/// Fluent builder for [`NavSession<M, V>`].
///
/// # Required inputs
///
/// - [`NavConfig`] — zone, speed, arrival threshold, camera, …
/// - `M: NavMesh` — the mesh provider, usually empty until its zone loads
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                          |
/// |----------------------------|----------------------------------|
/// | `.visualizer(v)`           | [`NoopVisualizer`]               |
/// | `.locations(map)`          | empty `LocationMap`              |
/// | `.pending_locations(p)`    | none                             |
/// | `.zone_data(z)`            | none (zone must arrive later)    |
/// | `.pending_zone(p)`         | none                             |
pub struct SessionBuilder<M: NavMesh, V: RouteVisualizer = NoopVisualizer> {
    config:            NavConfig,
    mesh:              M,
    visualizer:        V,
    locations:         LocationMap,
    zone_data:         Option<M::Zone>,
    pending_zone:      Option<PendingAsset<M::Zone>>,
    pending_locations: Option<PendingAsset<LocationMap>>,
}

impl<M: NavMesh> SessionBuilder<M, NoopVisualizer> {
    pub fn new(config: NavConfig, mesh: M) -> Self {
        Self {
            config,
            mesh,
            visualizer:        NoopVisualizer,
            locations:         LocationMap::new(),
            zone_data:         None,
            pending_zone:      None,
            pending_locations: None,
        }
    }
}

impl<M: NavMesh, V: RouteVisualizer> SessionBuilder<M, V> {
    /// Replace the route visualizer.
    pub fn visualizer<V2: RouteVisualizer>(self, visualizer: V2) -> SessionBuilder<M, V2> {
        SessionBuilder {
            config:            self.config,
            mesh:              self.mesh,
            visualizer,
            locations:         self.locations,
            zone_data:         self.zone_data,
            pending_zone:      self.pending_zone,
            pending_locations: self.pending_locations,
        }
    }

    /// Named locations already in hand.
    pub fn locations(mut self, locations: LocationMap) -> Self {
        self.locations = locations;
        self
    }

    /// Named locations still loading.  Until they arrive every dropdown
    /// request fails with an unknown-location error.
    pub fn pending_locations(mut self, pending: PendingAsset<LocationMap>) -> Self {
        self.pending_locations = Some(pending);
        self
    }

    /// Zone data already built; registered under `config.zone` at build time.
    pub fn zone_data(mut self, data: M::Zone) -> Self {
        self.zone_data = Some(data);
        self
    }

    /// Zone data still loading.  Until it arrives every request that gets past
    /// selection checks fails with `MeshNotReady`.
    pub fn pending_zone(mut self, pending: PendingAsset<M::Zone>) -> Self {
        self.pending_zone = Some(pending);
        self
    }

    /// Validate the configuration and return a ready-to-run session.
    pub fn build(self) -> SimResult<NavSession<M, V>> {
        self.config.validate()?;
        let controller = MovementController::from_config(&self.config)?;

        let mut mesh = self.mesh;
        if let Some(data) = self.zone_data {
            mesh.set_zone_data(self.config.zone.clone(), data);
        }

        let start  = self.config.agent_start_position();
        let camera = CameraRig::from_config(&self.config.camera);

        Ok(NavSession {
            clock:             FrameClock::new(),
            store:             PathStore::new(start),
            controller,
            camera_pose:       camera.rest_pose(start),
            camera,
            handler:           RequestHandler::from_config(&self.config),
            mesh,
            locations:         self.locations,
            visualizer:        self.visualizer,
            pending_zone:      self.pending_zone,
            pending_locations: self.pending_locations,
            config:            self.config,
        })
    }
}
