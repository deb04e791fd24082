//! The navigation request handler.

use nav_core::{NavConfig, Position, Waypoint, ZoneId, path_length};
use nav_mesh::{MeshError, NavMesh};
use nav_mobility::PathStore;

use crate::{LocationMap, NavRequest, RequestError, RequestResult, RouteVisualizer};

/// What a successful request installed.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Where the route starts: the named start, or the agent's position.
    pub start: Position,

    /// The selected destination (location position or click hit).
    pub destination: Position,

    /// Number of waypoints installed.
    pub waypoints: usize,

    /// Polyline length from `start` through every waypoint.
    pub length: f32,

    /// Human-readable names of both ends, for announcements.
    pub start_label:       String,
    pub destination_label: String,
}

/// Both ends of a request after name resolution.
struct Endpoints {
    start:             Position,
    destination:       Position,
    teleport:          bool,
    start_label:       String,
    destination_label: String,
}

/// Turns [`NavRequest`]s into routes on a [`PathStore`].
///
/// Stateless apart from the zone it queries.  Every call is all-or-nothing:
/// on error the store and visualizer are left exactly as they were.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    zone: ZoneId,
}

impl RequestHandler {
    pub fn new(zone: ZoneId) -> Self {
        Self { zone }
    }

    pub fn from_config(config: &NavConfig) -> Self {
        Self::new(config.zone.clone())
    }

    #[inline]
    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Validate, resolve, and path-find `request`, then install the route.
    ///
    /// Checks run in order: selections present, mesh ready, names known,
    /// mesh query.  `mesh` is `None` while the navmesh is still loading;
    /// such requests fail with [`RequestError::MeshNotReady`] once their
    /// selections check out, whatever names they carry.
    pub fn handle<M, V>(
        &self,
        request:    &NavRequest,
        mesh:       Option<&M>,
        locations:  &LocationMap,
        store:      &mut PathStore,
        visualizer: &mut V,
    ) -> RequestResult<RouteSummary>
    where
        M: NavMesh,
        V: RouteVisualizer + ?Sized,
    {
        check_selection(request)?;
        let mesh = self.ready_mesh(mesh)?;
        let ends = resolve(request, locations, store.agent_position())?;
        let path = self.plan(mesh, ends.start, ends.destination)?;

        // ── Commit ────────────────────────────────────────────────────────
        if ends.teleport {
            store.place_agent(ends.start);
        }
        store.set_route(path.iter().copied());

        visualizer.reset();
        visualizer.set_player_position(ends.start);
        visualizer.set_target_position(ends.destination);
        visualizer.set_path(&path);

        let summary = RouteSummary {
            start:             ends.start,
            destination:       ends.destination,
            waypoints:         path.len(),
            length:            path_length(ends.start, &path),
            start_label:       ends.start_label,
            destination_label: ends.destination_label,
        };
        tracing::debug!(
            from = %summary.start_label,
            to = %summary.destination_label,
            waypoints = summary.waypoints,
            length = summary.length,
            "route installed"
        );
        Ok(summary)
    }

    fn ready_mesh<'m, M: NavMesh>(&self, mesh: Option<&'m M>) -> RequestResult<&'m M> {
        mesh.filter(|m| m.has_zone(&self.zone))
            .ok_or(RequestError::MeshNotReady)
    }

    /// Mesh queries only; touches nothing.
    fn plan<M: NavMesh>(
        &self,
        mesh:        &M,
        start:       Position,
        destination: Position,
    ) -> RequestResult<Vec<Waypoint>> {
        let group = mesh.group(&self.zone, start).map_err(mesh_failure)?;
        let from  = mesh.closest_node(start, &self.zone, group).map_err(mesh_failure)?;
        let to    = mesh.closest_node(destination, &self.zone, group).map_err(mesh_failure)?;
        let path  = mesh
            .find_path(from.centroid, to.centroid, &self.zone, group)
            .map_err(mesh_failure)?;

        if path.is_empty() {
            return Err(RequestError::NoPathFound);
        }
        Ok(path)
    }
}

fn mesh_failure(err: MeshError) -> RequestError {
    tracing::debug!(error = %err, "navmesh query failed");
    match err {
        MeshError::UnknownZone(_) => RequestError::MeshNotReady,
        _ => RequestError::NoPathFound,
    }
}

/// Reject requests with an empty selection or an unusable click hit.
fn check_selection(request: &NavRequest) -> RequestResult<()> {
    match request {
        NavRequest::Locations { start, destination } => {
            selected(start.as_deref())?;
            selected(destination.as_deref())?;
        }
        NavRequest::Click { hit, .. } => {
            let hit = (*hit).ok_or(RequestError::MissingSelection)?;
            if !hit.coords.iter().all(|c| c.is_finite()) {
                return Err(RequestError::InvalidPoint);
            }
        }
    }
    Ok(())
}

/// Look names up.  Selections have already passed [`check_selection`].
fn resolve(request: &NavRequest, locations: &LocationMap, agent: Position) -> RequestResult<Endpoints> {
    match request {
        NavRequest::Locations { start, destination } => {
            let start_name = selected(start.as_deref())?;
            let dest_name  = selected(destination.as_deref())?;
            Ok(Endpoints {
                start:             lookup(locations, start_name)?,
                destination:       lookup(locations, dest_name)?,
                teleport:          true,
                start_label:       start_name.to_owned(),
                destination_label: dest_name.to_owned(),
            })
        }
        NavRequest::Click { start, hit } => {
            let destination = (*hit).ok_or(RequestError::MissingSelection)?;
            let (start, teleport, start_label) = match start.as_deref() {
                None | Some("") => (agent, false, "current position".to_owned()),
                Some(name) => (lookup(locations, name)?, true, name.to_owned()),
            };
            Ok(Endpoints {
                start,
                destination,
                teleport,
                start_label,
                destination_label: format!(
                    "({:.1}, {:.1}, {:.1})",
                    destination.x, destination.y, destination.z
                ),
            })
        }
    }
}

fn selected(name: Option<&str>) -> RequestResult<&str> {
    match name {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(RequestError::MissingSelection),
    }
}

fn lookup(locations: &LocationMap, name: &str) -> RequestResult<Position> {
    locations
        .resolve(name)
        .ok_or_else(|| RequestError::UnknownLocation(name.to_owned()))
}
