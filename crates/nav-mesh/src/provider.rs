//! The navigable mesh provider interface.
//!
//! # Pluggability
//!
//! The request handler calls the mesh through [`NavMesh`], so an application
//! can swap in a recast/detour binding or a funnel-smoothing backend without
//! touching the movement code.  [`GraphNavMesh`][crate::GraphNavMesh] is the
//! default and is enough for pre-baked station meshes.
//!
//! # Query sequence
//!
//! ```text
//! group     = mesh.group(zone, start)?
//! from_node = mesh.closest_node(start, zone, group)?
//! to_node   = mesh.closest_node(dest,  zone, group)?
//! path      = mesh.find_path(from_node.centroid, to_node.centroid, zone, group)?
//! ```

use nav_core::{GroupId, NodeId, Position, Waypoint, ZoneId};

use crate::{MeshGeometry, MeshResult};

/// A polygon of the navigation graph as reported by a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavNode {
    pub id:       NodeId,
    pub group:    GroupId,
    /// Centre of the polygon.  Path queries are issued between centroids.
    pub centroid: Position,
}

/// Navigable mesh provider.
pub trait NavMesh {
    /// Per-zone data produced by [`create_zone`](Self::create_zone).
    type Zone;

    /// Build zone data from raw mesh geometry.
    fn create_zone(geometry: &MeshGeometry) -> MeshResult<Self::Zone>
    where
        Self: Sized;

    /// Register `data` under `zone`, replacing any previous data.
    fn set_zone_data(&mut self, zone: ZoneId, data: Self::Zone);

    /// `true` once [`set_zone_data`](Self::set_zone_data) was called for `zone`.
    fn has_zone(&self, zone: &ZoneId) -> bool;

    /// The group (connected component) the polygon nearest `position` belongs to.
    fn group(&self, zone: &ZoneId, position: Position) -> MeshResult<GroupId>;

    /// The polygon of `group` nearest `position`.
    fn closest_node(&self, position: Position, zone: &ZoneId, group: GroupId) -> MeshResult<NavNode>;

    /// Shortest path from `start` to `end` within `group`.
    ///
    /// The returned waypoints exclude `start` and end at `end`.  Returns
    /// [`MeshError::NoPath`][crate::MeshError::NoPath] when the two points are
    /// not connected.
    fn find_path(
        &self,
        start: Position,
        end:   Position,
        zone:  &ZoneId,
        group: GroupId,
    ) -> MeshResult<Vec<Waypoint>>;
}
