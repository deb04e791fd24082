//! Polygon graph built from mesh geometry, and the default [`NavMesh`].
//!
//! # Data layout
//!
//! Every triangle becomes one node of an undirected `petgraph` graph whose
//! weight is the triangle's `NodeId`.  Two triangles are connected when they
//! share an edge after vertex welding; the edge weight is the distance
//! between their centroids.  Node indices and `NodeId`s coincide, so
//! per-node arrays (`centroids`, `groups`) are indexed by either.
//!
//! Groups are the connected components of that graph, numbered in order of
//! their lowest triangle.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the centroids answers nearest-node queries.
//! Group-restricted queries walk the nearest-neighbour iterator until they
//! hit a node of the requested group.

use std::collections::{HashMap, HashSet};

use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use nav_core::{GroupId, NodeId, Position, Waypoint, ZoneId};

use crate::{MeshError, MeshGeometry, MeshResult, NavMesh, NavNode};

/// Vertices closer than this are treated as the same vertex when deciding
/// which triangles share an edge.
const WELD_EPSILON: f32 = 1e-4;

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f32; 3],
    id:    NodeId,
    group: GroupId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── ZoneGraph ─────────────────────────────────────────────────────────────────

/// Navigation data for one zone.  Build with [`ZoneGraph::from_geometry`].
pub struct ZoneGraph {
    /// Centroid of each polygon.  Indexed by `NodeId`.
    pub centroids: Vec<Position>,

    /// Group of each polygon.  Indexed by `NodeId`.
    pub groups: Vec<GroupId>,

    /// Number of distinct groups.
    pub group_count: usize,

    graph:       UnGraph<NodeId, f32>,
    spatial_idx: RTree<NodeEntry>,
}

impl ZoneGraph {
    /// Build the polygon graph, group labelling, and spatial index.
    pub fn from_geometry(geometry: &MeshGeometry) -> MeshResult<Self> {
        geometry.validate()?;

        let welded = weld_vertices(geometry);
        let tri_count = geometry.triangle_count();

        let centroids: Vec<Position> = geometry
            .triangles
            .iter()
            .map(|&[a, b, c]| {
                let sum = geometry.vertex(a).coords + geometry.vertex(b).coords + geometry.vertex(c).coords;
                Position::from(sum / 3.0)
            })
            .collect();

        let mut graph: UnGraph<NodeId, f32> = UnGraph::with_capacity(tri_count, tri_count * 3 / 2);
        for i in 0..tri_count {
            graph.add_node(NodeId(i as u32));
        }

        // Edge (welded a, welded b) → triangles using it.
        let mut edge_owners: HashMap<(u32, u32), Vec<usize>> = HashMap::with_capacity(tri_count * 3);
        for (t, tri) in geometry.triangles.iter().enumerate() {
            let w = tri.map(|v| welded[v as usize]);
            for (a, b) in [(w[0], w[1]), (w[1], w[2]), (w[2], w[0])] {
                if a == b {
                    continue; // degenerate edge
                }
                edge_owners.entry((a.min(b), a.max(b))).or_default().push(t);
            }
        }

        let mut components = UnionFind::<usize>::new(tri_count);
        let mut linked: HashSet<(usize, usize)> = HashSet::new();
        for owners in edge_owners.values() {
            for (i, &t1) in owners.iter().enumerate() {
                for &t2 in &owners[i + 1..] {
                    if t1 == t2 || !linked.insert((t1.min(t2), t1.max(t2))) {
                        continue;
                    }
                    let cost = centroid_distance(centroids[t1], centroids[t2]);
                    graph.add_edge(NodeIndex::new(t1), NodeIndex::new(t2), cost);
                    components.union(t1, t2);
                }
            }
        }

        // Compact component labels into 0..group_count in triangle order.
        let labels = components.into_labeling();
        let mut compact: HashMap<usize, GroupId> = HashMap::new();
        let groups: Vec<GroupId> = labels
            .iter()
            .map(|&root| {
                let next = GroupId(compact.len() as u32);
                *compact.entry(root).or_insert(next)
            })
            .collect();
        let group_count = compact.len();

        let entries: Vec<NodeEntry> = centroids
            .iter()
            .enumerate()
            .map(|(i, c)| NodeEntry {
                point: [c.x, c.y, c.z],
                id:    NodeId(i as u32),
                group: groups[i],
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        tracing::debug!(
            polygons = tri_count,
            links = graph.edge_count(),
            groups = group_count,
            "built zone graph"
        );

        Ok(Self { centroids, groups, group_count, graph, spatial_idx })
    }

    pub fn node_count(&self) -> usize {
        self.centroids.len()
    }

    /// Number of polygon-to-polygon links (each counted once).
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The polygon nearest `pos`, in any group.
    pub fn nearest_node(&self, pos: Position) -> Option<NavNode> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y, pos.z])
            .map(|e| self.nav_node(e.id))
    }

    /// The polygon of `group` nearest `pos`.
    pub fn nearest_node_in_group(&self, pos: Position, group: GroupId) -> Option<NavNode> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y, pos.z])
            .find(|e| e.group == group)
            .map(|e| self.nav_node(e.id))
    }

    /// Polygon sequence from `from` to `to` by centroid distance, or `None`
    /// if they are not connected.
    pub fn polygon_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let goal = self.centroids[to.index()];
        astar(
            &self.graph,
            NodeIndex::new(from.index()),
            |n| n.index() == to.index(),
            |e| *e.weight(),
            |n| centroid_distance(self.centroids[n.index()], goal),
        )
        .map(|(_cost, nodes)| nodes.into_iter().map(|n| self.graph[n]).collect())
    }

    fn nav_node(&self, id: NodeId) -> NavNode {
        NavNode {
            id,
            group:    self.groups[id.index()],
            centroid: self.centroids[id.index()],
        }
    }
}

#[inline]
fn centroid_distance(a: Position, b: Position) -> f32 {
    (b - a).norm()
}

/// Map each vertex index to the lowest index of a vertex at the same
/// (quantized) position.
fn weld_vertices(geometry: &MeshGeometry) -> Vec<u32> {
    let mut seen: HashMap<[i64; 3], u32> = HashMap::with_capacity(geometry.vertices.len());
    geometry
        .vertices
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let key = v.map(|c| (c / WELD_EPSILON).round() as i64);
            *seen.entry(key).or_insert(i as u32)
        })
        .collect()
}

// ── GraphNavMesh ──────────────────────────────────────────────────────────────

/// The default [`NavMesh`]: one [`ZoneGraph`] per registered zone.
#[derive(Default)]
pub struct GraphNavMesh {
    zones: HashMap<ZoneId, ZoneGraph>,
}

impl GraphNavMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh holding a single zone built from `geometry`.
    pub fn with_zone(zone: ZoneId, geometry: &MeshGeometry) -> MeshResult<Self> {
        let mut mesh = Self::new();
        mesh.set_zone_data(zone, Self::create_zone(geometry)?);
        Ok(mesh)
    }

    pub fn zone(&self, zone: &ZoneId) -> MeshResult<&ZoneGraph> {
        self.zones
            .get(zone)
            .ok_or_else(|| MeshError::UnknownZone(zone.clone()))
    }
}

impl NavMesh for GraphNavMesh {
    type Zone = ZoneGraph;

    fn create_zone(geometry: &MeshGeometry) -> MeshResult<ZoneGraph> {
        ZoneGraph::from_geometry(geometry)
    }

    fn set_zone_data(&mut self, zone: ZoneId, data: ZoneGraph) {
        self.zones.insert(zone, data);
    }

    fn has_zone(&self, zone: &ZoneId) -> bool {
        self.zones.contains_key(zone)
    }

    fn group(&self, zone: &ZoneId, position: Position) -> MeshResult<GroupId> {
        self.zone(zone)?
            .nearest_node(position)
            .map(|n| n.group)
            .ok_or_else(|| MeshError::EmptyZone(zone.clone()))
    }

    fn closest_node(&self, position: Position, zone: &ZoneId, group: GroupId) -> MeshResult<NavNode> {
        self.zone(zone)?
            .nearest_node_in_group(position, group)
            .ok_or_else(|| MeshError::NoNode { zone: zone.clone(), group })
    }

    fn find_path(
        &self,
        start: Position,
        end:   Position,
        zone:  &ZoneId,
        group: GroupId,
    ) -> MeshResult<Vec<Waypoint>> {
        let graph = self.zone(zone)?;
        let no_path = || MeshError::NoPath { zone: zone.clone(), group };

        let from = graph.nearest_node_in_group(start, group).ok_or_else(no_path)?;
        let to   = graph.nearest_node_in_group(end, group).ok_or_else(no_path)?;
        let polygons = graph.polygon_path(from.id, to.id).ok_or_else(no_path)?;

        // Skip the polygon the agent stands in; finish on the exact end point
        // rather than the last polygon's centroid.
        let mut waypoints: Vec<Waypoint> = polygons
            .iter()
            .skip(1)
            .map(|id| graph.centroids[id.index()])
            .collect();
        waypoints.pop();
        waypoints.push(end);
        Ok(waypoints)
    }
}
