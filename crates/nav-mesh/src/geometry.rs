//! Raw navmesh geometry: an indexed triangle soup.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "vertices":  [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
//!   "triangles": [[0, 1, 2]]
//! }
//! ```
//!
//! This is what a baking tool exports once the GLB has been flattened; no
//! scene-graph or glTF parsing happens here.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use nav_core::Position;

use crate::{MeshError, MeshResult};

/// Indexed triangle mesh in world space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshGeometry {
    pub vertices:  Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, p: Position) -> u32 {
        self.vertices.push([p.x, p.y, p.z]);
        (self.vertices.len() - 1) as u32
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Convenience for fixtures: a quad `a b c d` (counter-clockwise) as two
    /// triangles sharing the `a–c` diagonal.
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    #[inline]
    pub fn vertex(&self, i: u32) -> Position {
        Position::from(self.vertices[i as usize])
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Parse geometry from JSON and validate it.
    pub fn from_json_reader<R: Read>(reader: R) -> MeshResult<Self> {
        let geometry: MeshGeometry = serde_json::from_reader(reader)?;
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn from_json_path(path: &Path) -> MeshResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Check that there is at least one triangle, every index is in range,
    /// and every coordinate is finite.
    pub fn validate(&self) -> MeshResult<()> {
        if self.triangles.is_empty() {
            return Err(MeshError::Geometry("mesh has no triangles".into()));
        }
        if let Some(v) = self.vertices.iter().position(|v| v.iter().any(|c| !c.is_finite())) {
            return Err(MeshError::Geometry(format!("vertex {v} has a non-finite coordinate")));
        }
        let n = self.vertices.len() as u32;
        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&i| i >= n) {
                return Err(MeshError::Geometry(format!(
                    "triangle {t} references vertex {bad}, but only {n} vertices exist"
                )));
            }
        }
        Ok(())
    }
}
