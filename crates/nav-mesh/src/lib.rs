//! `nav-mesh` — navigable mesh provider interface and reference backend.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`provider`] | `NavMesh` trait, `NavNode`                                 |
//! | [`geometry`] | `MeshGeometry` — triangle soup, JSON loading               |
//! | [`graph`]    | `ZoneGraph` (petgraph + R-tree), `GraphNavMesh`            |
//! | [`error`]    | `MeshError`, `MeshResult<T>`                               |
//!
//! The request handler only talks to the [`NavMesh`] trait.  Search itself is
//! delegated to `petgraph`; this crate wires polygons into a graph and answers
//! group / nearest-node / path queries over it.

pub mod error;
pub mod geometry;
pub mod graph;
pub mod provider;


pub use error::{MeshError, MeshResult};
pub use geometry::MeshGeometry;
pub use graph::{GraphNavMesh, ZoneGraph};
pub use provider::{NavMesh, NavNode};
