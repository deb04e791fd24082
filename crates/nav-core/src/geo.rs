//! World-space position types.
//!
//! Positions are `nalgebra` points in single precision.  World units are
//! whatever the station model was authored in (metres for the bundled demo);
//! nothing here assumes a particular scale.

use nalgebra::{Point3, Vector3};

/// A point in world space.
pub type Position = Point3<f32>;

/// One point along a computed route.  Immutable once produced by a path query.
pub type Waypoint = Position;

/// A direction of travel.  Not necessarily normalized.
pub type Heading = Vector3<f32>;

/// Shorthand constructor, mostly for tests and fixtures.
#[inline]
pub fn point(x: f32, y: f32, z: f32) -> Position {
    Point3::new(x, y, z)
}

/// Total polyline length from `start` through every point of `path`.
pub fn path_length<'a>(start: Position, path: impl IntoIterator<Item = &'a Position>) -> f32 {
    let mut prev  = start;
    let mut total = 0.0;
    for p in path {
        total += nalgebra::distance(&prev, p);
        prev = *p;
    }
    total
}
