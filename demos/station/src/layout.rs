//! Synthetic station floor plan.
//!
//! A 24 × 16 concourse tiled with 2 × 2 cells, minus a block of shops in the
//! middle that routes must walk around.  A separate 4 × 4 platform east of
//! the concourse has no walkway to it, so it forms its own group.
//!
//! ```text
//!  z=16 +------------------------+
//!       |                        |     +----+
//!       |       +--------+       |     | P3 |  x 30..34, z 6..10
//!       |       | shops  |       |     +----+
//!       |       +--------+       |
//!  z=0  +------------------------+
//!      x=0                     x=24
//! ```

use nav_core::point;
use nav_mesh::MeshGeometry;

const CELL: f32 = 2.0;
const COLS: usize = 12;
const ROWS: usize = 8;

/// Cells (col, row) occupied by shops.
fn is_blocked(col: usize, row: usize) -> bool {
    (4..8).contains(&col) && (3..5).contains(&row)
}

pub fn station_geometry() -> MeshGeometry {
    let mut g = MeshGeometry::new();

    let mut grid = vec![[0u32; COLS + 1]; ROWS + 1];
    for (row, line) in grid.iter_mut().enumerate() {
        for (col, slot) in line.iter_mut().enumerate() {
            *slot = g.add_vertex(point(col as f32 * CELL, 0.0, row as f32 * CELL));
        }
    }
    for row in 0..ROWS {
        for col in 0..COLS {
            if is_blocked(col, row) {
                continue;
            }
            g.add_quad(grid[row][col], grid[row][col + 1], grid[row + 1][col + 1], grid[row + 1][col]);
        }
    }

    let a = g.add_vertex(point(30.0, 0.0, 6.0));
    let b = g.add_vertex(point(34.0, 0.0, 6.0));
    let c = g.add_vertex(point(34.0, 0.0, 10.0));
    let d = g.add_vertex(point(30.0, 0.0, 10.0));
    g.add_quad(a, b, c, d);
    g
}

/// Extent of the walkable concourse, for random clicks.
pub const CONCOURSE_X: (f32, f32) = (0.0, COLS as f32 * CELL);
pub const CONCOURSE_Z: (f32, f32) = (0.0, ROWS as f32 * CELL);
