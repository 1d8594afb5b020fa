//! Triangle-mesh conversion for rendering and export.

use crate::grid::SurfaceGrid;

/// Output triangle mesh for rendering and export.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Triangulate a sampled surface grid, two triangles per grid cell.
    ///
    /// Vertices are emitted in the grid's row-major order, so index
    /// arithmetic is a plain `row * cols + col`.
    pub fn from_grid(grid: &SurfaceGrid) -> Self {
        let (rows, cols) = grid.x.shape();
        let mut mesh = TriangleMesh::default();

        for row in 0..rows {
            for col in 0..cols {
                mesh.vertices.push(grid.x.get(row, col) as f32);
                mesh.vertices.push(grid.y.get(row, col) as f32);
                mesh.vertices.push(grid.z.get(row, col) as f32);
            }
        }

        let stride = cols as u32;
        for row in 0..rows - 1 {
            for col in 0..cols - 1 {
                let bl = row as u32 * stride + col as u32;
                let br = bl + 1;
                let tl = bl + stride;
                let tr = tl + 1;
                mesh.indices.extend_from_slice(&[bl, br, tl, br, tr, tl]);
            }
        }

        mesh
    }
}
