//! Flat lattice mesh that the renderer displaces with the height map.

use bytemuck::{Pod, Zeroable};

use crate::error::{OceanError, Result};

/// Vertex data for the ocean mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Unit-square lattice, displaced on the GPU by the wave textures
#[derive(Debug, Clone)]
pub struct OceanMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    columns: usize,
    rows: usize,
}

impl OceanMesh {
    /// Build an `n × m` vertex lattice spanning `[0, 1]²` on the xy plane.
    pub fn new(n: usize, m: usize) -> Result<Self> {
        if n < 2 || m < 2 {
            return Err(OceanError::InvalidConfig(format!(
                "mesh needs at least 2x2 vertices, got {n}x{m}"
            )));
        }

        let mut vertices = Vec::with_capacity(n * m);
        for j in 0..m {
            let y = j as f32 / (m - 1) as f32;
            for i in 0..n {
                let x = i as f32 / (n - 1) as f32;
                vertices.push(Vertex {
                    position: [x, y, 0.0],
                    uv: [x, y],
                });
            }
        }

        let mut indices = Vec::with_capacity((n - 1) * (m - 1) * 6);
        for j in 0..m - 1 {
            for i in 0..n - 1 {
                let bottom_left = (j * n + i) as u32;
                let bottom_right = bottom_left + 1;
                let top_left = ((j + 1) * n + i) as u32;
                let top_right = top_left + 1;

                indices.extend_from_slice(&[
                    // lower-right triangle
                    bottom_left,
                    bottom_right,
                    top_right,
                    // upper-left triangle
                    top_right,
                    top_left,
                    bottom_left,
                ]);
            }
        }

        Ok(Self {
            vertices,
            indices,
            columns: n,
            rows: m,
        })
    }

    /// `(columns, rows)` of the vertex lattice
    pub fn dims(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer as raw bytes, for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocean_mesh_creation() {
        let mesh = OceanMesh::new(128, 64).unwrap();

        assert_eq!(mesh.vertices.len(), 128 * 64);
        assert_eq!(mesh.indices.len(), 127 * 63 * 6);
        assert_eq!(mesh.triangle_count(), 127 * 63 * 2);
        assert_eq!(mesh.vertex_bytes().len(), 128 * 64 * 20);
    }

    #[test]
    fn test_lattice_spans_unit_square() {
        let mesh = OceanMesh::new(3, 2).unwrap();

        assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[2].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[4].position, [0.5, 1.0, 0.0]);
        assert_eq!(mesh.vertices[5].uv, [1.0, 1.0]);
    }

    #[test]
    fn test_triangles_wind_counter_clockwise() {
        let mesh = OceanMesh::new(4, 4).unwrap();

        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize].position);
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0);
        }
        assert!(mesh.indices.iter().all(|i| (*i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_degenerate_mesh_is_rejected() {
        assert!(OceanMesh::new(1, 8).is_err());
    }
}
