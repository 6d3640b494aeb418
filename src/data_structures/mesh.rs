//! CPU-side mesh records and their packed upload view.
//!
//! One record per source primitive, with parallel attribute arrays that
//! are always the same length. Attributes the source left out are filled
//! with fixed sentinels at import time, so every mesh is renderable
//! without per-draw presence checks.

use cgmath::{Vector2, Vector3, Vector4};

/// An indexed triangle list with complete attribute arrays.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub name: String,
    pub positions: Vec<Vector3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub uvs: Vec<Vector2<f32>>,
    /// w carries the bitangent handedness sign.
    pub tangents: Vec<Vector4<f32>>,
    pub indices: Vec<u32>,
    /// Registry name of the material this mesh draws with.
    pub material: String,
}

impl Mesh {
    /// Placeholder normal for sources without NORMAL data. Unit length,
    /// mostly up and leaning toward +Z; real shading data comes from the
    /// normal map, this only keeps the vertex layout complete.
    pub const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.8, 0.6];
    /// Placeholder tangent with positive handedness.
    pub const DEFAULT_TANGENT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Check the record invariants: equally long attribute arrays, a whole
    /// number of triangles, and indices inside the vertex range.
    pub fn is_valid(&self) -> bool {
        let count = self.positions.len();
        self.normals.len() == count
            && self.uvs.len() == count
            && self.tangents.len() == count
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < count)
    }

    /// Interleave the attribute arrays into the layout the GPU layer
    /// uploads directly.
    pub fn pack_vertices(&self) -> Vec<PackedVertex> {
        (0..self.positions.len())
            .map(|i| PackedVertex {
                position: self.positions[i].into(),
                tex_coords: self.uvs[i].into(),
                normal: self.normals[i].into(),
                tangent: self.tangents[i].into(),
            })
            .collect()
    }
}

/// Interleaved vertex data as stored in GPU vertex buffers.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
    pub tangent: [f32; 4],
}
