use cgmath::{InnerSpace, Vector2, Vector3, Vector4, Zero};

use crate::data_structures::mesh::Mesh;

/**
 * Generated meshes don't come with tangents so they have to be calculated
 * for normal maps to work correctly. Imported files keep their authored
 * tangents (or the placeholder) and never pass through here.
 */
pub fn compute_tangents(
    positions: &[Vector3<f32>],
    normals: &[Vector3<f32>],
    uvs: &[Vector2<f32>],
    indices: &[u32],
) -> Vec<Vector4<f32>> {
    let mut tangents = vec![Vector3::zero(); positions.len()];
    let mut bitangents = vec![Vector3::zero(); positions.len()];
    let mut triangles_included = vec![0u32; positions.len()];

    // We're going to use the triangles, so we need to loop through the
    // indices in chunks of 3
    for c in indices.chunks_exact(3) {
        let pos0 = positions[c[0] as usize];
        let pos1 = positions[c[1] as usize];
        let pos2 = positions[c[2] as usize];

        let uv0 = uvs[c[0] as usize];
        let uv1 = uvs[c[1] as usize];
        let uv2 = uvs[c[2] as usize];

        // Calculate the edges of the triangle
        let delta_pos1 = pos1 - pos0;
        let delta_pos2 = pos2 - pos0;

        // This will give us a direction to calculate the
        // tangent and bitangent
        let delta_uv1 = uv1 - uv0;
        let delta_uv2 = uv2 - uv0;

        // Solving the following system of equations will
        // give us the tangent and bitangent.
        //     delta_pos1 = delta_uv1.x * T + delta_uv1.y * B
        //     delta_pos2 = delta_uv2.x * T + delta_uv2.y * B
        let det = delta_uv1.x * delta_uv2.y - delta_uv1.y * delta_uv2.x;
        // Triangles with degenerate UVs contribute nothing
        if det.abs() <= f32::EPSILON {
            continue;
        }
        let r = 1.0 / det;
        let tangent = (delta_pos1 * delta_uv2.y - delta_pos2 * delta_uv1.y) * r;
        // We flip the bitangent to enable right-handed normal
        // maps with the renderer's texture coordinate system
        let bitangent = (delta_pos2 * delta_uv1.x - delta_pos1 * delta_uv2.x) * -r;

        // We'll use the same tangent/bitangent for each vertex in the triangle
        for &corner in c {
            tangents[corner as usize] += tangent;
            bitangents[corner as usize] += bitangent;
            triangles_included[corner as usize] += 1;
        }
    }

    // Average the accumulated vectors and fold the bitangent into the
    // handedness sign the shader reconstructs it from
    (0..positions.len())
        .map(|i| {
            if triangles_included[i] == 0 {
                return Mesh::DEFAULT_TANGENT.into();
            }
            let denom = 1.0 / triangles_included[i] as f32;
            let tangent = tangents[i] * denom;
            let bitangent = bitangents[i] * denom;
            let w = if normals[i].cross(tangent).dot(bitangent) < 0.0 {
                -1.0
            } else {
                1.0
            };
            tangent.extend(w)
        })
        .collect()
}
