//! Procedural model constructors.
//!
//! Spheres and cuboids skip the parsing stages entirely but register
//! through the same naming and record structure as imported files, so
//! the renderer can treat them like any other model.

use std::f32::consts::{PI, TAU};

use cgmath::{ElementWise, Vector2, Vector3};

use crate::{
    data_structures::{instance::Instance, material::Material, mesh::Mesh, model::Model, node::Node},
    naming::{resource_name, ResourceKind},
    resources::tangent::compute_tangents,
    store::AssetStore,
};

/// Register a UV sphere model with the given resolution.
///
/// `segments` counts the horizontal divisions (clamped to at least 3),
/// `rings` the vertical ones (at least 2). The seam and the poles carry
/// duplicated vertices so the texture coordinates stay continuous.
pub fn create_sphere_model<'a>(
    store: &'a mut AssetStore,
    name: &str,
    radius: f32,
    segments: u32,
    rings: u32,
) -> &'a Model {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let phi = PI * v;
        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let theta = TAU * u;

            let normal = Vector3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            positions.push(normal * radius);
            normals.push(normal);
            uvs.push(Vector2::new(u, v));
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::new();
    for ring in 0..rings {
        for segment in 0..segments {
            let i0 = ring * stride + segment;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;

            if ring == 0 {
                // Top cap, one triangle per segment
                indices.extend_from_slice(&[i0, i3, i2]);
            } else if ring == rings - 1 {
                // Bottom cap
                indices.extend_from_slice(&[i0, i1, i2]);
            } else {
                indices.extend_from_slice(&[i0, i1, i3, i0, i3, i2]);
            }
        }
    }

    register_generated(store, name, positions, normals, uvs, indices)
}

/// Register an axis-aligned cuboid model.
///
/// `extents` are the full side lengths and `subdivisions` the number of
/// quads per face edge (at least 1). Every face owns its vertices so the
/// normals stay hard across edges.
pub fn create_cuboid_model<'a>(
    store: &'a mut AssetStore,
    name: &str,
    extents: Vector3<f32>,
    subdivisions: u32,
) -> &'a Model {
    let n = subdivisions.max(1);

    // Face basis: outward normal, u axis, v axis, with u cross v equal
    // to the normal so the shared index pattern below winds outward.
    let faces = [
        (Vector3::unit_z(), Vector3::unit_x(), Vector3::unit_y()),
        (-Vector3::unit_z(), -Vector3::unit_x(), Vector3::unit_y()),
        (Vector3::unit_x(), -Vector3::unit_z(), Vector3::unit_y()),
        (-Vector3::unit_x(), Vector3::unit_z(), Vector3::unit_y()),
        (Vector3::unit_y(), Vector3::unit_x(), -Vector3::unit_z()),
        (-Vector3::unit_y(), Vector3::unit_x(), Vector3::unit_z()),
    ];

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    for (normal, u_axis, v_axis) in faces {
        let base = positions.len() as u32;
        for row in 0..=n {
            let fv = row as f32 / n as f32;
            for column in 0..=n {
                let fu = column as f32 / n as f32;
                let corner = u_axis * (fu - 0.5) + v_axis * (fv - 0.5) + normal * 0.5;
                positions.push(corner.mul_element_wise(extents));
                normals.push(normal);
                uvs.push(Vector2::new(fu, fv));
            }
        }
        for row in 0..n {
            for column in 0..n {
                let i0 = base + row * (n + 1) + column;
                let i1 = i0 + 1;
                let i2 = i0 + (n + 1);
                let i3 = i2 + 1;
                indices.extend_from_slice(&[i0, i1, i3, i0, i3, i2]);
            }
        }
    }

    register_generated(store, name, positions, normals, uvs, indices)
}

/// Wrap generated geometry in the same record structure imports produce:
/// one mesh, one root node referencing it, the default material.
fn register_generated<'a>(
    store: &'a mut AssetStore,
    name: &str,
    positions: Vec<Vector3<f32>>,
    normals: Vec<Vector3<f32>>,
    uvs: Vec<Vector2<f32>>,
    indices: Vec<u32>,
) -> &'a Model {
    let tangents = compute_tangents(&positions, &normals, &uvs, &indices);
    let mesh_name = resource_name(name, None, ResourceKind::Mesh, 0);
    let mesh = Mesh {
        name: mesh_name.clone(),
        positions,
        normals,
        uvs,
        tangents,
        indices,
        material: Material::DEFAULT_NAME.to_string(),
    };

    let mut model = Model::new(name);
    model.materials.push(Material::DEFAULT_NAME.to_string());
    model.meshes.push(mesh_name.clone());
    model.hierarchy.push(Node {
        name: resource_name(name, None, ResourceKind::Node, 0),
        transform: Instance::new(),
        mesh: Some(mesh_name.clone()),
        children: Vec::new(),
    });

    log::info!(
        "registered generated model {} with {} vertices",
        name,
        mesh.positions.len()
    );
    store.meshes.insert(mesh_name, mesh);
    store.insert_model(model)
}
