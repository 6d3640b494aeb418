use cgmath::{Vector2, Vector3, Vector4};

use crate::{
    data_structures::{material::Material, mesh::Mesh},
    error::ImportError,
    naming::{resource_name, ResourceKind},
};

/// Output of the mesh stage.
pub(crate) struct MeshImport {
    /// Surviving mesh records in flattened primitive order.
    pub records: Vec<Mesh>,
    /// First surviving primitive name per source mesh, for node resolution.
    pub lookup: Vec<Option<String>>,
}

/// Flatten `meshes[*].primitives[*]` into one record per primitive.
///
/// The name ordinal runs across all primitives of the model and advances
/// even when a primitive is rejected, so the surviving names stay the
/// same however many of their siblings get skipped.
pub(crate) fn import_meshes(
    document: &gltf::Document,
    buffers: &[Vec<u8>],
    materials: &[String],
    model_name: &str,
) -> MeshImport {
    let mut records = Vec::new();
    let mut lookup = Vec::new();
    let mut ordinal = 0;
    for source_mesh in document.meshes() {
        let mut first_surviving = None;
        for primitive in source_mesh.primitives() {
            let name = resource_name(model_name, None, ResourceKind::Mesh, ordinal);
            ordinal += 1;
            match import_primitive(&primitive, buffers, materials, &name) {
                Ok(record) => {
                    if first_surviving.is_none() {
                        first_surviving = Some(record.name.clone());
                    }
                    records.push(record);
                }
                Err(err) => {
                    log::warn!(
                        "skipping primitive {} of mesh {} in {}: {}",
                        primitive.index(),
                        source_mesh.index(),
                        model_name,
                        err
                    );
                }
            }
        }
        lookup.push(first_surviving);
    }
    MeshImport { records, lookup }
}

fn import_primitive(
    primitive: &gltf::Primitive,
    buffers: &[Vec<u8>],
    materials: &[String],
    name: &str,
) -> Result<Mesh, ImportError> {
    if primitive.mode() != gltf::mesh::Mode::Triangles {
        return Err(ImportError::UnsupportedMode {
            name: name.to_string(),
            mode: primitive.mode(),
        });
    }
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<Vector3<f32>> = reader
        .read_positions()
        .ok_or_else(|| ImportError::MissingAttribute {
            name: name.to_string(),
            attribute: "POSITION",
        })?
        .map(Vector3::from)
        .collect();
    let indices: Vec<u32> = reader
        .read_indices()
        .ok_or_else(|| ImportError::MissingAttribute {
            name: name.to_string(),
            attribute: "indices",
        })?
        .into_u32()
        .collect();
    if indices.len() % 3 != 0 {
        return Err(ImportError::UnevenIndexCount {
            name: name.to_string(),
            count: indices.len(),
        });
    }
    if let Some(&index) = indices.iter().find(|&&index| index as usize >= positions.len()) {
        return Err(ImportError::IndexOutOfBounds {
            name: name.to_string(),
            index,
            vertex_count: positions.len(),
        });
    }

    // Pad or cut the optional attributes to the position count so the
    // parallel arrays always line up.
    let mut normals: Vec<Vector3<f32>> = reader
        .read_normals()
        .map(|normals| normals.map(Vector3::from).collect())
        .unwrap_or_default();
    normals.resize(positions.len(), Mesh::DEFAULT_NORMAL.into());

    let mut uvs: Vec<Vector2<f32>> = reader
        .read_tex_coords(0)
        .map(|coords| coords.into_f32().map(Vector2::from).collect())
        .unwrap_or_default();
    uvs.resize(positions.len(), Vector2::new(0.0, 0.0));

    let mut tangents: Vec<Vector4<f32>> = reader
        .read_tangents()
        .map(|tangents| tangents.map(Vector4::from).collect())
        .unwrap_or_default();
    tangents.resize(positions.len(), Mesh::DEFAULT_TANGENT.into());

    let material = primitive
        .material()
        .index()
        .and_then(|index| materials.get(index))
        .cloned()
        .unwrap_or_else(|| Material::DEFAULT_NAME.to_string());

    Ok(Mesh {
        name: name.to_string(),
        positions,
        normals,
        uvs,
        tangents,
        indices,
        material,
    })
}
