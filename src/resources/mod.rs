use std::path::Path;

use base64::Engine as _;
use gltf::Gltf;

use crate::{
    data_structures::{image::Image, model::Model},
    error::ImportError,
    naming::{resource_name, ResourceKind},
    store::AssetStore,
};

/**
 * This module contains all logic for importing models and their
 * sub-resources from external glTF/GLB files.
 */
pub(crate) mod image;
pub(crate) mod material;
pub(crate) mod mesh;
pub(crate) mod node;
pub(crate) mod sampler;
pub mod tangent;

/// Parse one glTF/GLB file and stage every resource it contains.
///
/// Stages run in dependency order: images and samplers first, then the
/// texture table joining them, then materials, meshes and finally the
/// node hierarchy, so each stage can resolve everything the earlier ones
/// produced. Any error returned here leaves the model unregistered.
pub(crate) fn import_model(
    store: &mut AssetStore,
    name: &str,
    path: &Path,
) -> Result<Model, ImportError> {
    let mut gltf = Gltf::open(path).map_err(|err| match err {
        gltf::Error::Io(source) => ImportError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => ImportError::Gltf(other),
    })?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let blob = gltf.blob.take();
    let buffers = load_buffers(&gltf.document, blob, dir)?;

    let mut model = Model::new(name);

    // Images decode in parallel. A failed slot downgrades to the default
    // base color texture instead of failing the import, so every texture
    // ordinal still resolves to something drawable.
    let images = image::import_images(&gltf.document, &buffers, dir, name);
    for (index, result) in images.into_iter().enumerate() {
        match result {
            Ok(image) => {
                model.images.push(image.name.clone());
                store.images.insert(image.name.clone(), image);
            }
            Err(err) => {
                log::warn!("substituting default texture for image {index} of {name}: {err}");
                model.images.push(Image::DEFAULT_BASE_COLOR.to_string());
            }
        }
    }

    for sampler in sampler::import_samplers(&gltf.document) {
        model.samplers.push(sampler.name.clone());
        store.samplers.entry(sampler.name.clone()).or_insert(sampler);
    }

    model.textures = material::resolve_texture_images(&gltf.document, &model.images);

    let materials = material::import_materials(&gltf.document, &model.textures, &model.samplers, name);
    for material in materials {
        model.materials.push(material.name.clone());
        store.materials.insert(material.name.clone(), material);
    }

    let meshes = mesh::import_meshes(&gltf.document, &buffers, &model.materials, name);
    for mesh in meshes.records {
        model.meshes.push(mesh.name.clone());
        store.meshes.insert(mesh.name.clone(), mesh);
    }

    // Animations and skins are only named at this point. Their data stays
    // in the source file until the animation player asks for it.
    for (index, animation) in gltf.document.animations().enumerate() {
        model
            .animations
            .push(resource_name(name, animation.name(), ResourceKind::Animation, index));
    }
    for (index, skin) in gltf.document.skins().enumerate() {
        model
            .skins
            .push(resource_name(name, skin.name(), ResourceKind::Skin, index));
    }

    model.hierarchy = node::import_nodes(&gltf.document, &meshes.lookup, name);

    Ok(model)
}

/// Resolve every buffer of the document into owned bytes.
///
/// GLB binary chunks come from the blob the parser already read, `data:`
/// URIs are decoded inline and anything else is read from disk relative
/// to the document's directory.
fn load_buffers(
    document: &gltf::Document,
    blob: Option<Vec<u8>>,
    dir: &Path,
) -> Result<Vec<Vec<u8>>, ImportError> {
    let mut buffer_data = Vec::new();
    for buffer in document.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                let blob = blob.as_deref().ok_or(ImportError::MissingBlob)?;
                buffer_data.push(blob.to_vec());
            }
            gltf::buffer::Source::Uri(uri) if uri.starts_with("data:") => {
                buffer_data.push(decode_data_uri(uri)?.1);
            }
            gltf::buffer::Source::Uri(uri) => {
                let path = dir.join(uri);
                let bin = std::fs::read(&path).map_err(|source| ImportError::Io { path, source })?;
                buffer_data.push(bin);
            }
        }
    }
    Ok(buffer_data)
}

/// Split a `data:` URI into its declared media type and decoded payload.
/// Only base64 payloads are supported.
pub(crate) fn decode_data_uri(uri: &str) -> Result<(&str, Vec<u8>), ImportError> {
    let Some(rest) = uri.strip_prefix("data:") else {
        return Err(ImportError::UnsupportedUri(uri.to_string()));
    };
    let Some((media_type, payload)) = rest.split_once(";base64,") else {
        return Err(ImportError::UnsupportedUri(uri.to_string()));
    };
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    Ok((media_type, bytes))
}
