use std::{panic, thread};

use crate::{
    data_structures::{
        image::Image,
        material::{ChannelUsage, Material, MaterialChannel},
        sampler::Sampler,
    },
    naming::{resource_name, ResourceKind},
};

/// Resolve the image name backing each texture of the document.
///
/// When a texture carries several encodings the pre-compressed one wins:
/// a DDS source first, then Basis Universal, then the core glTF source.
/// The result is indexed by texture ordinal and consulted by every
/// material channel below.
pub(crate) fn resolve_texture_images(document: &gltf::Document, images: &[String]) -> Vec<String> {
    document
        .textures()
        .map(|texture| {
            let index = extension_source(&texture, "MSFT_texture_dds")
                .or_else(|| extension_source(&texture, "KHR_texture_basisu"))
                .unwrap_or_else(|| texture.source().index());
            images
                .get(index)
                .cloned()
                .unwrap_or_else(|| Image::DEFAULT_BASE_COLOR.to_string())
        })
        .collect()
}

fn extension_source(texture: &gltf::Texture, extension: &str) -> Option<usize> {
    texture
        .extension_value(extension)?
        .get("source")?
        .as_u64()
        .map(|index| index as usize)
}

/// Import every material of the document, one thread per material.
///
/// Channel resolution only reads the shared texture and sampler tables,
/// so the tasks never contend; results join in spawn order to keep the
/// output aligned with the document's material ordinals.
pub(crate) fn import_materials(
    document: &gltf::Document,
    textures: &[String],
    samplers: &[String],
    model_name: &str,
) -> Vec<Material> {
    thread::scope(|scope| {
        let tasks: Vec<_> = document
            .materials()
            .enumerate()
            .map(|(index, entry)| {
                scope.spawn(move || import_material(entry, textures, samplers, model_name, index))
            })
            .collect();
        tasks
            .into_iter()
            .map(|task| task.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}

fn import_material(
    entry: gltf::Material,
    textures: &[String],
    samplers: &[String],
    model_name: &str,
    index: usize,
) -> Material {
    let pbr = entry.pbr_metallic_roughness();

    let base_color = pbr
        .base_color_texture()
        .map(|info| bind_channel(&info.texture(), textures, samplers, ChannelUsage::Color))
        .unwrap_or_else(|| MaterialChannel::fallback(ChannelUsage::Color, Image::DEFAULT_BASE_COLOR));

    let normal = entry
        .normal_texture()
        .map(|info| bind_channel(&info.texture(), textures, samplers, ChannelUsage::Normal))
        .unwrap_or_else(|| MaterialChannel::fallback(ChannelUsage::Normal, Image::DEFAULT_NORMAL));

    // The scalar slot prefers the metallic-roughness map. Separate
    // occlusion maps only matter when no metallic-roughness map exists;
    // authoring pipelines that pack all three put the same texture in
    // both slots anyway.
    let metallic_roughness = pbr.metallic_roughness_texture();
    let occlusion = entry.occlusion_texture();
    if let (Some(packed), Some(separate)) = (&metallic_roughness, &occlusion) {
        if packed.texture().index() == separate.texture().index() {
            log::debug!(
                "material {index} of {model_name} packs occlusion into its metallic-roughness map"
            );
        }
    }
    let arm = metallic_roughness
        .map(|info| bind_channel(&info.texture(), textures, samplers, ChannelUsage::Scalar))
        .or_else(|| {
            occlusion.map(|info| bind_channel(&info.texture(), textures, samplers, ChannelUsage::Scalar))
        })
        .unwrap_or_else(|| MaterialChannel::fallback(ChannelUsage::Scalar, Image::DEFAULT_ARM));

    let emissive = entry
        .emissive_texture()
        .map(|info| bind_channel(&info.texture(), textures, samplers, ChannelUsage::Color))
        .unwrap_or_else(|| MaterialChannel::fallback(ChannelUsage::Color, Image::DEFAULT_EMISSIVE));

    Material {
        name: resource_name(model_name, entry.name(), ResourceKind::Material, index),
        base_color,
        normal,
        arm,
        emissive,
        base_color_factor: pbr.base_color_factor(),
        metallic_factor: pbr.metallic_factor(),
        roughness_factor: pbr.roughness_factor(),
        normal_scale: entry.normal_texture().map(|info| info.scale()).unwrap_or(1.0),
        emissive_strength: entry.emissive_strength().unwrap_or(1.0),
        ior: entry.ior().unwrap_or(1.5),
        unlit: entry.unlit(),
        double_sided: entry.double_sided(),
    }
}

/// Join a texture reference with the already-imported image and sampler
/// names. Unresolvable references degrade to the defaults so the material
/// always stays drawable.
fn bind_channel(
    texture: &gltf::Texture,
    textures: &[String],
    samplers: &[String],
    usage: ChannelUsage,
) -> MaterialChannel {
    let image = textures
        .get(texture.index())
        .cloned()
        .unwrap_or_else(|| Image::DEFAULT_BASE_COLOR.to_string());
    let sampler = texture
        .sampler()
        .index()
        .and_then(|index| samplers.get(index))
        .cloned()
        .unwrap_or_else(|| Sampler::DEFAULT_NAME.to_string());
    MaterialChannel {
        texture: image,
        sampler,
        usage,
    }
}
