use crate::{
    data_structures::sampler::{MagFilter, MinFilter, Sampler, WrapMode},
    naming::sampler_name,
};

/// Map every sampler declared by the document into a record.
///
/// Names derive from the filter and wrap settings alone, so two samplers
/// with the same settings collapse into one registry entry no matter how
/// many documents declare them.
pub(crate) fn import_samplers(document: &gltf::Document) -> Vec<Sampler> {
    document.samplers().map(import_sampler).collect()
}

fn import_sampler(sampler: gltf::texture::Sampler) -> Sampler {
    let mag_filter = sampler.mag_filter().map(|filter| match filter {
        gltf::texture::MagFilter::Nearest => MagFilter::Nearest,
        gltf::texture::MagFilter::Linear => MagFilter::Linear,
    });
    let min_filter = sampler.min_filter().map(|filter| match filter {
        gltf::texture::MinFilter::Nearest => MinFilter::Nearest,
        gltf::texture::MinFilter::Linear => MinFilter::Linear,
        gltf::texture::MinFilter::NearestMipmapNearest => MinFilter::NearestMipmapNearest,
        gltf::texture::MinFilter::LinearMipmapNearest => MinFilter::LinearMipmapNearest,
        gltf::texture::MinFilter::NearestMipmapLinear => MinFilter::NearestMipmapLinear,
        gltf::texture::MinFilter::LinearMipmapLinear => MinFilter::LinearMipmapLinear,
    });
    let wrap_s = wrap_mode(sampler.wrap_s());
    let wrap_t = wrap_mode(sampler.wrap_t());
    Sampler {
        name: sampler_name(mag_filter, min_filter, wrap_s, wrap_t),
        mag_filter,
        min_filter,
        wrap_s,
        wrap_t,
    }
}

fn wrap_mode(mode: gltf::texture::WrappingMode) -> WrapMode {
    match mode {
        gltf::texture::WrappingMode::ClampToEdge => WrapMode::ClampToEdge,
        gltf::texture::WrappingMode::MirroredRepeat => WrapMode::MirroredRepeat,
        gltf::texture::WrappingMode::Repeat => WrapMode::Repeat,
    }
}
