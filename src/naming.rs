//! Deterministic name synthesis for imported sub-resources.
//!
//! Every record that lands in the [`AssetStore`](crate::store::AssetStore)
//! is keyed by a name built here. The model name acts as a namespace prefix,
//! so two models can import files with clashing internal names without
//! colliding in the registries. Samplers are the exception: their name is
//! derived from their settings instead, so identical samplers collapse to a
//! single registry entry no matter which model brought them in.

use crate::data_structures::sampler::{MagFilter, MinFilter, WrapMode};

/// Resource category used for the fallback ordinal name.
///
/// The importers never reach for the `Sampler` and `Texture` tags (sampler
/// names encode their settings, texture slots resolve to image names), but
/// the tags stay available for callers registering such resources by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Animation,
    Skin,
    Image,
    Sampler,
    Texture,
    Material,
    Mesh,
    Node,
}

impl ResourceKind {
    fn tag(self) -> &'static str {
        match self {
            ResourceKind::Animation => "animation",
            ResourceKind::Skin => "skin",
            ResourceKind::Image => "image",
            ResourceKind::Sampler => "sampler",
            ResourceKind::Texture => "texture",
            ResourceKind::Material => "material",
            ResourceKind::Mesh => "mesh",
            ResourceKind::Node => "node",
        }
    }
}

/// Synthesize the registry name for one sub-resource of a model.
///
/// Uses the author-provided name when the source carries one, otherwise
/// falls back to the kind tag plus the resource's ordinal inside the file:
/// `"{base}-{text}"` or `"{base}-{tag}-{index}"`. Pure function, so the
/// same source index always yields the same name within one import.
pub fn resource_name(
    base: &str,
    source_text: Option<&str>,
    kind: ResourceKind,
    index: usize,
) -> String {
    match source_text {
        Some(text) if !text.is_empty() => format!("{}-{}", base, text),
        _ => format!("{}-{}-{}", base, kind.tag(), index),
    }
}

/// Encode sampler settings into a registry name, e.g. `"S_L_L_C2E_C2E"`.
///
/// Unspecified filters count as `Linear`, so a sampler that spells the
/// defaults out and one that omits them deduplicate to the same entry.
pub fn sampler_name(
    mag_filter: Option<MagFilter>,
    min_filter: Option<MinFilter>,
    wrap_s: WrapMode,
    wrap_t: WrapMode,
) -> String {
    let mag = match mag_filter.unwrap_or(MagFilter::Linear) {
        MagFilter::Nearest => "N",
        MagFilter::Linear => "L",
    };
    let min = match min_filter.unwrap_or(MinFilter::Linear) {
        MinFilter::Nearest => "N",
        MinFilter::Linear => "L",
        MinFilter::NearestMipmapNearest => "NMN",
        MinFilter::LinearMipmapNearest => "LMN",
        MinFilter::NearestMipmapLinear => "NML",
        MinFilter::LinearMipmapLinear => "LML",
    };
    format!(
        "S_{}_{}_{}_{}",
        mag,
        min,
        wrap_abbreviation(wrap_s),
        wrap_abbreviation(wrap_t)
    )
}

fn wrap_abbreviation(mode: WrapMode) -> &'static str {
    match mode {
        WrapMode::ClampToEdge => "C2E",
        WrapMode::MirroredRepeat => "MR",
        WrapMode::Repeat => "R",
    }
}
