//! PBR material records.
//!
//! A material binds up to four texture channels plus the scalar factors of
//! the metallic-roughness model. Channels always resolve to a registry
//! name: when the source material leaves one out, the importer substitutes
//! the built-in default texture for that channel's role, so the renderer
//! never has to branch on absent bindings.

use crate::data_structures::{image::Image, sampler::Sampler};

/// How the pixels of a channel are interpreted by shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelUsage {
    /// sRGB color data (base color, emissive).
    Color,
    /// Tangent-space normal directions.
    Normal,
    /// Linear non-color values (occlusion/roughness/metalness).
    Scalar,
}

/// One texture binding of a material.
#[derive(Clone, Debug)]
pub struct MaterialChannel {
    pub texture: String,
    pub sampler: String,
    pub usage: ChannelUsage,
}

impl MaterialChannel {
    /// A channel bound to the default texture for the given role.
    pub fn fallback(usage: ChannelUsage, texture: &str) -> Self {
        Self {
            texture: texture.to_string(),
            sampler: Sampler::DEFAULT_NAME.to_string(),
            usage,
        }
    }
}

/// An imported material with fully resolved channel bindings.
#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    pub base_color: MaterialChannel,
    pub normal: MaterialChannel,
    /// Occlusion/roughness/metalness, either one packed map or whichever
    /// of the two source textures was present.
    pub arm: MaterialChannel,
    pub emissive: MaterialChannel,
    pub base_color_factor: [f32; 4],
    pub metallic_factor: f32,
    pub roughness_factor: f32,
    pub normal_scale: f32,
    pub emissive_strength: f32,
    pub ior: f32,
    pub unlit: bool,
    pub double_sided: bool,
}

impl Material {
    /// Registry name of the built-in untextured material.
    pub const DEFAULT_NAME: &'static str = "M_Default";
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            base_color: MaterialChannel::fallback(ChannelUsage::Color, Image::DEFAULT_BASE_COLOR),
            normal: MaterialChannel::fallback(ChannelUsage::Normal, Image::DEFAULT_NORMAL),
            arm: MaterialChannel::fallback(ChannelUsage::Scalar, Image::DEFAULT_ARM),
            emissive: MaterialChannel::fallback(ChannelUsage::Color, Image::DEFAULT_EMISSIVE),
            base_color_factor: [1.0, 1.0, 1.0, 1.0],
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            normal_scale: 1.0,
            emissive_strength: 1.0,
            ior: 1.5,
            unlit: false,
            double_sided: false,
        }
    }
}
