//! Sampler descriptors for imported textures.
//!
//! Samplers describe how the GPU layer filters and wraps a texture. They
//! carry no pixel data, so they are cheap, numerous, and highly repetitive
//! across unrelated materials. The registry therefore keys them by a name
//! derived from their settings rather than by source ordinal.

/// Magnification filter applied when a texel covers several pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MagFilter {
    Nearest,
    Linear,
}

/// Minification filter, including the mipmap selection variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

/// Texture coordinate wrapping outside the [0, 1] range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapMode {
    ClampToEdge,
    MirroredRepeat,
    Repeat,
}

/// Filter and wrap configuration for one texture binding.
///
/// The filters stay optional like in the source format; consumers that
/// need a concrete value treat an absent filter as `Linear`, which is also
/// how the registry name is derived.
#[derive(Clone, Debug)]
pub struct Sampler {
    pub name: String,
    pub mag_filter: Option<MagFilter>,
    pub min_filter: Option<MinFilter>,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
}

impl Sampler {
    /// Registry name of the built-in linear clamp-to-edge sampler.
    pub const DEFAULT_NAME: &'static str = "S_L_L_C2E_C2E";
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            mag_filter: Some(MagFilter::Linear),
            min_filter: Some(MinFilter::Linear),
            wrap_s: WrapMode::ClampToEdge,
            wrap_t: WrapMode::ClampToEdge,
        }
    }
}
