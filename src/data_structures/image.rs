//! CPU-side image records.
//!
//! Imported pixel data stays on the CPU in these records until the GPU
//! layer uploads it. Uncompressed sources are normalized to RGBA8 at import
//! time; pre-compressed sources (KTX2, DDS) keep their encoded byte stream
//! verbatim because hardware can consume block-compressed data directly.

/// How the pixel payload of an [`Image`] is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// Decoded pixels, always 4 components of [`PixelType::U8`].
    Uncompressed,
    /// Verbatim KTX2 container bytes, decoded at upload time.
    CompressedKtx2,
    /// Verbatim DDS container bytes, decoded at upload time.
    CompressedDds,
}

/// Component type of decoded pixel data.
///
/// Import only ever produces `U8`; the wider variants exist for the upload
/// stage, which fills in real extents and component types after decoding a
/// compressed container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelType {
    U8,
    U16,
    F32,
}

/// One imported image with exclusively owned pixel storage.
///
/// For compressed kinds `width`/`height` stay zero until a later decode
/// fills them in, and `pixels` holds the encoded container bytes instead
/// of texels.
#[derive(Clone, Debug)]
pub struct Image {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub components: u8,
    pub pixel_type: PixelType,
    pub kind: ImageKind,
    pub pixels: Vec<u8>,
}

impl Image {
    /// Registry name of the built-in 1x1 white base color texture.
    pub const DEFAULT_BASE_COLOR: &'static str = "T_Default_B";
    /// Registry name of the built-in flat normal map.
    pub const DEFAULT_NORMAL: &'static str = "T_Default_N";
    /// Registry name of the built-in white occlusion/roughness/metalness map.
    pub const DEFAULT_ARM: &'static str = "T_Default_ARM";
    /// Registry name of the built-in black emissive map.
    pub const DEFAULT_EMISSIVE: &'static str = "T_Default_E";

    /// The blue/purple-ish colour that represents the default for normal maps.
    pub const NORMAL_MAP_TEXEL: [u8; 4] = [127, 127, 255, 255];

    /// Wrap an already decoded RGBA8 buffer.
    pub fn from_decoded(name: String, rgba: image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        Self {
            name,
            width,
            height,
            bit_depth: 8,
            components: 4,
            pixel_type: PixelType::U8,
            kind: ImageKind::Uncompressed,
            pixels: rgba.into_raw(),
        }
    }

    /// Record an encoded KTX2/DDS byte stream without decoding it.
    pub fn compressed(name: String, kind: ImageKind, bytes: Vec<u8>) -> Self {
        Self {
            name,
            width: 0,
            height: 0,
            bit_depth: 8,
            components: 0,
            pixel_type: PixelType::U8,
            kind,
            pixels: bytes,
        }
    }

    /// Create an image filled with a single texel, e.g. for default maps.
    pub fn solid(name: &str, width: u32, height: u32, texel: [u8; 4]) -> Self {
        let pixels: Vec<u8> = texel
            .iter()
            .cycle()
            .take(width as usize * height as usize * 4)
            .copied()
            .collect();
        Self {
            name: name.to_string(),
            width,
            height,
            bit_depth: 8,
            components: 4,
            pixel_type: PixelType::U8,
            kind: ImageKind::Uncompressed,
            pixels,
        }
    }
}
