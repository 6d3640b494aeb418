//! Helpers for building synthetic glTF/GLB documents on disk.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;

/// Write a file under the test directory and hand back its path.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("fixture directory");
    }
    fs::write(&path, contents).expect("fixture file");
    path
}

/// Base64 data URI with the given media type.
pub fn data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{media_type};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Little-endian buffer holding a unit triangle: three vec3 positions at
/// offset 0, three u16 indices at offset 36, two bytes of padding.
pub fn triangle_buffer() -> Vec<u8> {
    let mut bytes = Vec::new();
    for vertex in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        for component in vertex {
            bytes.extend_from_slice(&component.to_le_bytes());
        }
    }
    for index in [0u16, 1, 2] {
        bytes.extend_from_slice(&index.to_le_bytes());
    }
    bytes.extend_from_slice(&[0, 0]);
    bytes
}

/// The `buffers`/`bufferViews`/`accessors` sections describing the
/// triangle buffer, for splicing into a document.
pub fn triangle_geometry(buffer_uri: &str, byte_length: usize) -> String {
    format!(
        r#""buffers": [{{"uri": "{buffer_uri}", "byteLength": {byte_length}}}],
  "bufferViews": [
    {{"buffer": 0, "byteOffset": 0, "byteLength": 36}},
    {{"buffer": 0, "byteOffset": 36, "byteLength": 6}}
  ],
  "accessors": [
    {{"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3", "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]}},
    {{"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"}}
  ]"#
    )
}

/// Complete minimal document: one triangle mesh, one unnamed material,
/// one root node, geometry embedded as a data URI.
pub fn triangle_document() -> String {
    let buffer = triangle_buffer();
    let geometry = triangle_geometry(&data_uri("application/octet-stream", &buffer), buffer.len());
    format!(
        r#"{{
  "asset": {{"version": "2.0"}},
  "scene": 0,
  "scenes": [{{"nodes": [0]}}],
  "nodes": [{{"mesh": 0}}],
  "meshes": [{{"primitives": [{{"attributes": {{"POSITION": 0}}, "indices": 1, "material": 0}}]}}],
  "materials": [{{}}],
  {geometry}
}}"#
    )
}

/// Assemble a binary glTF container from JSON text and a BIN chunk.
pub fn glb_bytes(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_chunk = json.as_bytes().to_vec();
    while json_chunk.len() % 4 != 0 {
        json_chunk.push(b' ');
    }
    let mut bin_chunk = bin.to_vec();
    while bin_chunk.len() % 4 != 0 {
        bin_chunk.push(0);
    }
    let total = 12 + 8 + json_chunk.len() + 8 + bin_chunk.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(&0x46546c67u32.to_le_bytes());
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json_chunk.len() as u32).to_le_bytes());
    glb.extend_from_slice(&0x4e4f534au32.to_le_bytes());
    glb.extend_from_slice(&json_chunk);
    glb.extend_from_slice(&(bin_chunk.len() as u32).to_le_bytes());
    glb.extend_from_slice(&0x004e4942u32.to_le_bytes());
    glb.extend_from_slice(&bin_chunk);
    glb
}

/// Encode a solid-color PNG of the given size.
pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .expect("png encoding");
    bytes.into_inner()
}

/// Encode a solid-color lossless WebP of the given size.
pub fn webp_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::WebP)
        .expect("webp encoding");
    bytes.into_inner()
}

/// Quiet env_logger setup shared by the integration tests.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
