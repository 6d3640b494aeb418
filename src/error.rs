//! Import failure taxonomy.
//!
//! File-level problems (unreadable path, malformed document) abort one
//! import call before any registry mutation. Per-resource problems
//! (a broken image, a primitive without required attributes) are produced
//! by the stage importers and downgraded to warnings by the assembler so
//! the rest of the model still loads.

use std::path::PathBuf;

use thiserror::Error;

/// An error raised while importing one model file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid glTF document: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("unsupported buffer URI: {0}")]
    UnsupportedUri(String),
    #[error("failed to decode base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("binary blob is missing")]
    MissingBlob,
    #[error("failed to decode image {name}: {source}")]
    ImageDecode {
        name: String,
        source: image::ImageError,
    },
    #[error("image {name} has no usable byte source")]
    MissingImageSource { name: String },
    #[error("primitive {name} is missing required {attribute} data")]
    MissingAttribute {
        name: String,
        attribute: &'static str,
    },
    #[error("primitive {name} has unsupported mode {mode:?}")]
    UnsupportedMode { name: String, mode: gltf::mesh::Mode },
    #[error("primitive {name} references vertex {index} but only has {vertex_count} vertices")]
    IndexOutOfBounds {
        name: String,
        index: u32,
        vertex_count: usize,
    },
    #[error("primitive {name} has {count} indices, which is not a whole number of triangles")]
    UnevenIndexCount { name: String, count: usize },
}
