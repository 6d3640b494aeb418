use std::{ffi::OsStr, panic, path::Path, thread};

use crate::{
    data_structures::image::{Image, ImageKind},
    error::ImportError,
    naming::{resource_name, ResourceKind},
    resources::decode_data_uri,
};

/// Import every image of the document, one thread per image.
///
/// Decoding dominates import time, so the per-image work fans out onto
/// scoped threads. Each task owns exactly one result slot and the slots
/// are joined in spawn order, which keeps the output aligned with the
/// document's image ordinals.
pub(crate) fn import_images(
    document: &gltf::Document,
    buffers: &[Vec<u8>],
    dir: &Path,
    model_name: &str,
) -> Vec<Result<Image, ImportError>> {
    thread::scope(|scope| {
        let tasks: Vec<_> = document
            .images()
            .map(|entry| scope.spawn(move || import_image(entry, buffers, dir, model_name)))
            .collect();
        tasks
            .into_iter()
            .map(|task| task.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}

/// Resolve one image's bytes and decode them if they are a compressed
/// picture format. Pre-compressed GPU formats (KTX2, DDS) pass through
/// untouched for the upload layer to transcode.
fn import_image(
    entry: gltf::Image,
    buffers: &[Vec<u8>],
    dir: &Path,
    model_name: &str,
) -> Result<Image, ImportError> {
    let name = resource_name(model_name, entry.name(), ResourceKind::Image, entry.index());
    let (bytes, kind) = match entry.source() {
        gltf::image::Source::View { view, mime_type } => {
            let parent = buffers
                .get(view.buffer().index())
                .ok_or_else(|| ImportError::MissingImageSource { name: name.clone() })?;
            let end = view.offset() + view.length();
            let slice = parent
                .get(view.offset()..end)
                .ok_or_else(|| ImportError::MissingImageSource { name: name.clone() })?;
            (slice.to_vec(), classify(Some(mime_type), None))
        }
        gltf::image::Source::Uri { uri, mime_type } if uri.starts_with("data:") => {
            let (media_type, bytes) = decode_data_uri(uri)?;
            let kind = classify(mime_type.or(Some(media_type)), None);
            (bytes, kind)
        }
        gltf::image::Source::Uri { uri, mime_type } => {
            let path = dir.join(uri);
            let bytes = std::fs::read(&path).map_err(|source| ImportError::Io { path, source })?;
            (bytes, classify(mime_type, Some(uri)))
        }
    };
    match kind {
        ImageKind::Uncompressed => {
            let decoded = image::load_from_memory(&bytes)
                .map_err(|source| ImportError::ImageDecode { name: name.clone(), source })?;
            Ok(Image::from_decoded(name, decoded.to_rgba8()))
        }
        compressed => Ok(Image::compressed(name, compressed, bytes)),
    }
}

/// Decide whether the payload is a pre-compressed GPU format. The media
/// type wins when declared; otherwise the URI extension is the only hint.
fn classify(mime_type: Option<&str>, uri: Option<&str>) -> ImageKind {
    match mime_type {
        Some("image/ktx2") => ImageKind::CompressedKtx2,
        Some("image/vnd-ms.dds") => ImageKind::CompressedDds,
        Some(_) => ImageKind::Uncompressed,
        None => match uri.and_then(|uri| Path::new(uri).extension().and_then(OsStr::to_str)) {
            Some(extension) if extension.eq_ignore_ascii_case("ktx2") => ImageKind::CompressedKtx2,
            Some(extension) if extension.eq_ignore_ascii_case("dds") => ImageKind::CompressedDds,
            _ => ImageKind::Uncompressed,
        },
    }
}
