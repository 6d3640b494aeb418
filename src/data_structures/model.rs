//! The model record produced by one import.
//!
//! A model does not own its sub-resources. It holds ordered name arrays,
//! one entry per source ordinal, that resolve into the registries of the
//! owning [`AssetStore`](crate::store::AssetStore). Keeping names instead
//! of data lets several models share deduplicated entries (samplers,
//! default textures) without reference counting.

use crate::data_structures::node::Node;

/// One imported source file, or a procedurally constructed equivalent.
#[derive(Clone, Debug)]
pub struct Model {
    pub name: String,
    /// Synthesized names, one per source animation. Playback is up to the
    /// runtime layer; no registry backs these yet.
    pub animations: Vec<String>,
    /// Synthesized names, one per source skin. Same status as animations.
    pub skins: Vec<String>,
    pub images: Vec<String>,
    pub samplers: Vec<String>,
    /// Resolved image name per source texture, preferring pre-compressed
    /// variants when the source carries several encodings.
    pub textures: Vec<String>,
    pub materials: Vec<String>,
    /// Names of the surviving mesh records, one per imported primitive.
    pub meshes: Vec<String>,
    /// Root nodes of the source scene.
    pub hierarchy: Vec<Node>,
}

impl Model {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            animations: Vec::new(),
            skins: Vec::new(),
            images: Vec::new(),
            samplers: Vec::new(),
            textures: Vec::new(),
            materials: Vec::new(),
            meshes: Vec::new(),
            hierarchy: Vec::new(),
        }
    }
}
