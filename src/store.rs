use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use crate::{
    data_structures::{image::Image, material::Material, mesh::Mesh, model::Model, sampler::Sampler},
    error::ImportError,
    resources,
};

/// Name-keyed registries for every resource kind.
///
/// One store per application context. The importers take the store as an
/// explicit `&mut` argument, which makes the sequential merge phase the
/// only place the maps change and lets independent stores (one per test,
/// one per editor tab) coexist without sharing anything.
pub struct AssetStore {
    pub(crate) images: HashMap<String, Image>,
    pub(crate) samplers: HashMap<String, Sampler>,
    pub(crate) materials: HashMap<String, Material>,
    pub(crate) meshes: HashMap<String, Mesh>,
    pub(crate) models: HashMap<String, Model>,
}

impl AssetStore {
    /// Create a store pre-populated with the built-in defaults every
    /// import may fall back to: one 1x1 texture per channel role, the
    /// linear clamping sampler and the default material.
    pub fn new() -> Self {
        let mut store = Self {
            images: HashMap::new(),
            samplers: HashMap::new(),
            materials: HashMap::new(),
            meshes: HashMap::new(),
            models: HashMap::new(),
        };
        for (name, texel) in [
            (Image::DEFAULT_BASE_COLOR, [255, 255, 255, 255]),
            (Image::DEFAULT_NORMAL, Image::NORMAL_MAP_TEXEL),
            (Image::DEFAULT_ARM, [255, 255, 255, 255]),
            (Image::DEFAULT_EMISSIVE, [0, 0, 0, 255]),
        ] {
            store.images.insert(name.to_string(), Image::solid(name, 1, 1, texel));
        }
        store
            .samplers
            .insert(Sampler::DEFAULT_NAME.to_string(), Sampler::default());
        store
            .materials
            .insert(Material::DEFAULT_NAME.to_string(), Material::default());
        store
    }

    /// Parse a glTF/GLB file and register everything it contains under
    /// the given model name.
    ///
    /// The call blocks until every sub-resource is imported and merged.
    /// File and parse errors leave the store untouched; re-importing an
    /// existing model name replaces the previous record.
    pub fn import_model(&mut self, name: &str, path: impl AsRef<Path>) -> Result<&Model, ImportError> {
        let path = path.as_ref();
        let model = resources::import_model(self, name, path)?;
        log::info!(
            "imported {} from {}: {} meshes, {} materials, {} images",
            name,
            path.display(),
            model.meshes.len(),
            model.materials.len(),
            model.images.len()
        );
        Ok(self.insert_model(model))
    }

    /// Remove a model record. Its sub-resources stay registered: other
    /// models may share them and names are never recycled within a run.
    pub fn remove_model(&mut self, name: &str) -> Option<Model> {
        self.models.remove(name)
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn model_mut(&mut self, name: &str) -> Option<&mut Model> {
        self.models.get_mut(name)
    }

    pub fn image(&self, name: &str) -> Option<&Image> {
        self.images.get(name)
    }

    /// Mutable image access, for the upload layer to patch in extents
    /// once a pass-through compressed payload gets transcoded.
    pub fn image_mut(&mut self, name: &str) -> Option<&mut Image> {
        self.images.get_mut(name)
    }

    pub fn sampler(&self, name: &str) -> Option<&Sampler> {
        self.samplers.get(name)
    }

    pub fn sampler_mut(&mut self, name: &str) -> Option<&mut Sampler> {
        self.samplers.get_mut(name)
    }

    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    pub fn material_mut(&mut self, name: &str) -> Option<&mut Material> {
        self.materials.get_mut(name)
    }

    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.get(name)
    }

    pub fn mesh_mut(&mut self, name: &str) -> Option<&mut Mesh> {
        self.meshes.get_mut(name)
    }

    /// Iterate all registered models, e.g. for an editor listing.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.images.values()
    }

    pub fn samplers(&self) -> impl Iterator<Item = &Sampler> {
        self.samplers.values()
    }

    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.values()
    }

    pub(crate) fn insert_model(&mut self, model: Model) -> &Model {
        match self.models.entry(model.name.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(model);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(model),
        }
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}
