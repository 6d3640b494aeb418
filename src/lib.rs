//! flow-assets
//!
//! The CPU-side asset layer of a real-time renderer. This crate parses
//! glTF/GLB files into named, cross-referenced records (images, samplers,
//! materials, meshes and node hierarchies) held in an application-owned
//! store. A GPU upload layer consumes the records by name; nothing in
//! here touches a graphics device, so imports run anywhere and tests run
//! headless.
//!
//! High-level modules
//! - `data_structures`: the records importers produce (models, meshes, materials)
//! - `error`: the import failure taxonomy
//! - `naming`: deterministic resource name synthesis
//! - `procedural`: generated sphere and cuboid models
//! - `resources`: the glTF importers and the per-file assembler
//! - `store`: the name-keyed registries behind one owned handle
//!

pub mod data_structures;
pub mod error;
pub mod naming;
pub mod procedural;
pub mod resources;
pub mod store;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
