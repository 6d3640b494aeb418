//! Engine data structures: asset records and scene representation.
//!
//! This module contains the CPU-side data types the importers produce:
//!
//! - `model` is the per-file record tying sub-resource names together
//! - `image` holds decoded or pass-through pixel data
//! - `sampler` describes texture filtering and wrapping
//! - `material` binds texture channels and PBR factors
//! - `mesh` is an indexed triangle list with complete attributes
//! - `node` forms the hierarchy tree of a model
//! - `instance` holds decomposed local transformation data

pub mod image;
pub mod instance;
pub mod material;
pub mod mesh;
pub mod model;
pub mod node;
pub mod sampler;
