//! Hierarchy nodes of an imported scene.

use crate::data_structures::instance::Instance;

/// One node of a model's hierarchy.
///
/// A node exclusively owns its children; the hierarchy is a tree, never a
/// graph, and traversal is always top-down so no parent link is stored.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    /// Transform local to the parent node.
    pub transform: Instance,
    /// Registry name of the mesh drawn at this node, if any. Pure
    /// grouping/transform nodes carry none.
    pub mesh: Option<String>,
    pub children: Vec<Node>,
}
