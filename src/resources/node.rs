use crate::{
    data_structures::{instance::Instance, node::Node},
    naming::{resource_name, ResourceKind},
};

/// Rebuild the node tree of the document's default scene.
///
/// Documents without a declared default fall back to their first scene;
/// documents without any scene produce an empty hierarchy. One ordinal
/// counter spans the whole walk so sibling branches never collide on the
/// fallback names.
pub(crate) fn import_nodes(
    document: &gltf::Document,
    mesh_lookup: &[Option<String>],
    model_name: &str,
) -> Vec<Node> {
    let Some(scene) = document.default_scene().or_else(|| document.scenes().next()) else {
        return Vec::new();
    };
    let mut counter = 0;
    scene
        .nodes()
        .map(|node| import_node(node, mesh_lookup, model_name, &mut counter))
        .collect()
}

fn import_node(
    source: gltf::Node,
    mesh_lookup: &[Option<String>],
    model_name: &str,
    counter: &mut usize,
) -> Node {
    let name = resource_name(model_name, source.name(), ResourceKind::Node, *counter);
    *counter += 1;
    // Matrix transforms are pre-decomposed by the parser.
    let (position, rotation, scale) = source.transform().decomposed();
    let transform = Instance {
        position: position.into(),
        rotation: rotation.into(),
        scale: scale.into(),
    };
    // A node whose mesh got fully skipped degrades to a grouping node.
    let mesh = source
        .mesh()
        .and_then(|mesh| mesh_lookup.get(mesh.index()).cloned().flatten());
    let children = source
        .children()
        .map(|child| import_node(child, mesh_lookup, model_name, counter))
        .collect();
    Node {
        name,
        transform,
        mesh,
        children,
    }
}
