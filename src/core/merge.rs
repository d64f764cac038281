//! Non-destructive deep merge.

use super::tree::{Branch, FlattenedLanguageMap, LeafMap, Node};

/// Merge `source` over `target` into a new branch.
///
/// Keys present on both sides merge recursively when both values are branches;
/// otherwise the source value replaces the target value wholesale. Target keys
/// keep their position, source-only keys follow in source order.
pub fn deep_merge(target: &Branch, source: &Branch) -> Branch {
    let mut merged = Branch::with_capacity(target.len() + source.len());

    for (key, target_node) in target {
        let node = match (target_node, source.get(key)) {
            (Node::Branch(target_children), Some(Node::Branch(source_children))) => {
                Node::Branch(deep_merge(target_children, source_children))
            }
            (_, Some(source_node)) => source_node.clone(),
            (target_node, None) => target_node.clone(),
        };
        merged.insert(key.clone(), node);
    }

    for (key, source_node) in source {
        if !target.contains_key(key) {
            merged.insert(key.clone(), source_node.clone());
        }
    }

    merged
}

/// Overlay translated leaves onto an existing flattened map.
///
/// Dotted keys present in `source` override the matching keys of `target`;
/// everything else in `target` is kept as it was.
pub fn merge_flat(target: &FlattenedLanguageMap, source: &FlattenedLanguageMap) -> FlattenedLanguageMap {
    deep_merge(&flat_to_branch(target), &flat_to_branch(source))
        .into_iter()
        .map(|(language, node)| (language, branch_to_leaves(node)))
        .collect()
}

fn flat_to_branch(map: &FlattenedLanguageMap) -> Branch {
    map.iter()
        .map(|(language, leaves)| {
            let children = leaves
                .iter()
                .map(|(key, value)| (key.clone(), Node::from_value(value.clone())))
                .collect();
            (language.clone(), Node::Branch(children))
        })
        .collect()
}

fn branch_to_leaves(node: Node) -> LeafMap {
    match node {
        Node::Branch(children) => children
            .into_iter()
            .map(|(key, child)| (key, child.into_value()))
            .collect(),
        Node::Leaf(_) => LeafMap::new(),
    }
}
