//! Conversion between nested trees and dotted-path leaf maps.

use serde_json::{Map, Value};

use super::tree::{Branch, FlattenedLanguageMap, LeafMap, Node, TranslationTree};

/// Flatten every language into `dotted.path -> leaf`.
///
/// An empty nested branch is kept as a leaf holding an empty mapping so that
/// [`unflatten`] can restore it.
pub fn flatten(tree: &TranslationTree) -> FlattenedLanguageMap {
    tree.iter()
        .map(|(language, root)| {
            let mut leaves = LeafMap::new();
            flatten_branch(root, None, &mut leaves);
            (language.clone(), leaves)
        })
        .collect()
}

fn flatten_branch(branch: &Branch, prefix: Option<&str>, leaves: &mut LeafMap) {
    for (key, node) in branch {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match node {
            Node::Branch(children) if children.is_empty() => {
                leaves.insert(path, Value::Object(Map::new()));
            }
            Node::Branch(children) => flatten_branch(children, Some(&path), leaves),
            Node::Leaf(value) => {
                leaves.insert(path, value.clone());
            }
        }
    }
}

/// Rebuild nested trees from dotted-path leaf maps.
///
/// Keys are applied in map order. When a path has to descend through a segment
/// that an earlier key set to a leaf, that leaf is replaced by a branch. A later
/// key that lands exactly on an existing branch replaces the branch.
pub fn unflatten(map: &FlattenedLanguageMap) -> TranslationTree {
    map.iter()
        .map(|(language, leaves)| {
            let mut root = Branch::new();
            for (path, value) in leaves {
                insert_path(&mut root, path, value.clone());
            }
            (language.clone(), root)
        })
        .collect()
}

fn insert_path(root: &mut Branch, path: &str, value: Value) {
    let (parents, last) = match path.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, path),
    };

    let mut current = root;
    if let Some(parents) = parents {
        for segment in parents.split('.') {
            current = current
                .entry(segment.to_string())
                .or_insert_with(|| Node::Branch(Branch::new()))
                .branch_mut();
        }
    }

    current.insert(last.to_string(), Node::from_value(value));
}
