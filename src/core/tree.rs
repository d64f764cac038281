//! Tree data model.
//!
//! A [`TranslationTree`] maps language codes to nested key/value trees. Values are
//! classified once, at ingestion, into [`Node::Branch`] (plain key/value mappings)
//! and [`Node::Leaf`] (strings, numbers, booleans, arrays and null).

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::error::TreeError;

/// Children of a branch, in document order.
pub type Branch = IndexMap<String, Node>;

/// Dotted-path key -> leaf value, for a single language.
pub type LeafMap = IndexMap<String, Value>;

/// Language code -> flattened leaves.
pub type FlattenedLanguageMap = IndexMap<String, LeafMap>;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Value),
    Branch(Branch),
}

impl Node {
    /// Classify a JSON value. Objects become branches, everything else is a leaf.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Branch(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from_value(child)))
                    .collect(),
            ),
            other => Node::Leaf(other),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Node::Leaf(value) => value.clone(),
            Node::Branch(children) => Value::Object(branch_to_map(children)),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Node::Leaf(value) => value,
            Node::Branch(children) => Value::Object(
                children
                    .into_iter()
                    .map(|(key, child)| (key, child.into_value()))
                    .collect(),
            ),
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// Children of this node, turning a leaf into an empty branch first.
    pub(crate) fn branch_mut(&mut self) -> &mut Branch {
        if let Node::Leaf(_) = self {
            *self = Node::Branch(Branch::new());
        }
        match self {
            Node::Branch(children) => children,
            Node::Leaf(_) => unreachable!("leaf was replaced by a branch above"),
        }
    }
}

fn branch_to_map(branch: &Branch) -> Map<String, Value> {
    branch
        .iter()
        .map(|(key, child)| (key.clone(), child.to_value()))
        .collect()
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

/// Translations for every language of one resource, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTree {
    languages: IndexMap<String, Branch>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a parsed resource.
    ///
    /// The root must map language codes to key/value mappings. `null` (an empty
    /// YAML document) is accepted as an empty tree. Keys containing `.` are
    /// rejected because they cannot be told apart from path separators once
    /// flattened.
    pub fn from_value(value: Value) -> Result<Self, TreeError> {
        let root = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(root) => root,
            other => {
                return Err(TreeError::RootNotMapping {
                    found: value_kind(&other),
                });
            }
        };

        let mut languages = IndexMap::with_capacity(root.len());
        for (language, tree) in root {
            if language.contains('.') {
                return Err(TreeError::DottedLanguage { language });
            }
            let branch = match Node::from_value(tree) {
                Node::Branch(branch) => branch,
                Node::Leaf(leaf) => {
                    return Err(TreeError::LanguageNotMapping {
                        found: value_kind(&leaf),
                        language,
                    });
                }
            };
            reject_dotted_keys(&language, None, &branch)?;
            languages.insert(language, branch);
        }

        Ok(Self { languages })
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.languages
                .iter()
                .map(|(language, tree)| (language.clone(), Value::Object(branch_to_map(tree))))
                .collect(),
        )
    }

    pub fn get(&self, language: &str) -> Option<&Branch> {
        self.languages.get(language)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Branch)> {
        self.languages.iter()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl FromIterator<(String, Branch)> for TranslationTree {
    fn from_iter<I: IntoIterator<Item = (String, Branch)>>(iter: I) -> Self {
        Self {
            languages: iter.into_iter().collect(),
        }
    }
}

fn reject_dotted_keys(language: &str, parent: Option<&str>, branch: &Branch) -> Result<(), TreeError> {
    for (key, node) in branch {
        let path = match parent {
            Some(parent) => format!("{}.{}", parent, key),
            None => key.clone(),
        };
        if key.contains('.') {
            return Err(TreeError::DottedKey {
                language: language.to_string(),
                path,
            });
        }
        if let Node::Branch(children) = node {
            reject_dotted_keys(language, Some(&path), children)?;
        }
    }
    Ok(())
}
