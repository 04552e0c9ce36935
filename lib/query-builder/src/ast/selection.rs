use serde::{Deserialize, Serialize};

use crate::ast::arguments::ArgumentsMap;
use crate::schema::{SchemaField, TypeNode};

/// What one tree node asks for. The root of a tree carries no selection
/// syntax of its own, only the type its children are resolved against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Field(FieldSelection),
    Fragment(FragmentSelection),
    Root(RootSelection),
}

impl Selection {
    /// Schema type this selection position resolves to.
    pub fn node(&self) -> &TypeNode {
        match self {
            Selection::Field(field) => &field.node,
            Selection::Fragment(fragment) => &fragment.node,
            Selection::Root(root) => &root.node,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Selection::Field(_))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Selection::Fragment(_))
    }
}

/// A request for one schema field, with optional caller-assigned alias and
/// argument values. `node` is the type this field occurrence resolves to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSelection {
    pub field: SchemaField,
    pub alias: Option<String>,
    pub arguments: Option<ArgumentsMap>,
    pub node: TypeNode,
}

impl FieldSelection {
    pub fn new(field: SchemaField, node: TypeNode) -> Self {
        FieldSelection {
            field,
            alias: None,
            arguments: None,
            node,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_arguments(mut self, arguments: ArgumentsMap) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

/// A type-conditioned group of sub-selections. `node` is the type condition;
/// `name` is the fragment's own name, used for registry lookups and for the
/// debug marker in prettified output. Anonymous fragments are always inlined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FragmentSelection {
    pub name: Option<String>,
    pub node: TypeNode,
}

impl FragmentSelection {
    pub fn new(node: TypeNode) -> Self {
        FragmentSelection { name: None, node }
    }

    pub fn named(name: impl Into<String>, node: TypeNode) -> Self {
        FragmentSelection {
            name: Some(name.into()),
            node,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RootSelection {
    pub node: TypeNode,
}
