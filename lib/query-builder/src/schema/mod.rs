use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Schema-type descriptor for a selection position. Wrappers nest freely,
/// e.g. `[User!]!`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeNode {
    NonNull(Box<TypeNode>),
    List(Box<TypeNode>),
    Named(NamedNode),
}

impl TypeNode {
    pub fn non_null(inner: TypeNode) -> Self {
        TypeNode::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeNode) -> Self {
        TypeNode::List(Box::new(inner))
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        TypeNode::Named(NamedNode::Scalar(ScalarNode::new(name)))
    }

    pub fn enum_type(name: impl Into<String>) -> Self {
        TypeNode::Named(NamedNode::Enum(EnumNode::new(name)))
    }

    pub fn object(name: impl Into<String>) -> Self {
        TypeNode::Named(NamedNode::Object(ObjectNode::new(name)))
    }

    pub fn interface(name: impl Into<String>) -> Self {
        TypeNode::Named(NamedNode::Interface(InterfaceNode::new(name)))
    }

    pub fn union(name: impl Into<String>) -> Self {
        TypeNode::Named(NamedNode::Union(UnionNode::new(name)))
    }

    pub fn input(input: InputObjectNode) -> Self {
        TypeNode::Named(NamedNode::Input(input))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeNode::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            TypeNode::List(_) => true,
            TypeNode::NonNull(inner) => inner.is_list(),
            TypeNode::Named(_) => false,
        }
    }

    /// Unwraps every non-null/list container down to the named node.
    pub fn inner(&self) -> &NamedNode {
        match self {
            TypeNode::NonNull(inner) | TypeNode::List(inner) => inner.inner(),
            TypeNode::Named(named) => named,
        }
    }

    /// Strips one level of list wrapping, looking through non-null. Used to
    /// match list literals against their declared item type.
    pub fn list_item_type(&self) -> Option<&TypeNode> {
        match self {
            TypeNode::List(inner) => Some(inner),
            TypeNode::NonNull(inner) => inner.list_item_type(),
            TypeNode::Named(_) => None,
        }
    }
}

impl Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeNode::List(inner) => write!(f, "[{}]", inner),
            TypeNode::NonNull(inner) => write!(f, "{}!", inner),
            TypeNode::Named(named) => write!(f, "{}", named.name()),
        }
    }
}

/// The effective inner node of a selection position, after all containers
/// are unwrapped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NamedNode {
    Scalar(ScalarNode),
    Enum(EnumNode),
    Object(ObjectNode),
    Interface(InterfaceNode),
    Union(UnionNode),
    Input(InputObjectNode),
}

impl NamedNode {
    pub fn name(&self) -> &str {
        match self {
            NamedNode::Scalar(node) => &node.name,
            NamedNode::Enum(node) => &node.name,
            NamedNode::Object(node) => &node.name,
            NamedNode::Interface(node) => &node.name,
            NamedNode::Union(node) => &node.name,
            NamedNode::Input(node) => &node.name,
        }
    }

    /// Leaf positions never carry sub-selections.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NamedNode::Scalar(_) | NamedNode::Enum(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, NamedNode::Object(_))
    }
}

impl Display for NamedNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarNode {
    pub name: String,
}

impl ScalarNode {
    pub fn new(name: impl Into<String>) -> Self {
        ScalarNode { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumNode {
    pub name: String,
}

impl EnumNode {
    pub fn new(name: impl Into<String>) -> Self {
        EnumNode { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectNode {
    pub name: String,
}

impl ObjectNode {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectNode { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceNode {
    pub name: String,
}

impl InterfaceNode {
    pub fn new(name: impl Into<String>) -> Self {
        InterfaceNode { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionNode {
    pub name: String,
}

impl UnionNode {
    pub fn new(name: impl Into<String>) -> Self {
        UnionNode { name: name.into() }
    }
}

/// Input object type, carrying the declared type of each of its fields so
/// nested argument literals can be checked recursively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputObjectNode {
    pub name: String,
    pub fields: BTreeMap<String, TypeNode>,
}

impl InputObjectNode {
    pub fn new(name: impl Into<String>) -> Self {
        InputObjectNode {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, field_type: TypeNode) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }
}

/// One schema field as exposed to selection building: its name and the
/// declared shape of its arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub arguments: Option<ArgumentsNode>,
}

impl SchemaField {
    pub fn new(name: impl Into<String>) -> Self {
        SchemaField {
            name: name.into(),
            arguments: None,
        }
    }

    pub fn with_arguments(mut self, arguments: ArgumentsNode) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

/// Declared argument shape of a schema field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentsNode {
    pub fields: BTreeMap<String, TypeNode>,
}

impl ArgumentsNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_argument(mut self, name: impl Into<String>, argument_type: TypeNode) -> Self {
        self.fields.insert(name.into(), argument_type);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.fields.get(name)
    }
}
