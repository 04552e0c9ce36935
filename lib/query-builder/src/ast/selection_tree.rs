use serde::{Deserialize, Serialize};

use crate::ast::selection::{FieldSelection, FragmentSelection, RootSelection, Selection};
use crate::schema::TypeNode;

/// One node in the requested query shape. Child order is preserved verbatim
/// in the rendered output. A tree is built once per request, rendered in a
/// single pass, and discarded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionTree {
    pub selection: Selection,
    pub children: Vec<SelectionTree>,
}

impl SelectionTree {
    pub fn new(selection: Selection) -> Self {
        SelectionTree {
            selection,
            children: Vec::new(),
        }
    }

    pub fn root(node: TypeNode) -> Self {
        Self::new(Selection::Root(RootSelection { node }))
    }

    pub fn field(selection: FieldSelection) -> Self {
        Self::new(Selection::Field(selection))
    }

    pub fn fragment(selection: FragmentSelection) -> Self {
        Self::new(Selection::Fragment(selection))
    }

    pub fn with_children(mut self, children: Vec<SelectionTree>) -> Self {
        self.children = children;
        self
    }

    pub fn push_child(&mut self, child: SelectionTree) {
        self.children.push(child);
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
