use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ast::selection::Selection;
use crate::ast::selection_tree::SelectionTree;

pub mod build_arguments;
pub mod build_selection;
pub mod error;
pub mod formatter;
pub mod fragments;
pub mod variables;

use self::build_selection::build_selection_set;
use self::error::BuildError;
use self::formatter::Formatter;
use self::fragments::FragmentRegistry;
use self::variables::VariableRegistry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    #[default]
    Query,
    Mutation,
    Subscription,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
            OperationKind::Subscription => write!(f, "subscription"),
        }
    }
}

/// Composes a complete executable operation around the root selection set:
/// operation keyword, optional operation name, and the variable declarations
/// accumulated while serializing arguments.
pub fn build_operation(
    format: &Formatter,
    kind: OperationKind,
    name: Option<&str>,
    tree: &SelectionTree,
    fragments: &FragmentRegistry,
) -> Result<String, BuildError> {
    let mut variables = VariableRegistry::new();
    let selections = build_selection_set(format, tree, fragments, Some(&mut variables))?;
    if selections.is_empty() {
        return Ok(selections);
    }

    let mut document = kind.to_string();
    if let Some(name) = name {
        document.push(' ');
        document.push_str(name);
    }
    if !variables.is_empty() {
        document.push('(');
        document.push_str(&variables.to_definitions(format));
        document.push(')');
    }
    document.push_str(format.space());
    document.push_str(&selections);

    Ok(document)
}

/// Renders the definition text for a named fragment, e.g.
/// `fragment F1 on User { id }`. A fragment whose body renders empty yields
/// the empty string.
pub fn build_fragment_definition(
    format: &Formatter,
    document_name: &str,
    tree: &SelectionTree,
    fragments: &FragmentRegistry,
) -> Result<String, BuildError> {
    let Selection::Fragment(fragment) = &tree.selection else {
        return Err(BuildError::ExpectedFragment);
    };

    let selections = build_selection_set(format, tree, fragments, None)?;
    if selections.is_empty() {
        return Ok(selections);
    }

    Ok(format!(
        "fragment {document_name} on {type_condition}{space}{selections}",
        type_condition = fragment.node.inner(),
        space = format.space(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::selection::{FieldSelection, FragmentSelection};
    use crate::schema::{SchemaField, TypeNode};

    #[test]
    fn operation_kind_renders_the_keyword() {
        assert_eq!(OperationKind::Query.to_string(), "query");
        assert_eq!(OperationKind::Mutation.to_string(), "mutation");
        assert_eq!(OperationKind::Subscription.to_string(), "subscription");
    }

    #[test]
    fn fragment_definition_requires_a_fragment_tree() {
        let tree = SelectionTree::field(FieldSelection::new(
            SchemaField::new("user"),
            TypeNode::object("User"),
        ));
        let err = build_fragment_definition(
            &Formatter::minified(),
            "F1",
            &tree,
            &FragmentRegistry::new(),
        )
        .unwrap_err();
        assert_eq!(err, BuildError::ExpectedFragment);
    }

    #[test]
    fn empty_fragment_definition_renders_empty() {
        let tree = SelectionTree::fragment(FragmentSelection::new(TypeNode::object("User")));
        let rendered = build_fragment_definition(
            &Formatter::minified(),
            "F1",
            &tree,
            &FragmentRegistry::new(),
        )
        .unwrap();
        assert_eq!(rendered, "");
    }
}
