use tracing::instrument;

use crate::ast::selection::{FieldSelection, FragmentSelection, Selection};
use crate::ast::selection_tree::SelectionTree;
use crate::builder::build_arguments::build_arguments;
use crate::builder::error::BuildError;
use crate::builder::formatter::{Formatter, FragmentMode};
use crate::builder::fragments::FragmentRegistry;
use crate::builder::variables::VariableRegistry;

pub const TYPENAME_FIELD: &str = "__typename";

/// Renders the braces-delimited selection set of one tree node, or the empty
/// string when there is nothing to select. Bare braces are never emitted.
#[instrument(level = "trace", skip_all)]
pub fn build_selection_set(
    format: &Formatter,
    tree: &SelectionTree,
    fragments: &FragmentRegistry,
    mut variables: Option<&mut VariableRegistry>,
) -> Result<String, BuildError> {
    let inner = tree.selection.node().inner();

    // Leaf positions never open a brace block, children or not.
    if inner.is_leaf() {
        return Ok(String::new());
    }

    // A selection with no explicit children, or one resolving to an
    // interface/union, still needs a discriminator for type narrowing.
    // Fragment spreads never carry their own marker.
    let include_typename =
        (tree.children.is_empty() || !inner.is_object()) && !tree.selection.is_fragment();

    let mut selections: Vec<String> = Vec::with_capacity(tree.children.len() + 1);
    if include_typename {
        selections.push(TYPENAME_FIELD.to_string());
    }
    for child in &tree.children {
        let rendered = build_selection_tree(format, child, fragments, variables.as_deref_mut())?;
        if !rendered.is_empty() {
            selections.push(rendered);
        }
    }

    if selections.is_empty() {
        return Ok(String::new());
    }

    Ok(format!(
        "{{{newline}{body}{newline}}}",
        newline = format.newline(),
        body = format.indent(&selections.join(format.line_separator())),
    ))
}

/// Routes one tree node to the field, fragment, or root renderer.
pub fn build_selection_tree(
    format: &Formatter,
    tree: &SelectionTree,
    fragments: &FragmentRegistry,
    variables: Option<&mut VariableRegistry>,
) -> Result<String, BuildError> {
    match &tree.selection {
        Selection::Field(field) => build_field_selection(format, tree, field, fragments, variables),
        Selection::Fragment(fragment) => build_fragment_tree(format, tree, fragment, fragments),
        Selection::Root(_) => build_selection_set(format, tree, fragments, variables),
    }
}

/// Renders one field occurrence: alias, name, argument block, children.
#[instrument(level = "trace", skip_all, fields(field = %field.field.name))]
fn build_field_selection(
    format: &Formatter,
    tree: &SelectionTree,
    field: &FieldSelection,
    fragments: &FragmentRegistry,
    mut variables: Option<&mut VariableRegistry>,
) -> Result<String, BuildError> {
    let alias = match &field.alias {
        Some(alias) => format!("{alias}:{}", format.space()),
        None => String::new(),
    };

    let arguments = match &field.arguments {
        Some(arguments) if !arguments.is_empty() => {
            let declared =
                field
                    .field
                    .arguments
                    .as_ref()
                    .ok_or_else(|| BuildError::UndeclaredArguments {
                        field: field.field.name.clone(),
                    })?;
            let rendered = build_arguments(
                format,
                arguments,
                declared,
                &field.field.name,
                variables.as_deref_mut(),
            )?;
            format!("({rendered})")
        }
        _ => String::new(),
    };

    let selections = build_selection_set(format, tree, fragments, variables)?;
    let children = if selections.is_empty() {
        selections
    } else {
        format!("{}{selections}", format.space())
    };

    Ok(format!("{alias}{}{arguments}{children}", field.field.name))
}

/// Renders one fragment occurrence: either a reference to a fragment defined
/// elsewhere in the document, or an inlined `on Type { ... }` block. A
/// fragment contributing nothing renders as the empty string and is filtered
/// out by the parent selection set.
#[instrument(level = "trace", skip_all, fields(fragment = fragment.name.as_deref().unwrap_or("<anonymous>")))]
fn build_fragment_tree(
    format: &Formatter,
    tree: &SelectionTree,
    fragment: &FragmentSelection,
    fragments: &FragmentRegistry,
) -> Result<String, BuildError> {
    let assigned = fragments.resolve(fragment);

    let target = match assigned {
        Some(name) if format.fragment_mode() != FragmentMode::Inline => name.to_string(),
        _ => {
            let mut selections = build_selection_set(format, tree, fragments, None)?;
            if selections.is_empty() {
                return Ok(String::new());
            }

            // Traceability marker for prettified debug output.
            if cfg!(debug_assertions) && format.prettify() {
                if let Some(name) = &fragment.name {
                    selections = selections.replacen('{', &format!("{{ #[{name}]"), 1);
                }
            }

            format!(
                "{space}on {type_condition}{space}{selections}",
                space = format.space(),
                type_condition = fragment.node.inner(),
            )
        }
    };

    Ok(format!("...{target}"))
}
