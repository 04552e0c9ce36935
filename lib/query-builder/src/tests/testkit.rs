use std::sync::Once;

use lazy_static::lazy_static;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ast::selection::FieldSelection;
use crate::ast::selection_tree::SelectionTree;
use crate::schema::{SchemaField, TypeNode};

fn init_test_logger_internal() {
    let tree_layer = tracing_tree::HierarchicalLayer::new(2)
        .with_bracketed_fields(true)
        .with_deferred_spans(false)
        .with_indent_lines(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_targets(false);

    tracing_subscriber::registry()
        .with(tree_layer)
        .with(EnvFilter::from_default_env())
        .init();
}

lazy_static! {
    static ref TRACING_INIT: Once = Once::new();
}

pub fn init_logger() {
    TRACING_INIT.call_once(init_test_logger_internal);
}

pub fn scalar_field(name: &str, type_name: &str) -> SelectionTree {
    SelectionTree::field(FieldSelection::new(
        SchemaField::new(name),
        TypeNode::scalar(type_name),
    ))
}

pub fn object_field(name: &str, type_name: &str, children: Vec<SelectionTree>) -> SelectionTree {
    SelectionTree::field(FieldSelection::new(
        SchemaField::new(name),
        TypeNode::object(type_name),
    ))
    .with_children(children)
}
