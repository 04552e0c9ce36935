use std::collections::HashMap;

use crate::ast::selection::FragmentSelection;

/// Document names assigned to reusable fragments, keyed by the fragment's
/// own name. Populated before rendering and only consulted from the render
/// pass. Anonymous fragments never resolve and are always inlined.
#[derive(Clone, Debug, Default)]
pub struct FragmentRegistry {
    assigned: HashMap<String, String>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, fragment_name: impl Into<String>, document_name: impl Into<String>) {
        self.assigned
            .insert(fragment_name.into(), document_name.into());
    }

    pub fn resolve(&self, fragment: &FragmentSelection) -> Option<&str> {
        fragment
            .name
            .as_deref()
            .and_then(|name| self.assigned.get(name))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }
}
