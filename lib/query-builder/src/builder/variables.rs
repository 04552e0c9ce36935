use std::collections::BTreeMap;

use crate::builder::error::BuildError;
use crate::builder::formatter::Formatter;
use crate::schema::TypeNode;

/// Accumulates `$name` → declared type pairs while arguments are serialized.
/// One registry per render pass; the map is ordered so declaration lists are
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableRegistry {
    variables: BTreeMap<String, TypeNode>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering the same name with an identical type is a no-op;
    /// a conflicting type is an error.
    pub fn register(&mut self, name: &str, variable_type: &TypeNode) -> Result<(), BuildError> {
        if let Some(existing) = self.variables.get(name) {
            if existing != variable_type {
                return Err(BuildError::VariableTypeConflict {
                    name: name.to_string(),
                    existing: existing.to_string(),
                    incoming: variable_type.to_string(),
                });
            }
            return Ok(());
        }

        self.variables
            .insert(name.to_string(), variable_type.clone());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.variables.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TypeNode)> {
        self.variables.iter()
    }

    /// Renders the accumulated declaration list, e.g. `$id: ID!, $limit: Int`.
    pub fn to_definitions(&self, format: &Formatter) -> String {
        self.variables
            .iter()
            .map(|(name, variable_type)| format!("${name}:{}{variable_type}", format.space()))
            .collect::<Vec<_>>()
            .join(format.separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_registration_merges() {
        let mut registry = VariableRegistry::new();
        let id = TypeNode::non_null(TypeNode::scalar("ID"));
        registry.register("id", &id).unwrap();
        registry.register("id", &id).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn conflicting_registration_fails() {
        let mut registry = VariableRegistry::new();
        registry.register("id", &TypeNode::scalar("ID")).unwrap();
        let err = registry
            .register("id", &TypeNode::scalar("String"))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::VariableTypeConflict {
                name: "id".to_string(),
                existing: "ID".to_string(),
                incoming: "String".to_string(),
            }
        );
    }

    #[test]
    fn definitions_follow_the_policy() {
        let mut registry = VariableRegistry::new();
        registry
            .register("id", &TypeNode::non_null(TypeNode::scalar("ID")))
            .unwrap();
        registry.register("limit", &TypeNode::scalar("Int")).unwrap();

        assert_eq!(
            registry.to_definitions(&Formatter::pretty()),
            "$id: ID!, $limit: Int"
        );
        assert_eq!(
            registry.to_definitions(&Formatter::minified()),
            "$id:ID!,$limit:Int"
        );
    }
}
