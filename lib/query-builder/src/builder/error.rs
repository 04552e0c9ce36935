/// Errors raised while rendering a selection tree. Any error aborts the
/// whole render; there is no partial output.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("Unknown argument '{name}' at '{path}'")]
    UnknownArgument { name: String, path: String },
    #[error("Value at '{path}' does not match declared type '{expected}'")]
    MalformedValue { path: String, expected: String },
    #[error("Variable '${name}' declared as both '{existing}' and '{incoming}'")]
    VariableTypeConflict {
        name: String,
        existing: String,
        incoming: String,
    },
    #[error("Variable '${name}' used at '{path}' without a variable registry")]
    UnresolvedVariable { name: String, path: String },
    #[error("Field '{field}' does not declare any arguments")]
    UndeclaredArguments { field: String },
    #[error("Expected a fragment selection")]
    ExpectedFragment,
}
