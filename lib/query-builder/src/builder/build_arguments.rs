use std::fmt::Write;

use tracing::instrument;

use crate::ast::arguments::ArgumentsMap;
use crate::ast::value::Value;
use crate::builder::error::BuildError;
use crate::builder::formatter::Formatter;
use crate::builder::variables::VariableRegistry;
use crate::schema::{ArgumentsNode, NamedNode, TypeNode};

/// Renders an argument map against its declared shape, e.g.
/// `id: 5, filter: {term: "rust"}`. Variable references become `$name`
/// tokens and their declared types land in `variables`. `path` is the field
/// name the arguments belong to, used for error context.
#[instrument(level = "trace", skip_all, fields(path = path))]
pub fn build_arguments(
    format: &Formatter,
    arguments: &ArgumentsMap,
    declared: &ArgumentsNode,
    path: &str,
    mut variables: Option<&mut VariableRegistry>,
) -> Result<String, BuildError> {
    let mut rendered = Vec::with_capacity(arguments.len());

    for (name, value) in arguments.iter() {
        let declared_type = declared.get(name).ok_or_else(|| BuildError::UnknownArgument {
            name: name.clone(),
            path: path.to_string(),
        })?;
        let argument_path = format!("{path}.{name}");
        let serialized = serialize_value(
            format,
            value,
            declared_type,
            &argument_path,
            variables.as_deref_mut(),
        )?;
        rendered.push(format!("{name}:{}{serialized}", format.space()));
    }

    Ok(rendered.join(format.separator()))
}

fn serialize_value(
    format: &Formatter,
    value: &Value,
    declared: &TypeNode,
    path: &str,
    mut variables: Option<&mut VariableRegistry>,
) -> Result<String, BuildError> {
    match value {
        Value::Variable(name) => {
            let registry = variables.ok_or_else(|| BuildError::UnresolvedVariable {
                name: name.clone(),
                path: path.to_string(),
            })?;
            registry.register(name, declared)?;
            Ok(format!("${name}"))
        }
        Value::Null => Ok("null".to_string()),
        Value::Int(value) => Ok(value.to_string()),
        // Fractionless floats keep a trailing `.0` so the literal stays a
        // FloatValue instead of parsing back as an Int.
        Value::Float(value) if value.fract() == 0.0 && value.is_finite() => {
            Ok(format!("{value:.1}"))
        }
        Value::Float(value) => Ok(value.to_string()),
        Value::Boolean(value) => Ok(value.to_string()),
        Value::Enum(name) => Ok(name.clone()),
        Value::String(value) => Ok(quote_string(value)),
        Value::List(items) => {
            let item_type = declared
                .list_item_type()
                .ok_or_else(|| malformed(path, declared))?;
            let mut rendered = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{index}]");
                rendered.push(serialize_value(
                    format,
                    item,
                    item_type,
                    &item_path,
                    variables.as_deref_mut(),
                )?);
            }
            Ok(format!("[{}]", rendered.join(format.separator())))
        }
        Value::Object(fields) => {
            let NamedNode::Input(input) = declared.inner() else {
                return Err(malformed(path, declared));
            };
            let mut rendered = Vec::with_capacity(fields.len());
            for (name, field_value) in fields {
                let field_type =
                    input
                        .fields
                        .get(name)
                        .ok_or_else(|| BuildError::UnknownArgument {
                            name: name.clone(),
                            path: path.to_string(),
                        })?;
                let field_path = format!("{path}.{name}");
                let serialized = serialize_value(
                    format,
                    field_value,
                    field_type,
                    &field_path,
                    variables.as_deref_mut(),
                )?;
                rendered.push(format!("{name}:{}{serialized}", format.space()));
            }
            Ok(format!("{{{}}}", rendered.join(format.separator())))
        }
    }
}

fn malformed(path: &str, declared: &TypeNode) -> BuildError {
    BuildError::MalformedValue {
        path: path.to_string(),
        expected: declared.to_string(),
    }
}

/// Quotes and escapes a string literal. Control characters outside the
/// common escapes become `\uXXXX`.
fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\r' => out.push_str(r"\r"),
            '\n' => out.push_str(r"\n"),
            '\t' => out.push_str(r"\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str(r"\\"),
            c if (c as u32) < 0x20 || (c as u32) == 0x7F => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
