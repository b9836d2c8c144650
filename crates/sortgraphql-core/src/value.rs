use crate::ast;
use indexmap::IndexMap;
use std::fmt;

/// A literal value as written in a schema document (default values and
/// directive arguments).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(value) = self {
            Some(value.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::schema::Value) -> Self {
        match ast_value {
            ast::schema::Value::Boolean(value) => Self::Boolean(*value),
            ast::schema::Value::Enum(value) => Self::Enum(value.to_string()),
            ast::schema::Value::Float(value) => Self::Float(*value),
            ast::schema::Value::Int(value) =>
                Self::Int(value.as_i64().unwrap_or_default()),
            ast::schema::Value::List(values) =>
                Self::List(values.iter().map(Self::from_ast).collect()),
            ast::schema::Value::Null => Self::Null,
            ast::schema::Value::Object(entries) =>
                Self::Object(
                    entries.iter()
                        .map(|(key, value)| (key.to_string(), Self::from_ast(value)))
                        .collect(),
                ),
            ast::schema::Value::String(value) => Self::String(value.to_string()),
            ast::schema::Value::Variable(name) => Self::Variable(name.to_string()),
        }
    }
}

/// Formats the value as a GraphQL literal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(value) => f.write_str(value),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    value.fmt(f)?;
                }
                f.write_str("]")
            },
            Self::Null => f.write_str("null"),
            Self::Object(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::String(value) => write!(f, "\"{}\"", escape_string(value)),
            Self::Variable(name) => write!(f, "${name}"),
        }
    }
}

/// Escapes a string so it can be printed between double quotes.
pub(crate) fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{0008}' => escaped.push_str("\\b"),
            '\u{000C}' => escaped.push_str("\\f"),
            ch if (ch as u32) < 0x20 =>
                escaped.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => escaped.push(ch),
        }
    }
    escaped
}
