use crate::ast;
use crate::loc;
use crate::Value;
use indexmap::IndexMap;

/// Represents a directive applied to a schema element (e.g. `@key(fields:
/// "id")` on an object type).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) directive_name: String,
    pub(crate) location: loc::SourceLocation,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub(crate) fn from_ast(
        parent_location: &loc::SourceLocation,
        ast_directives: &[ast::schema::Directive],
    ) -> Vec<Self> {
        ast_directives.iter().map(|ast_directive| Self {
            arguments: ast_directive.arguments.iter().map(|(arg_name, arg_value)| (
                arg_name.to_string(),
                Value::from_ast(arg_value),
            )).collect(),
            directive_name: ast_directive.name.to_string(),
            location: parent_location.with_ast_position(&ast_directive.position),
        }).collect()
    }
}
