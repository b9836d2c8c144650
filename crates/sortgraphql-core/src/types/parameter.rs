use crate::ast;
use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::schema::ParsedSource;
use crate::types::TypeAnnotation;
use crate::Value;

/// An argument declared on a field definition or directive definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) documentation: Documentation,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(
        source: &ParsedSource,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        let param_srcloc = source.location(&input_val.position);
        Self {
            default_value: input_val.default_value.as_ref().map(Value::from_ast),
            directives: DirectiveAnnotation::from_ast(
                &param_srcloc,
                &input_val.directives,
            ),
            documentation: source.documentation(
                &input_val.position,
                &input_val.description,
            ),
            name: input_val.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &param_srcloc,
                &input_val.value_type,
            ),
            def_location: param_srcloc,
        }
    }
}
