use crate::ast;
use crate::Documentation;
use crate::loc;
use crate::schema::ParsedSource;
use crate::schema::TypeValidationError;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::TypeBuilderHelpers;
use crate::Value;
use indexmap::IndexMap;
use std::fmt;

/// The locations a directive may be applied to, in the order the GraphQL
/// specification lists them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}
impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => Self::Query,
            "MUTATION" => Self::Mutation,
            "SUBSCRIPTION" => Self::Subscription,
            "FIELD" => Self::Field,
            "FRAGMENT_DEFINITION" => Self::FragmentDefinition,
            "FRAGMENT_SPREAD" => Self::FragmentSpread,
            "INLINE_FRAGMENT" => Self::InlineFragment,
            "VARIABLE_DEFINITION" => Self::VariableDefinition,
            "SCHEMA" => Self::Schema,
            "SCALAR" => Self::Scalar,
            "OBJECT" => Self::Object,
            "FIELD_DEFINITION" => Self::FieldDefinition,
            "ARGUMENT_DEFINITION" => Self::ArgumentDefinition,
            "INTERFACE" => Self::Interface,
            "UNION" => Self::Union,
            "ENUM" => Self::Enum,
            "ENUM_VALUE" => Self::EnumValue,
            "INPUT_OBJECT" => Self::InputObject,
            "INPUT_FIELD_DEFINITION" => Self::InputFieldDefinition,
            _ => return None,
        })
    }
}
impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directive definition: either one of the four directives the GraphQL
/// specification defines, or one declared in a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) arguments: IndexMap<String, Parameter>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) documentation: Documentation,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl Directive {
    pub fn arguments(&self) -> &IndexMap<String, Parameter> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SourceLocation::GraphQLBuiltIn)
    }

    /// Valid locations, deduplicated, in [`DirectiveLocation`] order.
    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn repeatable(&self) -> bool {
        self.repeatable
    }

    /// Builds a directive definition from its AST, reporting invalid
    /// parameters and unknown location names to `errors`.
    pub(crate) fn from_ast(
        source: &ParsedSource,
        def: &ast::schema::DirectiveDefinition,
        errors: &mut Vec<TypeValidationError>,
    ) -> Self {
        let def_location = source.location(&def.position);
        let mut locations = vec![];
        for ast_location in &def.locations {
            match DirectiveLocation::from_name(ast_location.as_str()) {
                Some(location) => locations.push(location),
                None => errors.push(TypeValidationError::UnknownDirectiveLocation {
                    directive_name: def.name.to_string(),
                    location: def_location.to_owned(),
                    location_name: ast_location.as_str().to_string(),
                }),
            }
        }
        locations.sort();
        locations.dedup();

        Self {
            arguments: TypeBuilderHelpers::parameters_from_ast(
                source,
                format!("@{}", def.name).as_str(),
                &def.arguments,
                errors,
            ),
            documentation: source.documentation(&def.position, &def.description),
            def_location,
            locations,
            name: def.name.to_string(),
            repeatable: def.repeatable,
        }
    }

    /// The directives every GraphQL schema defines implicitly.
    pub(crate) fn builtins() -> Vec<Self> {
        vec![
            Self::builtin(
                "deprecated",
                "Marks the field, argument, input field or enum value as deprecated",
                vec![builtin_parameter(
                    "reason",
                    "The reason for the deprecation",
                    "String",
                    true,
                    Some(Value::String("No longer supported".to_string())),
                )],
                vec![
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::EnumValue,
                    DirectiveLocation::InputFieldDefinition,
                ],
            ),
            Self::builtin(
                "include",
                "Directs the executor to include this field or fragment only when the `if` argument is true",
                vec![builtin_parameter("if", "Included when true.", "Boolean", false, None)],
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
            ),
            Self::builtin(
                "skip",
                "Directs the executor to skip this field or fragment when the `if` argument is true.",
                vec![builtin_parameter("if", "Skipped when true.", "Boolean", false, None)],
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
            ),
            Self::builtin(
                "specifiedBy",
                "Exposes a URL that specifies the behaviour of this scalar.",
                vec![builtin_parameter(
                    "url",
                    "The URL that specifies the behaviour of this scalar.",
                    "String",
                    false,
                    None,
                )],
                vec![DirectiveLocation::Scalar],
            ),
        ]
    }

    fn builtin(
        name: &str,
        description: &str,
        arguments: Vec<Parameter>,
        locations: Vec<DirectiveLocation>,
    ) -> Self {
        Self {
            arguments: arguments.into_iter()
                .map(|param| (param.name.to_string(), param))
                .collect(),
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            documentation: Documentation::new(vec![], Some(description.to_string())),
            locations,
            name: name.to_string(),
            repeatable: false,
        }
    }

    pub(crate) fn is_builtin_name(name: &str) -> bool {
        matches!(name, "deprecated" | "include" | "skip" | "specifiedBy")
    }
}

fn builtin_parameter(
    name: &str,
    description: &str,
    type_name: &str,
    nullable: bool,
    default_value: Option<Value>,
) -> Parameter {
    Parameter {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        default_value,
        directives: vec![],
        documentation: Documentation::new(vec![], Some(description.to_string())),
        name: name.to_string(),
        type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
            nullable,
            ref_location: loc::SourceLocation::GraphQLBuiltIn,
            type_name: type_name.to_string(),
        }),
    }
}
