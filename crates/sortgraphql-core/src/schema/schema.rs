use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::OperationKind;
use crate::types::Directive;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// The validated type model of one or more schema documents.
///
/// A [`Schema`] is built once by the
/// [`SchemaBuilder`](crate::schema::SchemaBuilder) and is read-only from
/// then on.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) schema_def: Option<SchemaDefinition>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Every directive definition: the built-in ones plus those declared in
    /// the schema documents.
    pub fn directive_defs(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().and_then(|name| self.types.get(name))
    }

    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.types.get(&self.query_type)
    }

    pub fn root_type_name(&self, operation: OperationKind) -> Option<&str> {
        match operation {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// The explicit `schema { ... }` definition, if one was declared.
    pub fn schema_def(&self) -> Option<&SchemaDefinition> {
        self.schema_def.as_ref()
    }

    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().and_then(|name| self.types.get(name))
    }

    /// All types in the schema, built-in scalars included.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}

/// An explicit `schema { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
}
impl SchemaDefinition {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }
}
