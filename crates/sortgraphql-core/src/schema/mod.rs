mod directive_annotation_validator;
mod operation_kind;
mod scalar_binding;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_parser;
mod type_def_registry;
mod type_validation_error;

use directive_annotation_validator::DirectiveAnnotationValidator;
pub use operation_kind::OperationKind;
pub use scalar_binding::bind_custom_scalars;
pub use scalar_binding::BUILTIN_SCALAR_NAMES;
pub use scalar_binding::ScalarBinding;
pub use schema::Schema;
pub use schema::SchemaDefinition;
pub use schema_builder::SchemaBuilder;
pub use schema_parser::SchemaParser;
pub(crate) use type_def_registry::ParsedSource;
pub use type_def_registry::TypeDefRegistry;
pub use type_validation_error::TypeValidationError;
