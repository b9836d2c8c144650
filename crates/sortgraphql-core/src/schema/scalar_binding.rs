use crate::ast;
use crate::schema::TypeDefRegistry;
use indexmap::IndexMap;

/// The names of the scalars the GraphQL specification defines.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// A pass-through binding for a custom scalar.
///
/// A schema is only ever built here to be printed, never executed against,
/// so every custom scalar gets a binding whose coercions hand their input
/// back unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarBinding {
    description: Option<String>,
    scalar_name: String,
}
impl ScalarBinding {
    pub fn new(scalar_name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            description,
            scalar_name: scalar_name.into(),
        }
    }

    /// The bound scalar's description: its structured description, or its
    /// leading comments joined with a single space.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parse_literal<T>(&self, literal: T) -> T {
        literal
    }

    pub fn parse_value<T>(&self, input: T) -> T {
        input
    }

    pub fn scalar_name(&self) -> &str {
        self.scalar_name.as_str()
    }

    pub fn serialize<T>(&self, result: T) -> T {
        result
    }
}

/// Creates a [`ScalarBinding`] for every custom scalar defined in the
/// registry.
pub fn bind_custom_scalars(
    registry: &TypeDefRegistry,
) -> IndexMap<String, ScalarBinding> {
    registry.type_defs()
        .filter_map(|(source, def)| match def {
            ast::schema::TypeDefinition::Scalar(scalar_def)
                if !BUILTIN_SCALAR_NAMES.contains(&scalar_def.name.as_str()) =>
                Some((source, scalar_def)),
            _ => None,
        })
        .map(|(source, scalar_def)| {
            let documentation = source.documentation(
                &scalar_def.position,
                &scalar_def.description,
            );
            (
                scalar_def.name.to_string(),
                ScalarBinding::new(
                    scalar_def.name.as_str(),
                    documentation.legacy_description(),
                ),
            )
        })
        .collect()
}
