use crate::ast;
use crate::DirectiveAnnotation;
use crate::schema::BUILTIN_SCALAR_NAMES;
use crate::schema::ParsedSource;
use crate::schema::ScalarBinding;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::type_builder::Result;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder {
    bindings: IndexMap<String, ScalarBinding>,
}

impl ScalarTypeBuilder {
    pub fn new(bindings: IndexMap<String, ScalarBinding>) -> Self {
        Self {
            bindings,
        }
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;
    type AstTypeExtension = ast::schema::ScalarTypeExtension;

    pub(crate) fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let scalardef_srcloc = source.location(&def.position);

        if BUILTIN_SCALAR_NAMES.contains(&def.name.as_str()) {
            return Err(TypeValidationError::RedefinitionOfBuiltinType {
                location: scalardef_srcloc,
                type_name: def.name.to_string(),
            });
        }

        let binding = match self.bindings.shift_remove(def.name.as_str()) {
            Some(binding) => binding,
            None => return Err(TypeValidationError::UnboundCustomScalar {
                location: scalardef_srcloc,
                scalar_name: def.name.to_string(),
            }),
        };

        types_map_builder.add_new_type(
            def.name.as_str(),
            &scalardef_srcloc,
            GraphQLType::Scalar(ScalarType {
                binding,
                directives: DirectiveAnnotation::from_ast(
                    &scalardef_srcloc,
                    &def.directives,
                ),
                documentation: source.documentation(&def.position, &def.description),
                extensions: vec![],
                name: def.name.to_string(),
                def_location: scalardef_srcloc.to_owned(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        ext: &<Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        let ext_srcloc = source.location(&ext.position);
        match types_map_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Scalar(scalar_type)) => {
                scalar_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                scalar_type.extensions.push(ext_srcloc);
                Ok(())
            },

            Some(non_scalar_type) =>
                Err(TypeValidationError::InvalidExtensionType {
                    location: ext_srcloc,
                    type_kind: non_scalar_type.kind(),
                    type_name: ext.name.to_string(),
                }),

            None =>
                Err(TypeValidationError::ExtensionOfUndefinedType {
                    location: ext_srcloc,
                    type_name: ext.name.to_string(),
                }),
        }
    }
}
