use crate::ast;
use crate::DirectiveAnnotation;
use crate::schema::ParsedSource;
use crate::schema::TypeValidationError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::type_builder::Result;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder;
impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self
    }

    fn add_values(
        source: &ParsedSource,
        enum_name: &str,
        ast_values: &[ast::schema::EnumValue],
        values: &mut IndexMap<String, EnumValue>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for ast_value in ast_values {
            let value_srcloc = source.location(&ast_value.position);
            if let Some(existing_value) = values.get(&ast_value.name) {
                errors.push(TypeValidationError::DuplicateEnumValueDefinition {
                    def1: existing_value.def_location().to_owned(),
                    def2: value_srcloc,
                    type_name: enum_name.to_string(),
                    value_name: ast_value.name.to_string(),
                });
                continue;
            }

            values.insert(ast_value.name.to_string(), EnumValue {
                directives: DirectiveAnnotation::from_ast(
                    &value_srcloc,
                    &ast_value.directives,
                ),
                documentation: source.documentation(
                    &ast_value.position,
                    &ast_value.description,
                ),
                name: ast_value.name.to_string(),
                def_location: value_srcloc,
            });
        }
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;
    type AstTypeExtension = ast::schema::EnumTypeExtension;

    pub(crate) fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let enumdef_srcloc = source.location(&def.position);

        let mut errors = vec![];
        let mut values = IndexMap::new();
        Self::add_values(source, def.name.as_str(), &def.values, &mut values, &mut errors);
        types_map_builder.report_all(errors);

        types_map_builder.add_new_type(
            def.name.as_str(),
            &enumdef_srcloc,
            GraphQLType::Enum(EnumType {
                directives: DirectiveAnnotation::from_ast(
                    &enumdef_srcloc,
                    &def.directives,
                ),
                documentation: source.documentation(&def.position, &def.description),
                extensions: vec![],
                name: def.name.to_string(),
                values,
                def_location: enumdef_srcloc.to_owned(),
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
        let mut errors = vec![];
        let result = match types_map_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Enum(enum_type)) => {
                enum_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                Self::add_values(
                    source,
                    ext.name.as_str(),
                    &ext.values,
                    &mut enum_type.values,
                    &mut errors,
                );
                enum_type.extensions.push(ext_srcloc);
                Ok(())
            },

            Some(non_enum_type) =>
                Err(TypeValidationError::InvalidExtensionType {
                    location: ext_srcloc,
                    type_kind: non_enum_type.kind(),
                    type_name: ext.name.to_string(),
                }),

            None =>
                Err(TypeValidationError::ExtensionOfUndefinedType {
                    location: ext_srcloc,
                    type_name: ext.name.to_string(),
                }),
        };
        types_map_builder.report_all(errors);
        result
    }
}
