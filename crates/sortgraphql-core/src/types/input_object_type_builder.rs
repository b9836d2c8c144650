use crate::ast;
use crate::DirectiveAnnotation;
use crate::schema::ParsedSource;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::type_builder::Result;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder;
impl InputObjectTypeBuilder {
    pub fn new() -> Self {
        Self
    }
}

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;
    type AstTypeExtension = ast::schema::InputObjectTypeExtension;

    pub(crate) fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let inputobjdef_srcloc = source.location(&def.position);

        let mut errors = vec![];
        let mut fields = IndexMap::new();
        TypeBuilderHelpers::inputobject_fields_from_ast(
            source,
            def.name.as_str(),
            &def.fields,
            &mut fields,
            &mut errors,
        );
        types_map_builder.report_all(errors);

        types_map_builder.add_new_type(
            def.name.as_str(),
            &inputobjdef_srcloc,
            GraphQLType::InputObject(InputObjectType {
                directives: DirectiveAnnotation::from_ast(
                    &inputobjdef_srcloc,
                    &def.directives,
                ),
                documentation: source.documentation(&def.position, &def.description),
                extensions: vec![],
                fields,
                name: def.name.to_string(),
                def_location: inputobjdef_srcloc.to_owned(),
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
            Some(GraphQLType::InputObject(inputobj_type)) => {
                inputobj_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                TypeBuilderHelpers::inputobject_fields_from_ast(
                    source,
                    ext.name.as_str(),
                    &ext.fields,
                    &mut inputobj_type.fields,
                    &mut errors,
                );
                inputobj_type.extensions.push(ext_srcloc);
                Ok(())
            },

            Some(non_inputobj_type) =>
                Err(TypeValidationError::InvalidExtensionType {
                    location: ext_srcloc,
                    type_kind: non_inputobj_type.kind(),
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
