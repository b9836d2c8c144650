use crate::ast;
use crate::schema::ParsedSource;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::type_builder::Result;
use inherent::inherent;

#[derive(Debug)]
pub(crate) struct ObjectTypeBuilder;
impl ObjectTypeBuilder {
    pub fn new() -> Self {
        Self
    }
}

#[inherent]
impl TypeBuilder for ObjectTypeBuilder {
    type AstTypeDef = ast::schema::ObjectType;
    type AstTypeExtension = ast::schema::ObjectTypeExtension;

    pub(crate) fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let mut errors = vec![];
        let type_data = TypeBuilderHelpers::object_or_interface_data_from_ast(
            source,
            &def.position,
            &def.description,
            def.name.as_str(),
            &def.directives,
            &def.fields,
            &def.implements_interfaces,
            &mut errors,
        );
        types_map_builder.report_all(errors);

        let objdef_srcloc = type_data.def_location.to_owned();
        types_map_builder.add_new_type(
            def.name.as_str(),
            &objdef_srcloc,
            GraphQLType::Object(ObjectType(type_data)),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        ext: &<Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        let mut errors = vec![];
        let result = match types_map_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Object(obj_type)) => {
                TypeBuilderHelpers::merge_object_or_interface_extension(
                    &mut obj_type.0,
                    source,
                    &ext.position,
                    &ext.directives,
                    &ext.fields,
                    &ext.implements_interfaces,
                    &mut errors,
                );
                Ok(())
            },

            Some(non_obj_type) =>
                Err(TypeValidationError::InvalidExtensionType {
                    location: source.location(&ext.position),
                    type_kind: non_obj_type.kind(),
                    type_name: ext.name.to_string(),
                }),

            None =>
                Err(TypeValidationError::ExtensionOfUndefinedType {
                    location: source.location(&ext.position),
                    type_name: ext.name.to_string(),
                }),
        };
        types_map_builder.report_all(errors);
        result
    }
}
