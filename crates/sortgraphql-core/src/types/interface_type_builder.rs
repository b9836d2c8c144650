use crate::ast;
use crate::schema::ParsedSource;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::type_builder::Result;
use inherent::inherent;

#[derive(Debug)]
pub(crate) struct InterfaceTypeBuilder;
impl InterfaceTypeBuilder {
    pub fn new() -> Self {
        Self
    }

    fn check_self_implementation(
        source: &ParsedSource,
        position: &ast::Pos,
        iface_name: &str,
        implements_interfaces: &[String],
        errors: &mut Vec<TypeValidationError>,
    ) {
        if implements_interfaces.iter().any(|name| name == iface_name) {
            errors.push(TypeValidationError::InvalidSelfImplementingInterface {
                interface_name: iface_name.to_string(),
                location: source.location(position),
            });
        }
    }
}

#[inherent]
impl TypeBuilder for InterfaceTypeBuilder {
    type AstTypeDef = ast::schema::InterfaceType;
    type AstTypeExtension = ast::schema::InterfaceTypeExtension;

    pub(crate) fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let mut errors = vec![];
        Self::check_self_implementation(
            source,
            &def.position,
            def.name.as_str(),
            &def.implements_interfaces,
            &mut errors,
        );
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

        let ifacedef_srcloc = type_data.def_location.to_owned();
        types_map_builder.add_new_type(
            def.name.as_str(),
            &ifacedef_srcloc,
            GraphQLType::Interface(InterfaceType(type_data)),
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
            Some(GraphQLType::Interface(iface_type)) => {
                Self::check_self_implementation(
                    source,
                    &ext.position,
                    ext.name.as_str(),
                    &ext.implements_interfaces,
                    &mut errors,
                );
                TypeBuilderHelpers::merge_object_or_interface_extension(
                    &mut iface_type.0,
                    source,
                    &ext.position,
                    &ext.directives,
                    &ext.fields,
                    &ext.implements_interfaces,
                    &mut errors,
                );
                Ok(())
            },

            Some(non_iface_type) =>
                Err(TypeValidationError::InvalidExtensionType {
                    location: source.location(&ext.position),
                    type_kind: non_iface_type.kind(),
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
