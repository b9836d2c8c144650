use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::ParsedSource;
use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::InputField;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::Value;
use indexmap::IndexMap;

pub(crate) type Result<T> = std::result::Result<T, TypeValidationError>;

/// Builds one kind of [`GraphQLType`](crate::types::GraphQLType) from its
/// AST definition and any `extend` blocks targeting it.
///
/// Every type definition is visited before any extension, so an extension
/// whose type is still missing when it is visited targets an undefined type.
pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        def: &Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        ext: &Self::AstTypeExtension,
    ) -> Result<()>;
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    /// Adds the `implements` declarations of a definition or extension to
    /// `interfaces`, each recorded with the location that declared it.
    pub fn implemented_interfaces_from_ast(
        declaring_location: &loc::SourceLocation,
        type_name: &str,
        iface_names: &[String],
        interfaces: &mut IndexMap<String, loc::SourceLocation>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for iface_name in iface_names {
            if interfaces.contains_key(iface_name) {
                errors.push(TypeValidationError::DuplicateInterfaceImplementsDeclaration {
                    duplicated_interface_name: iface_name.to_string(),
                    location: declaring_location.to_owned(),
                    type_name: type_name.to_string(),
                });
                continue;
            }
            interfaces.insert(iface_name.to_string(), declaring_location.to_owned());
        }
    }

    pub fn inputobject_fields_from_ast(
        source: &ParsedSource,
        type_name: &str,
        input_fields: &[ast::schema::InputValue],
        field_map: &mut IndexMap<String, InputField>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for field in input_fields {
            let fielddef_srcloc = source.location(&field.position);

            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBDCAACCTx5b
            if field.name.starts_with("__") {
                errors.push(TypeValidationError::InvalidDunderPrefixedFieldName {
                    field_name: field.name.to_string(),
                    location: fielddef_srcloc,
                    type_name: type_name.to_string(),
                });
                continue;
            }

            if let Some(existing_field) = field_map.get(&field.name) {
                errors.push(TypeValidationError::DuplicateFieldNameDefinition {
                    def1: existing_field.def_location().to_owned(),
                    def2: fielddef_srcloc,
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
                continue;
            }

            field_map.insert(field.name.to_string(), InputField {
                default_value: field.default_value.as_ref().map(Value::from_ast),
                directives: DirectiveAnnotation::from_ast(
                    &fielddef_srcloc,
                    &field.directives,
                ),
                documentation: source.documentation(
                    &field.position,
                    &field.description,
                ),
                name: field.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    // graphql_parser doesn't give us a location for the
                    // field-definition's type itself.
                    &fielddef_srcloc,
                    &field.value_type,
                ),
                def_location: fielddef_srcloc,
            });
        }
    }

    pub fn object_fielddefs_from_ast(
        source: &ParsedSource,
        type_name: &str,
        fields: &[ast::schema::Field],
        field_map: &mut IndexMap<String, Field>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for field in fields {
            let fielddef_srcloc = source.location(&field.position);

            // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
            if field.name.starts_with("__") {
                errors.push(TypeValidationError::InvalidDunderPrefixedFieldName {
                    field_name: field.name.to_string(),
                    location: fielddef_srcloc,
                    type_name: type_name.to_string(),
                });
                continue;
            }

            if let Some(existing_field) = field_map.get(&field.name) {
                errors.push(TypeValidationError::DuplicateFieldNameDefinition {
                    def1: existing_field.def_location().to_owned(),
                    def2: fielddef_srcloc,
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
                continue;
            }

            let parameters = Self::parameters_from_ast(
                source,
                format!("{type_name}.{}", field.name).as_str(),
                &field.arguments,
                errors,
            );

            field_map.insert(field.name.to_string(), Field {
                directives: DirectiveAnnotation::from_ast(
                    &fielddef_srcloc,
                    &field.directives,
                ),
                documentation: source.documentation(
                    &field.position,
                    &field.description,
                ),
                name: field.name.to_string(),
                parameters,
                type_annotation: TypeAnnotation::from_ast_type(
                    &fielddef_srcloc,
                    &field.field_type,
                ),
                def_location: fielddef_srcloc,
            });
        }
    }

    /// Builds the shared data of an object or interface type definition.
    #[allow(clippy::too_many_arguments)]
    pub fn object_or_interface_data_from_ast(
        source: &ParsedSource,
        position: &ast::Pos,
        description: &Option<String>,
        name: &str,
        directives: &[ast::schema::Directive],
        fields: &[ast::schema::Field],
        implements_interfaces: &[String],
        errors: &mut Vec<TypeValidationError>,
    ) -> ObjectOrInterfaceTypeData {
        let def_location = source.location(position);

        let mut field_map = IndexMap::new();
        Self::object_fielddefs_from_ast(source, name, fields, &mut field_map, errors);

        let mut interfaces = IndexMap::new();
        Self::implemented_interfaces_from_ast(
            &def_location,
            name,
            implements_interfaces,
            &mut interfaces,
            errors,
        );

        ObjectOrInterfaceTypeData {
            directives: DirectiveAnnotation::from_ast(&def_location, directives),
            documentation: source.documentation(position, description),
            extensions: vec![],
            fields: field_map,
            interfaces,
            name: name.to_string(),
            def_location,
        }
    }

    /// Merges an `extend type` or `extend interface` block into the shared
    /// data of the type it extends.
    pub fn merge_object_or_interface_extension(
        type_data: &mut ObjectOrInterfaceTypeData,
        source: &ParsedSource,
        position: &ast::Pos,
        directives: &[ast::schema::Directive],
        fields: &[ast::schema::Field],
        implements_interfaces: &[String],
        errors: &mut Vec<TypeValidationError>,
    ) {
        let ext_srcloc = source.location(position);
        let type_name = type_data.name.to_string();

        type_data.directives.append(&mut DirectiveAnnotation::from_ast(
            &ext_srcloc,
            directives,
        ));
        Self::object_fielddefs_from_ast(
            source,
            type_name.as_str(),
            fields,
            &mut type_data.fields,
            errors,
        );
        Self::implemented_interfaces_from_ast(
            &ext_srcloc,
            type_name.as_str(),
            implements_interfaces,
            &mut type_data.interfaces,
            errors,
        );
        type_data.extensions.push(ext_srcloc);
    }

    /// Builds the parameters of a field or directive definition.
    /// `owner_name` identifies the owner in error messages (e.g. `Query.user`
    /// or `@cacheControl`).
    pub fn parameters_from_ast(
        source: &ParsedSource,
        owner_name: &str,
        params: &[ast::schema::InputValue],
        errors: &mut Vec<TypeValidationError>,
    ) -> IndexMap<String, Parameter> {
        let mut param_map = IndexMap::new();
        for param in params {
            // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBBCAACCTlrG
            if param.name.starts_with("__") {
                errors.push(TypeValidationError::InvalidDunderPrefixedParamName {
                    location: source.location(&param.position),
                    owner_name: owner_name.to_string(),
                    param_name: param.name.to_string(),
                });
                continue;
            }

            if param_map.contains_key(&param.name) {
                errors.push(TypeValidationError::DuplicateParameterDefinition {
                    location: source.location(&param.position),
                    owner_name: owner_name.to_string(),
                    param_name: param.name.to_string(),
                });
                continue;
            }

            param_map.insert(param.name.to_string(), Parameter::from_ast(source, param));
        }
        param_map
    }
}
