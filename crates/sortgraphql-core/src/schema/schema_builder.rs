use crate::ast;
use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::schema::bind_custom_scalars;
use crate::schema::DirectiveAnnotationValidator;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaDefinition;
use crate::schema::TypeDefRegistry;
use crate::schema::TypeValidationError;
use crate::SortError;
use crate::types::Directive;
use crate::types::EnumTypeBuilder;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeAnnotation;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SortError>;

/// Name of the field carried by the query root that is synthesized when no
/// schema document declares one.
pub(crate) const PLACEHOLDER_QUERY_FIELD_NAME: &str = "_placeholder";

/// Builds a validated [`Schema`] from a (typically merged)
/// [`TypeDefRegistry`].
///
/// Every problem found along the way is collected, and all of them are
/// reported together as a single [`SortError::Validation`].
pub struct SchemaBuilder {
    enum_builder: EnumTypeBuilder,
    errors: Vec<TypeValidationError>,
    inputobj_builder: InputObjectTypeBuilder,
    interface_builder: InterfaceTypeBuilder,
    object_builder: ObjectTypeBuilder,
    scalar_builder: ScalarTypeBuilder,
    types_map_builder: TypesMapBuilder,
    union_builder: UnionTypeBuilder,
}
impl SchemaBuilder {
    pub fn build(registry: &TypeDefRegistry) -> Result<Schema> {
        let mut builder = Self {
            enum_builder: EnumTypeBuilder::new(),
            errors: vec![],
            inputobj_builder: InputObjectTypeBuilder::new(),
            interface_builder: InterfaceTypeBuilder::new(),
            object_builder: ObjectTypeBuilder::new(),
            scalar_builder: ScalarTypeBuilder::new(bind_custom_scalars(registry)),
            types_map_builder: TypesMapBuilder::new(),
            union_builder: UnionTypeBuilder::new(),
        };

        let directive_defs = builder.build_directive_defs(registry);
        builder.visit_type_defs(registry);
        builder.visit_type_extensions(registry);

        if !registry.declares_query_root() {
            let added = builder.types_map_builder.add_new_type(
                OperationKind::Query.default_type_name(),
                &loc::SourceLocation::Synthetic,
                GraphQLType::Object(synthetic_query_type()),
            );
            if let Err(err) = added {
                builder.errors.push(err);
            }
        }

        let (types, mut type_errors) = builder.types_map_builder.into_types_map();
        let mut errors = builder.errors;
        errors.append(&mut type_errors);

        let schema_def = registry.schema_def().map(|(source, schema_def)| {
            let def_location = source.location(&schema_def.position);
            SchemaDefinition {
                directives: DirectiveAnnotation::from_ast(
                    &def_location,
                    &schema_def.directives,
                ),
                def_location,
            }
        });

        errors.append(
            &mut DirectiveAnnotationValidator::new(&directive_defs)
                .validate(&types, schema_def.as_ref())
        );

        let ast_schema_def = registry.schema_def().map(|(_, schema_def)| schema_def);
        let query_type =
            resolve_root_type_name(ast_schema_def, &types, OperationKind::Query)
                .unwrap_or_else(|| OperationKind::Query.default_type_name().to_string());
        let mutation_type =
            resolve_root_type_name(ast_schema_def, &types, OperationKind::Mutation);
        let subscription_type =
            resolve_root_type_name(ast_schema_def, &types, OperationKind::Subscription);

        errors.append(&mut validate_root_types(&types, &[
            (OperationKind::Query, Some(query_type.as_str())),
            (OperationKind::Mutation, mutation_type.as_deref()),
            (OperationKind::Subscription, subscription_type.as_deref()),
        ]));

        if !errors.is_empty() {
            return Err(SortError::Validation {
                errors,
                files: registry.sources().to_vec(),
            });
        }

        Ok(Schema {
            directive_defs,
            mutation_type,
            query_type,
            schema_def,
            subscription_type,
            types,
        })
    }

    /// The built-in directives, overridden by any same-named directive that
    /// the schema documents declare.
    fn build_directive_defs(
        &mut self,
        registry: &TypeDefRegistry,
    ) -> IndexMap<String, Directive> {
        let mut directive_defs =
            Directive::builtins()
                .into_iter()
                .map(|directive| (directive.name().to_string(), directive))
                .collect::<IndexMap<_, _>>();

        for (source, def) in registry.directive_defs() {
            // https://spec.graphql.org/October2021/#sel-HAHnBPFDABABnBtC
            if def.name.starts_with("__") {
                self.errors.push(TypeValidationError::InvalidDunderPrefixedDirectiveName {
                    directive_name: def.name.to_string(),
                    location: source.location(&def.position),
                });
                continue;
            }

            let directive = Directive::from_ast(source, def, &mut self.errors);
            directive_defs.insert(def.name.to_string(), directive);
        }

        directive_defs
    }

    fn visit_type_defs(&mut self, registry: &TypeDefRegistry) {
        for (source, def) in registry.type_defs() {
            let types_map_builder = &mut self.types_map_builder;
            let result = match def {
                ast::schema::TypeDefinition::Enum(def) =>
                    self.enum_builder.visit_type_def(types_map_builder, source, def),
                ast::schema::TypeDefinition::InputObject(def) =>
                    self.inputobj_builder.visit_type_def(types_map_builder, source, def),
                ast::schema::TypeDefinition::Interface(def) =>
                    self.interface_builder.visit_type_def(types_map_builder, source, def),
                ast::schema::TypeDefinition::Object(def) =>
                    self.object_builder.visit_type_def(types_map_builder, source, def),
                ast::schema::TypeDefinition::Scalar(def) =>
                    self.scalar_builder.visit_type_def(types_map_builder, source, def),
                ast::schema::TypeDefinition::Union(def) =>
                    self.union_builder.visit_type_def(types_map_builder, source, def),
            };
            if let Err(err) = result {
                self.types_map_builder.report(err);
            }
        }
    }

    fn visit_type_extensions(&mut self, registry: &TypeDefRegistry) {
        for (source, ext) in registry.type_extensions() {
            let types_map_builder = &mut self.types_map_builder;
            let result = match ext {
                ast::schema::TypeExtension::Enum(ext) =>
                    self.enum_builder.visit_type_extension(types_map_builder, source, ext),
                ast::schema::TypeExtension::InputObject(ext) =>
                    self.inputobj_builder.visit_type_extension(types_map_builder, source, ext),
                ast::schema::TypeExtension::Interface(ext) =>
                    self.interface_builder.visit_type_extension(types_map_builder, source, ext),
                ast::schema::TypeExtension::Object(ext) =>
                    self.object_builder.visit_type_extension(types_map_builder, source, ext),
                ast::schema::TypeExtension::Scalar(ext) =>
                    self.scalar_builder.visit_type_extension(types_map_builder, source, ext),
                ast::schema::TypeExtension::Union(ext) =>
                    self.union_builder.visit_type_extension(types_map_builder, source, ext),
            };
            if let Err(err) = result {
                self.types_map_builder.report(err);
            }
        }
    }
}

/// A root is named by the `schema` definition when it declares one;
/// otherwise a type with the operation's default name serves as the root.
fn resolve_root_type_name(
    schema_def: Option<&ast::schema::SchemaDefinition>,
    types: &IndexMap<String, GraphQLType>,
    operation: OperationKind,
) -> Option<String> {
    let declared_name = schema_def.and_then(|schema_def| match operation {
        OperationKind::Mutation => schema_def.mutation.to_owned(),
        OperationKind::Query => schema_def.query.to_owned(),
        OperationKind::Subscription => schema_def.subscription.to_owned(),
    });
    declared_name.or_else(|| {
        let default_name = operation.default_type_name();
        types.contains_key(default_name).then(|| default_name.to_string())
    })
}

fn synthetic_query_type() -> ObjectType {
    let location = loc::SourceLocation::Synthetic;
    ObjectType(ObjectOrInterfaceTypeData {
        def_location: location.to_owned(),
        directives: vec![],
        documentation: Documentation::default(),
        extensions: vec![],
        fields: IndexMap::from([(
            PLACEHOLDER_QUERY_FIELD_NAME.to_string(),
            Field {
                def_location: location.to_owned(),
                directives: vec![],
                documentation: Documentation::default(),
                name: PLACEHOLDER_QUERY_FIELD_NAME.to_string(),
                parameters: IndexMap::new(),
                type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                    nullable: true,
                    ref_location: location,
                    type_name: "Boolean".to_string(),
                }),
            },
        )]),
        interfaces: IndexMap::new(),
        name: OperationKind::Query.default_type_name().to_string(),
    })
}

// https://spec.graphql.org/October2021/#sec-Root-Operation-Types
fn validate_root_types(
    types: &IndexMap<String, GraphQLType>,
    roots: &[(OperationKind, Option<&str>)],
) -> Vec<TypeValidationError> {
    let mut errors = vec![];
    for (idx, (operation, type_name)) in roots.iter().enumerate() {
        let Some(type_name) = type_name else {
            continue;
        };

        match types.get(*type_name) {
            Some(GraphQLType::Object(_)) => (),
            Some(non_obj_type) =>
                errors.push(TypeValidationError::InvalidRootOperationType {
                    operation: *operation,
                    type_kind: non_obj_type.kind(),
                    type_name: type_name.to_string(),
                }),
            None =>
                errors.push(TypeValidationError::UndefinedRootOperationType {
                    operation: *operation,
                    type_name: type_name.to_string(),
                }),
        }

        let earlier_root =
            roots[..idx].iter()
                .find(|(_, earlier_name)| earlier_name == &Some(*type_name));
        if let Some((earlier_operation, _)) = earlier_root {
            errors.push(TypeValidationError::NonUniqueRootOperationTypes {
                operation1: *earlier_operation,
                operation2: *operation,
                type_name: type_name.to_string(),
            });
        }
    }
    errors
}
