use crate::DirectiveAnnotation;
use crate::schema::SchemaDefinition;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use crate::types::Parameter;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Checks every directive applied anywhere in the schema against the
/// directive definitions.
pub(super) struct DirectiveAnnotationValidator<'a> {
    directive_defs: &'a IndexMap<String, Directive>,
    errors: Vec<TypeValidationError>,
}
impl<'a> DirectiveAnnotationValidator<'a> {
    pub fn new(directive_defs: &'a IndexMap<String, Directive>) -> Self {
        Self {
            directive_defs,
            errors: vec![],
        }
    }

    pub fn validate(
        mut self,
        types_map: &IndexMap<String, GraphQLType>,
        schema_def: Option<&SchemaDefinition>,
    ) -> Vec<TypeValidationError> {
        if let Some(schema_def) = schema_def {
            self.validate_annotations(DirectiveLocation::Schema, schema_def.directives());
        }

        let directive_defs = self.directive_defs;
        for directive_def in directive_defs.values() {
            self.validate_parameters(directive_def.arguments());
        }

        for type_ in types_map.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String
                    => (),

                GraphQLType::Enum(enum_type) => {
                    self.validate_annotations(
                        DirectiveLocation::Enum,
                        enum_type.directives(),
                    );
                    for value in enum_type.values().values() {
                        self.validate_annotations(
                            DirectiveLocation::EnumValue,
                            value.directives(),
                        );
                    }
                },

                GraphQLType::InputObject(inputobj_type) => {
                    self.validate_annotations(
                        DirectiveLocation::InputObject,
                        inputobj_type.directives(),
                    );
                    for field in inputobj_type.fields().values() {
                        self.validate_annotations(
                            DirectiveLocation::InputFieldDefinition,
                            field.directives(),
                        );
                    }
                },

                GraphQLType::Interface(iface_type) =>
                    self.validate_object_or_interface(
                        DirectiveLocation::Interface,
                        iface_type,
                    ),

                GraphQLType::Object(obj_type) =>
                    self.validate_object_or_interface(
                        DirectiveLocation::Object,
                        obj_type,
                    ),

                GraphQLType::Scalar(scalar_type) =>
                    self.validate_annotations(
                        DirectiveLocation::Scalar,
                        scalar_type.directives(),
                    ),

                GraphQLType::Union(union_type) =>
                    self.validate_annotations(
                        DirectiveLocation::Union,
                        union_type.directives(),
                    ),
            }
        }

        self.errors
    }

    fn validate_annotations(
        &mut self,
        directive_location: DirectiveLocation,
        annotations: &[DirectiveAnnotation],
    ) {
        let directive_defs = self.directive_defs;
        let mut reported_repeats = IndexSet::new();
        for (idx, annotation) in annotations.iter().enumerate() {
            let directive_name = annotation.directive_name();
            let directive_def = match directive_defs.get(directive_name) {
                Some(directive_def) => directive_def,
                None => {
                    self.errors.push(TypeValidationError::UndefinedDirective {
                        directive_name: directive_name.to_string(),
                        location: annotation.location().to_owned(),
                    });
                    continue;
                },
            };

            if !directive_def.locations().contains(&directive_location) {
                self.errors.push(TypeValidationError::InvalidDirectiveLocation {
                    directive_location,
                    directive_name: directive_name.to_string(),
                    location: annotation.location().to_owned(),
                });
            }

            // https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location
            let is_repeated =
                annotations[..idx].iter()
                    .any(|prev| prev.directive_name() == directive_name);
            if is_repeated
                && !directive_def.repeatable()
                && reported_repeats.insert(directive_name) {
                self.errors.push(TypeValidationError::DuplicateDirectiveAnnotation {
                    directive_name: directive_name.to_string(),
                    location: annotation.location().to_owned(),
                });
            }

            for argument_name in annotation.arguments().keys() {
                if !directive_def.arguments().contains_key(argument_name) {
                    self.errors.push(TypeValidationError::UnknownDirectiveArgument {
                        argument_name: argument_name.to_string(),
                        directive_name: directive_name.to_string(),
                        location: annotation.location().to_owned(),
                    });
                }
            }

            let missing_required_args =
                directive_def.arguments()
                    .values()
                    .filter(|param| {
                        !param.type_annotation().nullable()
                            && param.default_value().is_none()
                            && !annotation.arguments().contains_key(param.name())
                    });
            for param in missing_required_args {
                self.errors.push(TypeValidationError::MissingDirectiveArgument {
                    argument_name: param.name().to_string(),
                    directive_name: directive_name.to_string(),
                    location: annotation.location().to_owned(),
                });
            }
        }
    }

    fn validate_object_or_interface(
        &mut self,
        directive_location: DirectiveLocation,
        type_: &impl ObjectOrInterfaceType,
    ) {
        self.validate_annotations(directive_location, type_.directives());
        for field in type_.fields().values() {
            self.validate_annotations(
                DirectiveLocation::FieldDefinition,
                field.directives(),
            );
            self.validate_parameters(field.parameters());
        }
    }

    fn validate_parameters(&mut self, parameters: &IndexMap<String, Parameter>) {
        for param in parameters.values() {
            self.validate_annotations(
                DirectiveLocation::ArgumentDefinition,
                param.directives(),
            );
        }
    }
}
