use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use indexmap::IndexSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();
        for (field_name, field) in self.type_.fields() {
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .type_name();
            match self.types_map.get(innermost_type_name) {
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                Some(innermost_type) if !innermost_type.is_input_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location:
                                field.type_annotation()
                                    .ref_location()
                                    .to_owned(),
                            field_name: field_name.to_string(),
                            invalid_type_name: innermost_type_name.to_string(),
                            parent_type_name: type_name.to_string(),
                        }
                    ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location:
                        field.type_annotation()
                            .ref_location()
                            .to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }
        }

        self.find_unbreakable_cycles(
            type_name,
            self.type_.fields(),
            &mut vec![],
            IndexSet::from([type_name]),
        );
        self.errors
    }

    /// Looks for chains of non-null input fields leading back to the type
    /// being validated. Each cycle is reported once: by the type in it whose
    /// name sorts first.
    fn find_unbreakable_cycles(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<String>,
        seen_type_names: IndexSet<&'a str>,
    ) {
        for (field_name, field) in fields {
            if breaks_input_cycle(field.type_annotation()) {
                continue;
            }

            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .type_name();
            path.push(format!("{type_name}.{field_name}"));

            if innermost_type_name == self.type_.name() {
                let reported_by_this_type =
                    seen_type_names.iter().all(|seen| self.type_.name() <= *seen);
                if reported_by_this_type {
                    let mut circular_field_path = path.to_owned();
                    circular_field_path.push(innermost_type_name.to_string());
                    self.errors.push(TypeValidationError::CircularInputFieldChain {
                        circular_field_path,
                    });
                }
            } else if !seen_type_names.contains(innermost_type_name) {
                if let Some(GraphQLType::InputObject(input_obj_type)) =
                    self.types_map.get(innermost_type_name) {
                    let mut seen_type_names = seen_type_names.to_owned();
                    seen_type_names.insert(innermost_type_name);
                    self.find_unbreakable_cycles(
                        innermost_type_name,
                        input_obj_type.fields(),
                        path,
                        seen_type_names,
                    );
                }
            }

            path.pop();
        }
    }
}

/// A nullable field or a list field can always be satisfied without
/// providing another instance of the same input object.
///
/// https://spec.graphql.org/October2021/#sec-Input-Objects.Circular-References
fn breaks_input_cycle(
    type_annot: &TypeAnnotation,
) -> bool {
    match type_annot {
        TypeAnnotation::List(_) => true,
        TypeAnnotation::Named(named_annot) => named_annot.nullable,
    }
}
