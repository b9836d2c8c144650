use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use indexmap::IndexSet;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    implemented_iface_names: IndexSet<&'a str>,
    inheritance_path: Vec<&'a str>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names:
                type_.interface_names()
                    .into_iter()
                    .collect(),
            inheritance_path: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(
        mut self,
        verified_interface_impls: &mut IndexSet<&'a str>,
    ) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();
        let type_fields = self.type_.fields();
        let implemented_iface_names = self.implemented_iface_names.to_owned();
        let type_iface_names =
            self.type_.interface_names()
                .into_iter()
                .collect::<IndexSet<_>>();
        for iface_name in implemented_iface_names {
            // Self-implementation is reported while the interface is built.
            if iface_name == type_name {
                continue;
            }

            // Interfaces can implement other interfaces, so the same
            // interface may be reached more than once for a single type.
            let iface_name_already_verified_present =
                !verified_interface_impls.insert(iface_name);
            if iface_name_already_verified_present {
                continue;
            }

            let iface_decl_location =
                self.type_.interfaces()
                    .get(iface_name)
                    .unwrap_or(self.type_.def_location());

            let iface_type = self.types_map.get(iface_name);
            let iface_type =
                if let Some(iface_type) = iface_type { iface_type } else {
                    self.errors.push(
                        TypeValidationError::ImplementsUndefinedInterface {
                            location: iface_decl_location.to_owned(),
                            type_name: type_name.to_string(),
                            undefined_interface_name: iface_name.to_string(),
                        }
                    );
                    continue;
                };

            let iface = iface_type.as_interface();
            let iface =
                if let Some(iface) = iface { iface } else {
                    self.errors.push(
                        TypeValidationError::ImplementsNonInterfaceType {
                            location: iface_decl_location.to_owned(),
                            non_interface_type_name: iface_type.name().to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                    continue;
                };

            // The implementing type must also explicitly implement each of
            // the interfaces *this* interface implements.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            let iface_implemented_iface_names =
                iface.interface_names()
                    .into_iter()
                    .filter(|name| *name != iface_name)
                    .collect::<IndexSet<_>>();
            let mut child_inheritance_path = self.inheritance_path.to_owned();
            child_inheritance_path.push(iface_name);
            let missing_recursive_interface_names =
                iface_implemented_iface_names.difference(&type_iface_names)
                    .collect::<Vec<_>>();
            for missing_rec_iface_name in missing_recursive_interface_names {
                self.errors.push(
                    TypeValidationError::MissingRecursiveInterfaceImplementation {
                        def_location: self.type_.def_location().to_owned(),
                        inheritance_path:
                            child_inheritance_path.iter()
                                .map(|s| s.to_string())
                                .collect(),
                        missing_recursive_interface_name:
                            missing_rec_iface_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
            }

            let child_validator = ObjectOrInterfaceTypeValidator {
                errors: vec![],
                implemented_iface_names: iface_implemented_iface_names,
                inheritance_path: child_inheritance_path,
                type_: self.type_,
                types_map: self.types_map,
            };
            self.errors.append(&mut child_validator.validate(
                verified_interface_impls,
            ));

            for (field_name, iface_field) in iface.fields() {
                let type_field = type_fields.get(field_name);
                let type_field =
                    if let Some(type_field) = type_field {
                        type_field
                    } else {
                        self.errors.push(
                            TypeValidationError::MissingInterfaceSpecifiedField {
                                def_location: self.type_.def_location().to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                        continue
                    };

                let iface_field_params = iface_field.parameters();
                let type_field_params = type_field.parameters();

                // Every parameter of the interface's field must be declared,
                // with an equivalent type, on the implementing field.
                for (param_name, iface_field_param) in iface_field_params {
                    let type_param = type_field_params.get(param_name);
                    let type_param =
                        if let Some(type_param) = type_param {
                            type_param
                        } else {
                            self.errors.push(
                                TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                                    def_location: type_field.def_location().to_owned(),
                                    field_name: field_name.to_string(),
                                    interface_name: iface_name.to_string(),
                                    missing_parameter_name: param_name.to_string(),
                                    type_name: type_name.to_string(),
                                }
                            );
                            continue;
                        };

                    let iface_param_type = iface_field_param.type_annotation();
                    let type_param_type = type_param.type_annotation();
                    if !type_param_type.is_equivalent_to(iface_param_type) {
                        self.errors.push(
                            TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                                def_location: type_param.def_location().to_owned(),
                                expected_parameter_type: iface_param_type.to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                invalid_parameter_type: type_param_type.to_owned(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                    }
                }

                // Parameters that only the implementing field declares must
                // be optional (nullable or defaulted).
                //
                // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
                let additional_params =
                    type_field_params.iter()
                        .filter(|(param_name, _)| !iface_field_params.contains_key(*param_name));
                for (additional_param_name, additional_param) in additional_params {
                    let additional_param_type_annot = additional_param.type_annotation();
                    let is_nullable = additional_param_type_annot.nullable();
                    let has_default = additional_param.default_value().is_some();
                    if !is_nullable && !has_default {
                        self.errors.push(
                            TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                location:
                                    additional_param_type_annot.ref_location()
                                        .to_owned(),
                                parameter_name: additional_param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                    }
                }

                let type_field_annot = type_field.type_annotation();
                let iface_field_annot = iface_field.type_annotation();
                if !type_field_annot.is_subtype_of(self.types_map, iface_field_annot) {
                    self.errors.push(
                        TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                            expected_field_type: iface_field_annot.to_owned(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            invalid_field_type: type_field_annot.to_owned(),
                            location: type_field_annot.ref_location().to_owned(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }
        }

        // Field and parameter types are only checked once per type, not for
        // every interface reached along the way.
        if !self.inheritance_path.is_empty() {
            return self.errors;
        }

        for (field_name, field) in type_fields {
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .type_name();
            match self.types_map.get(innermost_type_name) {
                Some(innermost_type) if !innermost_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location:
                                field.type_annotation()
                                    .ref_location()
                                    .to_owned(),
                            field_name: field_name.to_string(),
                            input_type_name: innermost_type_name.to_string(),
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

            for (param_name, param) in field.parameters() {
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let innermost_type_name =
                    param.type_annotation()
                        .innermost_named_type_annotation()
                        .type_name();
                match self.types_map.get(innermost_type_name) {
                    Some(innermost_type) if !innermost_type.is_input_type() =>
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputOnlyType {
                                def_location:
                                    param.type_annotation()
                                        .ref_location()
                                        .to_owned(),
                                outputonly_type_name: innermost_type_name.to_string(),
                                parameter_name: param_name.to_string(),
                            }
                        ),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        ref_location:
                            param.type_annotation()
                                .ref_location()
                                .to_owned(),
                        undefined_type_name: innermost_type_name.to_string(),
                    }),
                }
            }
        }

        self.errors
    }
}
