use crate::loc;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::validate_union_members;
use crate::types::type_builder::Result;
use indexmap::IndexMap;
use indexmap::IndexSet;

#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    errors: Vec<TypeValidationError>,
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            errors: vec![],
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(TypeValidationError::InvalidDunderPrefixedTypeName {
                location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(if conflicting_type.is_builtin() {
                TypeValidationError::RedefinitionOfBuiltinType {
                    location: type_loc.to_owned(),
                    type_name: type_name.to_string(),
                }
            } else {
                TypeValidationError::DuplicateTypeDefinition {
                    def1: conflicting_type.def_location().to_owned(),
                    def2: type_loc.to_owned(),
                    type_name: type_name.to_string(),
                }
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Runs the cross-type validations and returns the finished types map
    /// along with every error reported while building it, in the order
    /// they were found.
    pub fn into_types_map(
        mut self,
    ) -> (IndexMap<String, GraphQLType>, Vec<TypeValidationError>) {
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) => self.errors.append(
                    &mut InputObjectTypeValidator::new(type_, &self.types)
                        .validate()
                ),

                GraphQLType::Interface(type_) => self.errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate(&mut IndexSet::new())
                ),

                GraphQLType::Object(type_) => self.errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate(&mut IndexSet::new())
                ),

                GraphQLType::Union(type_) => self.errors.extend(
                    validate_union_members(type_, &self.types)
                ),
            }
        }

        (self.types, self.errors)
    }

    pub fn report(&mut self, error: TypeValidationError) {
        self.errors.push(error);
    }

    pub fn report_all(&mut self, errors: Vec<TypeValidationError>) {
        self.errors.extend(errors);
    }
}
