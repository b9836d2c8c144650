use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Checks that every member of `union_type` names a defined object type.
///
/// https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
pub(super) fn validate_union_members(
    union_type: &UnionType,
    types_map: &IndexMap<String, GraphQLType>,
) -> Vec<TypeValidationError> {
    union_type.members()
        .iter()
        .filter_map(|(member_name, member_location)| {
            match types_map.get(member_name) {
                None => Some(TypeValidationError::UndefinedTypeName {
                    ref_location: member_location.to_owned(),
                    undefined_type_name: member_name.to_string(),
                }),
                Some(GraphQLType::Object(_)) => None,
                Some(member_type) => Some(TypeValidationError::InvalidUnionMemberTypeKind {
                    location: member_location.to_owned(),
                    member_type_kind: member_type.kind(),
                    member_type_name: member_name.to_string(),
                    union_type_name: union_type.name().to_string(),
                }),
            }
        })
        .collect()
}
