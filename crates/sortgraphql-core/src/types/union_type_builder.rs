use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::ParsedSource;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use crate::types::type_builder::Result;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder;
impl UnionTypeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// graphql_parser doesn't track positions of union members, so each
    /// member is recorded with the location of the definition or extension
    /// that lists it.
    fn add_members(
        union_name: &str,
        declaring_location: &loc::SourceLocation,
        member_names: &[String],
        members: &mut IndexMap<String, loc::SourceLocation>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for member_name in member_names {
            if members.contains_key(member_name) {
                errors.push(TypeValidationError::DuplicateUnionMember {
                    location: declaring_location.to_owned(),
                    member_name: member_name.to_string(),
                    type_name: union_name.to_string(),
                });
                continue;
            }
            members.insert(member_name.to_string(), declaring_location.to_owned());
        }
    }
}

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::schema::UnionType;
    type AstTypeExtension = ast::schema::UnionTypeExtension;

    pub(crate) fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        source: &ParsedSource,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let uniondef_srcloc = source.location(&def.position);

        let mut errors = vec![];
        let mut members = IndexMap::new();
        Self::add_members(
            def.name.as_str(),
            &uniondef_srcloc,
            &def.types,
            &mut members,
            &mut errors,
        );
        types_map_builder.report_all(errors);

        types_map_builder.add_new_type(
            def.name.as_str(),
            &uniondef_srcloc,
            GraphQLType::Union(UnionType {
                directives: DirectiveAnnotation::from_ast(
                    &uniondef_srcloc,
                    &def.directives,
                ),
                documentation: source.documentation(&def.position, &def.description),
                extensions: vec![],
                members,
                name: def.name.to_string(),
                def_location: uniondef_srcloc.to_owned(),
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
            Some(GraphQLType::Union(union_type)) => {
                union_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                Self::add_members(
                    ext.name.as_str(),
                    &ext_srcloc,
                    &ext.types,
                    &mut union_type.members,
                    &mut errors,
                );
                union_type.extensions.push(ext_srcloc);
                Ok(())
            },

            Some(non_union_type) =>
                Err(TypeValidationError::InvalidExtensionType {
                    location: ext_srcloc,
                    type_kind: non_union_type.kind(),
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
