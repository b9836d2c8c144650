use crate::ast;
use crate::loc;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::fmt;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField) or
/// [`Parameter`](crate::types::Parameter).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(
        src_loc: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
    ) -> Self {
        Self::from_ast_type_impl(src_loc, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type: Box::new(Self::from_ast_type_impl(
                        location,
                        inner,
                        true,
                    )),
                    nullable,
                    ref_location: location.to_owned(),
                }),

            ast::schema::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    ref_location: location.to_owned(),
                    type_name: name.to_string(),
                }),

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type, .. }) =>
                inner_type.innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    /// Check if two type annotations are definitionally equal: same
    /// structure, same nullability at each level and same innermost type
    /// name. Source locations are ignored.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list)) =>
                self_list.nullable == other_list.nullable
                    && self_list.inner_type.is_equivalent_to(&other_list.inner_type),
            (Self::Named(self_named), Self::Named(other_named)) =>
                self_named.nullable == other_named.nullable
                    && self_named.type_name == other_named.type_name,
            _ => false,
        }
    }

    /// Whether a field declared with this annotation validly implements an
    /// interface field declared with `other`.
    ///
    /// https://spec.graphql.org/October2021/#IsValidImplementationFieldType()
    pub(crate) fn is_subtype_of(
        &self,
        types_map: &IndexMap<String, GraphQLType>,
        other: &Self,
    ) -> bool {
        if self.nullable() && !other.nullable() {
            return false;
        }

        match (self, other) {
            (Self::List(self_list), Self::List(other_list)) =>
                self_list.inner_type.is_subtype_of(
                    types_map,
                    &other_list.inner_type,
                ),

            (Self::Named(self_named), Self::Named(other_named)) => {
                if self_named.type_name == other_named.type_name {
                    return true;
                }
                match types_map.get(other_named.type_name.as_str()) {
                    Some(GraphQLType::Interface(iface)) =>
                        types_map.get(self_named.type_name.as_str())
                            .and_then(|self_type| self_type.interface_names())
                            .is_some_and(|iface_names| {
                                iface_names.contains(&iface.name())
                            }),
                    Some(GraphQLType::Union(union_type)) =>
                        union_type.members().contains_key(self_named.type_name.as_str()),
                    _ => false,
                }
            },

            _ => false,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable,
            Self::Named(annot) => annot.nullable,
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) of the element this
    /// annotation was written on. graphql_parser doesn't track positions
    /// of type annotations themselves.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => &annot.ref_location,
            Self::Named(annot) => &annot.ref_location,
        }
    }
}
impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(annot) => annot.fmt(f),
            Self::Named(annot) => annot.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
    pub(crate) ref_location: loc::SourceLocation,
}
impl ListTypeAnnotation {
    pub fn inner_type(&self) -> &TypeAnnotation {
        &self.inner_type
    }
}
impl fmt::Display for ListTypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.inner_type)?;
        if !self.nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) ref_location: loc::SourceLocation,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl fmt::Display for NamedTypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)?;
        if !self.nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}
