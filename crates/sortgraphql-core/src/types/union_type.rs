use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use indexmap::IndexMap;

/// Information associated with [`GraphQLType::Union`](crate::types::GraphQLType::Union)
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) documentation: Documentation,
    pub(crate) extensions: Vec<loc::SourceLocation>,
    pub(crate) members: IndexMap<String, loc::SourceLocation>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    pub fn extensions(&self) -> &[loc::SourceLocation] {
        self.extensions.as_slice()
    }

    /// Member type names in declaration order, each mapped to the location
    /// of the definition (or extension) that declared it.
    pub fn members(&self) -> &IndexMap<String, loc::SourceLocation> {
        &self.members
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
