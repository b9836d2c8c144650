use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::types::EnumValue;
use indexmap::IndexMap;

/// Information associated with [`GraphQLType::Enum`](crate::types::GraphQLType::Enum)
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) documentation: Documentation,
    pub(crate) extensions: Vec<loc::SourceLocation>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    /// Locations of the `extend enum` blocks that contributed to this type.
    pub fn extensions(&self) -> &[loc::SourceLocation] {
        self.extensions.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
