use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;

/// Information associated with [`GraphQLType::InputObject`](crate::types::GraphQLType::InputObject)
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) documentation: Documentation,
    pub(crate) extensions: Vec<loc::SourceLocation>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
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

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
