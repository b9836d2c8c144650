use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::schema::ScalarBinding;

/// Information associated with [`GraphQLType::Scalar`](crate::types::GraphQLType::Scalar)
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) binding: ScalarBinding,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) documentation: Documentation,
    pub(crate) extensions: Vec<loc::SourceLocation>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn binding(&self) -> &ScalarBinding {
        &self.binding
    }

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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
