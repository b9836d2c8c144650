use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::types::DeprecationState;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) documentation: Documentation,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
