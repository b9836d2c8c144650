use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use inherent::inherent;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) documentation: Documentation,
    pub(crate) extensions: Vec<loc::SourceLocation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: IndexMap<String, loc::SourceLocation>,
    pub(crate) name: String,
}

#[inherent]
impl ObjectOrInterfaceType for ObjectOrInterfaceTypeData {
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

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.keys().map(|name| name.as_str()).collect()
    }

    /// Implemented interface names in declaration order, each mapped to the
    /// location of the definition (or extension) that declared it.
    pub fn interfaces(&self) -> &IndexMap<String, loc::SourceLocation> {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
