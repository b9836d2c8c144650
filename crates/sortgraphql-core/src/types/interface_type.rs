use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use inherent::inherent;
use indexmap::IndexMap;

/// Information associated with [`GraphQLType::Interface`](crate::types::GraphQLType::Interface)
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceType for InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.0.directives()
    }

    pub fn documentation(&self) -> &Documentation {
        self.0.documentation()
    }

    pub fn extensions(&self) -> &[loc::SourceLocation] {
        self.0.extensions()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn interfaces(&self) -> &IndexMap<String, loc::SourceLocation> {
        self.0.interfaces()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
