use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceType {
    fn def_location(&self) -> &loc::SourceLocation;
    fn directives(&self) -> &[DirectiveAnnotation];
    fn documentation(&self) -> &Documentation;
    fn extensions(&self) -> &[loc::SourceLocation];
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn interfaces(&self) -> &IndexMap<String, loc::SourceLocation>;
    fn name(&self) -> &str;
}
