use crate::sort::ComparatorRegistry;
use crate::sort::SortConfig;

/// Which directive definitions the printer emits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveDefinitionFilter {
    /// Every directive definition, the built-in ones included.
    All,
    None,
    /// Only the directive definitions declared in a schema document.
    UserDefined,
}

/// Everything the [`SchemaPrinter`](crate::sort::SchemaPrinter) needs to know
/// about the requested output.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintOptions {
    pub comparators: ComparatorRegistry,
    pub descriptions_as_hash_comments: bool,
    pub directive_definitions: DirectiveDefinitionFilter,
    pub include_schema_definition: bool,
}
impl std::convert::From<&SortConfig> for PrintOptions {
    fn from(config: &SortConfig) -> Self {
        let directive_definitions =
            if config.generate_all_directive_definitions() {
                DirectiveDefinitionFilter::All
            } else if config.generate_defined_directive_definitions() {
                DirectiveDefinitionFilter::UserDefined
            } else {
                DirectiveDefinitionFilter::None
            };

        Self {
            comparators: ComparatorRegistry::from_config(config),
            descriptions_as_hash_comments: config.descriptions_as_hash_comments(),
            directive_definitions,
            include_schema_definition: config.generate_schema_definition(),
        }
    }
}
