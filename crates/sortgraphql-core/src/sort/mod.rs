mod comparator_registry;
mod print_options;
mod schema_printer;
mod schema_sorter;
mod sort_config;

pub use comparator_registry::ChildKind;
pub use comparator_registry::ComparatorRegistry;
pub use comparator_registry::ElementOrder;
pub use comparator_registry::ParentKind;
pub use print_options::DirectiveDefinitionFilter;
pub use print_options::PrintOptions;
pub use schema_printer::PrintScope;
pub use schema_printer::SchemaPrinter;
pub use schema_sorter::is_sorted;
pub use schema_sorter::SchemaSorter;
pub use schema_sorter::SchemaSource;
pub use schema_sorter::SortedSchema;
pub use sort_config::SortConfig;
pub use sort_config::SortConfigBuilder;
pub use sort_config::ValidationMode;

#[cfg(test)]
mod tests;
