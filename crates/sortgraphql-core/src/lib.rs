pub mod ast;
mod directive_annotation;
mod documentation;
mod error;
pub mod loc;
pub mod schema;
pub mod sort;
pub mod types;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use documentation::Documentation;
pub use documentation::SourceText;
pub use error::SortError;
pub use schema::Schema;
pub use sort::SchemaSorter;
pub use sort::SchemaSource;
pub use sort::SortConfig;
pub use sort::SortedSchema;
pub use value::Value;

#[cfg(test)]
mod test;
