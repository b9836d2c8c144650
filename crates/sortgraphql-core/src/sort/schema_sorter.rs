use crate::loc;
use crate::Schema;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaParser;
use crate::schema::TypeDefRegistry;
use crate::SortError;
use crate::sort::PrintOptions;
use crate::sort::PrintScope;
use crate::sort::SchemaPrinter;
use crate::sort::SortConfig;
use crate::sort::ValidationMode;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SortError>;

/// One schema document to sort, identified by `id` (typically its file
/// path).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaSource {
    pub content: String,
    pub id: loc::SourceId,
}
impl SchemaSource {
    pub fn new(id: impl Into<loc::SourceId>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            id: id.into(),
        }
    }
}

/// The canonical rendering of one [`SchemaSource`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortedSchema {
    pub original: String,
    pub sorted: String,
    pub source: loc::SourceId,
}
impl SortedSchema {
    pub fn is_sorted(&self) -> bool {
        is_sorted(&self.original, &self.sorted)
    }
}

/// A document is sorted when it is exactly its canonical rendering. No
/// whitespace or line ending normalization is applied.
pub fn is_sorted(original: &str, sorted: &str) -> bool {
    original == sorted
}

/// Parses, validates and canonically prints GraphQL schema documents.
#[derive(Clone, Debug)]
pub struct SchemaSorter {
    config: SortConfig,
    print_options: PrintOptions,
}
impl SchemaSorter {
    pub fn new(config: SortConfig) -> Self {
        Self {
            print_options: PrintOptions::from(&config),
            config,
        }
    }

    /// Builds one validated [`Schema`] from every source, merged in input
    /// order.
    pub fn build_schema(&self, sources: &[SchemaSource]) -> Result<Schema> {
        check_sources(sources)?;
        SchemaBuilder::build(&merged_registry(sources)?)
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Returns the canonical rendering of each source, in input order.
    ///
    /// In [`ValidationMode::Merged`] all sources are validated together and
    /// each output only holds what its own source declared. In
    /// [`ValidationMode::Individually`] every source must form a complete
    /// schema on its own.
    pub fn sort(&self, sources: &[SchemaSource]) -> Result<Vec<SortedSchema>> {
        check_sources(sources)?;
        let printer = SchemaPrinter::new(&self.print_options);

        match self.config.validation_mode() {
            ValidationMode::Merged => {
                let schema = SchemaBuilder::build(&merged_registry(sources)?)?;
                Ok(sources.iter()
                    .map(|source| SortedSchema {
                        original: source.content.to_string(),
                        sorted: printer.print(
                            &schema,
                            &PrintScope::Source(source.id.to_owned()),
                        ),
                        source: source.id.to_owned(),
                    })
                    .collect())
            },

            ValidationMode::Individually => {
                let mut sorted_schemas = vec![];
                for source in sources {
                    let registry = SchemaParser::parse(&source.id, &source.content)?;
                    let schema = SchemaBuilder::build(&registry)?;
                    sorted_schemas.push(SortedSchema {
                        original: source.content.to_string(),
                        sorted: printer.print(&schema, &PrintScope::Whole),
                        source: source.id.to_owned(),
                    });
                }
                Ok(sorted_schemas)
            },
        }
    }

    /// Merges every source into one schema and renders it as a single
    /// canonical document.
    pub fn sort_as_single_document(&self, sources: &[SchemaSource]) -> Result<String> {
        let schema = self.build_schema(sources)?;
        Ok(SchemaPrinter::new(&self.print_options).print(&schema, &PrintScope::Whole))
    }
}
impl Default for SchemaSorter {
    fn default() -> Self {
        Self::new(SortConfig::default())
    }
}

fn check_sources(sources: &[SchemaSource]) -> Result<()> {
    if sources.is_empty() {
        return Err(SortError::configuration(
            "sources",
            "at least one schema source is required",
        ));
    }

    let mut seen_ids = HashSet::new();
    for source in sources {
        if source.id.as_str().is_empty() {
            return Err(SortError::configuration(
                "sources",
                "schema source ids must not be empty",
            ));
        }
        if !seen_ids.insert(&source.id) {
            return Err(SortError::configuration(
                "sources",
                format!("the `{}` schema source id is used more than once", source.id),
            ));
        }
    }
    Ok(())
}

fn merged_registry(sources: &[SchemaSource]) -> Result<TypeDefRegistry> {
    let mut registry = TypeDefRegistry::new();
    for source in sources {
        registry.merge(SchemaParser::parse(&source.id, &source.content)?)?;
    }
    Ok(registry)
}
