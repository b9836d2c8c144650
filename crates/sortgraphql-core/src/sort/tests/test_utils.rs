use crate::SchemaSorter;
use crate::SchemaSource;
use crate::SortConfig;

pub(super) const SOURCE_ID: &str = "schema.graphqls";

/// Sorts a single document with `config`.
pub(super) fn sort_with(config: SortConfig, sdl: &str) -> String {
    SchemaSorter::new(config)
        .sort(&[SchemaSource::new(SOURCE_ID, sdl)])
        .expect("sort failed")
        .remove(0)
        .sorted
}

/// Sorts a single document with the default configuration.
pub(super) fn sort(sdl: &str) -> String {
    sort_with(SortConfig::default(), sdl)
}
