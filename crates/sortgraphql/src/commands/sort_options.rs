use crate::file_util;
use sortgraphql_core::SchemaSorter;
use sortgraphql_core::SchemaSource;
use sortgraphql_core::SortConfig;
use sortgraphql_core::SortedSchema;
use sortgraphql_core::sort::ValidationMode;
use std::path::PathBuf;

/// Options shared by every command that sorts schema files.
#[derive(Debug, clap::Args)]
pub(crate) struct SortOptions {
    #[arg(
        default_value="UTF-8",
        help="Encoding of the schema files.",
        long,
    )]
    pub(crate) encoding: String,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be sorted.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,

    #[arg(
        help="Print every directive definition, the built-in ones included.",
        long,
    )]
    pub(crate) generate_all_directive_definitions: bool,

    #[arg(
        help="Print the `schema` block even when every root type uses its \
             default name.",
        long,
    )]
    pub(crate) generate_schema_definition: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Validate and sort every file on its own instead of as parts of \
             one merged schema.",
        long,
    )]
    pub(crate) individual_schemas: bool,

    #[arg(
        help="Print descriptions as string literals instead of `#` comments.",
        long,
    )]
    pub(crate) quoted_descriptions: bool,

    #[arg(
        help="Leave out the directive definitions declared in the schema files.",
        long,
    )]
    pub(crate) skip_defined_directive_definitions: bool,

    #[arg(
        help="Keep field arguments in declaration order.",
        long,
    )]
    pub(crate) skip_field_argument_sorting: bool,

    #[arg(
        help="Keep union members in declaration order.",
        long,
    )]
    pub(crate) skip_union_type_sorting: bool,
}
impl SortOptions {
    pub(crate) fn sort_config(&self) -> SortConfig {
        let validation_mode =
            if self.individual_schemas {
                ValidationMode::Individually
            } else {
                ValidationMode::Merged
            };

        SortConfig::builder()
            .descriptions_as_hash_comments(!self.quoted_descriptions)
            .generate_all_directive_definitions(self.generate_all_directive_definitions)
            .generate_defined_directive_definitions(!self.skip_defined_directive_definitions)
            .generate_schema_definition(self.generate_schema_definition)
            .skip_field_argument_sorting(self.skip_field_argument_sorting)
            .skip_union_type_sorting(self.skip_union_type_sorting)
            .validation_mode(validation_mode)
            .build()
    }

    /// Finds, reads and sorts the schema files, returning each file's path
    /// with its sorted rendering.
    pub(crate) fn sort_files(&self) -> anyhow::Result<Vec<(PathBuf, SortedSchema)>> {
        file_util::check_encoding(&self.encoding)?;

        let file_paths =
            file_util::find_schema_files(&self.file_or_dir_paths, &self.graphql_file_exts)?;
        let mut sources = vec![];
        for path in &file_paths {
            let content = file_util::read_schema(path)?;
            sources.push(SchemaSource::new(path.to_string_lossy().to_string(), content));
        }

        let sorted = SchemaSorter::new(self.sort_config()).sort(&sources)?;
        Ok(file_paths.into_iter().zip(sorted).collect())
    }
}
