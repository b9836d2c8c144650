/// How the schema documents of one invocation are validated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ValidationMode {
    /// Every document is built and validated on its own, so documents may
    /// not reference each other's types.
    Individually,

    /// All documents are merged into one schema that is validated as a
    /// whole and then printed back per document.
    #[default]
    Merged,
}

/// Options for a sort invocation.
///
/// Build one with [`SortConfig::builder()`]; once built a config is
/// immutable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortConfig {
    descriptions_as_hash_comments: bool,
    generate_all_directive_definitions: bool,
    generate_defined_directive_definitions: bool,
    generate_schema_definition: bool,
    skip_field_argument_sorting: bool,
    skip_union_type_sorting: bool,
    validation_mode: ValidationMode,
}
impl SortConfig {
    pub fn builder() -> SortConfigBuilder {
        SortConfigBuilder::new()
    }

    /// Whether descriptions print as `#` lines rather than string
    /// literals. Defaults to `true`.
    pub fn descriptions_as_hash_comments(&self) -> bool {
        self.descriptions_as_hash_comments
    }

    /// Whether every directive definition prints, the built-in ones
    /// included. Defaults to `false`.
    pub fn generate_all_directive_definitions(&self) -> bool {
        self.generate_all_directive_definitions
    }

    /// Whether the directive definitions declared in the schema documents
    /// print. Defaults to `true`.
    pub fn generate_defined_directive_definitions(&self) -> bool {
        self.generate_defined_directive_definitions
    }

    /// Whether the `schema` block prints even when every root type uses
    /// its default name. Defaults to `false`.
    pub fn generate_schema_definition(&self) -> bool {
        self.generate_schema_definition
    }

    /// Defaults to `false`.
    pub fn skip_field_argument_sorting(&self) -> bool {
        self.skip_field_argument_sorting
    }

    /// Defaults to `false`.
    pub fn skip_union_type_sorting(&self) -> bool {
        self.skip_union_type_sorting
    }

    /// Defaults to [`ValidationMode::Merged`].
    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }
}
impl Default for SortConfig {
    fn default() -> Self {
        Self {
            descriptions_as_hash_comments: true,
            generate_all_directive_definitions: false,
            generate_defined_directive_definitions: true,
            generate_schema_definition: false,
            skip_field_argument_sorting: false,
            skip_union_type_sorting: false,
            validation_mode: ValidationMode::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SortConfigBuilder {
    config: SortConfig,
}
impl SortConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    pub fn build(self) -> SortConfig {
        self.config
    }

    pub fn descriptions_as_hash_comments(mut self, value: bool) -> Self {
        self.config.descriptions_as_hash_comments = value;
        self
    }

    pub fn generate_all_directive_definitions(mut self, value: bool) -> Self {
        self.config.generate_all_directive_definitions = value;
        self
    }

    pub fn generate_defined_directive_definitions(mut self, value: bool) -> Self {
        self.config.generate_defined_directive_definitions = value;
        self
    }

    pub fn generate_schema_definition(mut self, value: bool) -> Self {
        self.config.generate_schema_definition = value;
        self
    }

    pub fn skip_field_argument_sorting(mut self, value: bool) -> Self {
        self.config.skip_field_argument_sorting = value;
        self
    }

    pub fn skip_union_type_sorting(mut self, value: bool) -> Self {
        self.config.skip_union_type_sorting = value;
        self
    }

    pub fn validation_mode(mut self, value: ValidationMode) -> Self {
        self.config.validation_mode = value;
        self
    }
}
impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
