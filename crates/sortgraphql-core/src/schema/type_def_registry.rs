use crate::ast;
use crate::Documentation;
use crate::loc;
use crate::SortError;
use crate::SourceText;
use crate::types::Directive;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SortError>;

/// A parsed document's identity and raw text, shared by every definition
/// parsed from it.
#[derive(Clone, Debug)]
pub(crate) struct ParsedSource {
    pub(crate) id: loc::SourceId,
    pub(crate) text: SourceText,
}
impl ParsedSource {
    pub(crate) fn new(id: loc::SourceId, content: &str) -> Self {
        Self {
            id,
            text: SourceText::new(content),
        }
    }

    pub(crate) fn documentation(
        &self,
        pos: &ast::Pos,
        description: &Option<String>,
    ) -> Documentation {
        self.text.documentation(pos, description)
    }

    pub(crate) fn file_position(&self, pos: &ast::Pos) -> loc::FilePosition {
        loc::FilePosition::from_pos(&self.id, *pos)
    }

    pub(crate) fn location(&self, pos: &ast::Pos) -> loc::SourceLocation {
        self.file_position(pos).into()
    }
}

/// The unvalidated type definitions of one or more schema documents, in
/// document order.
///
/// Each [`SchemaParser`](crate::schema::SchemaParser) invocation produces a
/// registry for a single document; registries are then
/// [merged](TypeDefRegistry::merge) before the
/// [`SchemaBuilder`](crate::schema::SchemaBuilder) turns them into a
/// [`Schema`](crate::Schema).
#[derive(Clone, Debug, Default)]
pub struct TypeDefRegistry {
    directive_defs: IndexMap<String, (ParsedSource, ast::schema::DirectiveDefinition)>,
    schema_def: Option<(ParsedSource, ast::schema::SchemaDefinition)>,
    sources: Vec<loc::SourceId>,
    type_defs: IndexMap<String, (ParsedSource, ast::schema::TypeDefinition)>,
    type_extensions: Vec<(ParsedSource, ast::schema::TypeExtension)>,
}
impl TypeDefRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a query root is declared, either through the schema
    /// definition or by a type with the default `Query` name.
    pub fn declares_query_root(&self) -> bool {
        let declared_in_schema_def =
            self.schema_def.as_ref()
                .is_some_and(|(_, schema_def)| schema_def.query.is_some());
        declared_in_schema_def || self.type_defs.contains_key("Query")
    }

    pub fn directive_names(&self) -> impl Iterator<Item = &str> {
        self.directive_defs.keys().map(|name| name.as_str())
    }

    pub fn has_schema_definition(&self) -> bool {
        self.schema_def.is_some()
    }

    /// Merges the definitions of `other` into this registry.
    ///
    /// Two documents may not define the same type or directive, nor may both
    /// declare a `schema` definition. The one exception is a redeclaration
    /// of a built-in directive (e.g. `@deprecated`) across documents, where
    /// the first declaration is kept.
    pub fn merge(&mut self, other: TypeDefRegistry) -> Result<()> {
        for source in other.sources {
            if !self.sources.contains(&source) {
                self.sources.push(source);
            }
        }

        for (name, (source, def)) in other.directive_defs {
            let redeclared_builtin =
                Directive::is_builtin_name(&name)
                && self.directive_defs.get(&name)
                    .is_some_and(|(existing_source, _)| existing_source.id != source.id);
            if redeclared_builtin {
                continue;
            }
            self.add_directive_def(source, def)?;
        }

        if let Some((source, schema_def)) = other.schema_def {
            self.add_schema_def(source, schema_def)?;
        }

        for (_, (source, def)) in other.type_defs {
            self.add_type_def(source, def)?;
        }

        self.type_extensions.extend(other.type_extensions);
        Ok(())
    }

    pub fn sources(&self) -> &[loc::SourceId] {
        self.sources.as_slice()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.type_defs.keys().map(|name| name.as_str())
    }

    pub(crate) fn directive_defs(
        &self,
    ) -> impl Iterator<Item = &(ParsedSource, ast::schema::DirectiveDefinition)> {
        self.directive_defs.values()
    }

    pub(crate) fn from_document(
        source: ParsedSource,
        document: ast::schema::Document,
    ) -> Result<Self> {
        let mut registry = Self {
            sources: vec![source.id.to_owned()],
            ..Self::default()
        };

        for def in document.definitions {
            match def {
                ast::schema::Definition::DirectiveDefinition(def) =>
                    registry.add_directive_def(source.to_owned(), def)?,
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    registry.add_schema_def(source.to_owned(), schema_def)?,
                ast::schema::Definition::TypeDefinition(def) =>
                    registry.add_type_def(source.to_owned(), def)?,
                ast::schema::Definition::TypeExtension(ext) =>
                    registry.type_extensions.push((source.to_owned(), ext)),
            }
        }

        Ok(registry)
    }

    pub(crate) fn schema_def(
        &self,
    ) -> Option<&(ParsedSource, ast::schema::SchemaDefinition)> {
        self.schema_def.as_ref()
    }

    pub(crate) fn type_defs(
        &self,
    ) -> impl Iterator<Item = &(ParsedSource, ast::schema::TypeDefinition)> {
        self.type_defs.values()
    }

    pub(crate) fn type_extensions(
        &self,
    ) -> impl Iterator<Item = &(ParsedSource, ast::schema::TypeExtension)> {
        self.type_extensions.iter()
    }

    fn add_directive_def(
        &mut self,
        source: ParsedSource,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        if let Some((existing_source, existing_def)) = self.directive_defs.get(&def.name) {
            return Err(SortError::MergeConflict {
                first: existing_source.file_position(&existing_def.position),
                name: format!("@{}", def.name),
                second: source.file_position(&def.position),
            });
        }
        self.directive_defs.insert(def.name.to_string(), (source, def));
        Ok(())
    }

    fn add_schema_def(
        &mut self,
        source: ParsedSource,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        if let Some((existing_source, existing_def)) = &self.schema_def {
            return Err(SortError::MergeConflict {
                first: existing_source.file_position(&existing_def.position),
                name: "schema".to_string(),
                second: source.file_position(&schema_def.position),
            });
        }
        self.schema_def = Some((source, schema_def));
        Ok(())
    }

    fn add_type_def(
        &mut self,
        source: ParsedSource,
        def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        let (name, position) = type_def_name_and_position(&def);
        if let Some((existing_source, existing_def)) = self.type_defs.get(name) {
            let (_, existing_position) = type_def_name_and_position(existing_def);
            return Err(SortError::MergeConflict {
                first: existing_source.file_position(&existing_position),
                name: name.to_string(),
                second: source.file_position(&position),
            });
        }
        self.type_defs.insert(name.to_string(), (source, def));
        Ok(())
    }
}

fn type_def_name_and_position(
    def: &ast::schema::TypeDefinition,
) -> (&str, ast::Pos) {
    match def {
        ast::schema::TypeDefinition::Enum(def) => (def.name.as_str(), def.position),
        ast::schema::TypeDefinition::InputObject(def) => (def.name.as_str(), def.position),
        ast::schema::TypeDefinition::Interface(def) => (def.name.as_str(), def.position),
        ast::schema::TypeDefinition::Object(def) => (def.name.as_str(), def.position),
        ast::schema::TypeDefinition::Scalar(def) => (def.name.as_str(), def.position),
        ast::schema::TypeDefinition::Union(def) => (def.name.as_str(), def.position),
    }
}
