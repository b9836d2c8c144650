use crate::ast;
use std::fmt;
use std::sync::Arc;

/// Identifies the schema source (typically a file) that an element was parsed
/// from.
///
/// Cloning a [`SourceId`] is cheap, so every parsed element carries its own
/// copy as a plain lookup key.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourceId(Arc<str>);
impl SourceId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl std::convert::From<&str> for SourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
impl std::convert::From<String> for SourceId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes the [`SourceId`] of the document the position refers to.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub line: usize,
    pub source: SourceId,
}
impl FilePosition {
    pub(crate) fn from_pos(source: &SourceId, pos: ast::Pos) -> Self {
        Self {
            col: pos.column,
            line: pos.line,
            source: source.to_owned(),
        }
    }

    pub fn into_source_location(self) -> SourceLocation {
        SourceLocation::Schema(self)
    }
}
impl fmt::Display for FilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.col)
    }
}

/// Where a schema element was defined.
///
/// This is the provenance the printer filters on when a merged schema is
/// split back into per-source documents.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SourceLocation {
    /// Defined by the GraphQL specification (built-in scalars and
    /// directives).
    GraphQLBuiltIn,

    /// Injected while building the schema and never printed (the
    /// placeholder `Query` root).
    Synthetic,

    Schema(FilePosition),
}
impl SourceLocation {
    pub fn file_position(&self) -> Option<&FilePosition> {
        if let Self::Schema(file_position) = self {
            Some(file_position)
        } else {
            None
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic)
    }

    pub fn source(&self) -> Option<&SourceId> {
        self.file_position().map(|file_position| &file_position.source)
    }

    pub(crate) fn with_ast_position(&self, pos: &ast::Pos) -> Self {
        match self {
            Self::GraphQLBuiltIn
                | Self::Synthetic =>
                self.to_owned(),
            Self::Schema(file_position) =>
                Self::Schema(FilePosition::from_pos(&file_position.source, *pos)),
        }
    }
}
impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphQLBuiltIn => f.write_str("<builtin>"),
            Self::Synthetic => f.write_str("<synthetic>"),
            Self::Schema(file_position) => file_position.fmt(f),
        }
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
