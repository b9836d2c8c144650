use crate::ast;
use crate::loc;
use crate::schema::ParsedSource;
use crate::schema::TypeDefRegistry;
use crate::SortError;

type Result<T> = std::result::Result<T, SortError>;

/// Parses schema documents into [`TypeDefRegistry`]s.
pub struct SchemaParser;
impl SchemaParser {
    /// Parses `content` into a registry of its definitions. The `source_id`
    /// is attached to every definition's location and to any error.
    pub fn parse(
        source_id: &loc::SourceId,
        content: &str,
    ) -> Result<TypeDefRegistry> {
        let document =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| parse_failure(source_id, &err))?
                .into_static();

        TypeDefRegistry::from_document(
            ParsedSource::new(source_id.to_owned(), content),
            document,
        )
    }
}

/// graphql_parser only exposes its errors as text of the form:
///
/// ```text
/// schema parse error: Parse error at 1:17
/// Unexpected `}[Punctuator]`
/// Expected Name
/// ```
fn parse_failure(
    source_id: &loc::SourceId,
    err: &ast::schema::ParseError,
) -> SortError {
    let full_message = err.to_string();
    let message =
        full_message.strip_prefix("schema parse error: ")
            .unwrap_or(&full_message)
            .trim_end();

    let (line, column) =
        message.lines()
            .find_map(|line| line.strip_prefix("Parse error at "))
            .and_then(|position| {
                let (line, column) = position.trim().split_once(':')?;
                Some((line.parse().ok()?, column.parse().ok()?))
            })
            .unwrap_or((0, 0));

    let token =
        message.lines()
            .find_map(|line| line.strip_prefix("Unexpected `"))
            .and_then(|token| token.strip_suffix('`'))
            .map(|token| match token.rfind('[') {
                Some(kind_start) if kind_start > 0 && token.ends_with(']') =>
                    token[..kind_start].to_string(),
                _ => token.to_string(),
            });

    SortError::Parse {
        column,
        line,
        message: message.to_string(),
        source_id: source_id.to_owned(),
        token,
    }
}
