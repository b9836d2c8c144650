/// The documentation attached to a named schema element.
///
/// GraphQL has two ways to document an element: a structured description
/// (a string literal preceding the definition) and legacy `#` line comments.
/// Both are kept because older schemas often mix documentation comments with
/// ordinary ones.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Documentation {
    pub(crate) comments: Vec<String>,
    pub(crate) description: Option<String>,
}
impl Documentation {
    /// Blank comment lines are dropped.
    pub fn new(comments: Vec<String>, description: Option<String>) -> Self {
        Self {
            comments: comments.into_iter()
                .filter(|comment| !comment.trim().is_empty())
                .collect(),
            description,
        }
    }

    /// Leading comment lines with the `#` marker stripped.
    pub fn comments(&self) -> &[String] {
        self.comments.as_slice()
    }

    /// The structured description, if one is present and not blank.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
            .filter(|description| !description.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.description().is_none()
    }

    /// The description as seen by tools that predate structured
    /// descriptions: the structured description when present, otherwise the
    /// leading comments (trimmed) joined with a single space.
    pub fn legacy_description(&self) -> Option<String> {
        if let Some(description) = self.description() {
            return Some(description.to_string());
        }
        if self.comments.is_empty() {
            None
        } else {
            Some(
                self.comments.iter()
                    .map(|comment| comment.trim())
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        }
    }
}
