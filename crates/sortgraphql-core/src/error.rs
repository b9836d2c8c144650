use crate::loc;
use crate::schema::TypeValidationError;
use thiserror::Error;

/// Everything that can go wrong while sorting a schema.
///
/// Every error is unrecoverable for the invocation that produced it, and all
/// of them are raised before any output text is produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SortError {
    #[error("Invalid configuration for `{setting}`: {reason}")]
    Configuration {
        reason: String,
        setting: String,
    },

    #[error(
        "Conflicting definitions of `{name}`: declared at {first} and again at \
        {second}"
    )]
    MergeConflict {
        first: loc::FilePosition,
        name: String,
        second: loc::FilePosition,
    },

    #[error(
        "Error parsing schema '{source_id}' at {line}:{column}{}: {message}",
        token.as_ref().map(|token| format!(" near `{token}`")).unwrap_or_default(),
    )]
    Parse {
        column: usize,
        line: usize,
        message: String,
        source_id: loc::SourceId,
        token: Option<String>,
    },

    #[error(
        "Cannot process schema from filename '{}', encountered the following \
        validation errors:\n{}",
        files.iter()
            .map(|file| file.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    Validation {
        errors: Vec<TypeValidationError>,
        files: Vec<loc::SourceId>,
    },
}
impl SortError {
    pub(crate) fn configuration(
        setting: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            reason: reason.into(),
            setting: setting.into(),
        }
    }
}
