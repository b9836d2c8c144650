use crate::DirectiveAnnotation;

/// Whether a field or enum value is deprecated, and if so, the reason given
/// (if any).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(Option<&'a str>),
    NotDeprecated,
}
impl DeprecationState<'_> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> std::convert::From<&'a [DirectiveAnnotation]> for DeprecationState<'a> {
    fn from(value: &'a [DirectiveAnnotation]) -> DeprecationState<'a> {
        let directive_annot = value.iter().find(|directive_annot| {
            directive_annot.directive_name() == "deprecated"
        });
        match directive_annot {
            Some(directive_annot) => DeprecationState::Deprecated(
                directive_annot.arguments()
                    .get("reason")
                    .and_then(|reason| reason.as_str()),
            ),
            None => DeprecationState::NotDeprecated,
        }
    }
}
