#[allow(clippy::module_inception)]
mod documentation;
mod source_text;

pub use documentation::Documentation;
pub use source_text::SourceText;

#[cfg(test)]
mod tests;
