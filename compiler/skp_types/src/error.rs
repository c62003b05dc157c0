//! Errors raised while building type descriptors.

use thiserror::Error;

/// A type pattern that does not compile as a regular expression.
///
/// `pattern` is the normalized source, i.e. including an injected plural
/// group, since that is the text handed to the regex compiler.
#[derive(Debug, Error)]
#[error("invalid pattern for type `{base_name}`: {source}")]
pub struct PatternSyntaxError {
    pub base_name: String,
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

impl PatternSyntaxError {
    #[cold]
    pub(crate) fn new(base_name: &str, pattern: &str, source: regex::Error) -> Self {
        PatternSyntaxError {
            base_name: base_name.to_owned(),
            pattern: pattern.to_owned(),
            source,
        }
    }
}
