//! Literal capabilities a type descriptor can carry.
//!
//! Both are plain function values shared behind `Arc` so descriptors stay
//! cheap to clone and can be handed to other threads.

use std::str::FromStr;
use std::sync::Arc;

/// Converts a raw literal token into a value, or `None` if the text is not a
/// literal of the type.
///
/// Rejection is an expected outcome. Callers that invoke a parser must also
/// treat a panic inside it as a rejection.
pub type LiteralParser<T> = Arc<dyn Fn(&str) -> Option<T> + Send + Sync>;

/// Renders a value of the type as script-facing text.
pub type ToStringFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Wrap a closure as a [`LiteralParser`].
pub fn literal_parser<T, F>(parse: F) -> LiteralParser<T>
where
    F: Fn(&str) -> Option<T> + Send + Sync + 'static,
{
    Arc::new(parse)
}

/// A [`LiteralParser`] backed by `T`'s `FromStr` impl; parse errors become `None`.
pub fn from_str_parser<T>() -> LiteralParser<T>
where
    T: FromStr + 'static,
{
    Arc::new(|text: &str| text.parse::<T>().ok())
}

/// Wrap a closure as a [`ToStringFn`].
pub fn to_string_fn<T, F>(render: F) -> ToStringFn<T>
where
    F: Fn(&T) -> String + Send + Sync + 'static,
{
    Arc::new(render)
}
