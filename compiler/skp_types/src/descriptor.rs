//! Named, pattern-matched type descriptors.
//!
//! A `TypeDescriptor` ties a value class and a lowercase base name to the
//! regex that recognizes the type in script syntax. The pattern is normalized
//! at construction (see [`crate::plural`]) so the `plural` group is always
//! there to inspect.
//!
//! # Identity
//!
//! Two descriptors are equal when value class, base name and normalized
//! pattern source all match. The hash only covers the pattern source, which
//! keeps `a == b => hash(a) == hash(b)` while letting a registry bucket
//! descriptors by pattern alone. Anything that needs full identity must still
//! compare with `==`; a hash collision says nothing about base name or class.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;

use crate::error::PatternSyntaxError;
use crate::literal::{LiteralParser, ToStringFn};
use crate::plural::normalize_pattern;
use crate::value_class::ValueClass;

/// Immutable description of one script-visible type.
pub struct TypeDescriptor<T> {
    value_class: ValueClass,
    base_name: String,
    /// Normalized pattern; its source text is part of the descriptor's identity.
    pattern: Regex,
    literal_parser: Option<LiteralParser<T>>,
    to_string: Option<ToStringFn<T>>,
}

impl<T: 'static> TypeDescriptor<T> {
    /// Descriptor whose value class is `T` itself, without a literal parser.
    pub fn of(base_name: impl Into<String>, pattern: &str) -> Result<Self, PatternSyntaxError> {
        Self::new(ValueClass::of::<T>(), base_name, pattern)
    }
}

impl<T> TypeDescriptor<T> {
    /// Descriptor for types that are only recognized, never written as literals.
    pub fn new(
        value_class: ValueClass,
        base_name: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, PatternSyntaxError> {
        Self::from_parts(value_class, base_name, pattern, None)
    }

    /// Descriptor with a parser for literal tokens of the type.
    pub fn with_literal_parser(
        value_class: ValueClass,
        base_name: impl Into<String>,
        pattern: &str,
        literal_parser: LiteralParser<T>,
    ) -> Result<Self, PatternSyntaxError> {
        Self::from_parts(value_class, base_name, pattern, Some(literal_parser))
    }

    /// Build a descriptor, normalizing and compiling `pattern`.
    ///
    /// The pattern is trimmed, and `(?<plural>)??` is appended unless it
    /// already opens an unescaped `plural` group.
    pub fn from_parts(
        value_class: ValueClass,
        base_name: impl Into<String>,
        pattern: &str,
        literal_parser: Option<LiteralParser<T>>,
    ) -> Result<Self, PatternSyntaxError> {
        let base_name = base_name.into();
        let pattern = compile(&base_name, pattern)?;
        Ok(TypeDescriptor {
            value_class,
            base_name,
            pattern,
            literal_parser,
            to_string: None,
        })
    }

    /// Attach a function rendering values of this type as text.
    #[must_use]
    pub fn with_to_string(mut self, to_string: ToStringFn<T>) -> Self {
        self.to_string = Some(to_string);
        self
    }

    #[inline]
    pub fn value_class(&self) -> ValueClass {
        self.value_class
    }

    #[inline]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The compiled, normalized pattern.
    #[inline]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Source text of the normalized pattern.
    #[inline]
    pub fn pattern_source(&self) -> &str {
        self.pattern.as_str()
    }

    /// The literal parser, if this type accepts literals.
    ///
    /// The descriptor never calls it; whoever does must treat both `None` and
    /// a panic as "not a literal of this type".
    #[inline]
    pub fn literal_parser(&self) -> Option<&LiteralParser<T>> {
        self.literal_parser.as_ref()
    }

    #[inline]
    pub fn to_string_fn(&self) -> Option<&ToStringFn<T>> {
        self.to_string.as_ref()
    }

    /// Render `value` with the attached function, or its `Display` impl.
    pub fn display_value(&self, value: &T) -> String
    where
        T: fmt::Display,
    {
        match &self.to_string {
            Some(render) => render(value),
            None => value.to_string(),
        }
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(base_name = %base_name))]
fn compile(base_name: &str, pattern: &str) -> Result<Regex, PatternSyntaxError> {
    let source = normalize_pattern(pattern);
    if let Cow::Owned(ref normalized) = source {
        tracing::trace!(%normalized, "appended plural group");
    }

    Regex::new(&source).map_err(|err| {
        tracing::debug!(%source, error = %err, "rejected type pattern");
        PatternSyntaxError::new(base_name, &source, err)
    })
}

impl<T> Clone for TypeDescriptor<T> {
    fn clone(&self) -> Self {
        TypeDescriptor {
            value_class: self.value_class,
            base_name: self.base_name.clone(),
            pattern: self.pattern.clone(),
            literal_parser: self.literal_parser.clone(),
            to_string: self.to_string.clone(),
        }
    }
}

impl<T, U> PartialEq<TypeDescriptor<U>> for TypeDescriptor<T> {
    fn eq(&self, other: &TypeDescriptor<U>) -> bool {
        self.value_class == other.value_class
            && self.base_name == other.base_name
            && self.pattern.as_str() == other.pattern.as_str()
    }
}

impl<T> Eq for TypeDescriptor<T> {}

/// Hashes the normalized pattern source only. Coarser than `==`, never finer.
impl<T> Hash for TypeDescriptor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.as_str().hash(state);
    }
}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("value_class", &self.value_class)
            .field("base_name", &self.base_name)
            .field("pattern", &self.pattern.as_str())
            .field("literal_parser", &self.literal_parser.is_some())
            .finish_non_exhaustive()
    }
}
