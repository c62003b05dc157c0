//! Plural-group normalization of type patterns.
//!
//! Every compiled type pattern carries a named group `plural` that the syntax
//! matcher inspects to tell `item` from `items`. Patterns that spell out their
//! own plural form (`part(y|(?<plural>ies))`) keep it; every other pattern
//! gets an empty, optional, lazy group appended so the lookup always resolves.
//!
//! Detection is a narrow textual check, not an escape parser: an occurrence of
//! `(?<plural>` counts unless the byte right before it is a backslash. This
//! also means `\\(?<plural>` (an escaped backslash followed by a real group)
//! is treated as escaped.

use std::borrow::Cow;

/// Name of the capture group holding the plural inflection.
pub const PLURAL_GROUP: &str = "plural";

const PLURAL_GROUP_OPEN: &str = "(?<plural>";

/// Appended to patterns without their own plural group.
///
/// Optional and lazy, so it never captures text and defaults to not matching.
pub const PLURAL_SUFFIX: &str = "(?<plural>)??";

/// Whether `pattern` already opens an unescaped `plural` group.
pub fn has_plural_group(pattern: &str) -> bool {
    pattern
        .match_indices(PLURAL_GROUP_OPEN)
        .any(|(start, _)| !pattern[..start].ends_with('\\'))
}

/// Trim `pattern` and make sure it contains a `plural` group.
///
/// Borrows when the trimmed pattern can be used as-is.
pub fn normalize_pattern(pattern: &str) -> Cow<'_, str> {
    let trimmed = pattern.trim();
    if has_plural_group(trimmed) {
        Cow::Borrowed(trimmed)
    } else {
        let mut source = String::with_capacity(trimmed.len() + PLURAL_SUFFIX.len());
        source.push_str(trimmed);
        source.push_str(PLURAL_SUFFIX);
        Cow::Owned(source)
    }
}

#[cfg(test)]
mod tests;
