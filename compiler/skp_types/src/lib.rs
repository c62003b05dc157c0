//! Skp Types - pattern-matched type descriptors for the skp script front-end.
//!
//! A script type such as `number` or `item type` is described by a value
//! class, a lowercase base name, and a regex recognizing the type in syntax
//! templates. This crate provides:
//! - `TypeDescriptor`: the immutable descriptor and its identity contract
//! - Plural-group normalization of type patterns
//! - Literal capabilities (`LiteralParser`, `ToStringFn`)
//! - `AnyTypeDescriptor`: a type-erased view for heterogeneous registries
//!
//! # Plural forms
//!
//! Every compiled pattern has a named group `plural`. Patterns for irregular
//! plurals name it themselves, `part(y|(?<plural>ies))`; any other pattern
//! has `(?<plural>)??` appended, which never captures text.
//!
//! # Collaborators
//!
//! The registry that indexes descriptors, the syntax matcher that embeds
//! their patterns, and the layer that calls literal parsers all live outside
//! this crate. A literal parser signals rejection with `None`; a parser that
//! panics must be treated the same way by whoever calls it.

mod descriptor;
mod erased;
mod error;
pub mod literal;
pub mod plural;
mod value_class;

pub use descriptor::TypeDescriptor;
pub use erased::AnyTypeDescriptor;
pub use error::PatternSyntaxError;
pub use literal::{from_str_parser, literal_parser, to_string_fn, LiteralParser, ToStringFn};
pub use plural::{has_plural_group, PLURAL_GROUP};
pub use value_class::ValueClass;
