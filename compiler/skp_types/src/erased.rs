//! Type-erased access to descriptors.
//!
//! Registries hold descriptors for many value types at once. They see them
//! through `dyn AnyTypeDescriptor`, which keeps the same identity contract as
//! [`TypeDescriptor`]: equality over value class, base name and normalized
//! source, hashing over the source alone.

use std::any::Any;
use std::hash::{Hash, Hasher};

use regex::Regex;

use crate::descriptor::TypeDescriptor;
use crate::value_class::ValueClass;

/// Object-safe view of a [`TypeDescriptor`] of any value type.
pub trait AnyTypeDescriptor: Any + Send + Sync {
    fn value_class(&self) -> ValueClass;

    fn base_name(&self) -> &str;

    fn pattern(&self) -> &Regex;

    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> AnyTypeDescriptor for TypeDescriptor<T> {
    fn value_class(&self) -> ValueClass {
        TypeDescriptor::value_class(self)
    }

    fn base_name(&self) -> &str {
        TypeDescriptor::base_name(self)
    }

    fn pattern(&self) -> &Regex {
        TypeDescriptor::pattern(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn AnyTypeDescriptor {
    /// Recover the typed descriptor, if it was built for values of `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&TypeDescriptor<T>> {
        self.as_any().downcast_ref()
    }

    /// Source text of the normalized pattern.
    pub fn pattern_source(&self) -> &str {
        self.pattern().as_str()
    }
}

impl PartialEq for dyn AnyTypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.value_class() == other.value_class()
            && self.base_name() == other.base_name()
            && self.pattern_source() == other.pattern_source()
    }
}

impl Eq for dyn AnyTypeDescriptor {}

impl Hash for dyn AnyTypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern_source().hash(state);
    }
}
