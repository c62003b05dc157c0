//! Identity of the Rust type a descriptor produces values of.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The value kind a type descriptor stands for.
///
/// Compared by `TypeId`; the type name is kept only for diagnostics.
#[derive(Clone, Copy)]
pub struct ValueClass {
    id: TypeId,
    name: &'static str,
}

impl ValueClass {
    /// The value class of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        ValueClass {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified Rust type name, as reported by `std::any::type_name`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this class is exactly `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ValueClass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueClass {}

impl Hash for ValueClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueClass({})", self.name)
    }
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
