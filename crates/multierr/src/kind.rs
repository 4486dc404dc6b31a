//! Kind identity of an error value.

use core::any::{TypeId, type_name};
use core::hash::{Hash, Hasher};
use serde::{Serialize, Serializer};

/// Identity used to tell apart errors that render the same message.
///
/// A kind is either derived from a concrete Rust type ([`ErrorKind::of`]) or
/// chosen explicitly by the caller ([`ErrorKind::tag`]). A tag never equals a
/// type-derived kind, even when the tag spells out the type name.
#[derive(Debug, Clone, Copy)]
pub struct ErrorKind(Repr);

#[derive(Debug, Clone, Copy)]
enum Repr {
    Type { id: TypeId, name: &'static str },
    Tag(&'static str),
}

impl ErrorKind {
    /// Kind of the concrete type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Repr::Type {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        })
    }

    /// Caller-chosen kind. Equal tags compare equal.
    pub const fn tag(tag: &'static str) -> Self {
        Self(Repr::Tag(tag))
    }

    /// Human-readable name: the type name or the tag.
    pub fn name(&self) -> &'static str {
        match self.0 {
            Repr::Type { name, .. } => name,
            Repr::Tag(tag) => tag,
        }
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Repr::Type { id: a, .. }, Repr::Type { id: b, .. }) => a == b,
            (Repr::Tag(a), Repr::Tag(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ErrorKind {}

impl Hash for ErrorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Repr::Type { id, .. } => {
                0u8.hash(state);
                id.hash(state);
            }
            Repr::Tag(tag) => {
                1u8.hash(state);
                tag.hash(state);
            }
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
