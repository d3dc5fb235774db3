//! Identity keys: runtime type identity and field identity.
//!
//! Exclusion sets and formatter maps in the printing engine are keyed by
//! these two types. Both are small `Copy` values suitable for hash keys.

use std::any::{Any, TypeId};
use std::fmt;

/// Runtime identity of a type: its `TypeId` paired with a display name.
///
/// The name is carried purely for diagnostics (error messages, `Debug`
/// output); equality and hashing are decided by the `TypeId` alone, and two
/// tokens for the same type always carry the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeToken {
    /// Unique runtime identifier of the type.
    pub id: TypeId,
    /// Human-readable type name, as given by `std::any::type_name`.
    pub name: &'static str,
}

impl TypeToken {
    /// The token for type `V`.
    pub fn of<V: Any>() -> Self {
        Self {
            id: TypeId::of::<V>(),
            name: std::any::type_name::<V>(),
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity of one field: the declaring type plus the field name.
///
/// Unique within a type. Field-scoped exclusion and field-scoped formatter
/// overrides are keyed by this pair, so a rule registered for one field of a
/// type applies wherever a value of that type appears in the printed graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId {
    /// The type that declares the field.
    pub owner: TypeId,
    /// The field's name within the declaring type.
    pub name: &'static str,
}

impl FieldId {
    /// Build the identity for `name` declared on `owner`.
    pub fn new(owner: TypeId, name: &'static str) -> Self {
        Self { owner, name }
    }
}
