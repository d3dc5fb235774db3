//! The reflect traits and the static field table.
//!
//! [`Reflect`] is the object-safe view the printer traverses: a type name and
//! a list of fields. [`Describe`] is the static side, available without an
//! instance, used at configuration time to validate field selectors. The two
//! stay coherent because both are generated from one field list by the
//! [`reflect_struct!`](crate::reflect_struct) macro.

use std::any::Any;

use chrono::{DateTime, TimeDelta, Utc};

use crate::token::TypeToken;

/// Object-safe view of a printable value.
///
/// Leaf types (numbers, strings, timestamps) implement this with the default
/// empty field list; composite types expose their fields in declaration
/// order. Implement through [`reflect_struct!`](crate::reflect_struct) rather
/// than by hand where possible.
pub trait Reflect: Any {
    /// The display name of the value's runtime type.
    fn type_name(&self) -> &'static str;

    /// Upcast for `TypeId` inspection and downcasting.
    fn as_any(&self) -> &dyn Any;

    /// The value's public fields, in declaration order. Empty for leaves.
    fn fields(&self) -> Vec<FieldRef<'_>> {
        Vec::new()
    }
}

/// Static description of a composite type: its name and field table.
///
/// This is what configuration-time validation runs against — a field
/// selector is checked once, at registration, for existence and declared
/// type, never at print time.
pub trait Describe: Reflect + Sized {
    /// The display name of the type.
    const NAME: &'static str;

    /// The field table, in declaration order. Single source of truth for
    /// field names, declared types, and accessors.
    fn field_defs() -> &'static [FieldDef<Self>];
}

/// One entry of a type's static field table.
pub struct FieldDef<T> {
    /// Field name, unique within the declaring type.
    pub name: &'static str,
    /// Token of the field's declared type.
    pub declared: fn() -> TypeToken,
    /// Accessor; `None` models a null field (`Option` in the struct).
    pub get: fn(&T) -> Option<&dyn Reflect>,
}

/// One field of a live instance: the table entry joined with the value.
pub struct FieldRef<'a> {
    /// Field name, unique within the declaring type.
    pub name: &'static str,
    /// Token of the field's declared type.
    pub declared: TypeToken,
    /// The field's current value; `None` renders as `null`.
    pub value: Option<&'a dyn Reflect>,
}

macro_rules! impl_leaf {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_name(&self) -> &'static str {
                    $name
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )+
    };
}

// Every scalar a field table may declare. Types outside the terminal set
// (e.g. i64, bool) still reflect — they print as a bare type-name line
// unless a formatter is registered for them.
impl_leaf! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    f32 => "f32",
    f64 => "f64",
    bool => "bool",
    char => "char",
    String => "String",
    DateTime<Utc> => "DateTime",
    TimeDelta => "TimeDelta",
}
