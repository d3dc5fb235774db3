//! The configuration store, fluent builder, and override resolver.
//!
//! A [`PrintConfig`] is built once, single-threaded, then read freely:
//! [`print`](PrintConfig::print) takes `&self` and traversal holds no state
//! beyond its own call stack. All selector and type validation happens here,
//! at registration — printing cannot fail.

use std::any::{type_name, Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use ogp_reflect::{Describe, FieldDef, FieldId, FieldRef, Reflect};
use tracing::debug;

use crate::culture::{self, Culture};
use crate::error::{ConfigError, ConfigResult};

/// A registered formatter, erased over its concrete input type.
///
/// The downcast is resolved once, at registration, by wrapping the typed
/// closure in a shim. The shim declines (`None`) values of any other runtime
/// type, in which case the printer falls back to default rendering.
pub(crate) type Formatter = Box<dyn Fn(&dyn Reflect) -> Option<String> + Send + Sync>;

/// Print configuration bound to an owner type `T`.
///
/// Owns four independent collections: excluded types, excluded fields, type
/// formatters, and field formatters. Keys are unique per collection; a later
/// registration for the same key overwrites the earlier one. Builder methods
/// return `&mut Self` (or `ConfigResult<&mut Self>` where validation can
/// fail) so calls chain.
pub struct PrintConfig<T> {
    excluded_types: HashSet<TypeId>,
    excluded_fields: HashSet<FieldId>,
    type_formatters: HashMap<TypeId, Formatter>,
    field_formatters: HashMap<FieldId, Formatter>,
    _owner: PhantomData<fn(&T)>,
}

impl<T> PrintConfig<T> {
    /// An empty configuration: everything prints with default rendering.
    pub fn new() -> Self {
        Self {
            excluded_types: HashSet::new(),
            excluded_fields: HashSet::new(),
            type_formatters: HashMap::new(),
            field_formatters: HashMap::new(),
            _owner: PhantomData,
        }
    }

    /// Exclude every field whose *declared* type is `U`, graph-wide.
    ///
    /// Idempotent. Exclusion applies only to directly declared field types;
    /// it does not cascade into values reachable through other types.
    pub fn exclude_type<U: Any>(&mut self) -> &mut Self {
        debug!(ty = type_name::<U>(), "type excluded");
        self.excluded_types.insert(TypeId::of::<U>());
        self
    }

    /// Register `format` for every field declared as `U`, graph-wide.
    ///
    /// Overwrites any previous formatter for `U`. A field-scoped formatter,
    /// if present, takes precedence.
    pub fn set_type_formatter<U: Any>(
        &mut self,
        format: impl Fn(&U) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        debug!(ty = type_name::<U>(), "type formatter registered");
        self.type_formatters.insert(
            TypeId::of::<U>(),
            Box::new(move |value: &dyn Reflect| {
                value.as_any().downcast_ref::<U>().map(|v| format(v))
            }),
        );
        self
    }

    /// Render values of numeric type `N` under `culture`'s conventions.
    ///
    /// Fails with [`ConfigError::NotNumeric`] for any type outside the
    /// numeric set (integers of any width, `f32`, `f64`), leaving the
    /// configuration untouched.
    pub fn set_numeric_culture<N: Any>(&mut self, culture: Culture) -> ConfigResult<&mut Self> {
        let Some(render) = culture::renderer_for(TypeId::of::<N>()) else {
            return Err(ConfigError::NotNumeric {
                type_name: type_name::<N>(),
            });
        };
        debug!(ty = type_name::<N>(), ?culture, "numeric culture registered");
        self.type_formatters.insert(
            TypeId::of::<N>(),
            Box::new(move |value: &dyn Reflect| render(value.as_any(), &culture)),
        );
        Ok(self)
    }

    pub(crate) fn is_type_excluded(&self, id: TypeId) -> bool {
        self.excluded_types.contains(&id)
    }

    pub(crate) fn is_field_excluded(&self, id: FieldId) -> bool {
        self.excluded_fields.contains(&id)
    }

    /// Resolve the override for one field of a composite being traversed.
    ///
    /// Field-scoped formatters strictly precede type-scoped ones; the
    /// type-scoped lookup keys on the field's *declared* type, never the
    /// value's runtime type.
    pub(crate) fn resolve(&self, owner: TypeId, field: &FieldRef<'_>) -> Option<&Formatter> {
        self.field_formatters
            .get(&FieldId::new(owner, field.name))
            .or_else(|| self.type_formatters.get(&field.declared.id))
    }
}

impl<T: Describe> PrintConfig<T> {
    /// Exclude the named field of the owner type.
    ///
    /// The name must resolve to a direct field of `T`; an unknown name is a
    /// configuration error raised immediately, never deferred to print time.
    pub fn exclude_field(&mut self, name: &str) -> ConfigResult<&mut Self> {
        let def = Self::field_def(name)?;
        debug!(owner = T::NAME, field = def.name, "field excluded");
        self.excluded_fields
            .insert(FieldId::new(TypeId::of::<T>(), def.name));
        Ok(self)
    }

    /// Register `format` for exactly one field of the owner type.
    ///
    /// Validated at registration: the field must exist on `T` and be
    /// declared as `V`. Overwrites any previous formatter for the field.
    pub fn set_field_formatter<V: Any>(
        &mut self,
        name: &str,
        format: impl Fn(&V) -> String + Send + Sync + 'static,
    ) -> ConfigResult<&mut Self> {
        let def = Self::typed_field_def::<V>(name)?;
        debug!(owner = T::NAME, field = def.name, "field formatter registered");
        self.field_formatters.insert(
            FieldId::new(TypeId::of::<T>(), def.name),
            Box::new(move |value: &dyn Reflect| {
                value.as_any().downcast_ref::<V>().map(|v| format(v))
            }),
        );
        Ok(self)
    }

    /// Render the named `String` field truncated to its first `len`
    /// characters.
    ///
    /// Counted in `char`s, so truncation never splits a UTF-8 sequence. A
    /// string shorter than `len` passes through whole; a negative `len` is a
    /// range error.
    pub fn truncate_string_field(&mut self, name: &str, len: isize) -> ConfigResult<&mut Self> {
        if len < 0 {
            return Err(ConfigError::NegativeLength { len });
        }
        let len = len as usize;
        self.set_field_formatter(name, move |s: &String| s.chars().take(len).collect())
    }

    fn field_def(name: &str) -> ConfigResult<&'static FieldDef<T>> {
        T::field_defs()
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| ConfigError::UnknownField {
                owner: T::NAME,
                name: name.to_string(),
            })
    }

    fn typed_field_def<V: Any>(name: &str) -> ConfigResult<&'static FieldDef<T>> {
        let def = Self::field_def(name)?;
        let declared = (def.declared)();
        if declared.id != TypeId::of::<V>() {
            return Err(ConfigError::FieldTypeMismatch {
                owner: T::NAME,
                name: def.name,
                expected: type_name::<V>(),
                declared: declared.name,
            });
        }
        Ok(def)
    }
}

impl<T> Default for PrintConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PrintConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintConfig")
            .field("owner", &type_name::<T>())
            .field("excluded_types", &self.excluded_types.len())
            .field("excluded_fields", &self.excluded_fields.len())
            .field("type_formatters", &self.type_formatters.len())
            .field("field_formatters", &self.field_formatters.len())
            .finish()
    }
}
