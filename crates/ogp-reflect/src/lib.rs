//! Introspection model for the Object Graph Printer.
//!
//! Rust has no runtime reflection, so printable composite types register an
//! explicit field table instead: a static list of field names, declared types,
//! and accessor functions, usually produced by the [`reflect_struct!`] macro.
//! The printing engine in the `ogp` crate walks live values exclusively
//! through the traits defined here.
//!
//! # Key Types
//!
//! - [`Reflect`] — Object-safe view of a printable value (type name + fields)
//! - [`Describe`] — Static side of a composite type: its field table
//! - [`TypeToken`] / [`FieldId`] — Runtime type identity and field identity keys
//! - [`FieldDef`] / [`FieldRef`] — Field table entry / per-instance field view
//! - [`terminal`] — The fixed leaf-type set and its renderer table

pub mod field;
pub mod macros;
pub mod terminal;
pub mod token;

pub use field::{Describe, FieldDef, FieldRef, Reflect};
pub use terminal::{is_terminal, render_terminal};
pub use token::{FieldId, TypeToken};
