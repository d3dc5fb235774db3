//! Object Graph Printer: configurable, human-readable text serialization of
//! in-memory object graphs.
//!
//! Intended for debugging output and test assertions, not wire transport:
//! the output is an indented tree meant for eyes and literal string
//! comparison. Build a [`PrintConfig`] once (single-threaded setup), then
//! print freely — `print` takes `&self` and a finished configuration is
//! shareable across threads.
//!
//! ```
//! use ogp::{reflect_struct, PrintConfig};
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! reflect_struct!(Person, "Person", {
//!     name: String = |p| Some(&p.name),
//!     age: i32 = |p| Some(&p.age),
//! });
//!
//! let person = Person { name: "Alexander".to_string(), age: 19 };
//! let mut config = PrintConfig::new();
//! config.truncate_string_field("name", 4)?;
//! assert_eq!(config.print(&person), "Person\n\tname = Alex\n\tage = 19\n");
//! # Ok::<(), ogp::ConfigError>(())
//! ```
//!
//! Known, accepted limitation: there is no cycle detection, so printing a
//! self-referential graph recurses without bound.
//!
//! # Key Types
//!
//! - [`PrintConfig`] — Exclusions and formatter overrides bound to an owner type
//! - [`Culture`] — Locale conventions for numeric formatting
//! - [`ConfigError`] / [`ConfigResult`] — Registration-time failures
//! - [`reflect_struct!`] — Registers a composite type's field table

pub mod config;
pub mod culture;
pub mod error;
pub mod printer;

pub use config::PrintConfig;
pub use culture::Culture;
pub use error::{ConfigError, ConfigResult};
pub use ogp_reflect::{
    reflect_struct, Describe, FieldDef, FieldId, FieldRef, Reflect, TypeToken,
};

/// A fresh configuration bound to owner type `T`.
pub fn configuration_for<T>() -> PrintConfig<T> {
    PrintConfig::new()
}

/// Print `obj` with an empty configuration: default rendering throughout.
pub fn print<T: Reflect>(obj: &T) -> String {
    PrintConfig::new().print(obj)
}
