//! Error types for the printing engine.
//!
//! All errors surface at configuration time; a configuration that built
//! without error cannot fail to print (cyclic graphs excepted, which recurse
//! without bound by design).

/// Errors raised while building a print configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A field selector named a field the owner type does not declare.
    #[error("type {owner} has no field named {name:?}")]
    UnknownField { owner: &'static str, name: String },

    /// A typed registration targeted a field of a different declared type.
    #[error("field {owner}.{name} is declared as {declared}, not {expected}")]
    FieldTypeMismatch {
        owner: &'static str,
        name: &'static str,
        expected: &'static str,
        declared: &'static str,
    },

    /// A numeric culture was requested for a non-numeric type.
    #[error("numeric culture is not supported for type {type_name}")]
    NotNumeric { type_name: &'static str },

    /// A negative string truncation length.
    #[error("truncation length must be non-negative, got {len}")]
    NegativeLength { len: isize },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
