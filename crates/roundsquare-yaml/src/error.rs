//! Error types for attribute parsing.

use roundsquare_core::ColorParseError;
use thiserror::Error;

/// Error type for attribute-set parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML syntax or shape error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// TOML syntax or shape error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// A color attribute is not a `#rrggbb` / `#rrggbbaa` string
    #[error("invalid color for '{field}': '{value}'")]
    InvalidColor {
        /// Attribute name
        field: &'static str,
        /// Raw attribute value
        value: String,
        /// Underlying parse failure
        #[source]
        source: ColorParseError,
    },
    /// A numeric attribute is out of its domain
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Attribute name
        field: &'static str,
        /// Error message
        message: String,
    },
}
