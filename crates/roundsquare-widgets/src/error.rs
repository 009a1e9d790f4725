//! Errors building a widget from declarative attributes.

use roundsquare_core::FontError;
use roundsquare_yaml::ParseError;
use thiserror::Error;

/// Error building a widget.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The caption font could not be resolved
    #[error("font error: {0}")]
    Font(#[from] FontError),
    /// The attribute set could not be parsed
    #[error("attribute error: {0}")]
    Attributes(#[from] ParseError),
}
