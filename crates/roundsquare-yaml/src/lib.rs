//! Declarative attribute sets for the roundsquare progress widget.
//!
//! A layout file describes a widget with kebab-case keys, the same names a
//! markup attribute would use:
//!
//! ```
//! use roundsquare_yaml::ProgressAttributes;
//!
//! let attrs = ProgressAttributes::from_yaml(
//!     "radius: 8\nprogress-percent: 45\nprogress-color: \"#00ff00\"\n",
//! )
//! .unwrap();
//! assert_eq!(attrs.radius, 8.0);
//! assert_eq!(attrs.progress_percent, 45.0);
//! assert_eq!(attrs.progress_color.to_hex(), "#00ff00");
//! ```
//!
//! Parsing happens in two stages. [`AttributeSet`] mirrors the file exactly
//! (colors are strings); [`ProgressAttributes`] is the validated, typed form.

mod attributes;
mod error;

pub use attributes::{AttributeSet, GradientAttributes, GradientSpec, ProgressAttributes};
pub use error::ParseError;
