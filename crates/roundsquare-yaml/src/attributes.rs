//! Attribute sets for the progress widget.

use crate::error::ParseError;
use roundsquare_core::{Color, GradientDirection, TextGravity};
use serde::{Deserialize, Serialize};

/// Attribute set exactly as written in a layout file.
///
/// Every key is optional; missing keys take the widget defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AttributeSet {
    /// Corner radius in scale-independent pixels
    #[serde(default)]
    pub radius: f32,
    /// Interior fill color
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Font asset name; blank selects the default font
    #[serde(default)]
    pub font_name: String,
    /// Caption text
    #[serde(default)]
    pub text: String,
    /// Caption color
    #[serde(default = "default_text_color")]
    pub text_color: String,
    /// Caption horizontal placement
    #[serde(default)]
    pub text_gravity: TextGravity,
    /// Fixed caption size; absent means auto-fit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f32>,
    /// Track and progress stroke width
    #[serde(default = "default_progress_width")]
    pub progress_width: f32,
    /// Initial percent
    #[serde(default)]
    pub progress_percent: f32,
    /// Solid progress color
    #[serde(default = "default_progress_color")]
    pub progress_color: String,
    /// Gradient progress paint; overrides `progress-color`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_gradient: Option<GradientAttributes>,
    /// Track color while idle
    #[serde(default = "default_track_static")]
    pub progress_background_color_static: String,
    /// Track color while progress is shown
    #[serde(default = "default_track_dynamic")]
    pub progress_background_color_dynamic: String,
    /// Rotation of the 0% point in degrees
    #[serde(default)]
    pub progress_start_angle: i32,
    /// Add the fixed 26 degree start offset
    #[serde(default = "default_true")]
    pub gap_compensation: bool,
    /// Display density (pixels per dp)
    #[serde(default = "default_density")]
    pub density: f32,
}

/// Gradient progress paint as written in a layout file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GradientAttributes {
    /// Lighter end color
    pub light: String,
    /// Darker end color
    pub dark: String,
    /// Axis across the segment bounds
    #[serde(default)]
    pub direction: GradientDirection,
}

fn default_background_color() -> String {
    "#00000000".to_string()
}

fn default_text_color() -> String {
    "#ffffff".to_string()
}

fn default_progress_color() -> String {
    "#888888".to_string()
}

fn default_track_static() -> String {
    "#cccccc".to_string()
}

fn default_track_dynamic() -> String {
    "#ff0000".to_string()
}

const fn default_progress_width() -> f32 {
    12.0
}

const fn default_true() -> bool {
    true
}

const fn default_density() -> f32 {
    1.0
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            radius: 0.0,
            background_color: default_background_color(),
            font_name: String::new(),
            text: String::new(),
            text_color: default_text_color(),
            text_gravity: TextGravity::None,
            text_size: None,
            progress_width: default_progress_width(),
            progress_percent: 0.0,
            progress_color: default_progress_color(),
            progress_gradient: None,
            progress_background_color_static: default_track_static(),
            progress_background_color_dynamic: default_track_dynamic(),
            progress_start_angle: 0,
            gap_compensation: true,
            density: default_density(),
        }
    }
}

impl AttributeSet {
    /// Parse from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has unknown keys.
    pub fn from_toml(toml_str: &str) -> Result<Self, ParseError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Serialize to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ParseError> {
        Ok(toml::to_string(self)?)
    }
}

/// Resolved gradient paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    /// Lighter end color
    pub light: Color,
    /// Darker end color
    pub dark: Color,
    /// Axis across the segment bounds
    pub direction: GradientDirection,
}

/// Validated, typed attributes for a progress widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAttributes {
    /// Corner radius in scale-independent pixels
    pub radius: f32,
    /// Interior fill color
    pub background_color: Color,
    /// Font asset name; blank selects the default font
    pub font_name: String,
    /// Caption text
    pub text: String,
    /// Caption color
    pub text_color: Color,
    /// Caption horizontal placement
    pub text_gravity: TextGravity,
    /// Fixed caption size; `None` means auto-fit
    pub text_size: Option<f32>,
    /// Track and progress stroke width
    pub progress_width: f32,
    /// Initial percent
    pub progress_percent: f32,
    /// Solid progress color
    pub progress_color: Color,
    /// Gradient progress paint; overrides `progress_color`
    pub progress_gradient: Option<GradientSpec>,
    /// Track color while idle
    pub track_color_static: Color,
    /// Track color while progress is shown
    pub track_color_dynamic: Color,
    /// Rotation of the 0% point in degrees
    pub start_angle: i32,
    /// Add the fixed 26 degree start offset
    pub gap_compensation: bool,
    /// Display density (pixels per dp)
    pub density: f32,
}

impl Default for ProgressAttributes {
    fn default() -> Self {
        Self {
            radius: 0.0,
            background_color: Color::TRANSPARENT,
            font_name: String::new(),
            text: String::new(),
            text_color: Color::WHITE,
            text_gravity: TextGravity::None,
            text_size: None,
            progress_width: default_progress_width(),
            progress_percent: 0.0,
            progress_color: Color::GRAY,
            progress_gradient: None,
            track_color_static: Color::LIGHT_GRAY,
            track_color_dynamic: Color::RED,
            start_angle: 0,
            gap_compensation: true,
            density: default_density(),
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ParseError> {
    Color::from_hex(value).map_err(|source| ParseError::InvalidColor {
        field,
        value: value.to_string(),
        source,
    })
}

fn finite(field: &'static str, value: f32) -> Result<f32, ParseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::InvalidValue {
            field,
            message: format!("must be finite, got {value}"),
        })
    }
}

impl TryFrom<AttributeSet> for ProgressAttributes {
    type Error = ParseError;

    fn try_from(raw: AttributeSet) -> Result<Self, Self::Error> {
        let progress_gradient = raw
            .progress_gradient
            .map(|g| -> Result<GradientSpec, ParseError> {
                Ok(GradientSpec {
                    light: parse_color("progress-gradient.light", &g.light)?,
                    dark: parse_color("progress-gradient.dark", &g.dark)?,
                    direction: g.direction,
                })
            })
            .transpose()?;
        let text_size = raw
            .text_size
            .map(|size| finite("text-size", size))
            .transpose()?;

        // NaN percents are meaningful (they read as idle), so only the
        // geometric values are checked here.
        Ok(Self {
            radius: finite("radius", raw.radius)?,
            background_color: parse_color("background-color", &raw.background_color)?,
            font_name: raw.font_name,
            text: raw.text,
            text_color: parse_color("text-color", &raw.text_color)?,
            text_gravity: raw.text_gravity,
            text_size,
            progress_width: finite("progress-width", raw.progress_width)?,
            progress_percent: raw.progress_percent,
            progress_color: parse_color("progress-color", &raw.progress_color)?,
            progress_gradient,
            track_color_static: parse_color(
                "progress-background-color-static",
                &raw.progress_background_color_static,
            )?,
            track_color_dynamic: parse_color(
                "progress-background-color-dynamic",
                &raw.progress_background_color_dynamic,
            )?,
            start_angle: raw.progress_start_angle,
            gap_compensation: raw.gap_compensation,
            density: finite("density", raw.density)?,
        })
    }
}

impl From<&ProgressAttributes> for AttributeSet {
    fn from(attrs: &ProgressAttributes) -> Self {
        Self {
            radius: attrs.radius,
            background_color: attrs.background_color.to_hex_with_alpha(),
            font_name: attrs.font_name.clone(),
            text: attrs.text.clone(),
            text_color: attrs.text_color.to_hex_with_alpha(),
            text_gravity: attrs.text_gravity,
            text_size: attrs.text_size,
            progress_width: attrs.progress_width,
            progress_percent: attrs.progress_percent,
            progress_color: attrs.progress_color.to_hex_with_alpha(),
            progress_gradient: attrs.progress_gradient.map(|g| GradientAttributes {
                light: g.light.to_hex_with_alpha(),
                dark: g.dark.to_hex_with_alpha(),
                direction: g.direction,
            }),
            progress_background_color_static: attrs.track_color_static.to_hex_with_alpha(),
            progress_background_color_dynamic: attrs.track_color_dynamic.to_hex_with_alpha(),
            progress_start_angle: attrs.start_angle,
            gap_compensation: attrs.gap_compensation,
            density: attrs.density,
        }
    }
}

impl ProgressAttributes {
    /// Parse and validate from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a key is unknown, a color
    /// is not a hex string, or a geometric value is not finite.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        AttributeSet::from_yaml(yaml)?.try_into()
    }

    /// Parse and validate from a TOML string.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProgressAttributes::from_yaml`].
    pub fn from_toml(toml_str: &str) -> Result<Self, ParseError> {
        AttributeSet::from_toml(toml_str)?.try_into()
    }

    /// Serialize to YAML, colors as `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        AttributeSet::from(self).to_yaml()
    }
}
