//! Font handles and text metrics.
//!
//! Rendering backends know how to rasterize glyphs; widgets only need to know
//! how big text will be. [`FontMetrics`] is that seam. All metrics scale
//! linearly with the font size.

use crate::geometry::Rect;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Size queries for a typeface.
pub trait FontMetrics: Send + Sync {
    /// Horizontal pen advance for `ch` at `size`.
    fn advance(&self, ch: char, size: f32) -> f32;

    /// Distance from the baseline up to the top of the tallest glyphs.
    fn ascent(&self, size: f32) -> f32;

    /// Distance from the baseline down to the bottom of descending glyphs.
    fn descent(&self, size: f32) -> f32;

    /// Tight ink bounds of `text` at `size`, relative to a baseline origin
    /// at `(0, 0)` (negative `y` is above the baseline).
    fn text_bounds(&self, text: &str, size: f32) -> Rect;

    /// Sum of advances.
    fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }
}

/// Proportional metric table used when no real font is registered.
///
/// Widths are in em units: digits and most letters are 0.6 em, wide capitals
/// 0.8 em, narrow glyphs 0.3 em and spaces 0.25 em. Ink bounds span the cap
/// height (0.7 em) for glyphs without descenders and reach the descent
/// (0.2 em) otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackMetrics;

impl FallbackMetrics {
    const ASCENT: f32 = 0.8;
    const DESCENT: f32 = 0.2;
    const CAP_HEIGHT: f32 = 0.7;

    fn em_width(ch: char) -> f32 {
        match ch {
            ' ' => 0.25,
            'i' | 'j' | 'l' | '!' | '.' | ',' | ':' | ';' | '\'' | '|' | 'I' => 0.3,
            'm' | 'w' | 'M' | 'W' | '%' | '@' => 0.8,
            _ => 0.6,
        }
    }

    const fn has_descender(ch: char) -> bool {
        matches!(ch, 'g' | 'j' | 'p' | 'q' | 'y' | ',' | ';')
    }
}

impl FontMetrics for FallbackMetrics {
    fn advance(&self, ch: char, size: f32) -> f32 {
        Self::em_width(ch) * size
    }

    fn ascent(&self, size: f32) -> f32 {
        Self::ASCENT * size
    }

    fn descent(&self, size: f32) -> f32 {
        Self::DESCENT * size
    }

    fn text_bounds(&self, text: &str, size: f32) -> Rect {
        let inked: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if inked.is_empty() {
            return Rect::default();
        }
        // Leading/trailing whitespace advances the pen but carries no ink.
        let lead: f32 = text
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| self.advance(c, size))
            .sum();
        let trail: f32 = text
            .chars()
            .rev()
            .take_while(|c| c.is_whitespace())
            .map(|c| self.advance(c, size))
            .sum();
        let width = self.measure(text, size) - lead - trail;
        let top = -Self::CAP_HEIGHT * size;
        let bottom = if inked.iter().copied().any(Self::has_descender) {
            Self::DESCENT * size
        } else {
            0.0
        };
        Rect::new(lead, top, width, bottom - top)
    }
}

/// A resolved typeface: a name plus its metrics.
#[derive(Clone)]
pub struct Font {
    name: Option<String>,
    metrics: Arc<dyn FontMetrics>,
}

impl Font {
    /// Create a named font.
    #[must_use]
    pub fn new(name: impl Into<String>, metrics: Arc<dyn FontMetrics>) -> Self {
        Self {
            name: Some(name.into()),
            metrics,
        }
    }

    /// The backend default font.
    #[must_use]
    pub fn default_font() -> Self {
        Self {
            name: None,
            metrics: Arc::new(FallbackMetrics),
        }
    }

    /// Font name (`None` for the default font).
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this is the default font.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.name.is_none()
    }

    /// Metrics for layout.
    #[must_use]
    pub fn metrics(&self) -> &dyn FontMetrics {
        self.metrics.as_ref()
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::default_font()
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font").field("name", &self.name).finish_non_exhaustive()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.metrics, &other.metrics)
    }
}

/// Errors resolving a font by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    /// No font is registered under this name
    #[error("font not found: {0}")]
    NotFound(String),
    /// The font name cannot refer to an asset
    #[error("invalid font name '{name}': {reason}")]
    InvalidName {
        /// Offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },
}
