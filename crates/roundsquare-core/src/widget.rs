//! Widget trait and related types.
//!
//! A widget is hosted by a toolkit through a small capability interface
//! rather than a base class:
//!
//! 1. **Verify**: check all Brick assertions pass
//! 2. **Measure**: compute a size given constraints
//! 3. **Layout**: accept allocated bounds
//! 4. **Paint**: emit draw commands (only if verified)
//!
//! # Examples
//!
//! ```
//! use roundsquare_core::{Invalidation, TypeId};
//!
//! let mut dirty = Invalidation::default();
//! dirty.request_layout();
//! assert!(dirty.needs_paint() && dirty.needs_layout());
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::brick_types::Brick;
use crate::constraints::Constraints;
use crate::geometry::{Point, Rect, Size};
use crate::path::Path;
use crate::{Color, StrokeStyle};
use serde::{Deserialize, Serialize};

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Pending redraw/re-measure requests raised by a widget's setters.
///
/// The host drains these with [`Invalidation::take`] once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invalidation {
    paint: bool,
    layout: bool,
}

impl Invalidation {
    /// Request a repaint.
    pub fn request_paint(&mut self) {
        self.paint = true;
    }

    /// Request a re-measure; a layout change always repaints too.
    pub fn request_layout(&mut self) {
        self.paint = true;
        self.layout = true;
    }

    /// Whether a repaint is pending.
    #[must_use]
    pub const fn needs_paint(&self) -> bool {
        self.paint
    }

    /// Whether a re-measure is pending.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.layout
    }

    /// Return the pending requests and clear them.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Core widget trait.
///
/// Requires [`Brick`], so every widget carries verifiable assertions and a
/// render budget.
pub trait Widget: Brick + Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute the widget size for the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Drain pending redraw/re-measure requests.
    fn take_invalidation(&mut self) -> Invalidation {
        Invalidation::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill the interior of a path.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke the outline of a path.
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle);

    /// Draw text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);

    /// Current clip bounds, if any clip is active.
    fn clip_bounds(&self) -> Option<Rect>;
}

/// Text style for rendering.
///
/// # Examples
///
/// ```
/// use roundsquare_core::{Color, TextStyle};
///
/// let style = TextStyle::default();
/// assert_eq!(style.size, 16.0);
/// assert_eq!(style.color, Color::BLACK);
/// assert!(style.font.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font family name (`None` = backend default)
    pub font: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            font: None,
        }
    }
}

/// Horizontal placement of text inside a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextGravity {
    /// No preference; laid out like [`TextGravity::Start`]
    #[default]
    None,
    /// Against the leading edge
    #[serde(alias = "left")]
    Start,
    /// Centered horizontally
    Center,
    /// Against the trailing edge
    #[serde(alias = "right")]
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        assert_eq!(TypeId::of::<u32>(), TypeId::of::<u32>());
        assert_ne!(TypeId::of::<u32>(), TypeId::of::<String>());
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }

    #[test]
    fn test_invalidation_paint_only() {
        let mut inv = Invalidation::default();
        inv.request_paint();
        assert!(inv.needs_paint());
        assert!(!inv.needs_layout());
    }

    #[test]
    fn test_invalidation_take_clears() {
        let mut inv = Invalidation::default();
        inv.request_layout();
        let taken = inv.take();
        assert!(taken.needs_layout());
        assert_eq!(inv, Invalidation::default());
    }

    #[test]
    fn test_text_gravity_serde_names() {
        let g: TextGravity = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(g, TextGravity::Center);
        let g: TextGravity = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(g, TextGravity::Start);
        assert_eq!(serde_json::to_string(&TextGravity::End).unwrap(), "\"end\"");
        assert_eq!(TextGravity::default(), TextGravity::None);
    }

    #[test]
    fn test_text_style_eq() {
        let custom = TextStyle {
            size: 24.0,
            color: Color::RED,
            font: Some("digits.ttf".into()),
        };
        assert_ne!(custom, TextStyle::default());
        assert_eq!(custom.clone(), custom);
    }
}
