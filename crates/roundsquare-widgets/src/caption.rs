//! Caption layout inside the progress border.
//!
//! The caption is measured at a fixed baseline size and then scaled so its
//! ink fits the interior left by the stroke and padding. Glyphs are placed
//! one at a time so each character keeps its own measured advance.
//!
//! Gravity positions the ink, not the pen, so leading whitespace and side
//! bearings do not push the caption past the interior edge. The baseline
//! centers the ascent/descent line box and is then nudged, if needed, so
//! ink that fits the interior also stays inside it.

use roundsquare_core::{FontMetrics, Point, Rect, TextGravity};

/// Size text is first measured at before scaling.
pub const MEASURE_TEXT_SIZE: f32 = 15.0;

/// Padding between the stroke and the caption, in dp.
pub const TEXT_PADDING: f32 = 8.0;

/// Inputs for laying out a caption.
#[derive(Clone, Copy)]
pub struct CaptionParams<'a> {
    /// Caption text
    pub text: &'a str,
    /// Metrics of the caption font
    pub metrics: &'a dyn FontMetrics,
    /// Area the widget paints into
    pub viewport: Rect,
    /// Border stroke width
    pub stroke_width: f32,
    /// Display density for the padding
    pub density: f32,
    /// Fixed size; `None` or non-positive means auto-fit
    pub fixed_size: Option<f32>,
    /// Horizontal placement
    pub gravity: TextGravity,
}

impl CaptionParams<'_> {
    /// Distance from each viewport edge to the caption area.
    #[must_use]
    pub fn edge_offset(&self) -> f32 {
        self.stroke_width.max(0.0) + TEXT_PADDING * self.density
    }

    /// The caption font size.
    ///
    /// Auto-fit scales the baseline size by how many times the measured ink
    /// (plus padding on the width) fits into the interior on each axis and
    /// takes the smaller factor.
    #[must_use]
    pub fn text_size(&self) -> f32 {
        if let Some(size) = self.fixed_size.filter(|s| *s > 0.0) {
            return size;
        }
        let bounds = self.metrics.text_bounds(self.text, MEASURE_TEXT_SIZE);
        if bounds.is_empty() {
            return MEASURE_TEXT_SIZE;
        }
        let offset = self.edge_offset();
        let fit_x = (self.viewport.width - 2.0 * offset) / (bounds.width + TEXT_PADDING);
        let fit_y = (self.viewport.height - 2.0 * offset) / bounds.height;
        MEASURE_TEXT_SIZE * fit_x.min(fit_y)
    }
}

/// A laid-out caption, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLayout {
    /// Font size every glyph is drawn at
    pub size: f32,
    /// Baseline origin of each character
    pub glyphs: Vec<(char, Point)>,
    /// Ink bounds in canvas coordinates
    pub ink_bounds: Rect,
}

/// Lay out `params.text`, or `None` when there is nothing to draw.
#[must_use]
pub fn layout_caption(params: &CaptionParams<'_>) -> Option<CaptionLayout> {
    if params.text.is_empty() {
        return None;
    }
    let size = params.text_size();
    if !size.is_finite() || size <= 0.0 {
        return None;
    }

    let metrics = params.metrics;
    let viewport = params.viewport;
    let offset = params.edge_offset();
    let interior = viewport.inset(offset, offset);
    let ink = metrics.text_bounds(params.text, size);

    let centered =
        viewport.y + (viewport.height + metrics.ascent(size) - metrics.descent(size)) / 2.0;
    let baseline = keep_inside(centered, interior.y - ink.y, interior.bottom() - ink.bottom());
    let ink_left = match params.gravity {
        TextGravity::Center => viewport.center().x - ink.width / 2.0,
        TextGravity::End => interior.right() - ink.width,
        TextGravity::Start | TextGravity::None => interior.x,
    };
    let start_x = ink_left - ink.x;

    let mut x = start_x;
    let glyphs = params
        .text
        .chars()
        .map(|ch| {
            let origin = Point::new(x, baseline);
            x += metrics.advance(ch, size);
            (ch, origin)
        })
        .collect();

    Some(CaptionLayout {
        size,
        glyphs,
        ink_bounds: Rect::new(ink_left, baseline + ink.y, ink.width, ink.height),
    })
}

/// Clamp `value` into `[min, max]`. An empty range (ink taller than the
/// interior, as with an oversized fixed size) yields its midpoint, which
/// centers the ink on the interior.
fn keep_inside(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        (min + max) / 2.0
    } else {
        value.max(min).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use roundsquare_core::FallbackMetrics;

    fn params<'a>(text: &'a str, viewport: Rect, gravity: TextGravity) -> CaptionParams<'a> {
        CaptionParams {
            text,
            metrics: &FallbackMetrics,
            viewport,
            stroke_width: 12.0,
            density: 1.0,
            fixed_size: None,
            gravity,
        }
    }

    #[test]
    fn test_auto_fit_size() {
        // "7" at 15: ink 9 x 10.5; interior 60 x 60
        let p = params("7", Rect::new(0.0, 0.0, 100.0, 100.0), TextGravity::Center);
        let expected = 15.0 * (60.0f32 / 17.0).min(60.0 / 10.5);
        assert!((p.text_size() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_size_skips_fit() {
        let mut p = params("7", Rect::new(0.0, 0.0, 100.0, 100.0), TextGravity::Start);
        p.fixed_size = Some(20.0);
        assert_eq!(p.text_size(), 20.0);
        p.fixed_size = Some(0.0);
        assert!(p.text_size() > 20.0);
    }

    #[test]
    fn test_density_scales_padding() {
        let mut p = params("7", Rect::new(0.0, 0.0, 100.0, 100.0), TextGravity::Start);
        assert_eq!(p.edge_offset(), 20.0);
        p.density = 2.0;
        assert_eq!(p.edge_offset(), 28.0);
    }

    #[test]
    fn test_center_gravity_centers_ink_horizontally() {
        let layout =
            layout_caption(&params("7", Rect::new(0.0, 0.0, 100.0, 100.0), TextGravity::Center))
                .unwrap();
        assert_eq!(layout.glyphs.len(), 1);
        assert!((layout.ink_bounds.center().x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_baseline_centers_line_box() {
        let viewport = Rect::new(10.0, 20.0, 100.0, 100.0);
        let layout = layout_caption(&params("42", viewport, TextGravity::Start)).unwrap();
        let size = layout.size;
        let baseline = layout.glyphs[0].1.y;
        // Line box from baseline-ascent to baseline+descent is centered
        let top = baseline - 0.8 * size;
        let bottom = baseline + 0.2 * size;
        assert!(((top + bottom) / 2.0 - 70.0).abs() < 1e-3);
    }

    #[test]
    fn test_start_and_none_gravity_match() {
        let viewport = Rect::new(0.0, 0.0, 200.0, 80.0);
        let start = layout_caption(&params("12", viewport, TextGravity::Start)).unwrap();
        let none = layout_caption(&params("12", viewport, TextGravity::None)).unwrap();
        assert_eq!(start, none);
        assert_eq!(start.glyphs[0].1.x, 20.0);
    }

    #[test]
    fn test_end_gravity_right_aligns_ink() {
        let viewport = Rect::new(0.0, 0.0, 200.0, 80.0);
        let layout = layout_caption(&params("12", viewport, TextGravity::End)).unwrap();
        assert!((layout.ink_bounds.right() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_glyphs_advance_individually() {
        let layout =
            layout_caption(&params("1i1", Rect::new(0.0, 0.0, 300.0, 100.0), TextGravity::Start))
                .unwrap();
        let s = layout.size;
        let xs: Vec<f32> = layout.glyphs.iter().map(|(_, p)| p.x).collect();
        assert!((xs[1] - xs[0] - 0.6 * s).abs() < 1e-3);
        assert!((xs[2] - xs[1] - 0.3 * s).abs() < 1e-3);
        assert!(layout.glyphs.iter().all(|(_, p)| p.y == layout.glyphs[0].1.y));
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        assert!(layout_caption(&params("", Rect::new(0.0, 0.0, 100.0, 100.0), TextGravity::Center)).is_none());
    }

    #[test]
    fn test_too_small_viewport_draws_nothing() {
        assert!(layout_caption(&params("7", Rect::new(0.0, 0.0, 30.0, 30.0), TextGravity::Center)).is_none());
    }

    #[test]
    fn test_whitespace_only_keeps_measure_size() {
        let p = params("  ", Rect::new(0.0, 0.0, 100.0, 100.0), TextGravity::Start);
        assert_eq!(p.text_size(), MEASURE_TEXT_SIZE);
    }

    #[test]
    fn test_wide_viewport_keeps_tall_ink_inside() {
        // Height-bound fit: the ink fills the interior height exactly
        let viewport = Rect::new(0.0, 0.0, 300.0, 60.0);
        let mut p = params("7", viewport, TextGravity::Center);
        p.stroke_width = 0.0;
        let layout = layout_caption(&p).unwrap();
        let interior = viewport.inset(8.0, 8.0);
        assert!((layout.size - 15.0 * 44.0 / 10.5).abs() < 1e-3);
        assert!(interior.contains_rect(&layout.ink_bounds, 1e-3));
        assert!((layout.glyphs[0].1.y - 52.0).abs() < 1e-3);
    }

    #[test]
    fn test_end_gravity_ignores_leading_space() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 60.0);
        let mut p = params(" 1", viewport, TextGravity::End);
        p.stroke_width = 0.0;
        let layout = layout_caption(&p).unwrap();
        let interior = viewport.inset(8.0, 8.0);
        assert!((layout.ink_bounds.right() - interior.right()).abs() < 1e-3);
        assert!(interior.contains_rect(&layout.ink_bounds, 1e-3));
        // The space still advances the pen ahead of the digit
        let space = FallbackMetrics.advance(' ', layout.size);
        assert!((layout.glyphs[1].1.x - layout.glyphs[0].1.x - space).abs() < 1e-3);
        assert!((layout.glyphs[1].1.x - layout.ink_bounds.x).abs() < 1e-3);
    }

    #[test]
    fn test_center_gravity_ignores_leading_space() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let layout = layout_caption(&params("  7", viewport, TextGravity::Center)).unwrap();
        assert!((layout.ink_bounds.center().x - 50.0).abs() < 1e-3);
        assert!((layout.glyphs[2].1.x - layout.ink_bounds.x).abs() < 1e-3);
    }

    #[test]
    fn test_oversized_fixed_size_centers_ink_on_interior() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut p = params("7", viewport, TextGravity::Center);
        p.fixed_size = Some(200.0);
        let layout = layout_caption(&p).unwrap();
        assert!((layout.ink_bounds.center().y - 50.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_auto_fit_stays_inside_interior(
            text in "[0-9%a-zA-Z ]{1,8}",
            w in 60.0f32..400.0,
            h in 60.0f32..400.0,
            stroke in 0.0f32..12.0,
            gravity in prop_oneof![
                Just(TextGravity::Start),
                Just(TextGravity::Center),
                Just(TextGravity::End),
                Just(TextGravity::None),
            ],
        ) {
            let viewport = Rect::new(0.0, 0.0, w, h);
            let mut p = params(&text, viewport, gravity);
            p.stroke_width = stroke;
            if let Some(layout) = layout_caption(&p) {
                let offset = p.edge_offset();
                let interior = viewport.inset(offset, offset);
                if !layout.ink_bounds.is_empty() {
                    prop_assert!(
                        interior.contains_rect(&layout.ink_bounds, 1e-2),
                        "{:?} outside {:?}",
                        layout.ink_bounds,
                        interior
                    );
                }
            }
        }
    }
}
