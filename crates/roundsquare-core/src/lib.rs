//! Core types and traits for the roundsquare progress widget.
//!
//! This crate provides the toolkit layer the widget is hosted on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`] and per-axis [`MeasureSpec`]
//! - Vector paths with exact arc-length measurement: [`Path`], [`PathMeasure`]
//! - Painting: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Widget contract: [`Widget`], [`Brick`]
//! - Frame-driven animation: [`Tween`], [`Animate`]
//! - Text sizing: [`Font`], [`FontMetrics`]

pub mod animation;
mod brick_types;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod font;
mod geometry;
pub mod path;
pub mod widget;

pub use animation::{Animate, Easing, Interpolate, Tween};
pub use brick_types::{Brick, BrickAssertion, BrickBudget, BrickVerification};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, MeasureSpec};
pub use draw::{DrawCommand, GradientDirection, LineCap, LineJoin, LinearGradient, Paint, StrokeStyle};
pub use font::{FallbackMetrics, Font, FontError, FontMetrics};
pub use geometry::{Point, Rect, Size};
pub use path::{clamp_corner_radius, Contour, Path, PathMeasure, Segment};
pub use widget::{Canvas, Invalidation, LayoutResult, TextGravity, TextStyle, TypeId, Widget};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_rounded_rect_bounds_stay_inside_rect(
            w in 1.0f32..400.0,
            h in 1.0f32..400.0,
            radius in 0.0f32..500.0,
        ) {
            let rect = Rect::new(3.0, 5.0, w, h);
            let bounds = Path::rounded_rect(rect, radius).bounds().expect("non-empty");
            prop_assert!(rect.contains_rect(&bounds, 1e-2));
        }

        #[test]
        fn prop_constraints_resolve_respects_at_most(max in 0.0f32..500.0, intrinsic in 0.0f32..500.0) {
            let c = Constraints::loose(Size::new(max, max));
            let size = c.resolve(Size::new(intrinsic, intrinsic));
            prop_assert!(size.width <= max);
            prop_assert!(size.width <= intrinsic);
        }
    }
}
