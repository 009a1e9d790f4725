//! Draw commands recorded by canvases.
//!
//! All rendering reduces to these primitives.

use crate::path::Path;
use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled corner
    Bevel,
}

/// Two-stop linear gradient between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Where `start_color` is fully applied
    pub start: Point,
    /// Where `end_color` is fully applied
    pub end: Point,
    /// Color at `start`
    pub start_color: Color,
    /// Color at `end`
    pub end_color: Color,
}

impl LinearGradient {
    /// Color at a point, projected onto the gradient axis.
    #[must_use]
    pub fn color_at(&self, point: Point) -> Color {
        let axis = self.end - self.start;
        let len_sq = axis.x.mul_add(axis.x, axis.y * axis.y);
        if len_sq <= f32::EPSILON {
            return self.start_color;
        }
        let rel = point - self.start;
        let t = rel.x.mul_add(axis.x, rel.y * axis.y) / len_sq;
        self.start_color.lerp(&self.end_color, t)
    }
}

/// Axis along which a gradient runs across a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    /// Left edge to right edge
    #[default]
    Horizontal,
    /// Top edge to bottom edge
    Vertical,
    /// Top-left corner to bottom-right corner
    Diagonal,
}

impl GradientDirection {
    /// Start and end points of this direction across `rect`.
    #[must_use]
    pub fn endpoints(self, rect: Rect) -> (Point, Point) {
        let center = rect.center();
        match self {
            Self::Horizontal => (Point::new(rect.x, center.y), Point::new(rect.right(), center.y)),
            Self::Vertical => (Point::new(center.x, rect.y), Point::new(center.x, rect.bottom())),
            Self::Diagonal => (rect.top_left(), rect.bottom_right()),
        }
    }
}

/// What a stroke or fill is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Flat color
    Solid(Color),
    /// Linear gradient
    Linear(LinearGradient),
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Stroke style for path rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke paint
    pub paint: Paint,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Solid stroke with default cap and join.
    #[must_use]
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            paint: Paint::Solid(color),
            width,
            ..Self::default()
        }
    }

    /// Replace the join style.
    #[must_use]
    pub const fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the interior of a path.
    FillPath {
        /// Path to fill
        path: Path,
        /// Fill color
        color: Color,
    },

    /// Stroke the outline of a path.
    StrokePath {
        /// Path to stroke
        path: Path,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw text with its baseline starting at `position`.
    Text {
        /// Text content
        content: String,
        /// Baseline origin
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Clip children to bounds.
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Child commands
        children: Vec<DrawCommand>,
    },
}

impl DrawCommand {
    /// Number of leaf commands, looking through clips.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Clip { children, .. } => children.iter().map(Self::leaf_count).sum(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_gradient_color_at_projects_onto_axis() {
        let gradient = LinearGradient {
            start: Point::new(10.0, 0.0),
            end: Point::new(110.0, 0.0),
            start_color: Color::BLACK,
            end_color: Color::WHITE,
        };
        assert_eq!(gradient.color_at(Point::new(10.0, 40.0)), Color::BLACK);
        let mid = gradient.color_at(Point::new(60.0, -25.0));
        assert!((mid.r - 0.5).abs() < 1e-4);
        let flat = LinearGradient {
            end: gradient.start,
            ..gradient
        };
        assert_eq!(flat.color_at(Point::new(99.0, 99.0)), Color::BLACK);
    }

    #[test]
    fn test_stroke_style_solid() {
        let style = StrokeStyle::solid(Color::RED, 12.0).with_join(LineJoin::Round);
        assert_eq!(style.paint, Paint::Solid(Color::RED));
        assert_eq!(style.width, 12.0);
        assert_eq!(style.cap, LineCap::Butt);
        assert_eq!(style.join, LineJoin::Round);
    }

    #[test]
    fn test_paint_from_color() {
        assert_eq!(Paint::from(Color::WHITE), Paint::Solid(Color::WHITE));
        assert_eq!(Paint::default(), Paint::Solid(Color::BLACK));
    }

    #[test]
    fn test_gradient_color_at_projects_onto_axis() {
        let g = LinearGradient {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 0.0),
            start_color: Color::WHITE,
            end_color: Color::BLACK,
        };
        assert_eq!(g.color_at(Point::new(-5.0, 40.0)), Color::WHITE);
        assert_eq!(g.color_at(Point::new(200.0, 0.0)), Color::BLACK);
        let mid = g.color_at(Point::new(50.0, 99.0));
        assert!((mid.r - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_gradient_uses_start_color() {
        let g = LinearGradient {
            start: Point::new(3.0, 3.0),
            end: Point::new(3.0, 3.0),
            start_color: Color::RED,
            end_color: Color::BLACK,
        };
        assert_eq!(g.color_at(Point::new(9.0, 9.0)), Color::RED);
    }

    #[test]
    fn test_gradient_direction_endpoints() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(
            GradientDirection::Horizontal.endpoints(r),
            (Point::new(10.0, 45.0), Point::new(110.0, 45.0))
        );
        assert_eq!(
            GradientDirection::Vertical.endpoints(r),
            (Point::new(60.0, 20.0), Point::new(60.0, 70.0))
        );
        assert_eq!(
            GradientDirection::Diagonal.endpoints(r),
            (Point::new(10.0, 20.0), Point::new(110.0, 70.0))
        );
        assert_eq!(GradientDirection::default(), GradientDirection::Horizontal);
    }

    #[test]
    fn test_leaf_count_through_clip() {
        let cmd = DrawCommand::Clip {
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            children: vec![
                DrawCommand::FillPath {
                    path: Path::new(),
                    color: Color::BLACK,
                },
                DrawCommand::Clip {
                    bounds: Rect::default(),
                    children: vec![],
                },
            ],
        };
        assert_eq!(cmd.leaf_count(), 1);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::StrokePath {
            path: Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0),
            style: StrokeStyle::solid(Color::RED, 1.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("StrokePath"));
    }
}
