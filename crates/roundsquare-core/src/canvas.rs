//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::path::Path;
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another renderer)
/// - Diffing (compare render outputs)
///
/// Commands issued while a clip is pushed are nested in a
/// [`DrawCommand::Clip`] when the clip is popped.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<(Rect, Vec<DrawCommand>)>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas with an initial clip, as a host hands a widget the
    /// dirty region of a frame.
    #[must_use]
    pub fn with_clip(clip: Rect) -> Self {
        let mut canvas = Self::new();
        canvas.push_clip(clip);
        canvas
    }

    /// Get the recorded top-level draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, closing any open clips.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        while !self.clip_stack.is_empty() {
            self.pop_clip();
        }
        std::mem::take(&mut self.commands)
    }

    /// Get the number of top-level recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.clip_stack.iter().all(|(_, c)| c.is_empty())
    }

    /// Clear all recorded commands and clips.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// All leaf commands in recording order, looking through clips
    /// (including clips that are still open).
    #[must_use]
    pub fn flattened(&self) -> Vec<&DrawCommand> {
        fn walk<'a>(cmds: &'a [DrawCommand], out: &mut Vec<&'a DrawCommand>) {
            for cmd in cmds {
                match cmd {
                    DrawCommand::Clip { children, .. } => walk(children, out),
                    other => out.push(other),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.commands, &mut out);
        for (_, pending) in &self.clip_stack {
            walk(pending, &mut out);
        }
        out
    }

    /// Paths that were stroked, with their styles.
    #[must_use]
    pub fn strokes(&self) -> Vec<(&Path, &StrokeStyle)> {
        self.flattened()
            .into_iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::StrokePath { path, style } => Some((path, style)),
                _ => None,
            })
            .collect()
    }

    /// Paths that were filled, with their colors.
    #[must_use]
    pub fn fills(&self) -> Vec<(&Path, Color)> {
        self.flattened()
            .into_iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillPath { path, color } => Some((path, *color)),
                _ => None,
            })
            .collect()
    }

    /// Text runs that were drawn.
    #[must_use]
    pub fn texts(&self) -> Vec<(&str, Point, &TextStyle)> {
        self.flattened()
            .into_iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text {
                    content,
                    position,
                    style,
                } => Some((content.as_str(), *position, style)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) {
        match self.clip_stack.last_mut() {
            Some((_, pending)) => pending.push(command),
            None => self.commands.push(command),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_path(&mut self, path: &Path, color: Color) {
        self.record(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
        self.record(DrawCommand::StrokePath {
            path: path.clone(),
            style: *style,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        // Nested clips intersect with their parent.
        let rect = match self.clip_bounds() {
            Some(parent) => parent
                .intersection(&rect)
                .unwrap_or_else(|| Rect::new(rect.x, rect.y, 0.0, 0.0)),
            None => rect,
        };
        self.clip_stack.push((rect, Vec::new()));
    }

    fn pop_clip(&mut self) {
        if let Some((bounds, children)) = self.clip_stack.pop() {
            self.record(DrawCommand::Clip { bounds, children });
        }
    }

    fn clip_bounds(&self) -> Option<Rect> {
        self.clip_stack.last().map(|(rect, _)| *rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0)
    }

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
        assert_eq!(canvas.clip_depth(), 0);
        assert!(canvas.clip_bounds().is_none());
    }

    #[test]
    fn test_records_fill_stroke_text() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_path(&square(), Color::WHITE);
        canvas.stroke_path(&square(), &StrokeStyle::solid(Color::RED, 2.0));
        canvas.draw_text("7", Point::new(1.0, 2.0), &TextStyle::default());

        assert_eq!(canvas.command_count(), 3);
        assert_eq!(canvas.fills()[0].1, Color::WHITE);
        assert_eq!(canvas.strokes()[0].1.width, 2.0);
        assert_eq!(canvas.texts()[0].0, "7");
    }

    #[test]
    fn test_clip_nests_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_clip(Rect::new(0.0, 0.0, 50.0, 50.0));
        canvas.fill_path(&square(), Color::BLACK);
        assert_eq!(canvas.command_count(), 0);
        assert_eq!(canvas.fills().len(), 1);
        canvas.pop_clip();

        assert_eq!(canvas.command_count(), 1);
        assert!(matches!(canvas.commands()[0], DrawCommand::Clip { .. }));
        assert_eq!(canvas.flattened().len(), 1);
    }

    #[test]
    fn test_nested_clip_intersects() {
        let mut canvas = RecordingCanvas::with_clip(Rect::new(0.0, 0.0, 50.0, 50.0));
        canvas.push_clip(Rect::new(25.0, 25.0, 50.0, 50.0));
        assert_eq!(canvas.clip_bounds(), Some(Rect::new(25.0, 25.0, 25.0, 25.0)));
        assert_eq!(canvas.clip_depth(), 2);
    }

    #[test]
    fn test_take_commands_closes_clips() {
        let mut canvas = RecordingCanvas::with_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        canvas.fill_path(&square(), Color::BLACK);
        let cmds = canvas.take_commands();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].leaf_count(), 1);
        assert!(canvas.is_empty());
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::with_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        canvas.fill_path(&square(), Color::BLACK);
        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.clip_depth(), 0);
    }
}
