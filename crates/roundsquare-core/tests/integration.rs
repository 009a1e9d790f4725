//! Integration tests for roundsquare-core.
//!
//! These tests drive the public API the way the widget crate does.

use roundsquare_core::{
    clamp_corner_radius, Canvas, Color, Constraints, DrawCommand, Easing, Path, PathMeasure, Point,
    Rect, RecordingCanvas, Size, StrokeStyle, TextStyle, Tween,
};

// =============================================================================
// Paths
// =============================================================================

#[test]
fn test_square_traced_clockwise_from_top_left() {
    let path = Path::rounded_rect(Rect::new(0.0, 0.0, 40.0, 20.0), 0.0);
    let measure = PathMeasure::new(&path);
    assert!((measure.length() - 120.0).abs() < 1e-4);

    let at = |d: f32| measure.position_at(d).expect("non-empty path");
    assert!(at(0.0).distance(&Point::new(0.0, 0.0)) < 1e-4);
    assert!(at(40.0).distance(&Point::new(40.0, 0.0)) < 1e-4);
    assert!(at(60.0).distance(&Point::new(40.0, 20.0)) < 1e-4);
    assert!(at(100.0).distance(&Point::new(0.0, 20.0)) < 1e-4);
}

#[test]
fn test_circle_from_fully_rounded_square() {
    let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
    let radius = clamp_corner_radius(rect, 99.0);
    assert_eq!(radius, 25.0);
    let path = Path::rounded_rect(rect, radius);
    assert!((path.length() - std::f32::consts::TAU * 25.0).abs() < 1e-2);
}

#[test]
fn test_measure_segment_across_corner() {
    let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 10.0);
    let measure = PathMeasure::new(&path);
    let length = measure.length();

    let piece = measure.segment(length * 0.2, length * 0.3);
    assert_eq!(piece.contours().len(), 1);
    assert!((piece.length() - length * 0.1).abs() < 1e-3);
    let start = measure.position_at(length * 0.2).expect("non-empty path");
    assert!(piece.contours()[0].start().distance(&start) < 1e-3);
}

#[test]
fn test_measure_segment_clamps_and_empties() {
    let path = Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0);
    let measure = PathMeasure::new(&path);
    assert!(measure.segment(5.0, 5.0).is_empty());
    assert!(measure.segment(8.0, 3.0).is_empty());
    let all = measure.segment(-10.0, 1e6);
    assert!((all.length() - measure.length()).abs() < 1e-3);
}

#[test]
fn test_empty_path_measure() {
    let measure = PathMeasure::new(&Path::new());
    assert_eq!(measure.length(), 0.0);
    assert!(measure.position_at(0.0).is_none());
    assert!(measure.segment(0.0, 1.0).is_empty());
}

// =============================================================================
// Recording canvas
// =============================================================================

#[test]
fn test_recording_canvas_nests_clip() {
    let mut canvas = RecordingCanvas::new();
    let path = Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0);
    canvas.fill_path(&path, Color::BLACK);
    canvas.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
    assert_eq!(canvas.clip_bounds(), Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
    canvas.stroke_path(&path, &StrokeStyle::solid(Color::RED, 2.0));
    canvas.draw_text("1", Point::new(1.0, 4.0), &TextStyle::default());
    canvas.pop_clip();

    assert_eq!(canvas.command_count(), 2);
    assert_eq!(canvas.flattened().len(), 3);
    assert!(matches!(
        &canvas.commands()[1],
        DrawCommand::Clip { children, .. } if children.len() == 2
    ));
    assert_eq!(canvas.clip_bounds(), None);
}

// =============================================================================
// Color, constraints, tweens
// =============================================================================

#[test]
fn test_track_color_defaults_parse() {
    assert_eq!(Color::from_hex("#cccccc").expect("valid hex"), Color::LIGHT_GRAY);
    assert_eq!(Color::from_hex("#ff0000").expect("valid hex"), Color::RED);
    assert_eq!(Color::from_hex("#888888").expect("valid hex"), Color::GRAY);
}

#[test]
fn test_constraints_mirror_measure_modes() {
    let intrinsic = Size::new(30.0, 30.0);
    assert_eq!(
        Constraints::tight(Size::new(64.0, 64.0)).resolve(intrinsic),
        Size::new(64.0, 64.0)
    );
    assert_eq!(
        Constraints::loose(Size::new(20.0, 100.0)).resolve(intrinsic),
        Size::new(20.0, 30.0)
    );
    assert_eq!(Constraints::unbounded().resolve(intrinsic), intrinsic);
}

#[test]
fn test_color_tween_reaches_target_exactly() {
    let mut tween = Tween::new(Color::LIGHT_GRAY, Color::RED, 0.7).with_easing(Easing::EaseInOut);
    let mid = tween.advance(0.35);
    assert!(mid.r > Color::LIGHT_GRAY.r && mid.g < Color::LIGHT_GRAY.g);
    assert_eq!(tween.advance(1.0), Color::RED);
    assert!(tween.is_complete());
}
