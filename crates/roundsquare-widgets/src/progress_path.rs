//! Border path and progress segment geometry.
//!
//! The border is a rounded rectangle inset by half the stroke width so the
//! whole stroke stays inside the viewport. The progress segment is the part
//! of that border covering `percent` of its length, starting at a rotated
//! offset and wrapping past the path end back to its start.

use roundsquare_core::{clamp_corner_radius, Path, PathMeasure, Rect};

/// Extra start rotation, in degrees, applied when gap compensation is on.
pub const GAP_COMPENSATION_DEGREES: i32 = 26;

/// Integer tier of a percent value, truncated toward zero.
///
/// NaN reads as tier 0.
#[must_use]
pub fn percent_tier(percent: f32) -> i32 {
    percent as i32
}

/// Whether `percent` draws a segment at all.
#[must_use]
pub fn is_active_percent(percent: f32) -> bool {
    (1..=100).contains(&percent_tier(percent))
}

/// The track outline for `viewport`.
///
/// `radius` is the effective radius in pixels; it is clamped to half the
/// shorter side of the inset rectangle.
#[must_use]
pub fn border_path(viewport: Rect, stroke_width: f32, radius: f32) -> Path {
    let half = stroke_width.max(0.0) / 2.0;
    let rect = viewport.inset(half, half);
    Path::rounded_rect(rect, clamp_corner_radius(rect, radius))
}

/// Distance along a path of `length` where 0% sits.
///
/// Always in `[0, length)`, whatever the sign or size of the angle.
#[must_use]
pub fn start_offset(length: f32, start_angle: i32, gap_compensation: bool) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let degrees = if gap_compensation {
        start_angle.saturating_add(GAP_COMPENSATION_DEGREES)
    } else {
        start_angle
    };
    let offset = (length / 360.0 * degrees as f32).rem_euclid(length);
    // rem_euclid can round up to exactly `length` for tiny negative inputs
    if offset >= length {
        0.0
    } else {
        offset
    }
}

/// The part of `border` to stroke in the progress paint.
///
/// Empty unless `percent` truncates into `[1, 100]`. Values above 100 are
/// drawn as 100. When the segment runs past the path end, the overrun is
/// appended as a second contour starting at distance zero.
#[must_use]
pub fn progress_segment(
    border: &Path,
    percent: f32,
    start_angle: i32,
    gap_compensation: bool,
) -> Path {
    if !is_active_percent(percent) {
        return Path::new();
    }
    let measure = PathMeasure::new(border);
    let length = measure.length();
    if length <= 0.0 {
        return Path::new();
    }

    let percent = percent.min(100.0);
    let offset = start_offset(length, start_angle, gap_compensation);
    let span = length * percent / 100.0;

    let mut segment = measure.segment(offset, offset + span);
    if span > length - offset {
        let overrun = percent - (length - offset) / (length / 100.0);
        segment.append(measure.segment(0.0, length * overrun / 100.0));
    }
    segment
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use roundsquare_core::Point;

    fn square() -> Path {
        border_path(Rect::new(0.0, 0.0, 100.0, 100.0), 12.0, 0.0)
    }

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn test_percent_tier() {
        assert_eq!(percent_tier(45.9), 45);
        assert_eq!(percent_tier(-1.5), -1);
        assert_eq!(percent_tier(0.99), 0);
        assert_eq!(percent_tier(f32::NAN), 0);
        assert_eq!(percent_tier(f32::INFINITY), i32::MAX);
        assert!(is_active_percent(1.0));
        assert!(is_active_percent(100.9));
        assert!(!is_active_percent(101.0));
        assert!(!is_active_percent(0.5));
    }

    #[test]
    fn test_border_inset_by_half_stroke() {
        let bounds = square().bounds().unwrap();
        assert_eq!(bounds, Rect::new(6.0, 6.0, 88.0, 88.0));
        assert!(close(square().length(), 352.0, 1e-3));
    }

    #[test]
    fn test_border_radius_clamped_to_inset_rect() {
        let path = border_path(Rect::new(0.0, 0.0, 100.0, 60.0), 10.0, 500.0);
        let bounds = path.bounds().unwrap();
        assert!(Rect::new(5.0, 5.0, 90.0, 50.0).contains_rect(&bounds, 1e-3));
        // Fully rounded ends: straight top of 40, two half circles of r=25
        let expected = 2.0 * 40.0 + std::f32::consts::TAU * 25.0;
        assert!(close(path.length(), expected, 1e-2));
    }

    #[test]
    fn test_start_offset_normalizes() {
        assert_eq!(start_offset(360.0, 0, false), 0.0);
        assert!(close(start_offset(360.0, 0, true), 26.0, 1e-4));
        assert!(close(start_offset(360.0, 450, false), 90.0, 1e-3));
        assert!(close(start_offset(360.0, -90, false), 270.0, 1e-3));
        assert_eq!(start_offset(360.0, 360, false), 0.0);
        assert_eq!(start_offset(0.0, 90, true), 0.0);
    }

    #[test]
    fn test_inactive_percent_is_empty() {
        let border = square();
        for p in [-1.0, 0.0, 0.5, 101.0, 250.0, -30.0, f32::NAN] {
            assert!(progress_segment(&border, p, 0, true).is_empty(), "{p}");
        }
    }

    #[test]
    fn test_segment_from_path_start() {
        let border = square();
        let seg = progress_segment(&border, 25.0, 0, false);
        assert_eq!(seg.contours().len(), 1);
        assert!(close(seg.length(), 88.0, 1e-3));
        let start = seg.contours()[0].start();
        assert!(close(start.x, 6.0, 1e-4) && close(start.y, 6.0, 1e-4));
    }

    #[test]
    fn test_full_circle_without_offset_does_not_wrap() {
        let border = square();
        let seg = progress_segment(&border, 100.0, 0, false);
        assert_eq!(seg.contours().len(), 1);
        assert!(close(seg.length(), border.length(), 1e-3));
    }

    #[test]
    fn test_wrap_around_splits_into_two_contours() {
        let border = square();
        let length = border.length();
        // 270 degrees puts 0% three quarters of the way round
        let seg = progress_segment(&border, 50.0, 270, false);
        assert_eq!(seg.contours().len(), 2);
        assert!(close(seg.length(), length * 0.5, 1e-2));

        let first = &seg.contours()[0];
        let second = &seg.contours()[1];
        assert!(close(first.length(), length * 0.25, 1e-2));
        let end = PathMeasure::new(&border).position_at(length).unwrap();
        assert!(first.current().distance(&end) < 1e-2);
        assert!(second.start().distance(&Point::new(6.0, 6.0)) < 1e-3);
    }

    #[test]
    fn test_percent_above_hundred_clamps() {
        let border = square();
        let seg = progress_segment(&border, 100.7, 90, true);
        assert!(close(seg.length(), border.length(), 1e-2));
    }

    #[test]
    fn test_degenerate_viewport() {
        let border = border_path(Rect::new(0.0, 0.0, 8.0, 8.0), 20.0, 4.0);
        assert!(progress_segment(&border, 50.0, 0, true).is_empty());
    }

    proptest! {
        #[test]
        fn prop_segment_length_independent_of_angle(
            percent in 1.0f32..=100.0,
            angle in -720i32..720,
            gap in any::<bool>(),
            w in 40.0f32..300.0,
            h in 40.0f32..300.0,
            radius in 0.0f32..60.0,
        ) {
            let border = border_path(Rect::new(0.0, 0.0, w, h), 8.0, radius);
            let length = border.length();
            let seg = progress_segment(&border, percent, angle, gap);
            let expected = length * percent / 100.0;
            prop_assert!((seg.length() - expected).abs() <= length * 1e-3 + 1e-2);
            prop_assert!(seg.contours().len() <= 2);
        }

        #[test]
        fn prop_wrapped_second_contour_starts_at_origin(
            percent in 1.0f32..=100.0,
            angle in 1i32..359,
        ) {
            let border = border_path(Rect::new(0.0, 0.0, 120.0, 80.0), 6.0, 10.0);
            let seg = progress_segment(&border, percent, angle, false);
            if seg.contours().len() == 2 {
                let origin = PathMeasure::new(&border).position_at(0.0).unwrap();
                prop_assert!(seg.contours()[1].start().distance(&origin) < 1e-2);
            }
        }

        #[test]
        fn prop_start_offset_in_range(length in 0.1f32..5000.0, angle in any::<i32>(), gap in any::<bool>()) {
            let offset = start_offset(length, angle, gap);
            prop_assert!(offset >= 0.0 && offset < length);
        }
    }
}
