//! Vector paths made of line and circular-arc segments, and arc-length
//! measurement over them.
//!
//! Only the shapes a rounded border needs are supported, which keeps every
//! length exact: a line's length is its chord and an arc's length is
//! `radius * |sweep|`. No curve flattening is involved in measuring, so
//! segment extraction is stable to float precision.
//!
//! # Examples
//!
//! ```
//! use roundsquare_core::{Path, PathMeasure, Rect};
//!
//! let border = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0);
//! let measure = PathMeasure::new(&border);
//! assert_eq!(measure.length(), 400.0);
//!
//! let quarter = measure.segment(0.0, 100.0);
//! assert_eq!(quarter.length(), 100.0);
//! ```

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// One piece of a contour.
///
/// Angles are in radians and follow screen coordinates: with y pointing
/// down, a positive sweep turns clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Straight line.
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
    /// Circular arc.
    Arc {
        /// Circle center
        center: Point,
        /// Circle radius
        radius: f32,
        /// Angle of the start point
        start_angle: f32,
        /// Signed angular extent
        sweep: f32,
    },
}

impl Segment {
    /// Exact length of the segment.
    #[must_use]
    pub fn length(&self) -> f32 {
        match *self {
            Self::Line { from, to } => from.distance(&to),
            Self::Arc { radius, sweep, .. } => radius * sweep.abs(),
        }
    }

    /// Point at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Point {
        match *self {
            Self::Line { from, to } => from.lerp(&to, t),
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => point_on_circle(center, radius, sweep.mul_add(t, start_angle)),
        }
    }

    /// First point of the segment.
    #[must_use]
    pub fn start(&self) -> Point {
        self.point_at(0.0)
    }

    /// Last point of the segment.
    #[must_use]
    pub fn end(&self) -> Point {
        self.point_at(1.0)
    }

    /// The part of this segment between parameters `t0` and `t1`.
    #[must_use]
    pub fn slice(&self, t0: f32, t1: f32) -> Self {
        match *self {
            Self::Line { .. } => Self::Line {
                from: self.point_at(t0),
                to: self.point_at(t1),
            },
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Self::Arc {
                center,
                radius,
                start_angle: sweep.mul_add(t0, start_angle),
                sweep: sweep * (t1 - t0),
            },
        }
    }

    /// Tight bounding box, including arc extrema.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let start = self.start();
        let mut bounds = Rect::new(start.x, start.y, 0.0, 0.0).include_point(self.end());

        if let Self::Arc {
            center,
            radius,
            start_angle,
            sweep,
        } = *self
        {
            let (lo, hi) = if sweep >= 0.0 {
                (start_angle, start_angle + sweep)
            } else {
                (start_angle + sweep, start_angle)
            };
            // Every multiple of 90 degrees inside the sweep is an extremum.
            let mut k = (lo / FRAC_PI_2).ceil();
            while k * FRAC_PI_2 <= hi {
                bounds = bounds.include_point(point_on_circle(center, radius, k * FRAC_PI_2));
                k += 1.0;
            }
        }

        bounds
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(radius.mul_add(cos, center.x), radius.mul_add(sin, center.y))
}

/// A connected run of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    start: Point,
    segments: Vec<Segment>,
    closed: bool,
}

impl Contour {
    /// Begin an empty contour at `start`.
    #[must_use]
    pub const fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
            closed: false,
        }
    }

    /// Start point.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Current pen position.
    #[must_use]
    pub fn current(&self) -> Point {
        self.segments.last().map_or(self.start, Segment::end)
    }

    /// Segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the contour was closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Append a line from the pen to `to`.
    pub fn line_to(&mut self, to: Point) {
        let from = self.current();
        self.segments.push(Segment::Line { from, to });
    }

    /// Append an arc. The arc is expected to start at the pen position.
    pub fn arc(&mut self, center: Point, radius: f32, start_angle: f32, sweep: f32) {
        self.segments.push(Segment::Arc {
            center,
            radius,
            start_angle,
            sweep,
        });
    }

    /// Append an already-built segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Close the contour, adding a line back to the start if needed.
    pub fn close(&mut self) {
        if self.current().distance(&self.start) > f32::EPSILON {
            self.line_to(self.start);
        }
        self.closed = true;
    }

    /// Total length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Tight bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.segments.iter().fold(
            Rect::new(self.start.x, self.start.y, 0.0, 0.0),
            |acc, seg| acc.union(&seg.bounds()),
        )
    }
}

/// A shape made of zero or more contours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    contours: Vec<Contour>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounded rectangle traced clockwise.
    ///
    /// The contour starts on the top edge where the top-left corner ends,
    /// `(left + r, top)`, so distance zero is always at the same spot.
    /// `radius` is clamped to half the shorter side; a zero radius yields a
    /// plain rectangle starting at the top-left corner.
    #[must_use]
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        let r = clamp_corner_radius(rect, radius);
        let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

        let mut contour = Contour::new(Point::new(left + r, top));
        contour.line_to(Point::new(right - r, top));
        if r > 0.0 {
            contour.arc(Point::new(right - r, top + r), r, -FRAC_PI_2, FRAC_PI_2);
        }
        contour.line_to(Point::new(right, bottom - r));
        if r > 0.0 {
            contour.arc(Point::new(right - r, bottom - r), r, 0.0, FRAC_PI_2);
        }
        contour.line_to(Point::new(left + r, bottom));
        if r > 0.0 {
            contour.arc(Point::new(left + r, bottom - r), r, FRAC_PI_2, FRAC_PI_2);
        }
        contour.line_to(Point::new(left, top + r));
        if r > 0.0 {
            contour.arc(Point::new(left + r, top + r), r, PI, FRAC_PI_2);
        }
        contour.closed = true;

        Self {
            contours: vec![contour],
        }
    }

    /// Whether the path has no drawable length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(|c| c.segments.is_empty())
    }

    /// Contours in drawing order.
    #[must_use]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Move every contour of `other` into this path.
    pub fn append(&mut self, other: Self) {
        self.contours.extend(other.contours);
    }

    /// Sum of all contour lengths.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.contours.iter().map(Contour::length).sum()
    }

    /// Tight bounding box, or `None` for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.contours
            .iter()
            .filter(|c| !c.segments.is_empty())
            .map(Contour::bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// Approximate each contour with a polyline.
    ///
    /// Arcs are subdivided so the chord error stays under `tolerance`.
    #[must_use]
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec<Point>> {
        let tolerance = tolerance.max(1e-3);
        self.contours
            .iter()
            .filter(|c| !c.segments.is_empty())
            .map(|contour| {
                let mut points = vec![contour.start];
                for seg in &contour.segments {
                    let steps = match *seg {
                        Segment::Line { .. } => 1,
                        Segment::Arc { radius, sweep, .. } => arc_steps(radius, sweep, tolerance),
                    };
                    points.extend((1..=steps).map(|i| seg.point_at(i as f32 / steps as f32)));
                }
                points
            })
            .collect()
    }
}

/// Largest usable corner radius for `rect`.
#[must_use]
pub fn clamp_corner_radius(rect: Rect, radius: f32) -> f32 {
    radius.clamp(0.0, (rect.size().min_side() / 2.0).max(0.0))
}

fn arc_steps(radius: f32, sweep: f32, tolerance: f32) -> usize {
    if radius <= tolerance {
        return 1;
    }
    let max_step = 2.0 * (1.0 - tolerance / radius).acos();
    ((sweep.abs() / max_step).ceil() as usize).clamp(1, (TAU / 0.01) as usize)
}

/// Arc-length queries over the first contour of a path.
#[derive(Debug, Clone)]
pub struct PathMeasure {
    segments: Vec<Segment>,
    /// `cumulative[i]` is the distance at the end of segment `i`.
    cumulative: Vec<f32>,
}

impl PathMeasure {
    /// Measure the first contour of `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        let segments = path
            .contours
            .first()
            .map(|c| c.segments.clone())
            .unwrap_or_default();
        let cumulative = segments
            .iter()
            .scan(0.0f32, |acc, seg| {
                *acc += seg.length();
                Some(*acc)
            })
            .collect();
        Self {
            segments,
            cumulative,
        }
    }

    /// Total contour length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point at `distance` along the contour, clamped to its ends.
    #[must_use]
    pub fn position_at(&self, distance: f32) -> Option<Point> {
        let distance = distance.clamp(0.0, self.length());
        let mut seg_start = 0.0;
        for (seg, &seg_end) in self.segments.iter().zip(&self.cumulative) {
            let len = seg_end - seg_start;
            if distance <= seg_end && len > 0.0 {
                return Some(seg.point_at((distance - seg_start) / len));
            }
            seg_start = seg_end;
        }
        self.segments.last().map(Segment::end)
    }

    /// The part of the contour between `start` and `stop` distances.
    ///
    /// Both ends are clamped to `[0, length]`; an empty path is returned when
    /// nothing remains. The result is a single open contour.
    #[must_use]
    pub fn segment(&self, start: f32, stop: f32) -> Path {
        let total = self.length();
        let start = start.clamp(0.0, total);
        let stop = stop.clamp(0.0, total);
        if start >= stop {
            return Path::new();
        }

        let mut contour: Option<Contour> = None;
        let mut seg_start = 0.0;
        for (seg, &seg_end) in self.segments.iter().zip(&self.cumulative) {
            let len = seg_end - seg_start;
            let from = start.max(seg_start);
            let to = stop.min(seg_end);
            if len > 0.0 && to > from {
                let piece = seg.slice((from - seg_start) / len, (to - seg_start) / len);
                contour
                    .get_or_insert_with(|| Contour::new(piece.start()))
                    .push(piece);
            }
            if seg_end >= stop {
                break;
            }
            seg_start = seg_end;
        }

        Path {
            contours: contour.into_iter().collect(),
        }
    }
}
