//! Frame-driven tweens.
//!
//! A [`Tween`] owns its start value, end value, elapsed time and duration.
//! The host advances every animating widget through [`Animate::tick`] once
//! per frame; nothing runs on its own thread or timer.

use crate::geometry::Point;
use crate::Color;

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cosine-shaped acceleration then deceleration
    AccelerateDecelerate,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::AccelerateDecelerate => ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5,
        }
    }
}

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Point {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            x: f32::interpolate(&from.x, &to.x, t),
            y: f32::interpolate(&from.y, &to.y, t),
        }
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

/// An easing-based transition between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    /// Start value
    pub from: T,
    /// End value
    pub to: T,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time in seconds
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl<T: Interpolate + Clone> Tween<T> {
    /// Create a new tween with the default easing.
    #[must_use]
    pub fn new(from: T, to: T, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::default(),
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_complete() {
            return self.to.clone();
        }
        T::interpolate(&self.from, &self.to, self.easing.apply(self.progress()))
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f64) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }
}

/// Something that changes over frames.
pub trait Animate {
    /// Advance running animations by `dt` seconds.
    ///
    /// Returns `true` if anything visible changed and a repaint is needed.
    fn tick(&mut self, dt: f64) -> bool;

    /// Whether any animation is still running.
    fn is_animating(&self) -> bool;

    /// Tick at `frame_dt` until nothing is animating, up to `max_frames`.
    ///
    /// Returns the number of frames stepped.
    fn settle(&mut self, frame_dt: f64, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.is_animating() && frames < max_frames {
            self.tick(frame_dt);
            frames += 1;
        }
        frames
    }
}
