//! Brick types: verifiable assertions and render budgets.
//!
//! Every widget states the invariants its current state must satisfy. A
//! widget whose assertions fail is falsified and must not be painted.

use std::time::Duration;

/// A claim about widget state, checked before every paint.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickAssertion {
    /// Paint must finish within this many milliseconds
    MaxLatencyMs(u32),

    /// A numeric property must lie inside a closed range
    InRange {
        /// Property name for error reporting
        name: &'static str,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },
}

impl BrickAssertion {
    /// Create a max latency assertion
    #[must_use]
    pub const fn max_latency_ms(ms: u32) -> Self {
        Self::MaxLatencyMs(ms)
    }

    /// Create a range assertion
    #[must_use]
    pub const fn in_range(name: &'static str, min: f32, max: f32) -> Self {
        Self::InRange { name, min, max }
    }
}

/// Per-phase time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBudget {
    /// Maximum time for measure phase
    pub measure_ms: u32,
    /// Maximum time for layout phase
    pub layout_ms: u32,
    /// Maximum time for paint phase
    pub paint_ms: u32,
    /// Whole-frame budget
    pub total_ms: u32,
}

impl BrickBudget {
    /// Split `total_ms` evenly over measure, layout and paint.
    #[must_use]
    pub const fn uniform(total_ms: u32) -> Self {
        let phase_ms = total_ms / 3;
        Self {
            measure_ms: phase_ms,
            layout_ms: phase_ms,
            paint_ms: phase_ms,
            total_ms,
        }
    }

    /// The total budget as a [`Duration`].
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms as u64)
    }
}

impl Default for BrickBudget {
    fn default() -> Self {
        // One 60 Hz frame
        Self::uniform(16)
    }
}

/// Outcome of [`Brick::verify`].
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// Assertions that held
    pub passed: Vec<BrickAssertion>,
    /// Assertions that did not hold, with the reason
    pub failed: Vec<(BrickAssertion, String)>,
    /// Wall time spent verifying
    pub verification_time: Duration,
}

impl BrickVerification {
    /// Record an assertion outcome; `Err` carries the failure reason.
    pub fn check(&mut self, assertion: BrickAssertion, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.passed.push(assertion),
            Err(reason) => self.failed.push((assertion, reason)),
        }
    }

    /// Whether nothing failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    /// Fraction of assertions that held; 1.0 when there are none.
    #[must_use]
    pub fn score(&self) -> f32 {
        let total = self.passed.len() + self.failed.len();
        if total == 0 {
            1.0
        } else {
            self.passed.len() as f32 / total as f32
        }
    }
}

/// A paintable unit that can check its own state.
pub trait Brick: Send + Sync {
    /// Name used in diagnostics.
    fn brick_name(&self) -> &'static str;

    /// Assertions [`Brick::verify`] checks.
    fn assertions(&self) -> &[BrickAssertion];

    /// Time budget per frame.
    fn budget(&self) -> BrickBudget;

    /// Check every assertion against the current state.
    fn verify(&self) -> BrickVerification;

    /// Whether painting may proceed.
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}
