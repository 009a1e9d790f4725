//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints. The maximum wins
    /// when the bounds cross.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width).min(self.max_width),
            size.height.max(self.min_height).min(self.max_height),
        )
    }

    /// How the width axis is specified.
    #[must_use]
    pub fn width_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_width, self.max_width)
    }

    /// How the height axis is specified.
    #[must_use]
    pub fn height_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_height, self.max_height)
    }

    /// Resolve an intrinsic size against both axis specs, then apply the
    /// minimums.
    #[must_use]
    pub fn resolve(&self, intrinsic: Size) -> Size {
        self.constrain(Size::new(
            self.width_spec().resolve(intrinsic.width),
            self.height_spec().resolve(intrinsic.height),
        ))
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Per-axis measurement mode, the single-axis view of [`Constraints`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The parent dictates this exact extent.
    Exactly(f32),
    /// The widget may be at most this large.
    AtMost(f32),
    /// No limit; the widget reports its intrinsic extent.
    Unspecified,
}

impl MeasureSpec {
    fn from_range(min: f32, max: f32) -> Self {
        if !max.is_finite() {
            Self::Unspecified
        } else if min == max {
            Self::Exactly(max)
        } else {
            Self::AtMost(max)
        }
    }

    /// Pick the final extent for an axis given the intrinsic extent.
    #[must_use]
    pub fn resolve(self, intrinsic: f32) -> f32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => size.min(intrinsic),
            Self::Unspecified => intrinsic,
        }
    }
}
