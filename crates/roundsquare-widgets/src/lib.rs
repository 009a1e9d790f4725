//! The rounded-square progress widget.
//!
//! [`RoundSquareProgress`] strokes a rounded border whose tint switches
//! between idle and active, fills part of it in proportion to a percent and
//! draws a caption sized to the space left inside.
//!
//! # Example
//!
//! ```
//! use roundsquare_core::{Animate, Rect, RecordingCanvas, Widget};
//! use roundsquare_widgets::RoundSquareProgress;
//!
//! let mut progress = RoundSquareProgress::new().text("45");
//! progress.set_progress_percent(45.0);
//! progress.settle(1.0 / 60.0, 120);
//!
//! progress.layout(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let mut canvas = RecordingCanvas::new();
//! progress.paint(&mut canvas);
//! assert_eq!(canvas.strokes().len(), 2);
//! assert_eq!(canvas.texts().len(), 2);
//! ```

pub mod caption;
mod error;
pub mod font_provider;
pub mod progress_path;
pub mod round_square_progress;

pub use caption::{layout_caption, CaptionLayout, CaptionParams};
pub use error::BuildError;
pub use font_provider::{DefaultFontProvider, FontProvider, FontRegistry};
pub use progress_path::{border_path, progress_segment, GAP_COMPENSATION_DEGREES};
pub use round_square_progress::{
    InteractionMode, ProgressPaint, RoundSquareProgress, IDLE_PERCENT, PERCENT_DURATION,
    TRACK_COLOR_DURATION,
};
