//! Roundsquare: a rounded-square progress indicator.
//!
//! Re-exports the toolkit core at the crate root and the widget and
//! attribute crates as modules.
//!
//! ```
//! use roundsquare::widgets::{DefaultFontProvider, InteractionMode, RoundSquareProgress};
//! use roundsquare::{Rect, RecordingCanvas, Widget};
//!
//! let yaml = "radius: 8\nprogress-percent: 30\ntext: \"30\"\ntext-gravity: center\n";
//! let mut progress =
//!     RoundSquareProgress::from_yaml(yaml, &DefaultFontProvider, InteractionMode::Preview)
//!         .unwrap();
//! progress.layout(Rect::new(0.0, 0.0, 120.0, 120.0));
//!
//! let mut canvas = RecordingCanvas::new();
//! progress.paint(&mut canvas);
//! assert_eq!(canvas.texts().len(), 2);
//! ```

pub use roundsquare_core::*;
pub use roundsquare_widgets as widgets;
pub use roundsquare_yaml as yaml;

pub use roundsquare_widgets::{InteractionMode, RoundSquareProgress};
