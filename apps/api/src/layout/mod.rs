// Adaptive text layout: descending fit search over point sizes plus
// baseline-aware centering. CPU-only except the font loader; measurement is
// behind the TextMeasurer trait so the search runs in tests without font
// assets.

pub mod anchor;
pub mod fit;
pub mod font;
pub mod geometry;

// Re-export the public API consumed by other modules (compositor, config).
pub use fit::{fit_text, FitOutcome, SizeLimits, TextMeasurer};
pub use geometry::{Rect, TextBounds};
