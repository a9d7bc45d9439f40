//! Adaptive font sizing: a descending scan that picks the largest point
//! size whose rendered bounds fit the target rectangle.
//!
//! The scan is linear and strictly descending because larger sizes are
//! preferred and the first fit encountered is therefore the best one. No
//! binary search: fit is not guaranteed monotonic in size for pathological
//! fonts, and the descending scan is correct regardless.

use crate::layout::geometry::{Rect, TextBounds};

/// Measures the rendered bounds of a string at a given point size.
///
/// Implemented by `LoadedFont` over real glyph metrics; the fit search only
/// depends on this trait so it can be tested with synthetic measurers.
pub trait TextMeasurer {
    fn bounds(&self, text: &str, size: u32) -> TextBounds;
}

/// Inclusive size range and pixel tolerance for the fit search.
///
/// The tolerance is subtracted from the rectangle's dimensions before the
/// fit test so text never touches the rectangle's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    pub max_size: u32,
    pub min_size: u32,
    pub tolerance: i32,
}

impl Default for SizeLimits {
    fn default() -> Self {
        SizeLimits {
            max_size: 200,
            min_size: 50,
            tolerance: 5,
        }
    }
}

/// Result of the fit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOutcome {
    pub size: u32,
    /// No size in range fit; `size` is the minimum, used without re-checking
    /// whether it fits. The rendered text may overflow the rectangle.
    pub degraded: bool,
}

/// Finds the largest size in `[min_size, max_size]` at which `text` fits
/// inside `rect` minus the tolerance, scanning downward from `max_size`.
///
/// If no size fits, degrades to `min_size` rather than failing; the caller
/// gets overflowing but renderable text.
pub fn fit_text(
    measurer: &impl TextMeasurer,
    text: &str,
    rect: Rect,
    limits: SizeLimits,
) -> FitOutcome {
    let fit_width = rect.width() - limits.tolerance;
    let fit_height = rect.height() - limits.tolerance;

    for size in (limits.min_size..=limits.max_size).rev() {
        let bounds = measurer.bounds(text, size);
        if bounds.width() <= fit_width && bounds.height() <= fit_height {
            return FitOutcome {
                size,
                degraded: false,
            };
        }
    }

    FitOutcome {
        size: limits.min_size,
        degraded: true,
    }
}
