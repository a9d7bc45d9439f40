//! Baseline-aware centered placement of measured text inside a rectangle.

use crate::layout::geometry::{Rect, TextBounds};

/// Computes the draw origin that visually centers `bounds` inside `rect`.
///
/// The returned y is the baseline position the rasterizer expects, so
/// `bounds.top` (the usually-negative offset from baseline to topmost ink)
/// is subtracted to shift the glyph box, not the nominal font metrics box,
/// into the vertical center. This keeps text centered regardless of a font's
/// ascender/descender quirks.
pub fn draw_origin(bounds: TextBounds, rect: Rect) -> (f32, f32) {
    let x = rect.x1 as f32 + (rect.width() - bounds.width()) as f32 / 2.0;
    let y = rect.y1 as f32 + (rect.height() - bounds.height()) as f32 / 2.0 - bounds.top as f32;
    (x, y)
}
