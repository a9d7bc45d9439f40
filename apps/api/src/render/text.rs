//! Glyph rasterization onto an RGBA canvas.

use image::{ImageBuffer, Rgba};
use rusttype::{point, Font, Scale};

pub type Canvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Draws `text` with its first caret at `origin.0` and its baseline at
/// `origin.1`, alpha-blending glyph coverage over the existing pixels.
/// Pixels falling outside the canvas are clipped, so overflowing text
/// (degraded fit) cannot panic.
pub fn draw_text(
    img: &mut Canvas,
    font: &Font<'static>,
    size: u32,
    origin: (f32, f32),
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(size as f32);

    for glyph in font.layout(text, scale, point(origin.0, origin.1)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= img.width() || py >= img.height() {
                return;
            }
            blend(img.get_pixel_mut(px, py), color, coverage);
        });
    }
}

/// Source-over blend of `src` onto `dst` at the given coverage (0.0..=1.0).
/// The result is always fully opaque (the base image is the bottom layer).
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let inv = 1.0 - alpha;
    dst.0[0] = (src.0[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
    dst.0[1] = (src.0[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
    dst.0[2] = (src.0[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
    dst.0[3] = 255;
}
