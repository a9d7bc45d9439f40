//! End-to-end card composition: base image + fitted, centered name text.
//!
//! Every call re-reads the base image and font from disk, so requests are
//! fully independent and the deployment can swap assets without a restart.

use std::path::Path;

use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;
use crate::layout::fit::TextMeasurer;
use crate::layout::{anchor, fit_text, font};
use crate::render::{png, text};

/// Composites `name` onto the configured base image and returns the PNG
/// bytes. `name` must already be validated (trimmed, non-empty).
pub fn compose_card(name: &str, config: &Config) -> Result<Vec<u8>, AppError> {
    let mut canvas = png::load_base_image(Path::new(&config.base_image_path))?;
    let loaded = font::load_with_fallback(
        Path::new(&config.font_path),
        Path::new(&config.fallback_font_path),
    )?;

    let outcome = fit_text(&loaded, name, config.text_rect, config.size_limits());
    if outcome.degraded {
        warn!(
            "name '{name}' does not fit the text area even at minimum size {}; output will overflow",
            outcome.size
        );
    }

    let bounds = loaded.bounds(name, outcome.size);
    let origin = anchor::draw_origin(bounds, config.text_rect);

    text::draw_text(
        &mut canvas,
        loaded.rusttype(),
        outcome.size,
        origin,
        config.font_color,
        name,
    );

    png::encode_png(&canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use image::Rgba;

    fn test_config(base: &str, font: &str, fallback: &str) -> Config {
        Config {
            base_image_path: base.to_string(),
            font_path: font.to_string(),
            fallback_font_path: fallback.to_string(),
            font_color: Rgba([0x4B, 0x71, 0xA7, 255]),
            text_rect: Rect::new(235, 1004, 981, 1245),
            max_font_size: 200,
            min_font_size: 50,
            fit_tolerance: 5,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_missing_base_image_fails_before_rendering() {
        let config = test_config("missing/base.png", "missing/font.ttf", "missing/fb.ttf");
        let err = compose_card("张三", &config).unwrap_err();
        assert!(
            matches!(err, AppError::AssetMissing(ref msg) if msg.contains("base image")),
            "expected base-image AssetMissing, got {err:?}"
        );
    }

    #[test]
    fn test_missing_fonts_fail_after_base_image_loads() {
        // Write a real (tiny) PNG so the pipeline gets past image loading
        // and fails on the font instead.
        let canvas = crate::render::Canvas::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let png_bytes = png::encode_png(&canvas).expect("encode");
        let base = tempfile::NamedTempFile::new().expect("temp file");
        std::fs::write(base.path(), &png_bytes).expect("write png");

        let config = test_config(
            base.path().to_str().expect("utf8 path"),
            "missing/font.ttf",
            "missing/fb.ttf",
        );
        let err = compose_card("张三", &config).unwrap_err();
        assert!(
            matches!(err, AppError::AssetMissing(ref msg) if msg.contains("fallback font")),
            "expected fallback-font AssetMissing, got {err:?}"
        );
    }
}
