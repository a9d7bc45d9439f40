//! Base-image loading and PNG serialization.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::errors::AppError;
use crate::render::text::Canvas;

/// Opens and decodes the background image into an RGBA canvas.
///
/// A missing file is an AssetMissing error (broken deployment layout); a
/// file that exists but fails to decode is a render failure.
pub fn load_base_image(path: &Path) -> Result<Canvas, AppError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::AssetMissing(format!("base image {}: {e}", path.display()))
        } else {
            AppError::Render(format!("cannot read base image {}: {e}", path.display()))
        }
    })?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| AppError::Render(format!("cannot decode base image {}: {e}", path.display())))?;
    Ok(img.to_rgba8())
}

/// PNG-encodes the composited canvas into an in-memory byte buffer.
pub fn encode_png(img: &Canvas) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| AppError::Render(format!("PNG encoding failed: {e}")))?;
    Ok(buf.into_inner())
}
