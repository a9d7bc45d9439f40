//! Font loading and real-glyph text measurement over rusttype.
//!
//! Fonts are read from disk fresh on every request; no cache, no shared
//! state. The file is parsed once and scaled per measurement, so the
//! load-failure policy applies at a single site instead of once per
//! candidate size.

use std::fs;
use std::path::Path;

use rusttype::{point, Font, Scale};
use thiserror::Error;
use tracing::warn;

use crate::errors::AppError;
use crate::layout::fit::TextMeasurer;
use crate::layout::geometry::TextBounds;

/// Why a font file failed to load. A file-access failure triggers the
/// fallback-font policy; a parse failure on the fallback itself is a
/// render error (the file exists but is not a usable font).
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("cannot read font file {path}: {source}")]
    FileAccess {
        path: String,
        source: std::io::Error,
    },

    #[error("font file {path} is not a parseable font")]
    Parse { path: String },
}

/// An owned, size-independent font parsed from a file's bytes.
#[derive(Debug)]
pub struct LoadedFont {
    font: Font<'static>,
}

impl LoadedFont {
    pub fn from_file(path: &Path) -> Result<Self, FontLoadError> {
        let bytes = fs::read(path).map_err(|source| FontLoadError::FileAccess {
            path: path.display().to_string(),
            source,
        })?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| FontLoadError::Parse {
            path: path.display().to_string(),
        })?;
        Ok(LoadedFont { font })
    }

    pub fn rusttype(&self) -> &Font<'static> {
        &self.font
    }
}

impl TextMeasurer for LoadedFont {
    /// Bounding box of `text` at `size`, relative to a baseline at y = 0.
    ///
    /// Aggregates the pixel bounding boxes of the laid-out glyphs (kerning
    /// included). Glyphs with no ink (spaces, empty strings) contribute
    /// nothing, so such strings measure as degenerate all-zero bounds.
    fn bounds(&self, text: &str, size: u32) -> TextBounds {
        let scale = Scale::uniform(size as f32);
        let mut acc: Option<TextBounds> = None;

        for glyph in self.font.layout(text, scale, point(0.0, 0.0)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                acc = Some(match acc {
                    None => TextBounds {
                        left: bb.min.x,
                        top: bb.min.y,
                        right: bb.max.x,
                        bottom: bb.max.y,
                    },
                    Some(b) => TextBounds {
                        left: b.left.min(bb.min.x),
                        top: b.top.min(bb.min.y),
                        right: b.right.max(bb.max.x),
                        bottom: b.bottom.max(bb.max.y),
                    },
                });
            }
        }

        acc.unwrap_or_default()
    }
}

/// Loads the request font, degrading to the configured fallback when the
/// primary file is missing or unreadable (availability over fidelity).
///
/// A fallback that is itself missing means the deployment is broken; startup
/// verifies it, so a request reaching this state maps to AssetMissing.
pub fn load_with_fallback(primary: &Path, fallback: &Path) -> Result<LoadedFont, AppError> {
    match LoadedFont::from_file(primary) {
        Ok(font) => Ok(font),
        Err(FontLoadError::Parse { path }) => Err(AppError::Render(format!(
            "font file {path} is not a parseable font"
        ))),
        Err(err) => {
            warn!("{err}; falling back to {}", fallback.display());
            LoadedFont::from_file(fallback).map_err(|err| match err {
                FontLoadError::FileAccess { path, source } => {
                    AppError::AssetMissing(format!("fallback font {path}: {source}"))
                }
                FontLoadError::Parse { path } => AppError::Render(format!(
                    "fallback font {path} is not a parseable font"
                )),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_file_access_error() {
        let err = LoadedFont::from_file(Path::new("does/not/exist.ttf")).unwrap_err();
        assert!(
            matches!(err, FontLoadError::FileAccess { .. }),
            "expected FileAccess, got {err:?}"
        );
    }

    #[test]
    fn test_garbage_bytes_are_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"this is not a font").expect("write");
        let err = LoadedFont::from_file(file.path()).unwrap_err();
        assert!(
            matches!(err, FontLoadError::Parse { .. }),
            "expected Parse, got {err:?}"
        );
    }

    #[test]
    fn test_fallback_missing_maps_to_asset_missing() {
        let err = load_with_fallback(
            Path::new("missing/primary.ttf"),
            Path::new("missing/fallback.ttf"),
        )
        .unwrap_err();
        assert!(
            matches!(err, AppError::AssetMissing(_)),
            "expected AssetMissing, got {err:?}"
        );
    }
}
