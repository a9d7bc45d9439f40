//! Axum route handler for the card generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::compositor::compose_card;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub name: String,
}

/// POST /api/generate
///
/// Overlays the (trimmed) name onto the configured base image and returns
/// the composited PNG. The `Json` extractor's rejection is taken as a
/// `Result` so a non-JSON body or a missing/mistyped `name` field comes
/// back as the uniform `{"error": …}` 400 body instead of axum's default.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::Validation(format!("request must be JSON: {e}")))?;

    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation(
            "'name' must be a non-empty string".to_string(),
        ));
    }

    // Compositing is blocking CPU + file I/O; keep it off the async workers.
    let config = state.config.clone();
    let card = {
        let name = name.clone();
        tokio::task::spawn_blocking(move || compose_card(&name, &config))
    }
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("compose task failed: {e}")))??;

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", download_filename(&name)),
        ),
    ];
    Ok((headers, card).into_response())
}

/// Header-safe suggested filename. ASCII alphanumerics, spaces, '-' and '_'
/// survive; names with nothing header-safe left (e.g. CJK names) fall back
/// to a fixed filename rather than risking an invalid header value.
fn download_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe = safe.trim();
    if safe.is_empty() {
        "card.png".to_string()
    } else {
        format!("{safe}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use image::Rgba;

    fn test_state() -> AppState {
        AppState {
            config: crate::config::Config {
                base_image_path: "missing/base.png".to_string(),
                font_path: "missing/font.ttf".to_string(),
                fallback_font_path: "missing/fb.ttf".to_string(),
                font_color: Rgba([0x4B, 0x71, 0xA7, 255]),
                text_rect: Rect::new(235, 1004, 981, 1245),
                max_font_size: 200,
                min_font_size: 50,
                fit_tolerance: 5,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let result = handle_generate(
            State(test_state()),
            Ok(Json(GenerateRequest {
                name: "   ".to_string(),
            })),
        )
        .await;
        assert!(
            matches!(result, Err(AppError::Validation(_))),
            "whitespace-only name must be a validation error"
        );
    }

    #[tokio::test]
    async fn test_missing_assets_surface_as_asset_missing() {
        let result = handle_generate(
            State(test_state()),
            Ok(Json(GenerateRequest {
                name: "张三".to_string(),
            })),
        )
        .await;
        assert!(
            matches!(result, Err(AppError::AssetMissing(_))),
            "valid name with no assets on disk must be AssetMissing"
        );
    }

    #[test]
    fn test_download_filename_keeps_ascii() {
        assert_eq!(download_filename("Alice"), "Alice.png");
        assert_eq!(download_filename("Mary Jane"), "Mary Jane.png");
    }

    #[test]
    fn test_download_filename_falls_back_for_cjk() {
        assert_eq!(download_filename("张三"), "card.png");
    }

    #[test]
    fn test_download_filename_strips_header_breaking_chars() {
        assert_eq!(download_filename("a\"b\\c"), "abc.png");
    }
}
