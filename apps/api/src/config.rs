use anyhow::{bail, Context, Result};
use image::Rgba;

use crate::layout::{Rect, SizeLimits};
use crate::render::color::parse_hex_color;

/// Application configuration: deployment asset paths and the fixed layout
/// constants of the card template. Every value has a production default;
/// the environment (or a local `.env`) overrides them. Validated once at
/// startup; handlers never re-check.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_image_path: String,
    pub font_path: String,
    /// Last-resort font used when `font_path` is unreadable. Startup refuses
    /// to boot if this one cannot be loaded.
    pub fallback_font_path: String,
    pub font_color: Rgba<u8>,
    /// Region of the base image the name is fitted into.
    pub text_rect: Rect,
    pub max_font_size: u32,
    pub min_font_size: u32,
    pub fit_tolerance: i32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            base_image_path: env_or("BASE_IMAGE_PATH", "assets/base.png"),
            font_path: env_or("FONT_PATH", "assets/STXINWEI.TTF"),
            fallback_font_path: env_or("FALLBACK_FONT_PATH", "assets/fallback.ttf"),
            font_color: parse_hex_color(&env_or("FONT_COLOR", "#4B71A7"))
                .context("FONT_COLOR must be a #RRGGBB hex color")?,
            text_rect: parse_rect(&env_or("TEXT_RECT", "235,1004,981,1245"))?,
            max_font_size: parse_env("MAX_FONT_SIZE", 200)?,
            min_font_size: parse_env("MIN_FONT_SIZE", 50)?,
            fit_tolerance: parse_env("FIT_TOLERANCE", 5)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.text_rect.width() <= 0 || self.text_rect.height() <= 0 {
            bail!(
                "TEXT_RECT must have positive width and height, got {:?}",
                self.text_rect
            );
        }
        if self.min_font_size == 0 || self.min_font_size > self.max_font_size {
            bail!(
                "font size bounds must satisfy 1 <= MIN_FONT_SIZE <= MAX_FONT_SIZE, got {}..={}",
                self.min_font_size,
                self.max_font_size
            );
        }
        if self.fit_tolerance < 0 {
            bail!("FIT_TOLERANCE must be >= 0, got {}", self.fit_tolerance);
        }
        Ok(())
    }

    /// Size range and tolerance for the adaptive fit search.
    pub fn size_limits(&self) -> SizeLimits {
        SizeLimits {
            max_size: self.max_font_size,
            min_size: self.min_font_size,
            tolerance: self.fit_tolerance,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Parses "x1,y1,x2,y2" into a `Rect`.
fn parse_rect(s: &str) -> Result<Rect> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<_, _>>()
        .with_context(|| format!("TEXT_RECT must be four comma-separated integers, got '{s}'"))?;
    if parts.len() != 4 {
        bail!("TEXT_RECT must be four comma-separated integers, got '{s}'");
    }
    Ok(Rect::new(parts[0], parts[1], parts[2], parts[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rect_production_default() {
        let rect = parse_rect("235,1004,981,1245").expect("valid rect");
        assert_eq!(rect, Rect::new(235, 1004, 981, 1245));
    }

    #[test]
    fn test_parse_rect_tolerates_spaces() {
        let rect = parse_rect(" 0, 0, 10, 20 ").expect("valid rect");
        assert_eq!(rect, Rect::new(0, 0, 10, 20));
    }

    #[test]
    fn test_parse_rect_rejects_wrong_arity() {
        assert!(parse_rect("1,2,3").is_err());
        assert!(parse_rect("1,2,3,4,5").is_err());
    }

    #[test]
    fn test_parse_rect_rejects_non_numeric() {
        assert!(parse_rect("a,b,c,d").is_err());
    }
}
