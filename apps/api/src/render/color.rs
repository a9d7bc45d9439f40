//! Text-color parsing for the fixed overlay color.

use anyhow::{bail, Result};
use image::Rgba;

/// Parses a `#RRGGBB` hex string (leading `#` optional) into an opaque
/// RGBA pixel. Used once at startup on the configured color.
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 {
        bail!("invalid color '{s}': expected #RRGGBB");
    }
    let bytes = hex::decode(digits).map_err(|_| {
        anyhow::anyhow!("invalid color '{s}': expected #RRGGBB")
    })?;
    Ok(Rgba([bytes[0], bytes[1], bytes[2], 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_production_color() {
        let color = parse_hex_color("#4B71A7").expect("valid color");
        assert_eq!(color, Rgba([0x4B, 0x71, 0xA7, 255]));
    }

    #[test]
    fn test_parse_without_hash() {
        let color = parse_hex_color("ff0000").expect("valid color");
        assert_eq!(color, Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_reject_wrong_length() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#11223344").is_err());
    }

    #[test]
    fn test_reject_non_hex_digits() {
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
