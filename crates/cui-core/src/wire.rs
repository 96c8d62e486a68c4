//! Wire-string codecs for the CUI data format.
//!
//! Anchors, offsets, and colors travel as space-separated float strings
//! (`"0.1 0.2"`, `"1 1 1 0.5"`). Parsing happens once, here, at the
//! persistence and export boundary; malformed tokens are rejected with an
//! error instead of leaking `NaN` into the geometry engine.

use crate::components::Color;
use crate::geometry::Vec2;
use winnow::ascii::{float, space1};
use winnow::prelude::*;

/// Parse an `"x y"` vector string.
pub fn parse_vec2(input: &str) -> Result<Vec2, String> {
    vec2.parse(input.trim())
        .map_err(|e| format!("invalid vector \"{input}\": {e}"))
}

/// Format a vector back to its `"x y"` wire form.
///
/// Uses the shortest float representation that round-trips, so parse ∘
/// format is lossless.
pub fn format_vec2(v: Vec2) -> String {
    format!("{} {}", v.x, v.y)
}

/// Parse an `"r g b a"` color string.
pub fn parse_color(input: &str) -> Result<Color, String> {
    color
        .parse(input.trim())
        .map_err(|e| format!("invalid color \"{input}\": {e}"))
}

/// Format a color back to its `"r g b a"` wire form.
pub fn format_color(c: Color) -> String {
    format!("{} {} {} {}", c.r, c.g, c.b, c.a)
}

fn vec2(input: &mut &str) -> ModalResult<Vec2> {
    let (x, _, y) = (float, space1, float).parse_next(input)?;
    Ok(Vec2::new(x, y))
}

fn color(input: &mut &str) -> ModalResult<Color> {
    let (r, _, g, _, b, _, a) =
        (float, space1, float, space1, float, space1, float).parse_next(input)?;
    Ok(Color::rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_roundtrip() {
        let v = parse_vec2("0.1 0.2").unwrap();
        assert_eq!(v, Vec2::new(0.1, 0.2));
        assert_eq!(format_vec2(v), "0.1 0.2");

        let neg = parse_vec2("-10 -10").unwrap();
        assert_eq!(format_vec2(neg), "-10 -10");
    }

    #[test]
    fn vec2_tolerates_surrounding_whitespace() {
        assert_eq!(parse_vec2("  1 2  ").unwrap(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn vec2_rejects_garbage() {
        assert!(parse_vec2("1").is_err());
        assert!(parse_vec2("a b").is_err());
        assert!(parse_vec2("1 2 3").is_err());
        assert!(parse_vec2("").is_err());
    }

    #[test]
    fn color_roundtrip() {
        let c = parse_color("1 0.5 0 1").unwrap();
        assert_eq!(c, Color::rgba(1.0, 0.5, 0.0, 1.0));
        assert_eq!(format_color(c), "1 0.5 0 1");
    }

    #[test]
    fn color_rejects_short_form() {
        assert!(parse_color("1 1 1").is_err());
    }
}
