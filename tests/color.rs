//! Color model tests: hex parsing, blending, swatch labels

mod common;
use common::approx_eq;

use colorgrid::color::{Color, InvalidColorInput, Paint};

// ========================================================================
// Hex parsing
// ========================================================================

#[test]
fn test_from_hex_white() {
    let color = Color::from_hex("#FFFFFF").unwrap();
    assert_eq!(color, Color::WHITE);
}

#[test]
fn test_from_hex_black() {
    let color = Color::from_hex("#000000").unwrap();
    assert_eq!(color, Color::BLACK);
}

#[test]
fn test_from_hex_channels() {
    let color = Color::from_hex("#F04438").unwrap();
    assert!(approx_eq(color.r, 240.0 / 255.0, 1e-9));
    assert!(approx_eq(color.g, 68.0 / 255.0, 1e-9));
    assert!(approx_eq(color.b, 56.0 / 255.0, 1e-9));
}

#[test]
fn test_from_hex_lowercase() {
    let color = Color::from_hex("#f04438").unwrap();
    assert!(approx_eq(color.r, 240.0 / 255.0, 1e-9));
}

#[test]
fn test_from_hex_missing_hash() {
    let err = Color::from_hex("F04438").unwrap_err();
    assert!(matches!(err, InvalidColorInput::BadHexFormat(_)));
}

#[test]
fn test_from_hex_wrong_length() {
    assert!(Color::from_hex("#FFF").is_err());
    assert!(Color::from_hex("#FFFFFFFF").is_err());
    assert!(Color::from_hex("#").is_err());
}

#[test]
fn test_from_hex_bad_digit() {
    let err = Color::from_hex("#GGGGGG").unwrap_err();
    assert!(matches!(err, InvalidColorInput::BadHexDigit(_)));
}

#[test]
fn test_to_hex_round_trip() {
    for hex in ["#f04438", "#000000", "#ffffff", "#2e90fa"] {
        let color = Color::from_hex(hex).unwrap();
        assert_eq!(color.to_hex(), hex);
    }
}

// ========================================================================
// Blending
// ========================================================================

#[test]
fn test_blend_opaque_is_paint_color() {
    let paint = Paint::solid(Color::new(0.2, 0.4, 0.6));
    let result = paint.blend_over(Color::WHITE);
    assert_eq!(result, Color::new(0.2, 0.4, 0.6));
}

#[test]
fn test_blend_transparent_is_base() {
    let paint = Paint::with_opacity(Color::new(0.2, 0.4, 0.6), 0.0);
    let base = Color::new(0.9, 0.8, 0.7);
    assert_eq!(paint.blend_over(base), base);
}

#[test]
fn test_blend_equal_colors_is_idempotent() {
    // base == paint color: the mix weight drops out at any opacity
    let color = Color::new(0.3, 0.5, 0.7);
    for opacity in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let result = Paint::with_opacity(color, opacity).blend_over(color);
        assert!(approx_eq(result.r, color.r, 1e-12));
        assert!(approx_eq(result.g, color.g, 1e-12));
        assert!(approx_eq(result.b, color.b, 1e-12));
    }
}

#[test]
fn test_blend_half_black_over_white() {
    let result = Paint::with_opacity(Color::BLACK, 0.5).blend_over(Color::WHITE);
    assert!(approx_eq(result.r, 0.5, 1e-12));
    assert!(approx_eq(result.g, 0.5, 1e-12));
    assert!(approx_eq(result.b, 0.5, 1e-12));
}

// ========================================================================
// Swatch labels
// ========================================================================

#[test]
fn test_swatch_label_opaque() {
    let paint = Paint::solid(Color::from_hex("#f04438").unwrap());
    assert_eq!(paint.swatch_label(), "#F04438");
}

#[test]
fn test_swatch_label_translucent() {
    let paint = Paint::with_opacity(Color::from_hex("#f04438").unwrap(), 0.8);
    assert_eq!(paint.swatch_label(), "#F04438 80%");
}

#[test]
fn test_swatch_label_rounds_percent() {
    let paint = Paint::with_opacity(Color::BLACK, 0.333);
    assert_eq!(paint.swatch_label(), "#000000 33%");
}
