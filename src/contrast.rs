//! WCAG relative luminance and contrast ratio
//!
//! The contrast of a translucent pair is computed over a two-stage
//! composite: the background paint is blended over the base first, then the
//! foreground paint is blended over that *already-blended* background. This
//! models a foreground painted on top of a composited background and is the
//! behavior the matrix is specified against — not two independent blends.

use crate::color::{Color, Paint};

/// WCAG 2.1 channel linearization
///
/// The piecewise split avoids a singularity near zero in the power curve.
fn linearize(x: f64) -> f64 {
    if x <= 0.03928 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.1
///
/// `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`, in `[0, 1]`
/// where 0 is black and 1 is white.
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio of luminances `(brighter + 0.05) / (darker + 0.05)`
///
/// The 0.05 terms are WCAG's ambient-light floor; they also keep the ratio
/// finite for pure black. Result is in `[1, 21]` and symmetric in its
/// arguments.
fn luminance_ratio(la: f64, lb: f64) -> f64 {
    let (bright, dark) = if la > lb { (la, lb) } else { (lb, la) };
    (bright + 0.05) / (dark + 0.05)
}

/// WCAG contrast ratio between a foreground and background paint over a base
///
/// Two-stage composite: `bg` over `base`, then `fg` over the blended
/// background. Pure and total; returns a ratio in `[1, 21]`.
pub fn contrast(fg: Paint, bg: Paint, base: Color) -> f64 {
    let blended_bg = bg.blend_over(base);
    let blended_fg = fg.blend_over(blended_bg);
    luminance_ratio(
        relative_luminance(blended_fg),
        relative_luminance(blended_bg),
    )
}

/// Contrast ratio between two opaque colors
///
/// Equivalent to [`contrast`] with opaque paints, where the base drops out.
pub fn contrast_opaque(a: Color, b: Color) -> f64 {
    luminance_ratio(relative_luminance(a), relative_luminance(b))
}
