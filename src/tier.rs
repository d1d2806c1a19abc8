//! Compliance tier classification and readable text color selection

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::contrast::contrast_opaque;

/// WCAG compliance tier for a contrast ratio
///
/// Ordered by decreasing strictness. Each tier's lower bound is inclusive,
/// so every ratio in `[1, 21]` falls in exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Ratio >= 7: passes AAA for normal text
    Aaa,
    /// Ratio in [4.5, 7): passes AA for normal text
    Aa,
    /// Ratio in [3, 4.5): passes AA for large (18pt) text only
    Aa18,
    /// Ratio < 3: do not pair
    Dnp,
}

impl Tier {
    /// Classify a contrast ratio into its tier
    pub fn classify(ratio: f64) -> Tier {
        if ratio >= 7.0 {
            Tier::Aaa
        } else if ratio >= 4.5 {
            Tier::Aa
        } else if ratio >= 3.0 {
            Tier::Aa18
        } else {
            Tier::Dnp
        }
    }

    /// Display label, as written on tier badges
    pub fn label(self) -> &'static str {
        match self {
            Tier::Aaa => "aaa",
            Tier::Aa => "aa",
            Tier::Aa18 => "aa18",
            Tier::Dnp => "dnp",
        }
    }
}

/// Pick black or white text for legibility against an opaque background
///
/// Prefers whichever color reaches the AA threshold (4.5:1); black wins ties
/// and is the fallback when neither passes (e.g. a mid-gray background).
/// The background must already be blended if its source was translucent.
pub fn pick_readable_color(background: Color) -> Color {
    let black_contrast = contrast_opaque(Color::BLACK, background);
    let white_contrast = contrast_opaque(Color::WHITE, background);

    if black_contrast < 4.5 && white_contrast >= 4.5 {
        Color::WHITE
    } else if black_contrast >= white_contrast && black_contrast >= 4.5 {
        Color::BLACK
    } else if white_contrast > black_contrast {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
