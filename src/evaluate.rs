//! Per-pair evaluation: blend, contrast, tier, visibility
//!
//! One cell of the matrix is one background/foreground pair evaluated
//! against the composition base under the user's tier filters. The result
//! is an immutable value; rendering it is strictly the caller's problem.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::MatrixConfig;
use crate::contrast::contrast;
use crate::tier::{pick_readable_color, Tier};
use crate::variables::ColorVariable;

/// One background/foreground combination plus the composition base
///
/// Ephemeral: built per cell, evaluated, discarded.
#[derive(Debug, Clone, Copy)]
pub struct Pair<'a> {
    pub background: &'a ColorVariable,
    pub foreground: &'a ColorVariable,
    pub base: Color,
}

/// Outcome of evaluating a pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum CellResult {
    /// The cell is hidden: a self-pair, or its tier filter is off
    Suppressed,
    /// The cell is rendered with these computed values
    Visible {
        ratio: f64,
        tier: Tier,
        /// Black or white, whichever keeps the cell's text legible against
        /// the blended background
        readable_color: Color,
    },
}

impl CellResult {
    pub fn is_visible(&self) -> bool {
        matches!(self, CellResult::Visible { .. })
    }
}

/// Evaluate one pair under the given options
///
/// A pair whose two sides are the same underlying variable (same id, not
/// merely an equal color value) is suppressed unconditionally. Otherwise
/// the contrast ratio is computed over the two-stage composite, classified,
/// and hidden unless the matching tier filter is enabled.
pub fn evaluate(pair: Pair<'_>, config: &MatrixConfig) -> CellResult {
    if pair.background.id == pair.foreground.id {
        return CellResult::Suppressed;
    }

    let ratio = contrast(pair.foreground.paint, pair.background.paint, pair.base);
    let tier = Tier::classify(ratio);

    if !config.shows(tier) {
        return CellResult::Suppressed;
    }

    let blended_background = pair.background.paint.blend_over(pair.base);
    CellResult::Visible {
        ratio,
        tier,
        readable_color: pick_readable_color(blended_background),
    }
}

/// Ratio text as written on a cell, e.g. `4.52:1`
pub fn ratio_label(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}
