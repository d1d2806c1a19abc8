//! Matrix planning: group resolution and full grid enumeration
//!
//! The planner turns group selections into a complete, renderable plan: a
//! title, one header cell per column, and per row a header cell plus one
//! evaluated cell per column. It performs no rendering and holds no host
//! resources; the plan is plain data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::config::MatrixConfig;
use crate::evaluate::{evaluate, CellResult, Pair};
use crate::tier::pick_readable_color;
use crate::variables::{ColorVariable, GroupedVariables};

/// No matrix can be built from zero rows or columns
#[derive(Debug, Error, PartialEq, Eq)]
#[error("select at least one variable group to generate the matrix")]
pub struct EmptySelection;

/// A header or axis tile: one variable styled as its own label
///
/// Header tiles carry the same variable in both roles; they show the
/// variable's label and resolved hex rather than a contrast pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub name: String,
    pub collection: String,
    /// Label text per the full-name option, lowercased
    pub label: String,
    /// Uppercased hex, with an alpha percent suffix for translucent paints
    pub swatch_label: String,
    /// Black or white, picked against the blended tile background
    pub readable_color: Color,
}

/// One grid cell: the pair it represents and its evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub background: String,
    pub foreground: String,
    pub result: CellResult,
}

/// One matrix row: its axis header plus the evaluated cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub header: HeaderCell,
    pub cells: Vec<GridCell>,
}

/// The complete enumeration of a matrix, ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixPlan {
    /// Display title, lowercased
    pub title: String,
    /// Column headers, one per foreground color
    pub columns: Vec<HeaderCell>,
    /// Rows, one per background color
    pub rows: Vec<MatrixRow>,
}

impl MatrixPlan {
    /// Count of visible (non-suppressed) cells across the grid
    pub fn visible_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .filter(|cell| cell.result.is_visible())
            .count()
    }
}

/// Resolve group names to their member variables, in input order
///
/// Unknown group names contribute nothing; the original host silently skips
/// groups missing from the fetched collections.
fn resolve_groups<'a>(
    groups: &[String],
    grouped: &'a GroupedVariables,
) -> Vec<&'a ColorVariable> {
    let mut resolved = Vec::new();
    for group in groups {
        match grouped.get(group) {
            Some(members) => resolved.extend(members.iter()),
            None => tracing::debug!("Skipping unknown group {:?}", group),
        }
    }
    resolved
}

/// Header tile for a variable: its label, swatch hex, and text color
fn header_cell(variable: &ColorVariable, config: &MatrixConfig, base: Color) -> HeaderCell {
    let blended = variable.paint.blend_over(base);
    HeaderCell {
        name: variable.name.clone(),
        collection: variable.collection.clone(),
        label: variable.label(config.full_name),
        swatch_label: variable.paint.swatch_label(),
        readable_color: pick_readable_color(blended),
    }
}

/// Matrix display title from the selected group names, lowercased
///
/// Distinct mode joins the two axes with a multiplication sign; otherwise
/// only the background groups appear.
fn matrix_title(
    background_groups: &[String],
    foreground_groups: &[String],
    use_distinct: bool,
) -> String {
    let background_label = background_groups.join(", ");
    if use_distinct {
        format!("{} \u{00d7} {}", background_label, foreground_groups.join(", ")).to_lowercase()
    } else {
        background_label.to_lowercase()
    }
}

/// Enumerate the full matrix for the given selections
///
/// Fails with [`EmptySelection`] before resolving anything if there are no
/// background groups, or no foreground groups while distinct mode is on.
/// When distinct mode is off the foreground selection is the background
/// selection, producing a single symmetric matrix.
pub fn plan(
    background_groups: &[String],
    foreground_groups: &[String],
    grouped: &GroupedVariables,
    config: &MatrixConfig,
    base: Color,
) -> Result<MatrixPlan, EmptySelection> {
    if background_groups.is_empty() {
        return Err(EmptySelection);
    }
    if config.use_distinct && foreground_groups.is_empty() {
        return Err(EmptySelection);
    }

    let foreground_groups = if config.use_distinct {
        foreground_groups
    } else {
        background_groups
    };

    let background_colors = resolve_groups(background_groups, grouped);
    let foreground_colors = resolve_groups(foreground_groups, grouped);

    tracing::info!(
        "Planning {}x{} matrix ({} groups x {} groups)",
        background_colors.len(),
        foreground_colors.len(),
        background_groups.len(),
        foreground_groups.len(),
    );

    let columns = foreground_colors
        .iter()
        .map(|fg| header_cell(fg, config, base))
        .collect();

    let rows = background_colors
        .iter()
        .copied()
        .map(|bg| {
            let cells = foreground_colors
                .iter()
                .copied()
                .map(|fg| GridCell {
                    background: bg.name.clone(),
                    foreground: fg.name.clone(),
                    result: evaluate(
                        Pair {
                            background: bg,
                            foreground: fg,
                            base,
                        },
                        config,
                    ),
                })
                .collect();
            MatrixRow {
                header: header_cell(bg, config, base),
                cells,
            }
        })
        .collect();

    Ok(MatrixPlan {
        title: matrix_title(background_groups, foreground_groups, config.use_distinct),
        columns,
        rows,
    })
}
