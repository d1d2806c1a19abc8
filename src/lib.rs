//! colorgrid - WCAG contrast-matrix generator
//!
//! This crate provides the color-science and decision engine behind an
//! accessibility contrast matrix: alpha-aware blending against a
//! composition base, WCAG relative luminance and contrast, compliance tier
//! classification, and the planning/filtering logic that enumerates the
//! full background x foreground grid for a renderer to draw.

pub mod cli;
pub mod color;
pub mod config;
pub mod config_paths;
pub mod contrast;
pub mod evaluate;
pub mod messages;
pub mod planner;
pub mod selection;
pub mod tier;
pub mod tracing;
pub mod variables;
pub mod view;

// Re-export commonly used types
pub use color::{Color, InvalidColorInput, Paint};
pub use config::{AppConfig, MatrixConfig};
pub use evaluate::CellResult;
pub use planner::{EmptySelection, MatrixPlan};
pub use tier::Tier;
pub use variables::{ColorVariable, GroupedVariables, VariableSource};
