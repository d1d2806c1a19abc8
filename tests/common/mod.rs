//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use colorgrid::color::{Color, Paint};
use colorgrid::variables::{ColorVariable, GroupedVariables, VariableSource};

/// Build a variable with an explicit id (identity matters for self-pair tests)
pub fn var(id: &str, name: &str, hex: &str) -> ColorVariable {
    ColorVariable {
        id: id.to_string(),
        name: name.to_string(),
        collection: "Test".to_string(),
        paint: Paint::solid(Color::from_hex(hex).unwrap()),
    }
}

/// Build a translucent variable
pub fn translucent_var(id: &str, name: &str, hex: &str, opacity: f64) -> ColorVariable {
    ColorVariable {
        id: id.to_string(),
        name: name.to_string(),
        collection: "Test".to_string(),
        paint: Paint::with_opacity(Color::from_hex(hex).unwrap(), opacity),
    }
}

/// White, black, and mid-gray under one group
///
/// Against a white base these hit three distinct tiers:
/// white/black = 21 (aaa), gray/black ~ 5.3 (aa), gray/white ~ 4.0 (aa18).
pub fn mono_variables() -> Vec<ColorVariable> {
    vec![
        var("v-mono-white", "mono/white", "#FFFFFF"),
        var("v-mono-black", "mono/black", "#000000"),
        var("v-mono-gray", "mono/gray", "#808080"),
    ]
}

/// A small red ramp
pub fn red_variables() -> Vec<ColorVariable> {
    vec![
        var("v-red-100", "red/100", "#FEE4E2"),
        var("v-red-500", "red/500", "#F04438"),
        var("v-red-900", "red/900", "#7A271A"),
    ]
}

/// Group a variable list the way the planner receives it
pub fn grouped(variables: Vec<ColorVariable>) -> GroupedVariables {
    GroupedVariables::from_variables(variables)
}

/// In-memory variable source for message-boundary tests
pub struct FixtureSource {
    pub variables: Vec<ColorVariable>,
}

impl FixtureSource {
    pub fn new(variables: Vec<ColorVariable>) -> Self {
        Self { variables }
    }
}

impl VariableSource for FixtureSource {
    fn fetch_variables(&self) -> anyhow::Result<Vec<ColorVariable>> {
        Ok(self.variables.clone())
    }
}

/// Sample palette document matching the documented file format
pub const SAMPLE_PALETTE_YAML: &str = "\
collection: Brand
colors:
  red/500: \"#F04438\"
  red/600: { hex: \"#D92D20\", opacity: 0.8 }
  blue/500: \"#2E90FA\"
  neutral: \"#667085\"
";

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
