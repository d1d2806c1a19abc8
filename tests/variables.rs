//! Variable grouping and palette file tests

mod common;
use common::{approx_eq, mono_variables, red_variables, var, SAMPLE_PALETTE_YAML};

use colorgrid::variables::{ColorVariable, GroupedVariables, PaletteFile, VariableSource};

// ========================================================================
// Grouping
// ========================================================================

#[test]
fn test_group_is_prefix_before_separator() {
    let variable = var("v-1", "red/500", "#F04438");
    assert_eq!(variable.group(), "red");
}

#[test]
fn test_group_of_ungrouped_name_is_whole_name() {
    let variable = var("v-1", "neutral", "#667085");
    assert_eq!(variable.group(), "neutral");
}

#[test]
fn test_group_only_splits_on_first_separator() {
    let variable = var("v-1", "brand/red/500", "#F04438");
    assert_eq!(variable.group(), "brand");
    assert_eq!(variable.label(false), "red/500");
}

#[test]
fn test_grouping_preserves_first_appearance_order() {
    let mut variables = red_variables();
    variables.extend(mono_variables());
    variables.push(var("v-red-50", "red/50", "#FEF3F2"));

    let grouped = GroupedVariables::from_variables(variables);
    assert_eq!(grouped.group_names(), ["red", "mono"]);
    assert_eq!(grouped.len(), 2);
}

#[test]
fn test_grouping_preserves_member_order() {
    let mut variables = red_variables();
    variables.push(var("v-red-50", "red/50", "#FEF3F2"));

    let grouped = GroupedVariables::from_variables(variables);
    let names: Vec<&str> = grouped
        .get("red")
        .unwrap()
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, ["red/100", "red/500", "red/900", "red/50"]);
}

#[test]
fn test_unknown_group_is_none() {
    let grouped = GroupedVariables::from_variables(red_variables());
    assert!(grouped.get("blue").is_none());
}

#[test]
fn test_empty_grouping() {
    let grouped = GroupedVariables::from_variables(vec![]);
    assert!(grouped.is_empty());
}

// ========================================================================
// Labels
// ========================================================================

#[test]
fn test_label_short_form() {
    let variable = var("v-1", "Red/500", "#F04438");
    assert_eq!(variable.label(false), "500");
}

#[test]
fn test_label_full_form_replaces_separator() {
    let variable = var("v-1", "Red/500", "#F04438");
    assert_eq!(variable.label(true), "red 500");
}

#[test]
fn test_label_ungrouped_lowercases() {
    let variable = var("v-1", "Neutral", "#667085");
    assert_eq!(variable.label(false), "neutral");
    assert_eq!(variable.label(true), "neutral");
}

// ========================================================================
// Palette files
// ========================================================================

#[test]
fn test_palette_parses_and_fetches() {
    let palette = PaletteFile::from_yaml(SAMPLE_PALETTE_YAML).unwrap();
    let variables = palette.fetch_variables().unwrap();
    assert_eq!(variables.len(), 4);

    let names: Vec<&str> = variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["red/500", "red/600", "blue/500", "neutral"]);
    assert!(variables.iter().all(|v| v.collection == "Brand"));
}

#[test]
fn test_palette_ids_are_unique_and_stable() {
    let palette = PaletteFile::from_yaml(SAMPLE_PALETTE_YAML).unwrap();
    let variables = palette.fetch_variables().unwrap();
    assert_eq!(variables[0].id, "Brand:red/500");
    let mut ids: Vec<&str> = variables.iter().map(|v| v.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_palette_detailed_entry_opacity() {
    let palette = PaletteFile::from_yaml(SAMPLE_PALETTE_YAML).unwrap();
    let variables = palette.fetch_variables().unwrap();
    let soft = variables.iter().find(|v| v.name == "red/600").unwrap();
    assert!(approx_eq(soft.paint.opacity, 0.8, 1e-12));
    let solid = variables.iter().find(|v| v.name == "red/500").unwrap();
    assert!(approx_eq(solid.paint.opacity, 1.0, 1e-12));
}

#[test]
fn test_palette_bad_hex_fails() {
    let yaml = "collection: Broken\ncolors:\n  red/500: \"#XYZXYZ\"\n";
    let palette = PaletteFile::from_yaml(yaml).unwrap();
    assert!(palette.fetch_variables().is_err());
}

#[test]
fn test_palette_missing_collection_fails() {
    let yaml = "colors:\n  red/500: \"#F04438\"\n";
    assert!(PaletteFile::from_yaml(yaml).is_err());
}

#[test]
fn test_palette_load_from_disk() {
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("palette.yaml");
    fs::write(&path, SAMPLE_PALETTE_YAML).expect("Failed to write palette");

    let palette = PaletteFile::load(&path).unwrap();
    assert_eq!(palette.fetch_variables().unwrap().len(), 4);
}

#[test]
fn test_palette_load_missing_file_fails() {
    use std::path::Path;
    assert!(PaletteFile::load(Path::new("/nonexistent/palette.yaml")).is_err());
}

#[test]
fn test_fetch_preserves_document_order_for_grouping() {
    let palette = PaletteFile::from_yaml(SAMPLE_PALETTE_YAML).unwrap();
    let grouped = GroupedVariables::from_variables(palette.fetch_variables().unwrap());
    assert_eq!(grouped.group_names(), ["red", "blue", "neutral"]);
}

#[test]
fn test_color_variable_equality_is_structural() {
    // ColorVariable derives PartialEq for test convenience; identity
    // decisions in the engine go through `id` explicitly.
    let a: ColorVariable = var("v-1", "red/500", "#F04438");
    let b = var("v-2", "red/500", "#F04438");
    assert_ne!(a, b);
}
