//! Named color variables, prefix grouping, and variable sources
//!
//! A variable's name carries its group as the prefix before the first `/`
//! (e.g. `red/500` belongs to group `red`). Identity is the `id` string:
//! the self-pair suppression rule compares ids, never resolved color values,
//! so two variables that happen to share an RGB are still a real pair.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::color::{Color, Paint};

/// A named, grouped color definition resolved for this generation request
#[derive(Debug, Clone, PartialEq)]
pub struct ColorVariable {
    /// Identity key; unique within one fetch
    pub id: String,
    /// Full name, `group/name` or a bare name
    pub name: String,
    /// Collection the variable came from
    pub collection: String,
    /// Resolved fill
    pub paint: Paint,
}

impl ColorVariable {
    /// Group prefix: the substring before the first `/`, or the whole name
    pub fn group(&self) -> &str {
        self.name.split('/').next().unwrap_or(&self.name)
    }

    /// Label text for header/axis tiles
    ///
    /// `full_name` renders the whole identifier with the separator replaced
    /// by a space; otherwise only the segment after the separator (the whole
    /// name when there is none). Always lowercased.
    pub fn label(&self, full_name: bool) -> String {
        let text = if full_name {
            self.name.replace('/', " ")
        } else {
            match self.name.split_once('/') {
                Some((_, rest)) => rest.to_string(),
                None => self.name.clone(),
            }
        };
        text.to_lowercase()
    }
}

/// Variables grouped by name prefix, preserving source order
///
/// Group order is first-appearance order in the fetched list; order within a
/// group is the source enumeration order. Both orders are observable: the
/// UI lists groups in the first, the matrix axes follow the second.
#[derive(Debug, Clone, Default)]
pub struct GroupedVariables {
    order: Vec<String>,
    by_group: HashMap<String, Vec<ColorVariable>>,
}

impl GroupedVariables {
    /// Group a variable list by its name prefixes
    pub fn from_variables(variables: Vec<ColorVariable>) -> Self {
        let mut grouped = GroupedVariables::default();
        for variable in variables {
            let group = variable.group().to_string();
            match grouped.by_group.get_mut(&group) {
                Some(members) => members.push(variable),
                None => {
                    grouped.order.push(group.clone());
                    grouped.by_group.insert(group, vec![variable]);
                }
            }
        }
        grouped
    }

    /// Members of a group, or `None` for an unknown group name
    pub fn get(&self, group: &str) -> Option<&[ColorVariable]> {
        self.by_group.get(group).map(Vec::as_slice)
    }

    /// Group names in first-appearance order
    pub fn group_names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Source of color variable definitions
///
/// The one blocking fetch per generation request; hosts implement this over
/// whatever actually stores the palette (a file here, a design tool in the
/// original environment, fixtures in tests).
pub trait VariableSource {
    fn fetch_variables(&self) -> Result<Vec<ColorVariable>>;
}

/// A palette entry as written in YAML: bare hex or hex plus opacity
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaletteEntry {
    Hex(String),
    Detailed {
        hex: String,
        #[serde(default)]
        opacity: Option<f64>,
    },
}

/// Raw palette document as parsed from YAML
///
/// Entry order in the `colors` mapping is the variables' source order, so it
/// must survive parsing; serde_yaml mappings preserve it via the ordered
/// vector form below.
#[derive(Debug, Deserialize)]
struct PaletteData {
    collection: String,
    #[serde(with = "ordered_colors")]
    colors: Vec<(String, PaletteEntry)>,
}

/// Deserialize a YAML mapping into an order-preserving vec of pairs
mod ordered_colors {
    use serde::de::{MapAccess, Visitor};
    use serde::Deserializer;
    use std::fmt;

    use super::PaletteEntry;

    pub fn deserialize<'de, D>(de: D) -> Result<Vec<(String, PaletteEntry)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorsVisitor;

        impl<'de> Visitor<'de> for ColorsVisitor {
            type Value = Vec<(String, PaletteEntry)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of color names to hex entries")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry()? {
                    entries.push(pair);
                }
                Ok(entries)
            }
        }

        de.deserialize_map(ColorsVisitor)
    }
}

/// A YAML palette file acting as the variable source for the CLI host
///
/// Format:
///
/// ```yaml
/// collection: Brand
/// colors:
///   red/500: "#F04438"
///   red/600: { hex: "#D92D20", opacity: 0.8 }
/// ```
#[derive(Debug)]
pub struct PaletteFile {
    data: PaletteData,
}

impl PaletteFile {
    /// Load a palette document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse palette file {}", path.display()))
    }

    /// Parse a palette document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: PaletteData = serde_yaml::from_str(yaml).context("YAML parse error")?;
        tracing::debug!(
            "Parsed palette collection {:?} with {} colors",
            data.collection,
            data.colors.len()
        );
        Ok(Self { data })
    }
}

impl VariableSource for PaletteFile {
    fn fetch_variables(&self) -> Result<Vec<ColorVariable>> {
        let mut variables = Vec::with_capacity(self.data.colors.len());
        for (name, entry) in &self.data.colors {
            let (hex, opacity) = match entry {
                PaletteEntry::Hex(hex) => (hex.as_str(), 1.0),
                PaletteEntry::Detailed { hex, opacity } => {
                    (hex.as_str(), opacity.unwrap_or(1.0))
                }
            };
            let color = Color::from_hex(hex)
                .with_context(|| format!("Color {:?} in collection {:?}", name, self.data.collection))?;
            variables.push(ColorVariable {
                id: format!("{}:{}", self.data.collection, name),
                name: name.clone(),
                collection: self.data.collection.clone(),
                paint: Paint::with_opacity(color, opacity),
            });
        }
        tracing::info!(
            "Fetched {} color variables from collection {:?}",
            variables.len(),
            self.data.collection
        );
        Ok(variables)
    }
}
