//! Matrix generation options and their persistence
//!
//! Last-used options are stored in `~/.config/colorgrid/config.yaml` so a
//! rerun picks up where the previous invocation left off. Only the inputs
//! are persisted; computed matrices never are.

use serde::{Deserialize, Serialize};

use crate::tier::Tier;

fn default_true() -> bool {
    true
}

fn default_base_color() -> String {
    "#FFFFFF".to_string()
}

/// Generation options: tier filters, labeling, and distinct-foreground mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Show pairs classified aaa (ratio >= 7)
    #[serde(default = "default_true")]
    pub aaa: bool,
    /// Show pairs classified aa (ratio in [4.5, 7))
    #[serde(default = "default_true")]
    pub aa: bool,
    /// Show pairs classified aa18 (ratio in [3, 4.5))
    #[serde(default = "default_true")]
    pub aa18: bool,
    /// Show pairs classified dnp (ratio < 3)
    #[serde(default = "default_true")]
    pub dnp: bool,
    /// Label tiles with the full `group/name` identifier
    #[serde(default)]
    pub full_name: bool,
    /// Choose foreground groups independently of background groups
    #[serde(default)]
    pub use_distinct: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            aaa: true,
            aa: true,
            aa18: true,
            dnp: true,
            full_name: false,
            use_distinct: false,
        }
    }
}

impl MatrixConfig {
    /// Whether the filter flag for a tier is enabled
    pub fn shows(&self, tier: Tier) -> bool {
        match tier {
            Tier::Aaa => self.aaa,
            Tier::Aa => self.aa,
            Tier::Aa18 => self.aa18,
            Tier::Dnp => self.dnp,
        }
    }
}

/// Persisted application state: last-used options and base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub options: MatrixConfig,
    /// Composition base as a `#RRGGBB` string (validated at request time)
    #[serde(default = "default_base_color")]
    pub base_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            options: MatrixConfig::default(),
            base_color: default_base_color(),
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
