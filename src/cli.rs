//! Command-line argument parsing for the matrix generator
//!
//! Supports:
//! - Selecting background/foreground groups
//! - Hiding compliance tiers
//! - Overriding the composition base color
//! - JSON output for downstream tooling

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{AppConfig, MatrixConfig};
use crate::messages::Request;
use crate::tier::Tier;

/// Generate a WCAG contrast matrix from a grouped color palette
#[derive(Parser, Debug)]
#[command(
    name = "colorgrid",
    version,
    about = "Generate a WCAG contrast matrix from a grouped color palette"
)]
pub struct CliArgs {
    /// Palette YAML file
    #[arg(value_name = "PALETTE")]
    pub palette: PathBuf,

    /// Background group name (repeatable)
    #[arg(short = 'b', long = "background", value_name = "GROUP")]
    pub background_groups: Vec<String>,

    /// Foreground group name (repeatable; implies --distinct)
    #[arg(short = 'f', long = "foreground", value_name = "GROUP")]
    pub foreground_groups: Vec<String>,

    /// Choose foreground groups independently of background groups
    #[arg(long)]
    pub distinct: bool,

    /// Hide pairs in the given compliance tier (repeatable)
    #[arg(long, value_name = "TIER", value_enum)]
    pub hide: Vec<TierArg>,

    /// Label tiles with the full group/name identifier
    #[arg(long)]
    pub full_name: bool,

    /// Composition base color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub base: Option<String>,

    /// Print the response as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// List the palette's groups and exit
    #[arg(long)]
    pub list_groups: bool,

    /// Persist these options as the new defaults
    #[arg(long)]
    pub save_config: bool,
}

/// A compliance tier as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TierArg {
    Aaa,
    Aa,
    Aa18,
    Dnp,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Tier {
        match arg {
            TierArg::Aaa => Tier::Aaa,
            TierArg::Aa => Tier::Aa,
            TierArg::Aa18 => Tier::Aa18,
            TierArg::Dnp => Tier::Dnp,
        }
    }
}

/// What one invocation should do, derived from args plus saved defaults
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub palette: PathBuf,
    pub request: Request,
    pub config: AppConfig,
    pub json: bool,
    pub list_groups: bool,
    pub save_config: bool,
}

impl CliArgs {
    /// Merge CLI overrides over the persisted defaults into a run plan
    pub fn into_plan(self, defaults: AppConfig) -> RunPlan {
        let mut options = MatrixConfig {
            use_distinct: self.distinct || !self.foreground_groups.is_empty(),
            full_name: self.full_name || defaults.options.full_name,
            ..defaults.options.clone()
        };
        for tier in &self.hide {
            match Tier::from(*tier) {
                Tier::Aaa => options.aaa = false,
                Tier::Aa => options.aa = false,
                Tier::Aa18 => options.aa18 = false,
                Tier::Dnp => options.dnp = false,
            }
        }

        let base_color = self.base.unwrap_or_else(|| defaults.base_color.clone());

        let config = AppConfig {
            options: options.clone(),
            base_color: base_color.clone(),
        };

        RunPlan {
            palette: self.palette,
            request: Request::GenerateGrid {
                background_groups: self.background_groups,
                foreground_groups: self.foreground_groups,
                config: options,
                base_color_hex: base_color,
            },
            config,
            json: self.json,
            list_groups: self.list_groups,
            save_config: self.save_config,
        }
    }
}
