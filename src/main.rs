use anyhow::{bail, Context, Result};
use clap::Parser;

use colorgrid::cli::CliArgs;
use colorgrid::config::AppConfig;
use colorgrid::messages::{handle_request, ErrorReason, Response};
use colorgrid::variables::{GroupedVariables, PaletteFile, VariableSource};
use colorgrid::view::render_plan;

fn main() -> Result<()> {
    colorgrid::tracing::init();

    let args = CliArgs::parse();
    let run = args.into_plan(AppConfig::load());

    let palette = PaletteFile::load(&run.palette)?;

    if run.list_groups {
        let variables = palette.fetch_variables()?;
        let grouped = GroupedVariables::from_variables(variables);
        for group in grouped.group_names() {
            println!("{}", group);
        }
        return Ok(());
    }

    let response = handle_request(&run.request, &palette)
        .context("Failed to generate matrix")?
        .context("Request produced no response")?;

    if run.save_config {
        if let Err(e) = run.config.save() {
            tracing::warn!("Could not persist options: {}", e);
        }
    }

    match &response {
        Response::Plan(plan) => {
            if run.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", render_plan(plan));
                tracing::info!(
                    "Matrix generated: {} rows, {} visible cells",
                    plan.rows.len(),
                    plan.visible_cells()
                );
            }
            Ok(())
        }
        Response::GenerationError { reason } => match reason {
            ErrorReason::EmptySelection => {
                bail!("Select at least one variable group to generate the matrix (see --list-groups)")
            }
            ErrorReason::InvalidColor => {
                bail!("Invalid base color: expected #RRGGBB")
            }
        },
        Response::Groups { .. } => Ok(()),
    }
}
