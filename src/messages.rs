//! Host boundary messages
//!
//! The engine exposes one request/response shape to its rendering
//! collaborator, serialized as tagged JSON. The tag spelling mirrors the
//! wire format the UI panel speaks (`generate-grid`, `close`,
//! `generation-error` with an `empty-selection` reason).

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::MatrixConfig;
use crate::planner::{plan, MatrixPlan};
use crate::variables::{GroupedVariables, VariableSource};

/// A request posted by the UI collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Request {
    /// Generate a contrast matrix for the selected groups
    GenerateGrid {
        background_groups: Vec<String>,
        foreground_groups: Vec<String>,
        config: MatrixConfig,
        base_color_hex: String,
    },
    /// Dismiss the panel
    Close,
}

/// Why a generation request produced no plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorReason {
    /// No background groups, or no foreground groups in distinct mode
    EmptySelection,
    /// Malformed base color hex
    InvalidColor,
}

/// A response sent back to the UI collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Response {
    /// Available group names, pushed once variables are fetched
    Groups { groups: Vec<String> },
    /// The finished plan for the renderer to draw
    Plan(MatrixPlan),
    /// Generation aborted; no partial output
    GenerationError { reason: ErrorReason },
}

/// Serve one request against a variable source
///
/// For a generation request this performs the single blocking variable
/// fetch, groups the result, and runs the planner. User-input faults map to
/// `GenerationError` responses; fetch failures from the source itself
/// propagate as errors since they are host faults, not user input.
/// `Close` produces no response; the host tears the panel down.
pub fn handle_request(
    request: &Request,
    source: &dyn VariableSource,
) -> anyhow::Result<Option<Response>> {
    match request {
        Request::GenerateGrid {
            background_groups,
            foreground_groups,
            config,
            base_color_hex,
        } => {
            let base = match Color::from_hex(base_color_hex) {
                Ok(base) => base,
                Err(e) => {
                    tracing::warn!("Rejected base color {:?}: {}", base_color_hex, e);
                    return Ok(Some(Response::GenerationError {
                        reason: ErrorReason::InvalidColor,
                    }));
                }
            };

            let variables = source.fetch_variables()?;
            let grouped = GroupedVariables::from_variables(variables);

            let response =
                match plan(background_groups, foreground_groups, &grouped, config, base) {
                    Ok(matrix) => Response::Plan(matrix),
                    Err(e) => {
                        tracing::warn!("Generation aborted: {}", e);
                        Response::GenerationError {
                            reason: ErrorReason::EmptySelection,
                        }
                    }
                };
            Ok(Some(response))
        }
        Request::Close => Ok(None),
    }
}

/// Available groups response for a freshly fetched variable list
pub fn groups_response(grouped: &GroupedVariables) -> Response {
    Response::Groups {
        groups: grouped.group_names().to_vec(),
    }
}
