//! ROI command handler.
//!
//! Runs the calculator once with the given inputs, falling back to the
//! configured defaults for anything not supplied.

use super::exit_codes;
use crate::config::RoiConfig;
use crate::engine::roi::{format_crores, format_lakhs, group_decimal, group_thousands};
use crate::engine::{calculate, RoiInputs, RoiProjection};
use crate::output::{headless_format, write_output, OutputFormat, OutputTarget};
use anyhow::{Context, Result};
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;

/// `roi` command configuration
#[derive(Debug, Clone, Default)]
pub struct RoiCommand {
    pub budget: Option<f64>,
    pub cpl: Option<f64>,
    pub conversion: Option<f64>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

impl RoiCommand {
    fn inputs(&self, config: &RoiConfig) -> RoiInputs {
        let defaults = config.default_inputs();
        RoiInputs {
            monthly_budget: self.budget.unwrap_or(defaults.monthly_budget),
            current_cpl: self.cpl.unwrap_or(defaults.current_cpl),
            current_conversion: self.conversion.unwrap_or(defaults.current_conversion),
        }
    }
}

/// Run the ROI command, returning the desired exit code.
///
/// Rejected inputs are reported on stderr and yield
/// [`exit_codes::INVALID_INPUT`]; only I/O failures are errors.
pub fn run_roi(cmd: RoiCommand, config: &RoiConfig) -> Result<i32> {
    let inputs = cmd.inputs(config);
    let projection = match calculate(&inputs, &config.constants()) {
        Ok(projection) => projection,
        Err(e) => {
            tracing::warn!("ROI inputs rejected: {e}");
            eprintln!("error: {e}");
            return Ok(exit_codes::INVALID_INPUT);
        }
    };

    let text = render_roi(&inputs, &projection, cmd.format)?;
    write_output(&text, &OutputTarget::from_option(cmd.output_file), cmd.quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// Format a projection as summary text or JSON.
pub fn render_roi(
    inputs: &RoiInputs,
    projection: &RoiProjection,
    format: OutputFormat,
) -> Result<String> {
    if headless_format(format) == OutputFormat::Json {
        let value = json!({
            "inputs": inputs,
            "projection": projection,
        });
        return serde_json::to_string_pretty(&value).context("failed to serialize ROI projection");
    }

    let mut out = String::new();
    let money = |v: f64| format!("₹{}", group_decimal(&v.to_string()));
    writeln!(out, "ROI projection")?;
    writeln!(out, "  Monthly budget       {}", money(inputs.monthly_budget))?;
    writeln!(out, "  Current CPL          {}", money(inputs.current_cpl))?;
    writeln!(out, "  Current conversion   {}%", inputs.current_conversion)?;
    writeln!(out)?;
    writeln!(
        out,
        "  Leads                {} → {}",
        group_thousands(projection.current_leads),
        group_thousands(projection.new_leads)
    )?;
    writeln!(
        out,
        "  Revenue              {} → {}",
        format_crores(projection.current_revenue),
        format_crores(projection.new_revenue)
    )?;
    writeln!(
        out,
        "  Additional revenue   {}",
        format_crores(projection.additional_revenue)
    )?;
    writeln!(out, "  Cost savings         {}", format_lakhs(projection.cost_savings))?;
    write!(
        out,
        "  ROI improvement      +{}%",
        group_thousands(projection.roi_improvement)
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_uses_defaults() {
        let config = RoiConfig::default();
        let cmd = RoiCommand::default();
        let inputs = cmd.inputs(&config);
        let projection = calculate(&inputs, &config.constants()).unwrap();
        let text = render_roi(&inputs, &projection, OutputFormat::Summary).unwrap();
        assert!(text.contains("2,857 → 4,274"));
        assert!(text.contains("+14,242%"));
    }

    #[test]
    fn test_json_output() {
        let config = RoiConfig::default();
        let inputs = RoiCommand::default().inputs(&config);
        let projection = calculate(&inputs, &config.constants()).unwrap();
        let text = render_roi(&inputs, &projection, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["projection"]["new_leads"], 4274);
        assert_eq!(value["inputs"]["current_cpl"], 350.0);
    }

    #[test]
    fn test_invalid_input_exit_code() {
        let cmd = RoiCommand {
            cpl: Some(0.0),
            quiet: true,
            ..RoiCommand::default()
        };
        assert_eq!(
            run_roi(cmd, &RoiConfig::default()).unwrap(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_summary_echoes_inputs_unrounded() {
        let config = RoiConfig::default();
        let cmd = RoiCommand {
            budget: Some(1_000_000.0),
            cpl: Some(350.5),
            ..RoiCommand::default()
        };
        let inputs = cmd.inputs(&config);
        let projection = calculate(&inputs, &config.constants()).unwrap();
        let text = render_roi(&inputs, &projection, OutputFormat::Summary).unwrap();
        assert!(text.contains("Current CPL          ₹350.5"));
        assert!(text.contains("Monthly budget       ₹1,000,000"));
    }

    #[test]
    fn test_oversized_projection_exit_code() {
        let cmd = RoiCommand {
            budget: Some(999_999_999_999.0),
            cpl: Some(1e-10),
            quiet: true,
            ..RoiCommand::default()
        };
        assert_eq!(
            run_roi(cmd, &RoiConfig::default()).unwrap(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roi.json");
        let cmd = RoiCommand {
            format: OutputFormat::Json,
            output_file: Some(path.clone()),
            quiet: true,
            ..RoiCommand::default()
        };
        assert_eq!(run_roi(cmd, &RoiConfig::default()).unwrap(), exit_codes::SUCCESS);
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("\"roi_improvement\": 14242"));
    }
}
