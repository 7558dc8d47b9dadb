//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the behaviour of one subcommand; headless handlers
//! write to a caller-provided sink so tests can capture their output.

mod dashboard;
mod fixtures;
mod roi;
mod simulate;

pub use dashboard::run_dashboard;
pub use fixtures::{fixtures_json, fixtures_summary, run_fixtures, FixturesCommand};
pub use roi::{render_roi, run_roi, RoiCommand};
pub use simulate::{run_call, run_feed, CallCommand, FeedCommand};

use crate::config::{load_config_file, load_or_default, AppConfig, ConfigPreset, Validatable};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Process exit codes.
pub mod exit_codes {
    /// Command finished normally
    pub const SUCCESS: i32 = 0;
    /// ROI inputs were rejected
    pub const INVALID_INPUT: i32 = 1;
    /// Any other failure
    pub const ERROR: i32 = 3;
}

/// Build the effective configuration for a run.
///
/// An explicit `--config` file that cannot be read is an error; a
/// discovered file that fails to parse only logs a warning. A preset is
/// layered over the file, and validation failures are errors.
pub fn load_config(explicit: Option<&Path>, preset: Option<&str>) -> Result<AppConfig> {
    let mut config = match explicit {
        Some(path) => load_config_file(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => load_or_default(None).0,
    };

    if let Some(name) = preset {
        let Some(preset) = ConfigPreset::from_name(name) else {
            let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            bail!("unknown preset '{name}' (expected one of: {})", valid.join(", "));
        };
        tracing::debug!(%preset, "applying preset");
        config.merge(&AppConfig::from_preset(preset));
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let list: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration:\n  {}", list.join("\n  "));
    }
    Ok(config)
}

/// Parse a tab id for `--tab`.
pub fn parse_tab(id: &str) -> Result<crate::tui::TabKind, String> {
    crate::tui::TabKind::from_id(id).ok_or_else(|| {
        let valid: Vec<&str> = crate::tui::TabKind::ALL.iter().map(|t| t.id()).collect();
        format!("unknown tab '{id}' (expected one of: {})", valid.join(", "))
    })
}

/// Slowest and fastest playback accepted by `--speed`.
pub const SPEED_RANGE: std::ops::RangeInclusive<f64> = 0.01..=1000.0;

/// Parse a playback multiplier for `--speed`.
pub fn parse_speed(value: &str) -> Result<f64, String> {
    let speed: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !SPEED_RANGE.contains(&speed) {
        return Err(format!(
            "speed must be between {} and {}",
            SPEED_RANGE.start(),
            SPEED_RANGE.end()
        ));
    }
    Ok(speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_applies_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".lifebot.yaml");
        std::fs::write(&path, "tui:\n  initial_tab: voice\n").unwrap();

        let config = load_config(Some(&path), Some("fast")).unwrap();
        assert_eq!(config.tui.initial_tab, "voice");
        assert_eq!(config.timing.transcript_interval_ms, 250);
    }

    #[test]
    fn test_load_config_rejects_unknown_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "").unwrap();
        let err = load_config(Some(&path), Some("turbo")).unwrap_err();
        assert!(err.to_string().contains("unknown preset"));
    }

    #[test]
    fn test_load_config_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.yaml")), None).is_err());
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "tui:\n  theme: neon\n").unwrap();
        let err = load_config(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("tui.theme"));
    }

    #[test]
    fn test_parse_speed_bounds() {
        assert_eq!(parse_speed("2.5"), Ok(2.5));
        assert_eq!(parse_speed("0.01"), Ok(0.01));
        assert!(parse_speed("1e-20").is_err());
        assert!(parse_speed("0").is_err());
        assert!(parse_speed("-1").is_err());
        assert!(parse_speed("inf").is_err());
        assert!(parse_speed("NaN").is_err());
        assert!(parse_speed("fast").is_err());
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!(parse_tab("voice"), Ok(crate::tui::TabKind::Voice));
        let err = parse_tab("settings").unwrap_err();
        assert!(err.contains("analytics"));
    }
}
