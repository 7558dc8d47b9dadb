//! Configuration types for lifebot.
//!
//! Every section deserializes with defaults for missing keys, so a config
//! file only needs the values it wants to change.

use crate::engine::{CallTiming, RoiConstants, RoiInputs, TypewriterTiming};
use crate::output::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration loaded from a config file and CLI args.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal dashboard settings
    pub tui: TuiConfig,
    /// Animation timings
    pub timing: TimingConfig,
    /// ROI calculator constants and starting inputs
    pub roi: RoiConfig,
    /// Toast behaviour
    pub notifications: NotificationConfig,
    /// Headless output settings
    pub output: OutputConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub fn initial_tab(mut self, tab: impl Into<String>) -> Self {
        self.config.tui.initial_tab = tab.into();
        self
    }

    pub const fn tick_rate_ms(mut self, ms: u64) -> Self {
        self.config.tui.tick_rate_ms = ms;
        self
    }

    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn timing(mut self, timing: TimingConfig) -> Self {
        self.config.timing = timing;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// Preferences remembered between dashboard sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lifebot").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load preferences from a specific file, falling back to defaults.
    #[must_use]
    pub fn load_from(path: &std::path::Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save preferences to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// Terminal dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event loop tick in milliseconds
    #[schemars(range(min = 10, max = 1000))]
    pub tick_rate_ms: u64,
    /// Tab shown at startup (dashboard, segments, actions, creative,
    /// testing, voice, leads, analytics)
    pub initial_tab: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: 50,
            initial_tab: "dashboard".to_string(),
        }
    }
}

impl TuiConfig {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

// ============================================================================
// Timing Configuration
// ============================================================================

/// Animation timings, all in milliseconds unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between revealed characters of the activity feed
    pub reveal_interval_ms: u64,
    /// Hold time after a feed line is fully shown
    pub reveal_pause_ms: u64,
    /// Period of the call duration counter
    pub call_tick_ms: u64,
    /// Call duration counter stops at this many seconds
    pub call_ceiling_secs: u32,
    /// Delay between transcript lines
    pub transcript_interval_ms: u64,
    /// Delay between the last transcript line and the booking
    pub completion_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 50,
            reveal_pause_ms: 2000,
            call_tick_ms: 1000,
            call_ceiling_secs: 180,
            transcript_interval_ms: 2500,
            completion_delay_ms: 1000,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub const fn typewriter(&self) -> TypewriterTiming {
        TypewriterTiming {
            reveal_interval: Duration::from_millis(self.reveal_interval_ms),
            pause: Duration::from_millis(self.reveal_pause_ms),
        }
    }

    #[must_use]
    pub const fn call(&self) -> CallTiming {
        CallTiming {
            tick: Duration::from_millis(self.call_tick_ms),
            ceiling_secs: self.call_ceiling_secs,
            transcript_interval: Duration::from_millis(self.transcript_interval_ms),
            completion_delay: Duration::from_millis(self.completion_delay_ms),
        }
    }
}

// ============================================================================
// ROI Configuration
// ============================================================================

/// ROI calculator constants and the values pre-filled in the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RoiConfig {
    /// Cost per lead reached with the platform, in rupees
    pub target_cpl: f64,
    /// Conversion reached with the platform, in percent
    #[schemars(range(min = 0.0, max = 100.0))]
    pub target_conversion: f64,
    /// Share of the budget saved on operations
    #[schemars(range(min = 0.0, max = 1.0))]
    pub cost_reduction: f64,
    /// Revenue per converted lead, in rupees
    pub average_unit_value: f64,
    /// Pre-filled monthly budget
    pub default_budget: f64,
    /// Pre-filled current cost per lead
    pub default_cpl: f64,
    /// Pre-filled current conversion, in percent
    pub default_conversion: f64,
}

impl Default for RoiConfig {
    fn default() -> Self {
        let constants = RoiConstants::default();
        let inputs = RoiInputs::default();
        Self {
            target_cpl: constants.target_cpl,
            target_conversion: constants.target_conversion,
            cost_reduction: constants.cost_reduction,
            average_unit_value: constants.average_unit_value,
            default_budget: inputs.monthly_budget,
            default_cpl: inputs.current_cpl,
            default_conversion: inputs.current_conversion,
        }
    }
}

impl RoiConfig {
    #[must_use]
    pub const fn constants(&self) -> RoiConstants {
        RoiConstants {
            target_cpl: self.target_cpl,
            target_conversion: self.target_conversion,
            cost_reduction: self.cost_reduction,
            average_unit_value: self.average_unit_value,
        }
    }

    #[must_use]
    pub const fn default_inputs(&self) -> RoiInputs {
        RoiInputs {
            monthly_budget: self.default_budget,
            current_cpl: self.default_cpl,
            current_conversion: self.default_conversion,
        }
    }
}

// ============================================================================
// Notifications and Output
// ============================================================================

/// Toast configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays on screen
    pub ttl_ms: u64,
    /// Toasts shown at once
    #[schemars(range(min = 1, max = 10))]
    pub max_visible: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 4000,
            max_visible: 3,
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

/// Output-related configuration for headless commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("timing:\n  reveal_pause_ms: 500\n").unwrap();
        assert_eq!(config.timing.reveal_pause_ms, 500);
        assert_eq!(config.timing.reveal_interval_ms, 50);
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn test_timing_conversions() {
        let timing = TimingConfig::default();
        assert_eq!(timing.typewriter(), TypewriterTiming::default());
        assert_eq!(timing.call(), CallTiming::default());
    }

    #[test]
    fn test_roi_config_round_trips_engine_defaults() {
        let roi = RoiConfig::default();
        assert_eq!(roi.constants(), RoiConstants::default());
        assert_eq!(roi.default_inputs(), RoiInputs::default());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .theme("light")
            .initial_tab("voice")
            .no_color(true)
            .build();
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.initial_tab, "voice");
        assert!(config.output.no_color);
    }

    #[test]
    fn test_preferences_round_trip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("preferences.json");
        let prefs = TuiPreferences {
            theme: "high-contrast".to_string(),
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(TuiPreferences::load_from(&path), prefs);
        assert_eq!(
            TuiPreferences::load_from(&tmp.path().join("missing.json")),
            TuiPreferences::default()
        );
    }
}
