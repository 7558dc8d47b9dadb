//! Configuration validation for lifebot.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{
    AppConfig, NotificationConfig, OutputConfig, RoiConfig, TimingConfig, TuiConfig,
};
use crate::tui::TabKind;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.timing.validate());
        errors.extend(self.roi.validate());
        errors.extend(self.notifications.validate());
        errors.extend(self.output.validate());
        errors
    }
}

/// Theme names understood by the dashboard.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            ));
        }

        if !(10..=1000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!(
                    "Tick rate must be between 10 and 1000 ms, got {}",
                    self.tick_rate_ms
                ),
            ));
        }

        if TabKind::from_id(&self.initial_tab).is_none() {
            let ids: Vec<&str> = TabKind::ALL.iter().map(|t| t.id()).collect();
            errors.push(ConfigError::new(
                "tui.initial_tab",
                format!(
                    "Unknown tab '{}'. Valid options: {}",
                    self.initial_tab,
                    ids.join(", ")
                ),
            ));
        }

        errors
    }
}

impl Validatable for TimingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let intervals = [
            ("timing.reveal_interval_ms", self.reveal_interval_ms),
            ("timing.call_tick_ms", self.call_tick_ms),
            ("timing.transcript_interval_ms", self.transcript_interval_ms),
        ];
        intervals
            .iter()
            .filter(|(_, ms)| *ms == 0)
            .map(|(field, _)| ConfigError::new(field, "Interval must be greater than zero"))
            .collect()
    }
}

impl Validatable for RoiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.constants().validate() {
            errors.push(ConfigError::new("roi", e.to_string()));
        }
        if let Err(e) = self.default_inputs().validate() {
            errors.push(ConfigError::new("roi.default", e.to_string()));
        }

        errors
    }
}

impl Validatable for NotificationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.ttl_ms == 0 {
            errors.push(ConfigError::new(
                "notifications.ttl_ms",
                "Toasts need a time-to-live greater than zero",
            ));
        }
        if !(1..=10).contains(&self.max_visible) {
            errors.push(ConfigError::new(
                "notifications.max_visible",
                format!(
                    "Visible toasts must be between 1 and 10, got {}",
                    self.max_visible
                ),
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid(), "{:?}", config.validate());
    }

    #[test]
    fn test_tui_config_validation() {
        assert!(TuiConfig::default().is_valid());

        let invalid = TuiConfig {
            theme: "neon".to_string(),
            initial_tab: "settings".to_string(),
            ..TuiConfig::default()
        };
        let fields: Vec<String> = invalid.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["tui.theme", "tui.initial_tab"]);
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let timing = TimingConfig {
            reveal_interval_ms: 0,
            transcript_interval_ms: 0,
            ..TimingConfig::default()
        };
        assert_eq!(timing.validate().len(), 2);

        // A zero pause or ceiling is allowed.
        let timing = TimingConfig {
            reveal_pause_ms: 0,
            call_ceiling_secs: 0,
            ..TimingConfig::default()
        };
        assert!(timing.is_valid());
    }

    #[test]
    fn test_roi_config_validation() {
        let invalid = RoiConfig {
            target_cpl: 0.0,
            default_conversion: 140.0,
            ..RoiConfig::default()
        };
        let errors = invalid.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("target_cpl"));
    }

    #[test]
    fn test_notification_config_validation() {
        let invalid = NotificationConfig {
            ttl_ms: 0,
            max_visible: 0,
        };
        assert_eq!(invalid.validate().len(), 2);
    }

    #[test]
    fn test_output_parent_must_exist() {
        let config = OutputConfig {
            file: Some("/nonexistent-lifebot-dir/report.json".into()),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());

        let config = OutputConfig {
            file: Some("report.json".into()),
            ..OutputConfig::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("tui.theme", "bad");
        assert_eq!(err.to_string(), "tui.theme: bad");
    }
}
