//! Configuration module for lifebot.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use lifebot::config::{AppConfig, ConfigPreset, Validatable};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Fast);
//! assert!(config.is_valid());
//!
//! let config = AppConfig::builder()
//!     .theme("light")
//!     .initial_tab("voice")
//!     .build();
//! assert_eq!(config.tui.initial_tab, "voice");
//! ```
//!
//! # Configuration File
//!
//! Place a `.lifebot.yaml` file in your project root or `~/.config/lifebot/`:
//!
//! ```yaml
//! tui:
//!   theme: high-contrast
//! timing:
//!   transcript_interval_ms: 1500
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_CALL_CEILING_SECS, DEFAULT_TICK_RATE_MS};
pub use types::{
    AppConfig, AppConfigBuilder, NotificationConfig, OutputConfig, RoiConfig, TimingConfig,
    TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, Validatable, VALID_THEMES};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.lifebot.yaml` files.
pub fn generate_json_schema() -> crate::error::Result<String> {
    use crate::error::ErrorContext;

    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).context("generating config schema")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let props = &value["properties"];
        for section in ["tui", "timing", "roi", "notifications", "output"] {
            assert!(props.get(section).is_some(), "missing {section}");
        }
    }
}
