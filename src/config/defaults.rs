//! Named presets for common ways of running the dashboard.

use super::types::{AppConfig, NotificationConfig, TimingConfig, TuiConfig};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// The dashboard's normal pacing
    Default,
    /// Ten times faster animations for quick walkthroughs
    Fast,
    /// Slower feed and longer-lived toasts for presenting on a big screen
    Presentation,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Fast => "fast",
            Self::Presentation => "presentation",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "normal" => Some(Self::Default),
            "fast" | "quick" => Some(Self::Fast),
            "presentation" | "demo" | "slow" => Some(Self::Presentation),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Standard animation pacing",
            Self::Fast => "Animations run ten times faster",
            Self::Presentation => "Slower reveal and longer toasts for live demos",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Fast, Self::Presentation]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Fast => Self::fast_preset(),
            ConfigPreset::Presentation => Self::presentation_preset(),
        }
    }

    /// All animation delays divided by ten; the call ceiling is unchanged.
    #[must_use]
    pub fn fast_preset() -> Self {
        Self {
            timing: TimingConfig {
                reveal_interval_ms: 5,
                reveal_pause_ms: 200,
                call_tick_ms: 100,
                call_ceiling_secs: DEFAULT_CALL_CEILING_SECS,
                transcript_interval_ms: 250,
                completion_delay_ms: 100,
            },
            notifications: NotificationConfig {
                ttl_ms: 1500,
                ..NotificationConfig::default()
            },
            ..Self::default()
        }
    }

    /// Slower typing, longer pauses and toasts.
    #[must_use]
    pub fn presentation_preset() -> Self {
        Self {
            tui: TuiConfig {
                theme: "high-contrast".to_string(),
                ..TuiConfig::default()
            },
            timing: TimingConfig {
                reveal_interval_ms: 80,
                reveal_pause_ms: 3500,
                transcript_interval_ms: 4000,
                ..TimingConfig::default()
            },
            notifications: NotificationConfig {
                ttl_ms: 6000,
                max_visible: 2,
            },
            ..Self::default()
        }
    }
}

// ============================================================================
// Default Values
// ============================================================================

/// Default call duration ceiling in seconds.
pub const DEFAULT_CALL_CEILING_SECS: u32 = 180;

/// Default event loop tick in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;

    #[test]
    fn test_preset_names() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
    }

    #[test]
    fn test_preset_aliases() {
        assert_eq!(ConfigPreset::from_name("QUICK"), Some(ConfigPreset::Fast));
        assert_eq!(ConfigPreset::from_name("demo"), Some(ConfigPreset::Presentation));
        assert_eq!(ConfigPreset::from_name("turbo"), None);
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in ConfigPreset::all() {
            let config = AppConfig::from_preset(*preset);
            assert!(config.is_valid(), "{preset}: {:?}", config.validate());
        }
    }

    #[test]
    fn test_fast_preset_keeps_ceiling() {
        let config = AppConfig::fast_preset();
        assert_eq!(config.timing.call_ceiling_secs, DEFAULT_CALL_CEILING_SECS);
        assert!(config.timing.transcript_interval_ms < TimingConfig::default().transcript_interval_ms);
    }

    #[test]
    fn test_default_constants_match_types() {
        assert_eq!(TuiConfig::default().tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(
            TimingConfig::default().call_ceiling_secs,
            DEFAULT_CALL_CEILING_SECS
        );
    }
}
