//! Output handling for headless commands.
//!
//! Provides utilities for auto-detecting output format and writing results.

use anyhow::{Context, Result};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for command results
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive terminal display
    Tui,
    /// Human-readable text
    #[value(alias = "text")]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Auto-detect the output format based on TTY and output target
///
/// Returns TUI for interactive terminals (stdout to TTY),
/// otherwise returns Summary for non-interactive contexts.
#[must_use]
pub fn auto_detect_format(format: OutputFormat, target: &OutputTarget) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if target.is_terminal() {
                OutputFormat::Tui
            } else {
                OutputFormat::Summary
            }
        }
        other => other,
    }
}

/// Resolve a format for commands that only print text or JSON.
///
/// `Auto` and `Tui` both fall back to the summary text.
#[must_use]
pub fn headless_format(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Json => OutputFormat::Json,
        OutputFormat::Auto | OutputFormat::Tui | OutputFormat::Summary => OutputFormat::Summary,
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Output written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        let path = PathBuf::from("/tmp/test.json");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_auto_detect_format_non_auto() {
        let target = OutputTarget::Stdout;
        assert_eq!(
            auto_detect_format(OutputFormat::Json, &target),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_auto_detect_format_file_target() {
        // File targets are never terminals
        let target = OutputTarget::File(PathBuf::from("/tmp/test.json"));
        assert_eq!(
            auto_detect_format(OutputFormat::Auto, &target),
            OutputFormat::Summary
        );
    }

    #[test]
    fn test_headless_format() {
        assert_eq!(headless_format(OutputFormat::Tui), OutputFormat::Summary);
        assert_eq!(headless_format(OutputFormat::Json), OutputFormat::Json);
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_format_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        assert_eq!(OutputFormat::Summary.to_string(), "summary");
    }
}
