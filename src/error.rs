//! Unified error types for lifebot.
//!
//! This module provides the error hierarchy for the library, with
//! context chaining for debugging and user-facing messages.

use crate::engine::roi::RoiError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lifebot operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LifebotError {
    /// ROI calculator rejected its inputs or constants
    #[error(transparent)]
    Roi(#[from] RoiError),

    /// Errors raised by the animation engines
    #[error("Engine error: {context}")]
    Engine {
        context: String,
        #[source]
        source: EngineErrorKind,
    },

    /// Errors while rendering or writing output
    #[error("Output failed: {context}")]
    Output {
        context: String,
        #[source]
        source: OutputErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific engine error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineErrorKind {
    #[error("Activity sequence must contain at least one line")]
    EmptySequence,

    #[error("Timing value '{name}' must be greater than zero")]
    ZeroInterval { name: String },
}

/// Specific output error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OutputErrorKind {
    #[error("JSON serialization failed: {0}")]
    Json(String),

    #[error("Output format not supported for this command: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for lifebot operations
pub type Result<T> = std::result::Result<T, LifebotError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl LifebotError {
    /// Create an engine error with context
    pub fn engine(context: impl Into<String>, source: EngineErrorKind) -> Self {
        Self::Engine {
            context: context.into(),
            source,
        }
    }

    /// Create an output error with context
    pub fn output(context: impl Into<String>, source: OutputErrorKind) -> Self {
        Self::Output {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error came from user-supplied calculator input
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Roi(RoiError::InvalidInput { .. }))
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for LifebotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LifebotError {
    fn from(err: serde_json::Error) -> Self {
        Self::output("JSON serialization", OutputErrorKind::Json(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained so the final message shows the path
/// through the code, e.g. `"writing projection: JSON serialization"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<LifebotError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// ROI errors carry structured field data and pass through unchanged.
fn add_context_to_error(err: LifebotError, new_ctx: &str) -> LifebotError {
    match err {
        LifebotError::Engine {
            context: existing,
            source,
        } => LifebotError::Engine {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LifebotError::Output {
            context: existing,
            source,
        } => LifebotError::Output {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LifebotError::Io {
            path,
            message,
            source,
        } => LifebotError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        LifebotError::Config(msg) => LifebotError::Config(chain_context(new_ctx, &msg)),
        LifebotError::Validation(msg) => LifebotError::Validation(chain_context(new_ctx, &msg)),
        roi @ LifebotError::Roi(_) => roi,
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = LifebotError::engine("building feed", EngineErrorKind::EmptySequence);
        let display = err.to_string();
        assert!(display.contains("building feed"), "{display}");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = LifebotError::io("/path/to/report.json", io_err);
        assert!(err.to_string().contains("/path/to/report.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(LifebotError::engine("base", EngineErrorKind::EmptySequence))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(LifebotError::Engine { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Engine error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(LifebotError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_roi_error_passes_through_context() {
        let err: Result<()> = Err(LifebotError::Roi(RoiError::InvalidInput {
            field: "current_cpl",
            value: 0.0,
            reason: "must be greater than zero",
        }));
        let err = err.context("computing projection").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "middle: inner"), "outer: middle: inner");
    }
}
