//! **Terminal dashboard for the LifeBOT autonomous marketing agent.**
//!
//! `lifebot` renders an eight-page marketing-intelligence dashboard in the
//! terminal: KPI cards, behavioural segments, next-best actions, generated
//! creatives, an A/B test, a simulated voice call, lead routing and an ROI
//! calculator. Every value comes from a static demonstration data set and
//! every action is acknowledged with an in-app notification; nothing talks to
//! a real backend.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: plain records displayed by the pages (segments, customers,
//!   dealers, KPI cards, transcript entries).
//! - **[`providers`]**: traits the pages read from, plus [`DemoData`].
//! - **[`engine`]**: the stateful parts. A [`TypewriterSequencer`] drives the
//!   activity feed, a [`CallSimulation`] plays the voice call, and
//!   [`calculate`] projects ROI. Both animations run on a virtual-clock
//!   [`Scheduler`](engine::Scheduler), so tests advance time without sleeping.
//! - **[`notify`]**: the toast queue.
//! - **[`tui`]**: the ratatui front end and tab controller.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Projecting ROI
//!
//! ```
//! use lifebot::{calculate, RoiConstants, RoiInputs};
//!
//! let projection = calculate(&RoiInputs::default(), &RoiConstants::default()).unwrap();
//! assert_eq!(projection.new_leads, 4274);
//! ```
//!
//! ## Driving the activity feed
//!
//! ```
//! use lifebot::{TypewriterSequencer, TypewriterTiming};
//! use std::time::Duration;
//!
//! let mut feed = TypewriterSequencer::new(["Agent online"], TypewriterTiming::default()).unwrap();
//! feed.advance(Duration::from_millis(150));
//! assert_eq!(feed.visible_text(), "Age");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math and percentage bars cast between usize, u16 and f64;
    // all values are bounded by the terminal size or by 0-100.
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Render functions are long by nature
    clippy::too_many_lines,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod notify;
pub mod output;
pub mod providers;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use engine::{
    calculate, CallEvent, CallPhase, CallSimulation, CallTiming, RoiConstants, RoiError,
    RoiInputs, RoiProjection, TypewriterSequencer, TypewriterTiming,
};
pub use error::{ErrorContext, LifebotError, Result};
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use providers::{DataSource, DemoData};
pub use tui::{App, TabKind};
