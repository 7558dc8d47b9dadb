//! Time-driven and computational cores of the dashboard.
//!
//! - [`scheduler`]: virtual-clock timers with cancellation
//! - [`typewriter`]: the activity feed's character reveal loop
//! - [`call`]: the simulated voice call
//! - [`roi`]: the ROI projection

pub mod call;
pub mod roi;
pub mod scheduler;
pub mod typewriter;

pub use call::{format_duration, CallEvent, CallPhase, CallSimulation, CallTiming};
pub use roi::{calculate, RoiConstants, RoiError, RoiInputs, RoiProjection};
pub use scheduler::{Scheduler, TimerId};
pub use typewriter::{FeedEvent, TypewriterFrame, TypewriterSequencer, TypewriterTiming};
