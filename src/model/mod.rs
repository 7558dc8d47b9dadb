//! Display fixtures shown by the dashboard pages.
//!
//! Everything here is read-only demonstration data produced by the
//! [`providers`](crate::providers). The only mutable record is
//! [`CallSession`], which is owned and updated by the call simulation.

mod call;
mod campaign;
mod metrics;

pub use call::*;
pub use campaign::*;
pub use metrics::*;
