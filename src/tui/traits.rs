//! Core abstractions shared by the dashboard pages.
//!
//! Every page is a small state machine: it is built when its tab is
//! mounted, receives key presses and clock ticks while it is active, and
//! releases its timers when the user leaves the tab.

use crate::notify::NotificationCenter;
use crossterm::event::KeyEvent;
use std::time::Duration;

/// Result of a page handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled by this page
    Consumed,
    /// Event was not handled, let the app process it
    Ignored,
}

/// What a page may touch outside its own state.
pub struct PageContext<'a> {
    pub notifications: &'a mut NotificationCenter,
}

/// Trait implemented by every mounted page.
pub trait PageState: Send {
    /// Handle a key event.
    ///
    /// Pages return `EventResult::Ignored` for keys they do not use so
    /// global navigation still works.
    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut PageContext<'_>) -> EventResult {
        EventResult::Ignored
    }

    /// Advance the page's timers by `dt` of wall time.
    fn on_tick(&mut self, _dt: Duration, _ctx: &mut PageContext<'_>) {}

    /// Called when the tab is left. Returns the number of timers released.
    fn on_leave(&mut self) -> usize {
        0
    }

    /// Timers currently owned by the page.
    fn active_timers(&self) -> usize {
        0
    }
}
