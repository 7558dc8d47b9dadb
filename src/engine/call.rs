//! Simulated voice call for the Voice AI page.
//!
//! Two independent tickers run while a call is mounted: a duration counter
//! that stops at a ceiling, and a transcript ticker that reveals one more
//! dialogue line per interval. Once the transcript runs out the call ends
//! after a short delay and raises a single booking notification.

use super::scheduler::{Scheduler, TimerId};
use crate::model::{BookingConfirmation, CallSession, TranscriptEntry};
use crate::notify::Notification;
use std::time::Duration;

/// Tickers and limits for a simulated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTiming {
    /// Period of the duration counter
    pub tick: Duration,
    /// Counter stops once it reaches this many seconds
    pub ceiling_secs: u32,
    /// Delay between two transcript lines
    pub transcript_interval: Duration,
    /// Delay between the last line and call completion
    pub completion_delay: Duration,
}

impl Default for CallTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            ceiling_secs: 180,
            transcript_interval: Duration::from_millis(2500),
            completion_delay: Duration::from_secs(1),
        }
    }
}

impl CallTiming {
    /// Scale every delay by `1 / speed`; non-positive speeds are ignored.
    ///
    /// Delays too long for a [`Duration`] saturate at [`Duration::MAX`].
    #[must_use]
    pub fn scaled(self, speed: f64) -> Self {
        if !speed.is_finite() || speed <= 0.0 {
            return self;
        }
        let scale = |d: Duration| {
            Duration::try_from_secs_f64(d.as_secs_f64() / speed).unwrap_or(Duration::MAX)
        };
        Self {
            tick: scale(self.tick),
            transcript_interval: scale(self.transcript_interval),
            completion_delay: scale(self.completion_delay),
            ..self
        }
    }
}

/// Where the call is in its lifecycle. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CallPhase {
    /// Talking; transcript lines are still being revealed
    Active,
    /// All lines shown; waiting for the completion delay
    TranscriptComplete,
    /// Call ended and the booking was announced
    Completed,
}

impl std::fmt::Display for CallPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::TranscriptComplete => write!(f, "wrapping up"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Things that happened while advancing the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    /// Duration counter moved to this many seconds
    DurationTick(u32),
    /// Transcript line at this index became visible
    LineRevealed(usize),
    /// Every transcript line is now visible
    TranscriptExhausted,
    /// The call ended; carries the one-off booking notification
    Completed(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tick {
    Duration,
    Transcript,
    Complete,
}

/// State machine behind one simulated call.
#[derive(Debug, Clone)]
pub struct CallSimulation {
    transcript: Vec<TranscriptEntry>,
    booking: BookingConfirmation,
    timing: CallTiming,
    scheduler: Scheduler<Tick>,
    session: CallSession,
    phase: CallPhase,
    duration_timer: Option<TimerId>,
    transcript_timer: Option<TimerId>,
    notified: bool,
}

impl CallSimulation {
    /// Start a call: both tickers are armed immediately.
    #[must_use]
    pub fn new(
        transcript: Vec<TranscriptEntry>,
        booking: BookingConfirmation,
        timing: CallTiming,
    ) -> Self {
        let mut sim = Self {
            transcript,
            booking,
            timing,
            scheduler: Scheduler::new(),
            session: CallSession::default(),
            phase: CallPhase::Active,
            duration_timer: None,
            transcript_timer: None,
            notified: false,
        };
        sim.start();
        sim
    }

    fn start(&mut self) {
        self.session = CallSession {
            elapsed_seconds: 0,
            active: true,
            current_transcript_index: 0,
        };
        self.phase = CallPhase::Active;
        self.notified = false;

        if self.timing.ceiling_secs > 0 {
            self.duration_timer = Some(self.scheduler.every(self.timing.tick, Tick::Duration));
        }
        if self.transcript.is_empty() {
            self.finish_transcript();
        } else {
            self.transcript_timer = Some(
                self.scheduler
                    .every(self.timing.transcript_interval, Tick::Transcript),
            );
        }
    }

    /// Drive both tickers forward by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Vec<CallEvent> {
        let until = self.scheduler.now() + dt;
        let mut events = Vec::new();
        while let Some((_, tick)) = self.scheduler.pop_due(until) {
            match tick {
                Tick::Duration => self.on_duration(&mut events),
                Tick::Transcript => self.on_transcript(&mut events),
                Tick::Complete => self.on_complete(&mut events),
            }
        }
        self.scheduler.settle(until);
        events
    }

    fn on_duration(&mut self, events: &mut Vec<CallEvent>) {
        if self.session.active && self.session.elapsed_seconds < self.timing.ceiling_secs {
            self.session.elapsed_seconds += 1;
            events.push(CallEvent::DurationTick(self.session.elapsed_seconds));
        }
        if !self.session.active || self.session.elapsed_seconds >= self.timing.ceiling_secs {
            self.stop_duration();
        }
    }

    fn on_transcript(&mut self, events: &mut Vec<CallEvent>) {
        let len = self.transcript.len();
        if self.session.current_transcript_index < len {
            self.session.current_transcript_index += 1;
        }
        let index = self.session.current_transcript_index;
        if index < len {
            events.push(CallEvent::LineRevealed(index));
        } else {
            self.finish_transcript();
            events.push(CallEvent::TranscriptExhausted);
        }
    }

    fn finish_transcript(&mut self) {
        if let Some(id) = self.transcript_timer.take() {
            self.scheduler.cancel(id);
        }
        if self.phase == CallPhase::Active {
            self.phase = CallPhase::TranscriptComplete;
            self.scheduler
                .after(self.timing.completion_delay, Tick::Complete);
        }
    }

    fn on_complete(&mut self, events: &mut Vec<CallEvent>) {
        if self.phase == CallPhase::Completed {
            return;
        }
        self.phase = CallPhase::Completed;
        self.session.active = false;
        self.stop_duration();
        if !self.notified {
            self.notified = true;
            tracing::debug!(
                elapsed = self.session.elapsed_seconds,
                "simulated call completed"
            );
            events.push(CallEvent::Completed(Notification::success(
                self.booking.title.clone(),
                self.booking.description(),
            )));
        }
    }

    fn stop_duration(&mut self) {
        if let Some(id) = self.duration_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Current session record.
    #[must_use]
    pub const fn snapshot(&self) -> CallSession {
        self.session
    }

    #[must_use]
    pub const fn phase(&self) -> CallPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.active
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.session.elapsed_seconds
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_duration(self.session.elapsed_seconds)
    }

    /// Number of transcript lines on screen.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        (self.session.current_transcript_index + 1).min(self.transcript.len())
    }

    /// Transcript lines currently on screen, oldest first.
    #[must_use]
    pub fn visible_lines(&self) -> &[TranscriptEntry] {
        &self.transcript[..self.visible_count()]
    }

    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    #[must_use]
    pub const fn booking(&self) -> &BookingConfirmation {
        &self.booking
    }

    /// Whether the booking notification was already raised.
    #[must_use]
    pub const fn has_notified(&self) -> bool {
        self.notified
    }

    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.scheduler.active_count()
    }

    /// Start the call over from zero.
    pub fn reset(&mut self) {
        self.unmount();
        self.scheduler = Scheduler::new();
        self.start();
    }

    /// Release every timer; the call freezes where it is.
    pub fn unmount(&mut self) -> usize {
        self.duration_timer = None;
        self.transcript_timer = None;
        let released = self.scheduler.cancel_all();
        tracing::debug!(released, "call simulation timers released");
        released
    }
}

/// Format whole seconds as `m:ss`.
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Speaker;
    use crate::notify::NotificationKind;

    fn booking() -> BookingConfirmation {
        BookingConfirmation {
            title: "Test Drive Booked Successfully!".to_string(),
            slot: "Saturday, 11:00 AM".to_string(),
            location: "JP Nagar Showroom".to_string(),
        }
    }

    fn transcript(n: usize) -> Vec<TranscriptEntry> {
        (0..n)
            .map(|i| {
                let speaker = if i % 2 == 0 {
                    Speaker::Ai
                } else {
                    Speaker::Customer
                };
                TranscriptEntry::new(speaker, format!("line {i}"), "10:23")
            })
            .collect()
    }

    fn completions(events: &[CallEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, CallEvent::Completed(_)))
            .count()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(9), "0:09");
        assert_eq!(format_duration(75), "1:15");
        assert_eq!(format_duration(180), "3:00");
    }

    #[test]
    fn test_first_line_visible_immediately() {
        let sim = CallSimulation::new(transcript(5), booking(), CallTiming::default());
        assert_eq!(sim.visible_count(), 1);
        assert!(sim.is_active());
        assert_eq!(sim.phase(), CallPhase::Active);
    }

    #[test]
    fn test_transcript_reveals_each_interval() {
        let mut sim = CallSimulation::new(transcript(5), booking(), CallTiming::default());
        let events = sim.advance(Duration::from_millis(2500));
        assert!(events.contains(&CallEvent::LineRevealed(1)));
        assert_eq!(sim.visible_count(), 2);
        assert_eq!(sim.elapsed_seconds(), 2);
    }

    #[test]
    fn test_completes_once_after_delay() {
        let mut sim = CallSimulation::new(transcript(5), booking(), CallTiming::default());

        // Index reaches the length at 12.5 s, completion fires 1 s later.
        let events = sim.advance(Duration::from_millis(12_500));
        assert!(events.contains(&CallEvent::TranscriptExhausted));
        assert_eq!(sim.phase(), CallPhase::TranscriptComplete);
        assert_eq!(sim.visible_count(), 5);
        assert!(sim.is_active());

        let events = sim.advance(Duration::from_millis(1000));
        assert_eq!(completions(&events), 1);
        assert_eq!(sim.phase(), CallPhase::Completed);
        assert!(!sim.is_active());

        let frozen = sim.elapsed_seconds();
        let events = sim.advance(Duration::from_secs(60));
        assert_eq!(completions(&events), 0);
        assert_eq!(sim.elapsed_seconds(), frozen);
        assert_eq!(sim.active_timers(), 0);
    }

    #[test]
    fn test_completion_notification_text() {
        let mut sim = CallSimulation::new(transcript(1), booking(), CallTiming::default());
        let events = sim.advance(Duration::from_secs(10));
        let note = events
            .iter()
            .find_map(|e| match e {
                CallEvent::Completed(n) => Some(n.clone()),
                _ => None,
            })
            .expect("call completes");
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.title, "Test Drive Booked Successfully!");
        assert_eq!(note.description, "Saturday, 11:00 AM at JP Nagar Showroom");
    }

    #[test]
    fn test_duration_stops_at_ceiling() {
        let timing = CallTiming {
            ceiling_secs: 3,
            transcript_interval: Duration::from_secs(100),
            ..CallTiming::default()
        };
        let mut sim = CallSimulation::new(transcript(5), booking(), timing);
        sim.advance(Duration::from_secs(10));
        assert_eq!(sim.elapsed_seconds(), 3);
        assert!(sim.is_active());
        // Only the transcript ticker remains.
        assert_eq!(sim.active_timers(), 1);
    }

    #[test]
    fn test_empty_transcript_completes_after_delay() {
        let mut sim = CallSimulation::new(Vec::new(), booking(), CallTiming::default());
        assert_eq!(sim.phase(), CallPhase::TranscriptComplete);
        assert_eq!(sim.visible_count(), 0);
        let events = sim.advance(Duration::from_secs(1));
        assert_eq!(completions(&events), 1);
    }

    #[test]
    fn test_unmount_and_reset() {
        let mut sim = CallSimulation::new(transcript(5), booking(), CallTiming::default());
        sim.advance(Duration::from_secs(6));
        assert_eq!(sim.unmount(), 2);
        let frozen = sim.snapshot();
        sim.advance(Duration::from_secs(30));
        assert_eq!(sim.snapshot(), frozen);

        sim.reset();
        assert_eq!(sim.elapsed_seconds(), 0);
        assert_eq!(sim.visible_count(), 1);
        assert!(!sim.has_notified());
        assert_eq!(sim.active_timers(), 2);
    }

    #[test]
    fn test_scaled_timing() {
        let fast = CallTiming::default().scaled(10.0);
        assert_eq!(fast.transcript_interval, Duration::from_millis(250));
        assert_eq!(fast.ceiling_secs, 180);
        assert_eq!(CallTiming::default().scaled(0.0), CallTiming::default());
    }

    #[test]
    fn test_extreme_slowdown_saturates() {
        let slow = CallTiming::default().scaled(1e-20);
        assert_eq!(slow.tick, Duration::MAX);
        assert_eq!(slow.transcript_interval, Duration::MAX);

        let mut sim = CallSimulation::new(transcript(3), booking(), slow);
        assert!(sim.advance(Duration::from_secs(3600)).is_empty());
        assert_eq!(sim.elapsed_seconds(), 0);
        assert_eq!(sim.visible_count(), 1);
    }
}
