//! Typewriter sequencer for the agent activity feed.
//!
//! Cycles through a fixed list of lines, revealing each one character at a
//! time, holding the finished line for a pause and then moving on to the
//! next line, forever.

use super::scheduler::{Scheduler, TimerId};
use crate::error::{EngineErrorKind, LifebotError, Result};
use serde::Serialize;
use std::time::Duration;

/// Reveal and pause timings for the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between two revealed characters
    pub reveal_interval: Duration,
    /// Hold time once a line is fully shown
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            reveal_interval: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
        }
    }
}

impl TypewriterTiming {
    /// Scale both delays by `1 / speed`; non-positive speeds are ignored.
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
            reveal_interval: scale(self.reveal_interval).max(Duration::from_millis(1)),
            pause: scale(self.pause),
        }
    }
}

/// Snapshot of what the feed should display right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypewriterFrame {
    pub visible_text: String,
    pub is_revealing: bool,
    pub active_index: usize,
}

/// Progress notifications emitted while advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    /// A line became active and its reveal started
    LineStarted(usize),
    /// A line finished revealing and entered its pause
    LineCompleted(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tick {
    Reveal,
    Advance,
}

/// Cyclic character-by-character reveal of a non-empty list of lines.
#[derive(Debug, Clone)]
pub struct TypewriterSequencer {
    lines: Vec<String>,
    timing: TypewriterTiming,
    scheduler: Scheduler<Tick>,
    active_index: usize,
    revealed: usize,
    is_revealing: bool,
    reveal_timer: Option<TimerId>,
    cycles: u64,
}

impl TypewriterSequencer {
    /// Build a sequencer and start revealing the first line.
    pub fn new<I, S>(lines: I, timing: TypewriterTiming) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(LifebotError::engine(
                "building activity feed",
                EngineErrorKind::EmptySequence,
            ));
        }
        if timing.reveal_interval.is_zero() {
            return Err(LifebotError::engine(
                "building activity feed",
                EngineErrorKind::ZeroInterval {
                    name: "reveal_interval".to_string(),
                },
            ));
        }

        let mut sequencer = Self {
            lines,
            timing,
            scheduler: Scheduler::new(),
            active_index: 0,
            revealed: 0,
            is_revealing: false,
            reveal_timer: None,
            cycles: 0,
        };
        sequencer.start_line(0);
        Ok(sequencer)
    }

    /// Drive the sequencer forward by `dt` of wall time.
    pub fn advance(&mut self, dt: Duration) -> Vec<FeedEvent> {
        let until = self.scheduler.now() + dt;
        let mut events = Vec::new();
        while let Some((_, tick)) = self.scheduler.pop_due(until) {
            match tick {
                Tick::Reveal => self.on_reveal(&mut events),
                Tick::Advance => {
                    let next = (self.active_index + 1) % self.lines.len();
                    if next == 0 {
                        self.cycles += 1;
                    }
                    self.start_line(next);
                    events.push(FeedEvent::LineStarted(next));
                }
            }
        }
        self.scheduler.settle(until);
        events
    }

    fn on_reveal(&mut self, events: &mut Vec<FeedEvent>) {
        let len = self.current_len();
        if self.revealed < len {
            self.revealed += 1;
            return;
        }

        // Line already fully shown: stop the reveal ticker and hold.
        if let Some(id) = self.reveal_timer.take() {
            self.scheduler.cancel(id);
        }
        self.is_revealing = false;
        self.scheduler.after(self.timing.pause, Tick::Advance);
        events.push(FeedEvent::LineCompleted(self.active_index));
    }

    fn start_line(&mut self, index: usize) {
        self.active_index = index;
        self.revealed = 0;
        self.is_revealing = true;
        self.reveal_timer = Some(
            self.scheduler
                .every(self.timing.reveal_interval, Tick::Reveal),
        );
    }

    fn current_len(&self) -> usize {
        self.lines[self.active_index].chars().count()
    }

    /// Current display state.
    #[must_use]
    pub fn frame(&self) -> TypewriterFrame {
        TypewriterFrame {
            visible_text: self.visible_text(),
            is_revealing: self.is_revealing,
            active_index: self.active_index,
        }
    }

    /// Revealed prefix of the active line.
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.lines[self.active_index]
            .chars()
            .take(self.revealed)
            .collect()
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.is_revealing
    }

    /// Number of times the sequence wrapped back to the first line.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full text of the line at `index`.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Timers currently held by the sequencer.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.scheduler.active_count()
    }

    /// Restore the freshly-mounted state.
    pub fn reset(&mut self) {
        self.unmount();
        self.scheduler = Scheduler::new();
        self.cycles = 0;
        self.start_line(0);
    }

    /// Release every timer; the frame freezes until [`reset`](Self::reset).
    pub fn unmount(&mut self) -> usize {
        self.reveal_timer = None;
        let released = self.scheduler.cancel_all();
        tracing::debug!(released, "activity feed timers released");
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(50);

    fn sequencer(lines: &[&str]) -> TypewriterSequencer {
        TypewriterSequencer::new(lines.iter().copied(), TypewriterTiming::default())
            .expect("non-empty sequence")
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let result = TypewriterSequencer::new(Vec::<String>::new(), TypewriterTiming::default());
        assert!(matches!(
            result,
            Err(LifebotError::Engine {
                source: EngineErrorKind::EmptySequence,
                ..
            })
        ));
    }

    #[test]
    fn test_zero_reveal_interval_rejected() {
        let timing = TypewriterTiming {
            reveal_interval: Duration::ZERO,
            pause: Duration::from_secs(1),
        };
        assert!(TypewriterSequencer::new(["a"], timing).is_err());
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut seq = sequencer(&["abc", "de"]);
        assert_eq!(seq.visible_text(), "");
        assert!(seq.is_revealing());

        seq.advance(STEP);
        assert_eq!(seq.visible_text(), "a");
        seq.advance(STEP * 2);
        assert_eq!(seq.visible_text(), "abc");
        assert!(seq.is_revealing());

        // The tick after the last character ends the reveal phase.
        let events = seq.advance(STEP);
        assert_eq!(events, [FeedEvent::LineCompleted(0)]);
        assert!(!seq.is_revealing());
        assert_eq!(seq.visible_text(), "abc");
    }

    #[test]
    fn test_pause_then_advance() {
        let mut seq = sequencer(&["ab", "cd"]);
        seq.advance(STEP * 3);
        assert!(!seq.is_revealing());

        seq.advance(Duration::from_millis(1999));
        assert_eq!(seq.active_index(), 0);

        let events = seq.advance(Duration::from_millis(1));
        assert_eq!(events, [FeedEvent::LineStarted(1)]);
        assert_eq!(seq.active_index(), 1);
        assert_eq!(seq.visible_text(), "");
        assert!(seq.is_revealing());
    }

    #[test]
    fn test_unicode_lines_reveal_by_char() {
        let mut seq = sequencer(&["नमस्ते"]);
        seq.advance(STEP * 2);
        assert_eq!(seq.visible_text().chars().count(), 2);
    }

    #[test]
    fn test_extreme_slowdown_saturates() {
        let slow = TypewriterTiming::default().scaled(1e-20);
        assert_eq!(slow.reveal_interval, Duration::MAX);
        assert_eq!(slow.pause, Duration::MAX);

        let mut seq = TypewriterSequencer::new(["abc"], slow).expect("non-empty sequence");
        assert!(seq.advance(Duration::from_secs(3600)).is_empty());
        assert_eq!(seq.visible_text(), "");
    }

    #[test]
    fn test_unmount_and_reset() {
        let mut seq = sequencer(&["abc", "def"]);
        seq.advance(Duration::from_secs(3));
        assert_eq!(seq.active_index(), 1);

        assert!(seq.unmount() > 0);
        assert_eq!(seq.active_timers(), 0);
        let frozen = seq.frame();
        seq.advance(Duration::from_secs(10));
        assert_eq!(seq.frame(), frozen);

        seq.reset();
        assert_eq!(seq.active_index(), 0);
        assert_eq!(seq.visible_text(), "");
        assert_eq!(seq.active_timers(), 1);
    }
}
