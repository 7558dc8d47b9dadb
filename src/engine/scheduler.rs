//! Deterministic timer scheduling on a virtual clock.
//!
//! Pages register intervals and one-shot timeouts here when they are
//! mounted and cancel them when they are torn down. The clock only moves
//! when the owner drives it, which keeps every animation reproducible in
//! tests and lets the terminal loop feed it real elapsed time.

use std::time::Duration;

/// Smallest period an interval may have; zero would never let the clock pass.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a registered timer, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Interval(Duration),
    Timeout,
}

#[derive(Debug, Clone)]
struct Timer<E> {
    id: TimerId,
    kind: TimerKind,
    due: Duration,
    event: E,
}

/// Single-threaded timer wheel.
///
/// Events fire in chronological order; timers due at the same instant fire
/// in registration order. The owner drains due events one at a time with
/// [`Scheduler::pop_due`] so that handling an event may cancel or register
/// timers before the next one fires:
///
/// ```
/// use lifebot::engine::Scheduler;
/// use std::time::Duration;
///
/// let mut scheduler = Scheduler::new();
/// let tick = scheduler.every(Duration::from_millis(100), "tick");
/// scheduler.after(Duration::from_millis(250), "stop");
///
/// let until = scheduler.now() + Duration::from_secs(1);
/// let mut fired = Vec::new();
/// while let Some((_, event)) = scheduler.pop_due(until) {
///     fired.push(event);
///     if event == "stop" {
///         scheduler.cancel(tick);
///     }
/// }
/// scheduler.settle(until);
/// assert_eq!(fired, ["tick", "tick", "stop"]);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }
}

impl<E: Clone> Scheduler<E> {
    /// Create a scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Fire `event` every `period`, first after one full period.
    pub fn every(&mut self, period: Duration, event: E) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.register(TimerKind::Interval(period), period, event)
    }

    /// Fire `event` once after `delay`.
    pub fn after(&mut self, delay: Duration, event: E) -> TimerId {
        self.register(TimerKind::Timeout, delay, event)
    }

    fn register(&mut self, kind: TimerKind, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            kind,
            due: self.now.saturating_add(delay),
            event,
        });
        id
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every registered timer, returning how many were live.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    /// Whether the timer is still scheduled.
    #[must_use]
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of live timers.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Instant at which the next timer fires, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Fire the earliest timer due at or before `until`.
    ///
    /// The clock jumps to the timer's due instant. Intervals are re-armed
    /// one period later; timeouts are removed.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let due = self.timers[idx].due;
        self.now = self.now.max(due);

        match self.timers[idx].kind {
            TimerKind::Interval(period) => {
                let timer = &mut self.timers[idx];
                timer.due = due.saturating_add(period);
                Some((timer.id, timer.event.clone()))
            }
            TimerKind::Timeout => {
                let timer = self.timers.remove(idx);
                Some((timer.id, timer.event))
            }
        }
    }

    /// Move the clock forward to `until` once due timers are drained.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler<&'static str>, dt: Duration) -> Vec<&'static str> {
        let until = scheduler.now() + dt;
        let mut fired = Vec::new();
        while let Some((_, event)) = scheduler.pop_due(until) {
            fired.push(event);
        }
        scheduler.settle(until);
        fired
    }

    #[test]
    fn test_interval_fires_each_period() {
        let mut scheduler = Scheduler::new();
        scheduler.every(Duration::from_millis(50), "tick");
        assert_eq!(drain(&mut scheduler, Duration::from_millis(49)).len(), 0);
        assert_eq!(drain(&mut scheduler, Duration::from_millis(1)).len(), 1);
        assert_eq!(drain(&mut scheduler, Duration::from_millis(200)).len(), 4);
        assert_eq!(scheduler.now(), Duration::from_millis(250));
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.after(Duration::from_secs(2), "advance");
        assert!(scheduler.is_active(id));
        assert_eq!(drain(&mut scheduler, Duration::from_secs(5)), ["advance"]);
        assert!(!scheduler.is_active(id));
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_ties_fire_in_registration_order() {
        let mut scheduler = Scheduler::new();
        scheduler.after(Duration::from_millis(100), "first");
        scheduler.after(Duration::from_millis(100), "second");
        scheduler.after(Duration::from_millis(50), "earliest");
        assert_eq!(
            drain(&mut scheduler, Duration::from_millis(100)),
            ["earliest", "first", "second"]
        );
    }

    #[test]
    fn test_cancel_and_cancel_all() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.every(Duration::from_millis(10), "a");
        scheduler.every(Duration::from_millis(10), "b");
        scheduler.after(Duration::from_millis(10), "c");

        assert!(scheduler.cancel(a));
        assert!(!scheduler.cancel(a));
        assert_eq!(scheduler.active_count(), 2);
        assert_eq!(scheduler.cancel_all(), 2);
        assert!(drain(&mut scheduler, Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut scheduler = Scheduler::new();
        scheduler.every(Duration::ZERO, "spin");
        assert_eq!(drain(&mut scheduler, Duration::from_millis(5)).len(), 5);
    }

    #[test]
    fn test_unbounded_delays_never_fire() {
        let mut scheduler = Scheduler::new();
        scheduler.every(Duration::MAX, "never");
        scheduler.after(Duration::MAX, "nor this");
        assert!(drain(&mut scheduler, Duration::from_secs(86_400)).is_empty());
        assert_eq!(scheduler.active_count(), 2);
    }

    #[test]
    fn test_next_due_tracks_earliest_timer() {
        let mut scheduler: Scheduler<&str> = Scheduler::new();
        assert_eq!(scheduler.next_due(), None);
        scheduler.after(Duration::from_millis(300), "late");
        scheduler.every(Duration::from_millis(100), "soon");
        assert_eq!(scheduler.next_due(), Some(Duration::from_millis(100)));
    }
}
