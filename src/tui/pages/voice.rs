use crate::config::TimingConfig;
use crate::engine::{CallEvent, CallSimulation};
use crate::model::{CallerProfile, ProgressStat, Stat};
use crate::providers::DataSource;
use crate::tui::traits::{EventResult, PageContext, PageState};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;

#[derive(Debug)]
pub struct VoicePage {
    pub caller: CallerProfile,
    pub stats: Vec<Stat>,
    pub performance: Vec<ProgressStat>,
    pub call: CallSimulation,
}

impl VoicePage {
    pub fn mount(data: &dyn DataSource, timing: &TimingConfig) -> Self {
        let script = data.call_script();
        Self {
            caller: script.caller,
            stats: data.call_stats(),
            performance: data.call_performance(),
            call: CallSimulation::new(script.transcript, script.booking, timing.call()),
        }
    }
}

impl PageState for VoicePage {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut PageContext<'_>) -> EventResult {
        match key.code {
            KeyCode::Char('r') => {
                tracing::debug!("restarting simulated call");
                self.call.reset();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_tick(&mut self, dt: Duration, ctx: &mut PageContext<'_>) {
        for event in self.call.advance(dt) {
            if let CallEvent::Completed(notification) = event {
                ctx.notifications.push(notification);
            }
        }
    }

    fn on_leave(&mut self) -> usize {
        self.call.unmount()
    }

    fn active_timers(&self) -> usize {
        self.call.active_timers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CallPhase;
    use crate::notify::NotificationCenter;
    use crate::providers::DemoData;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_completed_call_raises_one_toast() {
        let mut page = VoicePage::mount(&DemoData::new(), &TimingConfig::default());
        let mut center = NotificationCenter::new(Duration::from_secs(600), 3);
        let mut ctx = PageContext {
            notifications: &mut center,
        };
        for _ in 0..60 {
            page.on_tick(Duration::from_secs(1), &mut ctx);
        }
        assert_eq!(page.call.phase(), CallPhase::Completed);
        assert_eq!(center.total_sent(), 1);
        assert_eq!(
            center.latest().map(|n| n.title.as_str()),
            Some("Test Drive Booked Successfully!")
        );
    }

    #[test]
    fn test_restart_resets_call() {
        let mut page = VoicePage::mount(&DemoData::new(), &TimingConfig::default());
        let mut center = NotificationCenter::default();
        let mut ctx = PageContext {
            notifications: &mut center,
        };
        page.on_tick(Duration::from_secs(5), &mut ctx);
        assert!(page.call.elapsed_seconds() > 0);
        page.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE), &mut ctx);
        assert_eq!(page.call.elapsed_seconds(), 0);
        assert_eq!(page.call.visible_count(), 1);
    }
}
