use crate::config::TimingConfig;
use crate::engine::TypewriterSequencer;
use crate::model::{ChartPoint, KpiCard, Stat};
use crate::providers::DataSource;
use crate::tui::traits::{PageContext, PageState};
use std::time::Duration;

/// Number of feed rows shown on the dashboard.
pub const FEED_SLOTS: usize = 5;

/// One row of the agent intelligence feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub text: String,
    /// Row currently being typed or held
    pub active: bool,
    /// Show the typing cursor after the text
    pub typing: bool,
}

#[derive(Debug)]
pub struct DashboardPage {
    pub kpis: Vec<KpiCard>,
    pub performance: Vec<ChartPoint>,
    pub processing_speed: Stat,
    /// `None` when the data source has no activity lines
    pub feed: Option<TypewriterSequencer>,
}

impl DashboardPage {
    pub fn mount(data: &dyn DataSource, timing: &TimingConfig) -> Self {
        let feed = match TypewriterSequencer::new(data.activity_lines(), timing.typewriter()) {
            Ok(feed) => Some(feed),
            Err(e) => {
                tracing::warn!("activity feed disabled: {e}");
                None
            }
        };
        Self {
            kpis: data.dashboard_kpis(),
            performance: data.weekly_performance(),
            processing_speed: data.processing_speed(),
            feed,
        }
    }

    /// Slot among the first rows that mirrors the active line.
    pub fn highlighted_slot(&self) -> Option<usize> {
        self.feed.as_ref().map(|f| f.active_index() % FEED_SLOTS)
    }

    /// The first lines of the sequence, with the highlighted slot replaced
    /// by the partially revealed active line.
    pub fn feed_rows(&self) -> Vec<FeedRow> {
        let Some(feed) = &self.feed else {
            return Vec::new();
        };
        let frame = feed.frame();
        let slot = frame.active_index % FEED_SLOTS;
        feed.lines()
            .iter()
            .take(FEED_SLOTS)
            .enumerate()
            .map(|(i, line)| {
                if i == slot {
                    FeedRow {
                        text: frame.visible_text.clone(),
                        active: true,
                        typing: frame.is_revealing,
                    }
                } else {
                    FeedRow {
                        text: line.clone(),
                        active: false,
                        typing: false,
                    }
                }
            })
            .collect()
    }
}

impl PageState for DashboardPage {
    fn on_tick(&mut self, dt: Duration, _ctx: &mut PageContext<'_>) {
        if let Some(feed) = &mut self.feed {
            feed.advance(dt);
        }
    }

    fn on_leave(&mut self) -> usize {
        self.feed.as_mut().map_or(0, TypewriterSequencer::unmount)
    }

    fn active_timers(&self) -> usize {
        self.feed.as_ref().map_or(0, TypewriterSequencer::active_timers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationCenter;
    use crate::providers::DemoData;

    fn page() -> DashboardPage {
        DashboardPage::mount(&DemoData::new(), &TimingConfig::default())
    }

    #[test]
    fn test_mount_starts_on_first_line() {
        let page = page();
        assert_eq!(page.highlighted_slot(), Some(0));
        let rows = page.feed_rows();
        assert_eq!(rows.len(), FEED_SLOTS);
        assert!(rows[0].active && rows[0].typing);
        assert!(rows[0].text.is_empty());
        assert!(!rows[1].active);
    }

    #[test]
    fn test_ticks_reveal_characters() {
        let mut page = page();
        let mut center = NotificationCenter::default();
        let mut ctx = PageContext {
            notifications: &mut center,
        };
        page.on_tick(Duration::from_millis(150), &mut ctx);
        assert_eq!(page.feed_rows()[0].text.chars().count(), 3);
    }

    #[test]
    fn test_leave_releases_feed_timer() {
        let mut page = page();
        assert!(page.active_timers() > 0);
        assert!(page.on_leave() > 0);
        assert_eq!(page.active_timers(), 0);
    }
}
