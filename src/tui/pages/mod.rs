//! Per-tab page state.
//!
//! A page is built from the data source when its tab is mounted and thrown
//! away when the user leaves, so every visit starts from fresh state.

mod actions;
mod analytics;
mod creative;
mod dashboard;
mod leads;
mod segments;
mod testing;
mod voice;

pub use actions::ActionsPage;
pub use analytics::{AnalyticsPage, RoiField};
pub use creative::CreativePage;
pub use dashboard::{DashboardPage, FeedRow, FEED_SLOTS};
pub use leads::LeadsPage;
pub use segments::SegmentsPage;
pub use testing::TestingPage;
pub use voice::VoicePage;

use super::app::TabKind;
use super::traits::PageState;
use crate::config::AppConfig;
use crate::providers::DataSource;

/// The mounted page, one variant per tab.
#[derive(Debug)]
pub enum Page {
    Dashboard(DashboardPage),
    Segments(SegmentsPage),
    Actions(ActionsPage),
    Creative(CreativePage),
    Testing(TestingPage),
    Voice(VoicePage),
    Leads(LeadsPage),
    Analytics(AnalyticsPage),
}

impl Page {
    /// Build fresh state for `tab`.
    pub fn mount(tab: TabKind, data: &dyn DataSource, config: &AppConfig) -> Self {
        tracing::debug!(tab = tab.id(), source = data.name(), "mounting page");
        match tab {
            TabKind::Dashboard => Self::Dashboard(DashboardPage::mount(data, &config.timing)),
            TabKind::Segments => Self::Segments(SegmentsPage::mount(data)),
            TabKind::Actions => Self::Actions(ActionsPage::mount(data)),
            TabKind::Creative => Self::Creative(CreativePage::mount(data)),
            TabKind::Testing => Self::Testing(TestingPage::mount(data)),
            TabKind::Voice => Self::Voice(VoicePage::mount(data, &config.timing)),
            TabKind::Leads => Self::Leads(LeadsPage::mount(data)),
            TabKind::Analytics => Self::Analytics(AnalyticsPage::mount(data, &config.roi)),
        }
    }

    /// The tab this page belongs to.
    pub const fn tab(&self) -> TabKind {
        match self {
            Self::Dashboard(_) => TabKind::Dashboard,
            Self::Segments(_) => TabKind::Segments,
            Self::Actions(_) => TabKind::Actions,
            Self::Creative(_) => TabKind::Creative,
            Self::Testing(_) => TabKind::Testing,
            Self::Voice(_) => TabKind::Voice,
            Self::Leads(_) => TabKind::Leads,
            Self::Analytics(_) => TabKind::Analytics,
        }
    }

    pub fn state(&self) -> &dyn PageState {
        match self {
            Self::Dashboard(page) => page,
            Self::Segments(page) => page,
            Self::Actions(page) => page,
            Self::Creative(page) => page,
            Self::Testing(page) => page,
            Self::Voice(page) => page,
            Self::Leads(page) => page,
            Self::Analytics(page) => page,
        }
    }

    pub fn state_mut(&mut self) -> &mut dyn PageState {
        match self {
            Self::Dashboard(page) => page,
            Self::Segments(page) => page,
            Self::Actions(page) => page,
            Self::Creative(page) => page,
            Self::Testing(page) => page,
            Self::Voice(page) => page,
            Self::Leads(page) => page,
            Self::Analytics(page) => page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::DemoData;

    #[test]
    fn test_mount_matches_tab() {
        let data = DemoData::new();
        let config = AppConfig::default();
        for tab in TabKind::ALL {
            assert_eq!(Page::mount(tab, &data, &config).tab(), tab);
        }
    }

    #[test]
    fn test_only_animated_pages_own_timers() {
        let data = DemoData::new();
        let config = AppConfig::default();
        for tab in TabKind::ALL {
            let page = Page::mount(tab, &data, &config);
            let animated = matches!(tab, TabKind::Dashboard | TabKind::Voice);
            assert_eq!(page.state().active_timers() > 0, animated, "{tab:?}");
        }
    }
}
