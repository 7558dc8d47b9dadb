//! Application state for the dashboard.
//!
//! `App` is the tab controller: exactly one tab is active and exactly one
//! page is mounted. Switching tabs tears the old page down (releasing its
//! timers) and mounts a fresh one.

use super::pages::Page;
use super::traits::{EventResult, PageContext};
use crate::config::AppConfig;
use crate::model::Stat;
use crate::notify::NotificationCenter;
use crate::providers::DataSource;
use crossterm::event::KeyEvent;
use std::sync::Arc;
use std::time::Duration;

/// Tab kinds, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKind {
    Dashboard,
    Segments,
    Actions,
    Creative,
    Testing,
    Voice,
    Leads,
    Analytics,
}

impl TabKind {
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Segments,
        Self::Actions,
        Self::Creative,
        Self::Testing,
        Self::Voice,
        Self::Leads,
        Self::Analytics,
    ];

    /// Stable string identifier used in config files and on the CLI.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Segments => "segments",
            Self::Actions => "actions",
            Self::Creative => "creative",
            Self::Testing => "testing",
            Self::Voice => "voice",
            Self::Leads => "leads",
            Self::Analytics => "analytics",
        }
    }

    /// Parse from an identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Parse an identifier, falling back to the dashboard.
    #[must_use]
    pub fn from_id_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::warn!("unknown tab '{id}', showing dashboard");
            Self::Dashboard
        })
    }

    /// Sidebar label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Segments => "Segments",
            Self::Actions => "Next-Best Actions",
            Self::Creative => "Creative Studio",
            Self::Testing => "A/B Testing",
            Self::Voice => "Voice AI",
            Self::Leads => "Lead Scoring",
            Self::Analytics => "ROI Analytics",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Dashboard => "Marketing Intelligence Dashboard",
            Self::Segments => "Micro-Segments Discovery",
            Self::Actions => "Next-Best Action Engine",
            Self::Creative => "Creative Studio",
            Self::Testing => "A/B Testing Agent",
            Self::Voice => "Voice AI Assistant",
            Self::Leads => "Lead Scoring & Dealer Assignment",
            Self::Analytics => "ROI & Impact Analytics",
        }
    }

    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Dashboard => "The autonomous marketing brain above Adobe AEM + CDP",
            Self::Segments => "LifeBOT discovers micro-segments without any manual setup",
            Self::Actions => "LifeBOT predicts the right channel, right message, right moment",
            Self::Creative => {
                "AI-generated creatives in 30 seconds. Creative turnaround time: 3 days → 30 seconds"
            }
            Self::Testing => {
                "LifeBOT runs experiments autonomously and reallocates budget in real-time"
            }
            Self::Voice => {
                "Dealer workload drops 40% - AI handles customer conversations 24/7"
            }
            Self::Leads => "Hot leads automatically routed to best performing dealers",
            Self::Analytics => "Measure the autonomous impact on your marketing performance",
        }
    }

    /// Position in sidebar order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Number key that jumps to this tab.
    #[must_use]
    pub fn key(self) -> char {
        char::from_digit(self.index() as u32 + 1, 10).unwrap_or('?')
    }

    /// Tab for a `1`-`8` key.
    #[must_use]
    pub fn from_key(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for TabKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Main application state
pub struct App {
    /// Where every page reads its fixtures
    pub(crate) data: Arc<dyn DataSource>,
    pub(crate) config: AppConfig,
    /// Mounted page; its variant is the active tab
    pub(crate) page: Page,
    pub(crate) notifications: NotificationCenter,
    /// Header status strip
    pub(crate) header_status: Vec<Stat>,
    pub(crate) show_help: bool,
    pub(crate) should_quit: bool,
    /// Transient status-bar message
    pub(crate) status_message: Option<String>,
    /// Animation tick counter
    pub(crate) tick: u64,
}

impl App {
    /// Build the app and mount the configured initial tab.
    pub fn new(data: Arc<dyn DataSource>, config: AppConfig) -> Self {
        let initial = TabKind::from_id_or_default(&config.tui.initial_tab);
        let page = Page::mount(initial, data.as_ref(), &config);
        let notifications = NotificationCenter::new(
            config.notifications.ttl(),
            config.notifications.max_visible,
        );
        let header_status = data.header_status();
        Self {
            data,
            config,
            page,
            notifications,
            header_status,
            show_help: false,
            should_quit: false,
            status_message: None,
            tick: 0,
        }
    }

    /// The active tab.
    #[must_use]
    pub const fn active_tab(&self) -> TabKind {
        self.page.tab()
    }

    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    /// Switch to `tab`. Selecting the active tab does nothing.
    pub fn select(&mut self, tab: TabKind) {
        if tab == self.active_tab() {
            return;
        }
        let released = self.page.state_mut().on_leave();
        tracing::debug!(from = %self.active_tab(), to = %tab, released, "switching tab");
        self.page = Page::mount(tab, self.data.as_ref(), &self.config);
        self.status_message = None;
    }

    pub fn next_tab(&mut self) {
        self.select(self.active_tab().next());
    }

    pub fn prev_tab(&mut self) {
        self.select(self.active_tab().prev());
    }

    /// Drive the mounted page and expire old toasts.
    pub fn advance(&mut self, dt: Duration) {
        self.tick = self.tick.wrapping_add(1);
        let mut ctx = PageContext {
            notifications: &mut self.notifications,
        };
        self.page.state_mut().on_tick(dt, &mut ctx);
        self.notifications.advance(dt);
    }

    /// Offer a key to the mounted page.
    pub fn page_key(&mut self, key: KeyEvent) -> EventResult {
        let mut ctx = PageContext {
            notifications: &mut self.notifications,
        };
        self.page.state_mut().handle_key(key, &mut ctx)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Release the mounted page's timers before the app goes away.
    pub fn shutdown(&mut self) -> usize {
        self.page.state_mut().on_leave()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::DemoData;

    fn app() -> App {
        App::new(Arc::new(DemoData::new()), AppConfig::default())
    }

    #[test]
    fn test_tab_ids_roundtrip() {
        for tab in TabKind::ALL {
            assert_eq!(TabKind::from_id(tab.id()), Some(tab));
        }
        assert_eq!(TabKind::from_id(" Voice "), Some(TabKind::Voice));
        assert_eq!(TabKind::from_id("settings"), None);
        assert_eq!(TabKind::from_id_or_default("settings"), TabKind::Dashboard);
    }

    #[test]
    fn test_tab_keys() {
        assert_eq!(TabKind::Dashboard.key(), '1');
        assert_eq!(TabKind::Analytics.key(), '8');
        assert_eq!(TabKind::from_key('6'), Some(TabKind::Voice));
        assert_eq!(TabKind::from_key('0'), None);
        assert_eq!(TabKind::from_key('9'), None);
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(TabKind::Analytics.next(), TabKind::Dashboard);
        assert_eq!(TabKind::Dashboard.prev(), TabKind::Analytics);
    }

    #[test]
    fn test_initial_tab_from_config() {
        let config = AppConfig::builder().initial_tab("leads").build();
        let app = App::new(Arc::new(DemoData::new()), config);
        assert_eq!(app.active_tab(), TabKind::Leads);
    }

    #[test]
    fn test_select_same_tab_keeps_page_state() {
        let mut app = app();
        app.advance(Duration::from_millis(500));
        let before = match app.page() {
            Page::Dashboard(page) => page.feed_rows()[0].text.clone(),
            _ => unreachable!(),
        };
        app.select(TabKind::Dashboard);
        match app.page() {
            Page::Dashboard(page) => assert_eq!(page.feed_rows()[0].text, before),
            _ => panic!("dashboard should stay mounted"),
        }
    }

    #[test]
    fn test_notifications_survive_tab_switch() {
        let mut app = app();
        app.select(TabKind::Voice);
        for _ in 0..20 {
            app.advance(Duration::from_secs(1));
        }
        assert_eq!(app.notifications().total_sent(), 1);
        app.select(TabKind::Dashboard);
        assert_eq!(app.notifications().total_sent(), 1);
        assert_eq!(app.page().state().active_timers(), 1);
    }
}
