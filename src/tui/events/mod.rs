//! Event handling for the dashboard.
//!
//! Key presses go to the help overlay first, then to a few global keys,
//! then to the mounted page, and finally to tab navigation.

use super::app::{App, TabKind};
use super::theme::toggle_theme;
use super::traits::EventResult;
use crate::config::TuiPreferences;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick (for animations)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event, returning `Tick` when the tick rate elapses.
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too.
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Char('q') => app.quit(),
            _ => app.toggle_help(),
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Char('T') => {
            let theme_name = toggle_theme();
            let prefs = TuiPreferences {
                theme: theme_name.to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::warn!("could not save theme preference: {e}");
            }
            app.set_status_message(format!("Theme: {theme_name}"));
            return;
        }
        _ => {}
    }

    if app.page_key(key) == EventResult::Consumed {
        return;
    }

    match key.code {
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Char(c) => {
            if let Some(tab) = TabKind::from_key(c) {
                app.select(tab);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::providers::DemoData;
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(DemoData::new()), AppConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_jump_to_tabs() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('6')));
        assert_eq!(app.active_tab(), TabKind::Voice);
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.active_tab(), TabKind::Segments);
    }

    #[test]
    fn test_tab_and_backtab_cycle() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.active_tab(), TabKind::Analytics);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_tab(), TabKind::Dashboard);
    }

    #[test]
    fn test_digits_edit_roi_fields_instead_of_jumping() {
        let mut app = app();
        app.select(TabKind::Analytics);
        handle_key_event(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.active_tab(), TabKind::Analytics);
        match app.page() {
            crate::tui::pages::Page::Analytics(page) => {
                assert_eq!(page.field_text(crate::tui::pages::RoiField::Budget), "10000005");
            }
            _ => panic!("analytics page should stay mounted"),
        }
        // Tab still leaves the calculator.
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_tab(), TabKind::Dashboard);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help());
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert!(!app.show_help());
        assert_eq!(app.active_tab(), TabKind::Dashboard);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit());

        let mut app = self::app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_page_actions_raise_toasts() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.notifications().len(), 1);
    }
}
