//! Interactive terminal dashboard using ratatui.
//!
//! # Architecture
//!
//! [`App`] is the tab controller. Each tab is backed by a page type in
//! [`pages`] implementing [`PageState`]; only the active page is mounted
//! and only it owns timers. Rendering is a pure function of the app state
//! (see `views`), so frames can be drawn into a `TestBackend` in tests.

mod app;
mod events;
pub mod pages;
pub mod state;
pub mod theme;
pub mod traits;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme};

pub use traits::{EventResult, PageContext, PageState};

pub use state::{ListNavigation, ListState};

pub use app::{App, TabKind};
pub use events::{handle_key_event, Event};
pub use pages::Page;
pub use ui::{render, run_tui};
