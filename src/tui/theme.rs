//! Centralized theme and color scheme for the dashboard.
//!
//! This module provides consistent styling across all pages.

use crate::model::{Channel, LeadTier, Trend};
use crate::notify::NotificationKind;
use ratatui::prelude::*;
use std::sync::RwLock;

/// Color scheme for the dashboard.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Lead temperature
    pub hot: Color,
    pub warm: Color,
    pub cold: Color,

    // Channels
    pub whatsapp: Color,
    pub email: Color,
    pub sms: Color,
    pub phone: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,

    // Chat bubbles
    pub ai_bubble: Color,
    pub customer_bubble: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            hot: Color::Red,
            warm: Color::Yellow,
            cold: Color::Blue,

            whatsapp: Color::Green,
            email: Color::Blue,
            sms: Color::Magenta,
            phone: Color::Yellow,

            primary: Color::Cyan,
            secondary: Color::Magenta,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            ai_bubble: Color::Rgb(40, 40, 70),
            customer_bubble: Color::Rgb(30, 60, 60),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            hot: Color::Rgb(200, 0, 0),
            warm: Color::Rgb(180, 140, 0),
            cold: Color::Rgb(0, 0, 200),

            whatsapp: Color::Rgb(0, 128, 0),
            email: Color::Rgb(0, 0, 200),
            sms: Color::Rgb(128, 0, 128),
            phone: Color::Rgb(180, 140, 0),

            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(110, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background: Color::Rgb(255, 255, 255),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            highlight: Color::Rgb(180, 140, 0),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),
            info: Color::Rgb(0, 0, 200),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,

            ai_bubble: Color::Rgb(225, 225, 245),
            customer_bubble: Color::Rgb(215, 240, 235),
        }
    }

    /// High contrast theme (accessibility)
    pub fn high_contrast() -> Self {
        Self {
            hot: Color::LightRed,
            warm: Color::LightYellow,
            cold: Color::LightBlue,

            whatsapp: Color::LightGreen,
            email: Color::LightBlue,
            sms: Color::LightMagenta,
            phone: Color::LightYellow,

            primary: Color::LightCyan,
            secondary: Color::LightMagenta,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background: Color::Black,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::White,
            highlight: Color::LightYellow,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            info: Color::LightBlue,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            ai_bubble: Color::Rgb(20, 20, 60),
            customer_bubble: Color::Rgb(0, 50, 50),
        }
    }

    /// Color for a lead temperature tier
    pub fn tier_color(&self, tier: LeadTier) -> Color {
        match tier {
            LeadTier::Hot => self.hot,
            LeadTier::Warm => self.warm,
            LeadTier::Cold => self.cold,
        }
    }

    /// Color for an outreach channel
    pub fn channel_color(&self, channel: Channel) -> Color {
        match channel {
            Channel::WhatsApp => self.whatsapp,
            Channel::Email => self.email,
            Channel::Sms => self.sms,
            Channel::Phone => self.phone,
        }
    }

    pub fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.success,
            Trend::Down => self.error,
            Trend::Neutral => self.text_muted,
        }
    }

    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Info => self.info,
            NotificationKind::Warning => self.warning,
            NotificationKind::Error => self.error,
        }
    }

    /// Color for a 0-100 score: green at 80+, amber at 60+, red below.
    pub fn score_color(&self, score: u8) -> Color {
        match score {
            80..=u8::MAX => self.success,
            60..=79 => self.warning,
            _ => self.error,
        }
    }

    /// Get chart colors palette
    pub fn chart_palette(&self) -> [Color; 5] {
        [
            self.primary,
            self.secondary,
            self.success,
            self.accent,
            self.info,
        ]
    }
}

// ============================================================================
// Global Theme State
// ============================================================================

static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub fn dark() -> Self {
        Self::dark_const()
    }

    pub fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().expect("THEME lock not poisoned").name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().expect("THEME lock not poisoned") = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().expect("THEME lock not poisoned");
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn highlight() -> Style {
        Style::default().fg(colors().highlight).bold()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default()
            .bg(colors().background_alt)
            .fg(colors().text)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error).bold()
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Solid badge with dark text on a colored background.
pub fn badge(label: impl Into<String>, bg_color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", label.into()),
        Style::default()
            .fg(colors().badge_fg_dark)
            .bg(bg_color)
            .bold(),
    )
}

/// Badge for a lead temperature tier
pub fn tier_badge(tier: LeadTier) -> Span<'static> {
    badge(tier.to_string().to_uppercase(), colors().tier_color(tier))
}

/// Badge for an outreach channel
pub fn channel_badge(channel: Channel) -> Span<'static> {
    badge(channel.to_string(), colors().channel_color(channel))
}

/// Trend arrow colored by direction
pub fn trend_indicator(trend: Trend) -> Span<'static> {
    Span::styled(
        trend.arrow().to_string(),
        Style::default().fg(colors().trend_color(trend)).bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Context-aware footer hints for each page
pub struct FooterHints;

impl FooterHints {
    /// Hints for a page, by tab id
    pub fn for_tab(tab: &str) -> Vec<(&'static str, &'static str)> {
        let mut hints = match tab {
            "segments" => vec![
                ("↑↓", "select"),
                ("Enter", "flip card"),
                ("s", "send campaign"),
            ],
            "actions" => vec![("↑↓", "select"), ("s", "send now"), ("c", "schedule")],
            "creative" => vec![("↑↓", "select"), ("x", "export"), ("p", "preview")],
            "voice" => vec![("r", "restart call")],
            "leads" => vec![("↑↓", "select dealer"), ("a", "assign hot lead")],
            "analytics" => vec![
                ("↑↓", "field"),
                ("0-9", "edit"),
                ("⌫", "delete"),
                ("r", "reset"),
            ],
            _ => vec![],
        };
        hints.extend(Self::global());
        hints
    }

    /// Global hints shown everywhere
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "switch"),
            ("1-8", "jump"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled(desc.to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        let theme = Theme::dark();
        assert_eq!(theme.next().name, "light");
        assert_eq!(theme.next().next().name, "high-contrast");
        assert_eq!(theme.next().next().next().name, "dark");
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("Light").name, "light");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_score_color_bands() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.score_color(95), scheme.success);
        assert_eq!(scheme.score_color(70), scheme.warning);
        assert_eq!(scheme.score_color(12), scheme.error);
    }

    #[test]
    fn test_footer_hints_include_page_actions() {
        let hints = FooterHints::for_tab("actions");
        assert!(hints.contains(&("s", "send now")));
        assert!(hints.contains(&("q", "quit")));
        assert_eq!(FooterHints::for_tab("testing"), FooterHints::global());
    }

    #[test]
    fn test_render_footer_hints_spacing() {
        let spans = render_footer_hints(&[("a", "one"), ("b", "two")]);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[a]");
        assert_eq!(spans[2].content, " ");
    }
}
