//! Main UI rendering and the terminal event loop.

use super::app::{App, TabKind};
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, current_theme_name, render_footer_hints, set_theme, FooterHints, Theme};
use super::views;
use super::widgets::{
    check_terminal_size, render_popup, render_size_warning, render_toasts, MIN_HEIGHT, MIN_WIDTH,
};
use crate::config::TuiPreferences;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};
use std::io::{self, stdout};
use std::time::Instant;

/// Pick the startup theme: an explicit flag wins, then the saved
/// preference, then the config file.
fn resolve_theme(app: &App, theme_override: Option<&str>) -> Theme {
    if let Some(name) = theme_override {
        return Theme::from_name(name);
    }
    let saved = TuiPreferences::config_path().filter(|path| path.exists());
    match saved {
        Some(path) => Theme::from_name(&TuiPreferences::load_from(&path).theme),
        None => Theme::from_name(&app.config().tui.theme),
    }
}

/// Run the TUI application
pub fn run_tui(app: &mut App, theme_override: Option<&str>) -> io::Result<()> {
    set_theme(resolve_theme(app, theme_override));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(app.config().tui.tick_rate());
    tracing::info!(tab = %app.active_tab(), theme = current_theme_name(), "dashboard started");

    let result = event_loop(&mut terminal, app, &events);

    let released = app.shutdown();
    tracing::debug!(released, "timers released on exit");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    let mut last = Instant::now();
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) | Event::Tick => {}
        }

        let now = Instant::now();
        app.advance(now.duration_since(last));
        last = now;

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(2), // Tabs
            Constraint::Min(10),   // Page
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    views::render_page(frame, chunks[2], app.page());
    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    render_toasts(frame, chunks[2], app.notifications().visible());

    if app.show_help() {
        render_popup(
            frame,
            area,
            "Keyboard Shortcuts",
            help_lines(),
            60,
            70,
            colors().accent,
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let mut spans = vec![
        Span::styled("LifeBOT", Style::default().fg(scheme.primary).bold()),
        Span::styled(" AI Marketing Agent", Style::default().fg(scheme.text_muted)),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("● ", Style::default().fg(scheme.success)),
        Span::styled("Agent Online", Style::default().fg(scheme.success).bold()),
    ];
    for stat in &app.header_status {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled(format!("{} ", stat.label), Style::default().fg(scheme.text_muted)));
        spans.push(Span::styled(stat.value.clone(), Style::default().fg(scheme.text).bold()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let active = app.active_tab();
    let titles: Vec<Line> = TabKind::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == active {
                Style::default().fg(scheme.accent).bold()
            } else {
                Style::default().fg(scheme.text_muted)
            };
            Line::from(vec![
                Span::styled(format!("[{}]", tab.key()), style),
                Span::styled(format!(" {}", tab.title()), style),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(scheme.border)),
        )
        .highlight_style(Style::default().fg(scheme.accent))
        .select(active.index())
        .padding(" ", " ")
        .divider(Span::styled("│", Style::default().fg(scheme.muted)));
    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let timers = app.page().state().active_timers();
    let mut spans = vec![
        Span::styled(" Page: ", Style::default().fg(scheme.text_muted)),
        Span::styled(app.active_tab().title(), Style::default().fg(scheme.primary).bold()),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("Theme: ", Style::default().fg(scheme.text_muted)),
        Span::styled(current_theme_name(), Style::default().fg(scheme.text)),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("Timers: ", Style::default().fg(scheme.text_muted)),
        Span::styled(timers.to_string(), Style::default().fg(scheme.text)),
    ];
    let sent = app.notifications().total_sent();
    if sent > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled("Notifications: ", Style::default().fg(scheme.text_muted)));
        spans.push(Span::styled(sent.to_string(), Style::default().fg(scheme.text)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(scheme.background_alt)),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    if let Some(msg) = &app.status_message {
        let line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(scheme.accent)),
            Span::styled(msg.clone(), Style::default().fg(scheme.accent).bold()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints = FooterHints::for_tab(app.active_tab().id());
    frame.render_widget(
        Paragraph::new(Line::from(render_footer_hints(&hints))).alignment(Alignment::Center),
        area,
    );
}

fn help_lines() -> Vec<Line<'static>> {
    let scheme = colors();
    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().fg(scheme.primary).bold()))
    };
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<14} "), Style::default().fg(scheme.accent)),
            Span::styled(desc, Style::default().fg(scheme.text)),
        ])
    };

    vec![
        section("Navigation"),
        key("Tab/Shift+Tab", "Next / previous page"),
        key("←/→ or h/l", "Next / previous page"),
        key("1-8", "Jump to a page"),
        key("↑/↓ or j/k", "Select item or field"),
        Line::from(""),
        section("Pages"),
        key("Enter", "Flip segment card"),
        key("s", "Send campaign or action"),
        key("c", "Schedule action"),
        key("x / p", "Export / preview creative"),
        key("a", "Assign hot lead"),
        key("r", "Restart call / reset ROI inputs"),
        key("0-9 . ⌫", "Edit ROI inputs"),
        Line::from(""),
        section("General"),
        key("T", "Toggle theme"),
        key("?", "Toggle this help"),
        key("q / Esc", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::providers::DemoData;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_header_and_tabs() {
        let app = App::new(Arc::new(DemoData::new()), AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(160, 45)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("LifeBOT"));
        assert!(text.contains("Agent Online"));
        assert!(text.contains("[8] ROI Analytics"));
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let app = App::new(Arc::new(DemoData::new()), AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = App::new(Arc::new(DemoData::new()), AppConfig::default());
        app.toggle_help();
        let mut terminal = Terminal::new(TestBackend::new(160, 45)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Keyboard Shortcuts"));
    }
}
