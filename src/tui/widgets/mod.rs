//! Custom widgets for the dashboard.
//!
//! Cards, badges, bars and popups shared by every page.

mod charts;

pub use charts::{HorizontalBar, MiniSparkline, PercentageRing};

use crate::model::{initials, KpiCard};
use crate::notify::Notification;
use crate::tui::theme::{colors, trend_indicator, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Bordered card block with a title.
pub fn card(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    Block::default()
        .title(Span::styled(format!(" {title} "), Styles::section_title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

/// Render a KPI card: title, big value, trend and optional subtext.
pub fn render_kpi_card(frame: &mut Frame, area: Rect, kpi: &KpiCard) {
    let mut value_line = vec![Span::styled(kpi.value.clone(), Styles::value())];
    value_line.push(Span::raw(" "));
    value_line.push(trend_indicator(kpi.trend));

    let mut lines = vec![Line::from(value_line)];
    if let Some(subtext) = &kpi.subtext {
        lines.push(Line::styled(subtext.clone(), Styles::text_muted()));
    }

    let paragraph = Paragraph::new(lines)
        .block(card(&kpi.title, false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Two-letter avatar for a person's name, e.g. ` RK `.
pub fn avatar(name: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", initials(name)),
        Style::default()
            .fg(colors().badge_fg_light)
            .bg(color)
            .bold(),
    )
}

/// `label ........ value` row for stat lists.
pub fn stat_line(label: &str, value: &str, width: u16) -> Line<'static> {
    use unicode_width::UnicodeWidthStr;

    let used = label.width() + value.width();
    let gap = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(label.to_string(), Styles::text_muted()),
        Span::raw(" ".repeat(gap)),
        Span::styled(value.to_string(), Styles::value()),
    ])
}

/// Render a detail panel with a title and content lines.
pub fn render_detail_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    border_color: Color,
) {
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, area);
}

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a popup overlay.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
    border_color: Color,
) {
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, popup_area);
}

/// Stack live toasts in the top-right corner, newest first.
pub fn render_toasts<'a>(
    frame: &mut Frame,
    area: Rect,
    toasts: impl Iterator<Item = &'a Notification>,
) {
    const TOAST_WIDTH: u16 = 44;
    const TOAST_HEIGHT: u16 = 4;

    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in toasts {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let color = colors().notification_color(toast.kind);
        let inner = width.saturating_sub(4) as usize;
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", toast.kind.symbol()), Style::default().fg(color).bold()),
                Span::styled(truncate_str(&toast.title, inner), Styles::value()),
            ]),
            Line::styled(truncate_str(&toast.description, inner), Styles::text_muted()),
        ];
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
        y += TOAST_HEIGHT;
    }
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();

    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Smallest terminal the dashboard lays out in.
pub const MIN_WIDTH: u16 = 90;
pub const MIN_HEIGHT: u16 = 28;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let scheme = colors();
    let lines = vec![
        Line::styled("Terminal too small", Style::default().fg(scheme.warning).bold()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(scheme.text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(scheme.accent),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer sentence", 10), "a longe...");
        assert_eq!(truncate_str("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_str("日本語テキスト", 9), "日本語...");
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
    }

    #[test]
    fn test_avatar_uses_initials() {
        assert_eq!(avatar("Priya Sharma", Color::Blue).content, " PS ");
    }

    #[test]
    fn test_terminal_size_check() {
        assert!(check_terminal_size(120, 40).is_ok());
        assert_eq!(check_terminal_size(80, 24), Err((MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_stat_line_pads_between() {
        let line = stat_line("Leads", "42", 12);
        assert_eq!(line.width(), 12);
    }
}
