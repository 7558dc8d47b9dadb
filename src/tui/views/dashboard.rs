//! Dashboard: KPI cards, the live agent feed and the weekly trend.

use super::columns;
use crate::tui::pages::DashboardPage;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{card, render_empty_state, render_kpi_card, stat_line, MiniSparkline};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Paragraph, Wrap},
};

pub fn render_dashboard(frame: &mut Frame, area: Rect, page: &DashboardPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    let cards = columns(chunks[0], page.kpis.len());
    for (kpi, rect) in page.kpis.iter().zip(cards.iter()) {
        render_kpi_card(frame, *rect, kpi);
    }

    let lower = columns(chunks[1], 2);
    render_feed(frame, lower[0], page);
    render_performance(frame, lower[1], page);
}

fn render_feed(frame: &mut Frame, area: Rect, page: &DashboardPage) {
    let rows = page.feed_rows();
    if rows.is_empty() {
        render_empty_state(frame, area, "No agent activity", None);
        return;
    }

    let scheme = colors();
    let mut lines = Vec::new();
    for row in &rows {
        let (dot, text_style) = if row.active {
            (
                Span::styled("● ", Style::default().fg(scheme.primary).bold()),
                Styles::text(),
            )
        } else {
            (Span::styled("● ", Styles::label()), Styles::label())
        };
        let mut spans = vec![dot, Span::styled(row.text.clone(), text_style)];
        if row.typing {
            spans.push(Span::styled("▌", Style::default().fg(scheme.primary)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.push(stat_line(
        &page.processing_speed.label,
        &page.processing_speed.value,
        area.width.saturating_sub(2),
    ));

    let title = Line::from(vec![
        Span::styled(" Agent Intelligence Feed ", Styles::section_title()),
        Span::styled(" LIVE ", Style::default().fg(scheme.success).bold()),
    ]);
    let block = card("", false).title(title);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_performance(frame: &mut Frame, area: Rect, page: &DashboardPage) {
    let scheme = colors();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)])
        .split(area);

    let bars: Vec<Bar<'_>> = page
        .performance
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value.round() as u64)
                .label(Line::from(point.label.clone()))
        })
        .collect();

    let chart = BarChart::default()
        .block(card("Campaign Performance Trend", false))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(scheme.primary))
        .value_style(Style::default().fg(scheme.badge_fg_dark).bold())
        .label_style(Style::default().fg(scheme.text_muted))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, chunks[0]);

    let values = page.performance.iter().map(|p| p.value).collect();
    let spark_area = chunks[1].inner(Margin::new(1, 0));
    frame.render_widget(MiniSparkline::new(values).color(scheme.accent), spark_area);
}
