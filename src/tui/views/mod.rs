//! Page renderers, one per tab.
//!
//! Each renderer draws from its mounted page state only; no view reaches
//! back into the data source.

mod actions;
mod analytics;
mod creative;
mod dashboard;
mod leads;
mod segments;
mod testing;
mod voice;

use super::app::TabKind;
use super::pages::Page;
use super::theme::{colors, Styles};
use crate::model::SeriesChart;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

/// Heading, subtitle and the page body.
pub fn render_page(frame: &mut Frame, area: Rect, page: &Page) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    render_heading(frame, chunks[0], page.tab());

    let body = chunks[1];
    match page {
        Page::Dashboard(p) => dashboard::render_dashboard(frame, body, p),
        Page::Segments(p) => segments::render_segments(frame, body, p),
        Page::Actions(p) => actions::render_actions(frame, body, p),
        Page::Creative(p) => creative::render_creative(frame, body, p),
        Page::Testing(p) => testing::render_testing(frame, body, p),
        Page::Voice(p) => voice::render_voice(frame, body, p),
        Page::Leads(p) => leads::render_leads(frame, body, p),
        Page::Analytics(p) => analytics::render_analytics(frame, body, p),
    }
}

fn render_heading(frame: &mut Frame, area: Rect, tab: TabKind) {
    let lines = vec![
        Line::styled(tab.heading(), Styles::header_title()),
        Line::styled(tab.subtitle(), Styles::text_muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Grouped bar chart: one group per row, one bar per series.
pub(crate) fn render_series_chart(frame: &mut Frame, area: Rect, chart: &SeriesChart) {
    let scheme = colors();
    let palette = scheme.chart_palette();

    let groups: Vec<BarGroup<'_>> = chart
        .rows
        .iter()
        .map(|row| {
            let bars: Vec<Bar<'_>> = chart
                .series
                .iter()
                .enumerate()
                .map(|(i, _)| {
                    let value = row.value(i);
                    Bar::default()
                        .value(value.max(0.0).round() as u64)
                        .text_value(format_value(value))
                        .style(Style::default().fg(palette[i % palette.len()]))
                })
                .collect();
            BarGroup::default()
                .label(Line::from(row.label.clone()))
                .bars(&bars)
        })
        .collect();

    let legend: Vec<Span<'_>> = chart
        .series
        .iter()
        .enumerate()
        .flat_map(|(i, name)| {
            [
                Span::styled(" ■ ", Style::default().fg(palette[i % palette.len()])),
                Span::styled(name.clone(), Styles::text_muted()),
            ]
        })
        .collect();

    let mut bar_chart = BarChart::default()
        .block(
            super::widgets::card(&chart.title, false).title_bottom(Line::from(legend)),
        )
        .bar_width(5)
        .bar_gap(1)
        .group_gap(2)
        .value_style(Style::default().fg(scheme.badge_fg_dark).bold())
        .label_style(Style::default().fg(scheme.text));
    for group in groups {
        bar_chart = bar_chart.data(group);
    }

    frame.render_widget(bar_chart, area);
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Split `area` into `n` equal columns.
pub(crate) fn columns(area: Rect, n: usize) -> std::rc::Rc<[Rect]> {
    let n = n.max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, n as u32); n])
        .split(area)
}
