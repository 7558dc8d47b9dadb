use super::{columns, render_series_chart};
use crate::engine::roi::{format_crores, format_lakhs, group_thousands};
use crate::tui::pages::{AnalyticsPage, RoiField};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{card, render_kpi_card, stat_line};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

pub fn render_analytics(frame: &mut Frame, area: Rect, page: &AnalyticsPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(11),
            Constraint::Min(8),
        ])
        .split(area);

    let cards = columns(chunks[0], page.kpis.len());
    for (kpi, rect) in page.kpis.iter().zip(cards.iter()) {
        render_kpi_card(frame, *rect, kpi);
    }

    let calculator = columns(chunks[1], 2);
    render_form(frame, calculator[0], page);
    render_results(frame, calculator[1], page);

    let charts = columns(chunks[2], 2);
    render_series_chart(frame, charts[0], &page.comparison);
    render_series_chart(frame, charts[1], &page.trend);
}

fn render_form(frame: &mut Frame, area: Rect, page: &AnalyticsPage) {
    let scheme = colors();
    let mut lines = Vec::new();
    for field in RoiField::ALL {
        let focused = field == page.focus();
        let marker = if focused { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(scheme.accent).bold()),
            Span::styled(field.label(), Styles::label()),
        ]));
        let mut value = vec![
            Span::raw("  "),
            Span::styled(
                format!(" {} ", page.field_text(field)),
                if focused {
                    Styles::selected()
                } else {
                    Styles::value()
                },
            ),
        ];
        if focused {
            value.push(Span::styled("▌", Style::default().fg(scheme.primary)));
        }
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).block(card("ROI Calculator", true)),
        area,
    );
}

fn render_results(frame: &mut Frame, area: Rect, page: &AnalyticsPage) {
    let scheme = colors();
    let block = card("Projected Impact", false);
    let width = block.inner(area).width;

    let lines = match page.result() {
        Ok(projection) => vec![
            stat_line(
                "Leads",
                &format!(
                    "{} → {}",
                    group_thousands(projection.current_leads),
                    group_thousands(projection.new_leads)
                ),
                width,
            ),
            stat_line(
                "Additional Revenue",
                &format_crores(projection.additional_revenue),
                width,
            ),
            stat_line("Cost Savings", &format_lakhs(projection.cost_savings), width),
            Line::from(""),
            Line::from(vec![
                Span::styled("ROI Improvement ", Styles::label()),
                Span::styled(
                    format!("+{}%", group_thousands(projection.roi_improvement)),
                    Style::default().fg(scheme.success).bold(),
                ),
            ]),
        ],
        Err(err) => vec![
            Line::styled("Cannot project ROI", Styles::error()),
            Line::styled(err.to_string(), Styles::text_muted()),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
