use super::{columns, format_value};
use crate::model::Variant;
use crate::tui::pages::TestingPage;
use crate::tui::theme::{badge, colors, Styles};
use crate::tui::widgets::{card, render_empty_state, stat_line, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Row, Table, Wrap},
};

pub fn render_testing(frame: &mut Frame, area: Rect, page: &TestingPage) {
    let experiment = &page.experiment;
    if experiment.variants.is_empty() {
        render_empty_state(frame, area, "No experiments running", None);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Min(6),
        ])
        .split(area);

    let scheme = colors();
    let status = Line::from(vec![
        Span::styled(experiment.name.clone(), Styles::value()),
        Span::raw("  "),
        badge(experiment.status.to_string(), scheme.success),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[0]);

    let winner = page.winner_id();
    let cards = columns(chunks[1], experiment.variants.len());
    for (variant, rect) in experiment.variants.iter().zip(cards.iter()) {
        render_variant(frame, *rect, variant, winner == Some(variant.id.as_str()));
    }

    let lower = columns(chunks[2], 2);
    render_traffic(frame, lower[0], page);
    render_performance(frame, lower[1], page);
}

fn render_variant(frame: &mut Frame, area: Rect, variant: &Variant, winning: bool) {
    let scheme = colors();
    let block = card(&format!("Variant {} · {}", variant.id, variant.name), winning);
    let width = block.inner(area).width;

    let mut header = vec![Span::styled(variant.description.clone(), Styles::text_muted())];
    if winning {
        header.push(Span::raw(" "));
        header.push(badge("WINNING", scheme.success));
    }

    let lines = vec![
        Line::from(header),
        Line::from(""),
        stat_line("Engagement", &format!("{}%", variant.engagement), width),
        stat_line("Cost per Lead", &format!("₹{}", variant.cpl), width),
        stat_line("Conversions", &variant.conversions.to_string(), width),
        stat_line("Confidence", &format!("{}%", variant.confidence), width),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_traffic(frame: &mut Frame, area: Rect, page: &TestingPage) {
    let block = card("Traffic Allocation", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let palette = colors().chart_palette();
    for (i, point) in page.experiment.traffic.iter().enumerate() {
        let y = inner.y + i as u16 * 2;
        if y >= inner.y + inner.height {
            break;
        }
        frame.render_widget(
            HorizontalBar::new(point.label.clone(), point.value).color(palette[i % palette.len()]),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    let note_y = inner.y + page.experiment.traffic.len() as u16 * 2;
    if note_y < inner.y + inner.height {
        let note_area = Rect::new(inner.x, note_y, inner.width, inner.y + inner.height - note_y);
        frame.render_widget(
            Paragraph::new(Line::styled(page.experiment.note.clone(), Styles::text_muted()))
                .wrap(Wrap { trim: true }),
            note_area,
        );
    }
}

fn render_performance(frame: &mut Frame, area: Rect, page: &TestingPage) {
    let experiment = &page.experiment;
    let mut header = vec!["Metric".to_string()];
    header.extend(experiment.variants.iter().map(|v| format!("Variant {}", v.id)));

    let rows: Vec<Row> = experiment
        .performance
        .iter()
        .map(|row| {
            let mut cells = vec![row.label.clone()];
            cells.extend((0..experiment.variants.len()).map(|i| format_value(row.value(i))));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Percentage(40)];
    let share = 60 / experiment.variants.len().max(1) as u16;
    widths.extend(experiment.variants.iter().map(|_| Constraint::Percentage(share)));

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(Styles::section_title()))
        .block(card("Performance Comparison", false));
    frame.render_widget(table, area);
}
