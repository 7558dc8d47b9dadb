use super::{columns, render_series_chart};
use crate::model::Dealer;
use crate::tui::pages::LeadsPage;
use crate::tui::theme::{colors, tier_badge, Styles};
use crate::tui::widgets::{card, render_empty_state, stat_line, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

pub fn render_leads(frame: &mut Frame, area: Rect, page: &LeadsPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(8)])
        .split(area);

    let upper = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[0]);
    render_distribution(frame, upper[0], page);
    render_series_chart(frame, upper[1], &page.performance);

    if page.dealers.is_empty() {
        render_empty_state(frame, chunks[1], "No dealers available", None);
        return;
    }
    let cards = columns(chunks[1], page.dealers.len());
    for (i, (dealer, rect)) in page.dealers.iter().zip(cards.iter()).enumerate() {
        render_dealer(frame, *rect, dealer, i == page.list.selected);
    }
}

fn render_distribution(frame: &mut Frame, area: Rect, page: &LeadsPage) {
    let total = page.total_leads();
    let block = card(&format!("Lead Distribution · {total} total"), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scheme = colors();
    for (i, bucket) in page.distribution.iter().enumerate() {
        let y = inner.y + i as u16 * 2;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7), Constraint::Min(10)])
            .split(row);
        frame.render_widget(Paragraph::new(Line::from(tier_badge(bucket.tier))), parts[0]);
        frame.render_widget(
            HorizontalBar::ratio("", f64::from(bucket.value), f64::from(total))
                .value_label(bucket.value.to_string())
                .color(scheme.tier_color(bucket.tier)),
            parts[1],
        );
    }
}

fn render_dealer(frame: &mut Frame, area: Rect, dealer: &Dealer, selected: bool) {
    let scheme = colors();
    let block = card(&dealer.name, selected);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(inner);

    let header = vec![
        Line::styled(dealer.location.clone(), Styles::text_muted()),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(scheme.warning)),
            Span::styled(format!("{:.1}", dealer.rating), Styles::value()),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);
    frame.render_widget(
        HorizontalBar::new("Perf", f64::from(dealer.performance))
            .label_width(5)
            .color(scheme.score_color(dealer.performance)),
        chunks[1],
    );

    let width = inner.width;
    let mut lines = vec![
        stat_line("Leads", &dealer.leads_assigned.to_string(), width),
        stat_line("Conversions", &dealer.conversions.to_string(), width),
        stat_line("Conv. Rate", &format!("{}%", dealer.conversion_rate()), width),
    ];
    if selected {
        lines.push(Line::from(vec![
            Span::styled("[a]", Styles::shortcut_key()),
            Span::styled(" Assign lead", Styles::shortcut_desc()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);
}
