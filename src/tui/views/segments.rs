use super::columns;
use crate::engine::roi::{group_decimal, group_thousands};
use crate::model::Segment;
use crate::tui::pages::SegmentsPage;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{card, render_empty_state, stat_line, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

pub fn render_segments(frame: &mut Frame, area: Rect, page: &SegmentsPage) {
    if page.segments.is_empty() {
        render_empty_state(frame, area, "No segments discovered yet", None);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(10)])
        .split(area);

    let summary = &page.summary;
    let strip = Line::from(vec![
        Span::styled("Segments ", Styles::label()),
        Span::styled(summary.segments.to_string(), Styles::value()),
        Span::styled("   Total Users ", Styles::label()),
        Span::styled(group_thousands(summary.total_users as i64), Styles::value()),
        Span::styled("   Avg. Probability ", Styles::label()),
        Span::styled(format!("{}%", summary.average_probability), Styles::value()),
    ]);
    frame.render_widget(Paragraph::new(strip), chunks[0]);

    let cards = columns(chunks[1], page.segments.len());
    for (i, (segment, rect)) in page.segments.iter().zip(cards.iter()).enumerate() {
        let selected = i == page.list.selected;
        if page.is_flipped(segment) {
            render_back(frame, *rect, segment, selected);
        } else {
            render_front(frame, *rect, segment, selected);
        }
    }
}

fn render_front(frame: &mut Frame, area: Rect, segment: &Segment, selected: bool) {
    let block = card(&format!("{} {}", segment.icon, segment.name), selected);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("{} users", group_thousands(i64::from(segment.count))),
            Styles::text_muted(),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(stat_line(
            "Conversion Probability",
            &format!("{}%", segment.probability),
            inner.width,
        )),
        chunks[1],
    );
    frame.render_widget(
        HorizontalBar::new("", f64::from(segment.probability))
            .value_label("")
            .color(colors().score_color(segment.probability)),
        chunks[2],
    );

    let mut lines = vec![Line::styled("Key Insights", Styles::section_title())];
    lines.extend(
        segment
            .insights
            .iter()
            .map(|insight| Line::from(vec![Span::styled("• ", Styles::label()), Span::raw(insight.clone())])),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled("[Enter] see actions", Styles::text_muted()));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[4]);
}

fn render_back(frame: &mut Frame, area: Rect, segment: &Segment, selected: bool) {
    let block = card("Available Actions", selected);
    let width = block.inner(area).width;
    let scheme = colors();

    let cost = cost_label(segment.campaign_cost());

    let lines = vec![
        Line::styled(segment.name.clone(), Styles::text_muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[s]", Styles::shortcut_key()),
            Span::styled(" Send Campaign", Style::default().fg(scheme.primary).bold()),
        ]),
        Line::styled("    Preview Content", Styles::text_muted()),
        Line::styled("    Customize", Styles::text_muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Expected ROI", Styles::text_muted()),
            Span::raw(" "),
            Span::styled("+145%", Style::default().fg(scheme.success).bold()),
        ]),
        stat_line(
            "Est. Conversions",
            &group_thousands(i64::from(segment.estimated_conversions())),
            width,
        ),
        stat_line("Campaign Cost", &cost, width),
        Line::from(""),
        Line::styled("[Enter] flip back", Styles::text_muted()),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Whole rupees print bare, anything else to one decimal place.
fn cost_label(cost: f64) -> String {
    if cost.fract() == 0.0 {
        format!("₹{}", group_thousands(cost as i64))
    } else {
        format!("₹{}", group_decimal(&format!("{cost:.1}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_label() {
        assert_eq!(cost_label(9964.5), "₹9,964.5");
        assert_eq!(cost_label(7000.0), "₹7,000");
        assert_eq!(cost_label(1234.96), "₹1,235.0");
        assert_eq!(cost_label(12.04), "₹12.0");
    }
}
