use crate::tui::pages::ActionsPage;
use crate::tui::theme::{channel_badge, colors, Styles};
use crate::tui::widgets::{avatar, card, render_empty_state, truncate_str, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

const ROW_HEIGHT: u16 = 4;

pub fn render_actions(frame: &mut Frame, area: Rect, page: &ActionsPage) {
    if page.customers.is_empty() {
        render_empty_state(frame, area, "No recommended actions", None);
        return;
    }

    let block = card("Recommended Actions", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scheme = colors();
    let mut y = inner.y;
    for (i, customer) in page.customers.iter().enumerate() {
        if y + ROW_HEIGHT > inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, ROW_HEIGHT);
        let selected = i == page.list.selected;
        let marker = if selected {
            Span::styled("▶ ", Style::default().fg(scheme.accent).bold())
        } else {
            Span::raw("  ")
        };
        let name_style = if selected {
            Styles::highlight()
        } else {
            Styles::value()
        };

        let header = Line::from(vec![
            marker,
            avatar(&customer.name, scheme.channel_color(customer.channel)),
            Span::raw(" "),
            Span::styled(customer.name.clone(), name_style),
            Span::styled(format!("  {}  ", customer.car), Styles::text_muted()),
            channel_badge(customer.channel),
            Span::styled(format!("  ⏱ {}", customer.send_time), Styles::label()),
        ]);
        let message_width = inner.width.saturating_sub(6) as usize;
        let message = Line::from(vec![
            Span::raw("      "),
            Span::styled(
                format!("\"{}\"", truncate_str(&customer.message, message_width.saturating_sub(2))),
                Styles::text(),
            ),
        ]);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(row);
        frame.render_widget(Paragraph::new(header), parts[0]);
        frame.render_widget(Paragraph::new(message), parts[1]);
        let bar_area = parts[2].inner(Margin::new(3, 0));
        frame.render_widget(
            HorizontalBar::new("Probability", f64::from(customer.probability))
                .color(scheme.score_color(customer.probability)),
            bar_area,
        );
        y += ROW_HEIGHT;
    }

    if let Some(customer) = page.selected() {
        let hint = Line::from(vec![
            Span::styled("[s]", Styles::shortcut_key()),
            Span::styled(format!(" Send to {} ", customer.name), Styles::shortcut_desc()),
            Span::styled("[c]", Styles::shortcut_key()),
            Span::styled(" Schedule", Styles::shortcut_desc()),
        ]);
        let hint_area = Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(1),
            inner.width,
            1,
        );
        if y <= hint_area.y {
            frame.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), hint_area);
        }
    }
}
