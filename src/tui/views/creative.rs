use crate::model::Creative;
use crate::tui::pages::CreativePage;
use crate::tui::theme::{badge, colors, Styles};
use crate::tui::widgets::{card, render_empty_state, stat_line};
use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

pub fn render_creative(frame: &mut Frame, area: Rect, page: &CreativePage) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(chunks[0]);

    render_list(frame, left[0], page);
    render_options(frame, left[1], page);

    match page.selected() {
        Some(creative) => render_preview(frame, chunks[1], creative),
        None => render_empty_state(frame, chunks[1], "No creatives generated yet", None),
    }
}

fn render_list(frame: &mut Frame, area: Rect, page: &CreativePage) {
    let scheme = colors();
    let items: Vec<ListItem> = page
        .creatives
        .iter()
        .map(|creative| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", creative.language), Styles::value()),
                Span::styled(
                    format!("{:.1}% CTR", creative.predicted_ctr),
                    Style::default().fg(scheme.success),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !page.creatives.is_empty() {
        state.select(Some(page.list.selected));
    }
    let list = List::new(items)
        .block(card("Generated Creatives", true))
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_options(frame: &mut Frame, area: Rect, page: &CreativePage) {
    let opts = &page.options;
    let join = |items: &[String]| items.join(" · ");
    let lines = vec![
        Line::from(vec![Span::styled("Car       ", Styles::label()), Span::raw(join(&opts.cars))]),
        Line::from(vec![Span::styled("Language  ", Styles::label()), Span::raw(join(&opts.languages))]),
        Line::from(vec![Span::styled("Segment   ", Styles::label()), Span::raw(join(&opts.segments))]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(card("AI Creative Generator", false))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_preview(frame: &mut Frame, area: Rect, creative: &Creative) {
    let scheme = colors();
    let block = card(&format!("Preview · {}", creative.language), false);
    let width = block.inner(area).width;

    let lines = vec![
        Line::from(vec![
            badge(creative.language.clone(), scheme.secondary),
            Span::raw(" "),
            Span::styled(creative.segment.clone(), Styles::text_muted()),
        ]),
        Line::from(""),
        Line::styled(creative.headline.clone(), Styles::header_title()),
        Line::from(""),
        Line::styled(creative.body.clone(), Styles::text()),
        Line::from(""),
        Line::from(badge(creative.cta.clone(), scheme.primary)),
        Line::from(""),
        stat_line(
            "Predicted CTR",
            &format!("{:.1}%", creative.predicted_ctr),
            width,
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("[x]", Styles::shortcut_key()),
            Span::styled(" Export to AEM  ", Styles::shortcut_desc()),
            Span::styled("[p]", Styles::shortcut_key()),
            Span::styled(" Preview", Styles::shortcut_desc()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
