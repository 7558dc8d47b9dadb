//! Voice AI: live call transcript beside the caller profile.

use super::columns;
use crate::engine::CallPhase;
use crate::model::{Speaker, TranscriptEntry};
use crate::tui::pages::VoicePage;
use crate::tui::theme::{badge, colors, Styles};
use crate::tui::widgets::{avatar, card, stat_line, HorizontalBar, PercentageRing};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

pub fn render_voice(frame: &mut Frame, area: Rect, page: &VoicePage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(7)])
        .split(area);

    let upper = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);
    render_call(frame, upper[0], page);
    render_caller(frame, upper[1], page);

    let lower = columns(chunks[1], 2);
    render_stats(frame, lower[0], page);
    render_performance(frame, lower[1], page);
}

fn phase_badge(phase: CallPhase) -> Span<'static> {
    let scheme = colors();
    match phase {
        CallPhase::Active => badge("● LIVE", scheme.error),
        CallPhase::TranscriptComplete => badge("WRAPPING UP", scheme.warning),
        CallPhase::Completed => badge("ENDED", scheme.muted),
    }
}

fn transcript_line(entry: &TranscriptEntry) -> Line<'static> {
    let scheme = colors();
    let color = match entry.speaker {
        Speaker::Ai => scheme.ai_bubble,
        Speaker::Customer => scheme.customer_bubble,
    };
    Line::from(vec![
        Span::styled(format!("{} ", entry.timestamp), Styles::label()),
        Span::styled(format!("{}: ", entry.speaker), Style::default().fg(color).bold()),
        Span::styled(entry.text.clone(), Styles::text()),
    ])
}

fn render_call(frame: &mut Frame, area: Rect, page: &VoicePage) {
    let call = &page.call;
    let title = Line::from(vec![
        Span::styled(" Live Call ", Styles::section_title()),
        phase_badge(call.phase()),
        Span::styled(format!(" {} ", call.elapsed_label()), Styles::value()),
    ]);
    let block = card("", call.is_active()).title(title);

    let mut lines = Vec::new();
    for entry in call.visible_lines() {
        lines.push(transcript_line(entry));
        lines.push(Line::from(""));
    }
    if call.phase() == CallPhase::Active {
        lines.push(Line::styled("…", Styles::text_muted()));
    }
    if call.phase() == CallPhase::Completed {
        let scheme = colors();
        let booking = call.booking();
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(scheme.success).bold()),
            Span::styled(booking.title.clone(), Style::default().fg(scheme.success).bold()),
        ]));
        lines.push(Line::styled(booking.description(), Styles::text_muted()));
        lines.push(Line::from(vec![
            Span::styled("[r]", Styles::shortcut_key()),
            Span::styled(" Restart call", Styles::shortcut_desc()),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_caller(frame: &mut Frame, area: Rect, page: &VoicePage) {
    let scheme = colors();
    let caller = &page.caller;
    let block = card("Caller Profile", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(inner);

    let identity = vec![
        Line::from(vec![
            avatar(&caller.name, scheme.secondary),
            Span::raw(" "),
            Span::styled(caller.name.clone(), Styles::value()),
        ]),
        Line::styled(format!("{} · {}", caller.phone, caller.city), Styles::text_muted()),
    ];
    frame.render_widget(Paragraph::new(identity), chunks[0]);

    let gauges = columns(chunks[1], 2);
    frame.render_widget(
        PercentageRing::new(f64::from(caller.lead_score), "Lead Score")
            .color(scheme.score_color(caller.lead_score)),
        gauges[0],
    );
    frame.render_widget(
        PercentageRing::new(f64::from(caller.budget_match), "Budget Match")
            .color(scheme.score_color(caller.budget_match)),
        gauges[1],
    );

    let mut lines = vec![
        stat_line("Intent", &caller.intent, chunks[2].width),
        stat_line("Timeline", &caller.timeline, chunks[2].width),
        Line::from(""),
        Line::styled("AI Insights", Styles::section_title()),
    ];
    lines.extend(
        caller
            .insights
            .iter()
            .map(|i| Line::from(vec![Span::styled("• ", Styles::label()), Span::raw(i.clone())])),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[2]);
}

fn render_stats(frame: &mut Frame, area: Rect, page: &VoicePage) {
    let block = card("Call Stats", false);
    let width = block.inner(area).width;
    let lines: Vec<Line> = page
        .stats
        .iter()
        .map(|stat| stat_line(&stat.label, &stat.value, width))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_performance(frame: &mut Frame, area: Rect, page: &VoicePage) {
    let block = card("AI Performance", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, stat) in page.performance.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        frame.render_widget(
            HorizontalBar::new(stat.label.clone(), f64::from(stat.percent))
                .value_label(stat.value.clone())
                .label_width(18)
                .color(colors().score_color(stat.percent)),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }
}
