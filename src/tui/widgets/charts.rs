//! Bar, sparkline and ring widgets for metrics display.

use crate::tui::theme::colors;
use crate::tui::widgets::truncate_str;
use ratatui::{prelude::*, widgets::Widget};
use unicode_width::UnicodeWidthStr;

/// One-line labelled progress bar: `label ████░░░░ value`.
pub struct HorizontalBar {
    label: String,
    /// Fill ratio in percent
    percent: f64,
    value_label: String,
    label_width: usize,
    color: Color,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, percent: f64) -> Self {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            label: label.into(),
            percent,
            value_label: format!("{percent:.0}%"),
            label_width: 12,
            color: colors().primary,
        }
    }

    /// Bar filled to `value / max`.
    pub fn ratio(label: impl Into<String>, value: f64, max: f64) -> Self {
        let percent = if max > 0.0 { value / max * 100.0 } else { 0.0 };
        Self::new(label, percent)
    }

    pub fn value_label(mut self, text: impl Into<String>) -> Self {
        self.value_label = text.into();
        self
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let width = area.width as usize;
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label_width.min(width / 3)
        };
        let value_width = self.value_label.width().min(width / 4);
        let bar_width = width.saturating_sub(label_width + value_width + 2);

        let mut x = area.x;
        if label_width > 0 {
            let label = truncate_str(&self.label, label_width);
            buf.set_stringn(x, area.y, &label, label_width, Style::default().fg(colors().text));
            x += label_width as u16 + 1;
        }

        let filled = ((self.percent / 100.0) * bar_width as f64).round() as usize;
        let bar: String = (0..bar_width)
            .map(|i| if i < filled { '█' } else { '░' })
            .collect();
        let split = bar
            .char_indices()
            .nth(filled.min(bar_width))
            .map_or(bar.len(), |(i, _)| i);
        buf.set_string(x, area.y, &bar[..split], Style::default().fg(self.color));
        buf.set_string(
            x + filled.min(bar_width) as u16,
            area.y,
            &bar[split..],
            Style::default().fg(colors().muted),
        );
        x += bar_width as u16 + 1;

        buf.set_stringn(
            x,
            area.y,
            &self.value_label,
            value_width,
            Style::default().fg(self.color).bold(),
        );
    }
}

/// A mini sparkline for showing trends.
pub struct MiniSparkline {
    values: Vec<f64>,
    color: Color,
}

impl MiniSparkline {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for MiniSparkline {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 1 || self.values.is_empty() {
            return;
        }

        let width = area.width as usize;
        let min_val = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val = self
            .values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let range = (max_val - min_val).max(1.0);

        const CHARS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        let step = self.values.len() as f64 / width as f64;
        let y = area.y + area.height - 1;

        for x in 0..width {
            let idx = (x as f64 * step) as usize;
            let Some(val) = self.values.get(idx) else {
                break;
            };
            let normalized = (val - min_val) / range;
            let char_idx =
                ((normalized * (CHARS.len() - 1) as f64) as usize).min(CHARS.len() - 1);
            if let Some(cell) = buf.cell_mut((area.x + x as u16, y)) {
                cell.set_char(CHARS[char_idx])
                    .set_style(Style::default().fg(self.color));
            }
        }
    }
}

/// Big percentage with a short bar above and a caption below.
pub struct PercentageRing {
    percentage: f64,
    label: String,
    color: Color,
}

impl PercentageRing {
    pub fn new(percentage: f64, label: impl Into<String>) -> Self {
        Self {
            percentage: percentage.clamp(0.0, 100.0),
            label: label.into(),
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for PercentageRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 3 {
            return;
        }

        let center_y = area.y + area.height / 2;
        let centered = |text: &str| {
            area.x + (area.width.saturating_sub(text.width() as u16)) / 2
        };

        let pct = format!("{:.0}%", self.percentage);
        buf.set_string(
            centered(&pct),
            center_y,
            &pct,
            Style::default().fg(self.color).bold(),
        );

        if center_y + 1 < area.y + area.height {
            let label = truncate_str(&self.label, area.width as usize);
            buf.set_string(
                centered(&label),
                center_y + 1,
                &label,
                Style::default().fg(colors().text_muted),
            );
        }

        let bar_width = area.width.saturating_sub(4) as usize;
        let filled = (self.percentage / 100.0 * bar_width as f64) as usize;
        for i in 0..bar_width {
            let (ch, color) = if i < filled {
                ('█', self.color)
            } else {
                ('░', colors().muted)
            };
            if let Some(cell) = buf.cell_mut((area.x + 2 + i as u16, center_y - 1)) {
                cell.set_char(ch).set_style(Style::default().fg(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_horizontal_bar_fill() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("", 50.0)
            .value_label("50%")
            .render(area, &mut buf);
        let text = row(&buf, 0);
        let full = text.chars().filter(|c| *c == '█').count();
        let empty = text.chars().filter(|c| *c == '░').count();
        assert_eq!(full + empty, 25);
        assert_eq!(full, 13);
        assert!(text.contains("50%"));
    }

    #[test]
    fn test_horizontal_bar_ignores_non_finite() {
        let bar = HorizontalBar::ratio("x", 1.0, 0.0);
        assert!(bar.percent.abs() < f64::EPSILON);
        let bar = HorizontalBar::new("x", f64::NAN);
        assert!(bar.percent.abs() < f64::EPSILON);
    }

    #[test]
    fn test_sparkline_peaks_at_max() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(vec![1.0, 2.0, 3.0, 10.0]).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "▁▁▂█");
    }

    #[test]
    fn test_ring_prints_percentage() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        PercentageRing::new(92.0, "Score").render(area, &mut buf);
        assert!(row(&buf, 1).contains("92%"));
        assert!(row(&buf, 2).contains("Score"));
    }
}
