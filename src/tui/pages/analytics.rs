use crate::config::RoiConfig;
use crate::engine::{calculate, RoiConstants, RoiError, RoiInputs, RoiProjection};
use crate::model::{KpiCard, SeriesChart};
use crate::providers::DataSource;
use crate::tui::traits::{EventResult, PageContext, PageState};
use crossterm::event::{KeyCode, KeyEvent};

const MAX_INPUT_LEN: usize = 12;

/// Editable calculator inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoiField {
    Budget,
    Cpl,
    Conversion,
}

impl RoiField {
    pub const ALL: [Self; 3] = [Self::Budget, Self::Cpl, Self::Conversion];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "Monthly Budget (₹)",
            Self::Cpl => "Current Cost per Lead (₹)",
            Self::Conversion => "Current Conversion Rate (%)",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Budget => 0,
            Self::Cpl => 1,
            Self::Conversion => 2,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Budget => Self::Cpl,
            Self::Cpl => Self::Conversion,
            Self::Conversion => Self::Budget,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Budget => Self::Conversion,
            Self::Cpl => Self::Budget,
            Self::Conversion => Self::Cpl,
        }
    }
}

/// ROI calculator form plus the static impact charts.
#[derive(Debug)]
pub struct AnalyticsPage {
    pub kpis: Vec<KpiCard>,
    pub comparison: SeriesChart,
    pub trend: SeriesChart,
    constants: RoiConstants,
    defaults: RoiInputs,
    fields: [String; 3],
    focus: RoiField,
    result: Result<RoiProjection, RoiError>,
}

impl AnalyticsPage {
    pub fn mount(data: &dyn DataSource, roi: &RoiConfig) -> Self {
        let constants = roi.constants();
        let defaults = roi.default_inputs();
        let mut page = Self {
            kpis: data.roi_kpis(),
            comparison: data.roi_comparison(),
            trend: data.roi_trend(),
            constants,
            defaults,
            fields: Default::default(),
            focus: RoiField::Budget,
            result: calculate(&defaults, &constants),
        };
        page.reset();
        page
    }

    pub const fn focus(&self) -> RoiField {
        self.focus
    }

    pub fn field_text(&self, field: RoiField) -> &str {
        &self.fields[field.index()]
    }

    /// Latest projection, or why the inputs were rejected.
    pub const fn result(&self) -> &Result<RoiProjection, RoiError> {
        &self.result
    }

    /// Parsed form values; an empty field counts as zero.
    pub fn inputs(&self) -> RoiInputs {
        let parse = |field: RoiField| self.field_text(field).parse::<f64>().unwrap_or(0.0);
        RoiInputs {
            monthly_budget: parse(RoiField::Budget),
            current_cpl: parse(RoiField::Cpl),
            current_conversion: parse(RoiField::Conversion),
        }
    }

    /// Append a digit or a single decimal point to the focused field.
    pub fn push_char(&mut self, c: char) -> bool {
        let text = &mut self.fields[self.focus.index()];
        let accepted = text.len() < MAX_INPUT_LEN
            && (c.is_ascii_digit() || (c == '.' && !text.contains('.')));
        if accepted {
            text.push(c);
            self.recompute();
        }
        accepted
    }

    pub fn backspace(&mut self) {
        if self.fields[self.focus.index()].pop().is_some() {
            self.recompute();
        }
    }

    /// Restore the configured default inputs.
    pub fn reset(&mut self) {
        self.fields = [
            format_input(self.defaults.monthly_budget),
            format_input(self.defaults.current_cpl),
            format_input(self.defaults.current_conversion),
        ];
        self.focus = RoiField::Budget;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = calculate(&self.inputs(), &self.constants);
        if let Err(e) = &self.result {
            tracing::debug!("ROI inputs rejected: {e}");
        }
    }
}

fn format_input(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl PageState for AnalyticsPage {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut PageContext<'_>) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.focus = self.focus.next(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                self.push_char(c);
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::DemoData;

    fn page() -> AnalyticsPage {
        AnalyticsPage::mount(&DemoData::new(), &RoiConfig::default())
    }

    #[test]
    fn test_defaults_produce_reference_projection() {
        let page = page();
        assert_eq!(page.field_text(RoiField::Budget), "1000000");
        let projection = page.result().as_ref().expect("valid defaults");
        assert_eq!(projection.current_leads, 2857);
        assert_eq!(projection.new_leads, 4274);
        assert_eq!(projection.roi_improvement, 14242);
    }

    #[test]
    fn test_clearing_cpl_reports_invalid_input() {
        let mut page = page();
        page.focus = RoiField::Cpl;
        for _ in 0..3 {
            page.backspace();
        }
        assert_eq!(page.field_text(RoiField::Cpl), "");
        assert!(matches!(
            page.result(),
            Err(RoiError::InvalidInput {
                field: "current_cpl",
                ..
            })
        ));

        page.push_char('5');
        page.push_char('0');
        page.push_char('0');
        assert!(page.result().is_ok());
        assert!((page.inputs().current_cpl - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_only_one_decimal_point() {
        let mut page = page();
        page.focus = RoiField::Conversion;
        assert!(page.push_char('.'));
        assert!(!page.push_char('.'));
        assert!(!page.push_char('x'));
        assert_eq!(page.field_text(RoiField::Conversion), "8.");
    }

    #[test]
    fn test_focus_cycles_and_reset() {
        let mut page = page();
        page.focus = page.focus.prev();
        assert_eq!(page.focus(), RoiField::Conversion);
        page.push_char('9');
        page.reset();
        assert_eq!(page.field_text(RoiField::Conversion), "8");
        assert_eq!(page.focus(), RoiField::Budget);
    }
}
