//! Fixtures command handler.
//!
//! Dumps what each dashboard page would display, for scripting and for
//! inspecting a data source without a terminal.

use crate::model::SegmentSummary;
use crate::output::{headless_format, write_output, OutputFormat, OutputTarget};
use crate::providers::DataSource;
use crate::tui::TabKind;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::fmt::Write as _;
use std::path::PathBuf;

/// `fixtures` command configuration
#[derive(Debug, Clone, Default)]
pub struct FixturesCommand {
    /// Restrict the dump to one page
    pub tab: Option<TabKind>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run_fixtures(cmd: FixturesCommand, data: &dyn DataSource) -> Result<()> {
    let tabs: Vec<TabKind> = cmd.tab.map_or_else(|| TabKind::ALL.to_vec(), |t| vec![t]);
    let text = match headless_format(cmd.format) {
        OutputFormat::Json => {
            let text = if let [tab] = tabs.as_slice() {
                serde_json::to_string_pretty(&fixtures_json(*tab, data))
            } else {
                // Keyed by tab id, in sidebar order.
                let pages: IndexMap<&str, Value> = tabs
                    .iter()
                    .map(|tab| (tab.id(), fixtures_json(*tab, data)))
                    .collect();
                serde_json::to_string_pretty(&pages)
            };
            text.context("failed to serialize fixtures")?
        }
        _ => tabs
            .iter()
            .map(|tab| fixtures_summary(*tab, data))
            .collect::<Result<Vec<_>>>()?
            .join("\n"),
    };
    write_output(&text, &OutputTarget::from_option(cmd.output_file), cmd.quiet)
}

/// Everything one page reads, as JSON.
pub fn fixtures_json(tab: TabKind, data: &dyn DataSource) -> Value {
    match tab {
        TabKind::Dashboard => json!({
            "header_status": data.header_status(),
            "kpis": data.dashboard_kpis(),
            "weekly_performance": data.weekly_performance(),
            "processing_speed": data.processing_speed(),
            "activity": data.activity_lines(),
        }),
        TabKind::Segments => {
            let segments = data.segments();
            json!({
                "summary": SegmentSummary::from_segments(&segments),
                "segments": segments,
            })
        }
        TabKind::Actions => json!({ "customers": data.customers() }),
        TabKind::Creative => json!({
            "creatives": data.creatives(),
            "generator_options": data.generator_options(),
        }),
        TabKind::Testing => {
            let experiment = data.experiment();
            json!({
                "winner": experiment.winner().map(|v| v.id.clone()),
                "experiment": experiment,
            })
        }
        TabKind::Voice => json!({
            "call_script": data.call_script(),
            "call_stats": data.call_stats(),
            "call_performance": data.call_performance(),
        }),
        TabKind::Leads => json!({
            "dealers": data.dealers(),
            "lead_distribution": data.lead_distribution(),
            "dealer_performance": data.dealer_performance(),
        }),
        TabKind::Analytics => json!({
            "kpis": data.roi_kpis(),
            "comparison": data.roi_comparison(),
            "trend": data.roi_trend(),
        }),
    }
}

/// Short human-readable digest of one page's data.
pub fn fixtures_summary(tab: TabKind, data: &dyn DataSource) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "== {} ==", tab.heading())?;
    match tab {
        TabKind::Dashboard => {
            for kpi in data.dashboard_kpis() {
                writeln!(out, "  {:<28} {} {}", kpi.title, kpi.value, kpi.trend.arrow())?;
            }
            writeln!(out, "  {} activity lines", data.activity_lines().len())?;
        }
        TabKind::Segments => {
            let segments = data.segments();
            let summary = SegmentSummary::from_segments(&segments);
            for s in &segments {
                writeln!(out, "  {:<28} {:>6} users  {:>3}%", s.name, s.count, s.probability)?;
            }
            writeln!(
                out,
                "  {} segments, {} users, {}% average",
                summary.segments, summary.total_users, summary.average_probability
            )?;
        }
        TabKind::Actions => {
            for c in data.customers() {
                writeln!(
                    out,
                    "  {:<16} {:<8} {:>3}%  {}",
                    c.name, c.channel.to_string(), c.probability, c.send_time
                )?;
            }
        }
        TabKind::Creative => {
            for c in data.creatives() {
                writeln!(out, "  {:<10} {:.1}% CTR  {}", c.language, c.predicted_ctr, c.headline)?;
            }
        }
        TabKind::Testing => {
            let experiment = data.experiment();
            let winner = experiment.winner().map(|v| v.id.clone());
            for v in &experiment.variants {
                let mark = if winner.as_deref() == Some(v.id.as_str()) { " (winner)" } else { "" };
                writeln!(out, "  {} {:<24} {:>3}% confidence{mark}", v.id, v.name, v.confidence)?;
            }
        }
        TabKind::Voice => {
            let script = data.call_script();
            writeln!(
                out,
                "  {} from {}, lead score {}",
                script.caller.name, script.caller.city, script.caller.lead_score
            )?;
            writeln!(out, "  {} transcript lines", script.transcript.len())?;
        }
        TabKind::Leads => {
            for d in data.dealers() {
                writeln!(
                    out,
                    "  {:<24} {:>3} leads  {:>3}% conversion",
                    d.name,
                    d.leads_assigned,
                    d.conversion_rate()
                )?;
            }
        }
        TabKind::Analytics => {
            for kpi in data.roi_kpis() {
                writeln!(out, "  {:<28} {}", kpi.title, kpi.value)?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::DemoData;

    #[test]
    fn test_json_covers_every_tab() {
        let data = DemoData::new();
        for tab in TabKind::ALL {
            assert!(fixtures_json(tab, &data).is_object(), "{tab}");
        }
    }

    #[test]
    fn test_summary_covers_every_tab() {
        let data = DemoData::new();
        for tab in TabKind::ALL {
            let text = fixtures_summary(tab, &data).unwrap();
            assert!(!text.trim().is_empty(), "{tab}");
        }
    }

    #[test]
    fn test_all_tabs_keep_sidebar_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all.json");
        let cmd = FixturesCommand {
            format: OutputFormat::Json,
            output_file: Some(path.clone()),
            quiet: true,
            ..FixturesCommand::default()
        };
        run_fixtures(cmd, &DemoData::new()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let dashboard = text.find("\"dashboard\"").unwrap();
        let analytics = text.find("\"analytics\"").unwrap();
        assert!(dashboard < analytics);
    }

    #[test]
    fn test_testing_fixture_names_winner() {
        let value = fixtures_json(TabKind::Testing, &DemoData::new());
        assert_eq!(value["winner"], "B");
    }

    #[test]
    fn test_segments_summary_totals() {
        let text = fixtures_summary(TabKind::Segments, &DemoData::new()).unwrap();
        assert!(text.contains("4 segments, 8316 users, 57% average"));
    }

    #[test]
    fn test_writes_single_tab_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.json");
        let cmd = FixturesCommand {
            tab: Some(TabKind::Leads),
            format: OutputFormat::Json,
            output_file: Some(path.clone()),
            quiet: true,
        };
        run_fixtures(cmd, &DemoData::new()).unwrap();
        let value: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(value["dealers"].is_array());
    }
}
