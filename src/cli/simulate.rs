//! Headless runs of the call simulation and the activity feed.
//!
//! Both drive the same engines as the dashboard, either in real time or,
//! with `--instant`, as fast as the clock can be advanced.

use crate::config::TimingConfig;
use crate::engine::{CallEvent, CallSimulation, FeedEvent, TypewriterSequencer};
use crate::model::TranscriptEntry;
use crate::notify::Notification;
use crate::output::{headless_format, OutputFormat};
use crate::providers::DataSource;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

const CALL_STEP: Duration = Duration::from_millis(100);
const FEED_STEP: Duration = Duration::from_millis(25);

/// `call` command configuration
#[derive(Debug, Clone)]
pub struct CallCommand {
    /// Playback speed multiplier
    pub speed: f64,
    pub instant: bool,
    pub format: OutputFormat,
}

impl Default for CallCommand {
    fn default() -> Self {
        Self {
            speed: 1.0,
            instant: false,
            format: OutputFormat::Summary,
        }
    }
}

#[derive(Serialize)]
struct CallReport<'a> {
    elapsed_seconds: u32,
    duration: String,
    transcript: &'a [TranscriptEntry],
    notification: Option<Notification>,
}

fn transcript_line(entry: &TranscriptEntry) -> String {
    format!("[{}] {}: {}", entry.timestamp, entry.speaker, entry.text)
}

/// Play the scripted call until it completes.
///
/// Summary output streams each line as it is revealed; JSON output prints
/// one report once the call has ended.
pub fn run_call(
    cmd: &CallCommand,
    data: &dyn DataSource,
    timing: &TimingConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let script = data.call_script();
    let mut call = CallSimulation::new(
        script.transcript,
        script.booking,
        timing.call().scaled(cmd.speed),
    );
    let streaming = headless_format(cmd.format) == OutputFormat::Summary;
    tracing::info!(lines = call.transcript().len(), speed = cmd.speed, "starting simulated call");

    if streaming {
        for entry in call.visible_lines() {
            writeln!(out, "{}", transcript_line(entry))?;
        }
    }

    let mut notification = None;
    while notification.is_none() {
        if !cmd.instant {
            std::thread::sleep(CALL_STEP);
        }
        for event in call.advance(CALL_STEP) {
            match event {
                CallEvent::LineRevealed(index) if streaming => {
                    if let Some(entry) = call.transcript().get(index) {
                        writeln!(out, "{}", transcript_line(entry))?;
                    }
                }
                CallEvent::Completed(n) => {
                    tracing::info!(title = %n.title, "call completed");
                    notification = Some(n);
                }
                _ => {}
            }
        }
    }

    if streaming {
        if let Some(n) = &notification {
            writeln!(out, "{} {} ({})", n.kind.symbol(), n.title, call.elapsed_label())?;
            writeln!(out, "  {}", n.description)?;
        }
    } else {
        let report = CallReport {
            elapsed_seconds: call.elapsed_seconds(),
            duration: call.elapsed_label(),
            transcript: call.visible_lines(),
            notification,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to serialize call")?;
        writeln!(out, "{json}")?;
    }
    call.unmount();
    Ok(())
}

/// `feed` command configuration
#[derive(Debug, Clone)]
pub struct FeedCommand {
    /// Full passes over the activity lines before stopping
    pub cycles: u64,
    pub speed: f64,
    pub instant: bool,
}

impl Default for FeedCommand {
    fn default() -> Self {
        Self {
            cycles: 1,
            speed: 1.0,
            instant: false,
        }
    }
}

/// Print each activity line once it is fully revealed.
pub fn run_feed(
    cmd: &FeedCommand,
    data: &dyn DataSource,
    timing: &TimingConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let mut feed = TypewriterSequencer::new(
        data.activity_lines(),
        timing.typewriter().scaled(cmd.speed),
    )
    .context("cannot start activity feed")?;
    let cycles = cmd.cycles.max(1);
    tracing::info!(lines = feed.lines().len(), cycles, "starting activity feed");

    while feed.cycles() < cycles {
        if !cmd.instant {
            std::thread::sleep(FEED_STEP);
        }
        for event in feed.advance(FEED_STEP) {
            if let FeedEvent::LineCompleted(index) = event {
                if let Some(line) = feed.line(index) {
                    writeln!(out, "› {line}")?;
                }
            }
        }
    }
    feed.unmount();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{ActivityProvider, DemoData, TranscriptProvider};

    #[test]
    fn test_instant_call_prints_transcript_and_booking() {
        let data = DemoData::new();
        let cmd = CallCommand {
            instant: true,
            ..CallCommand::default()
        };
        let mut out = Vec::new();
        run_call(&cmd, &data, &TimingConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let script = data.call_script();
        assert_eq!(text.lines().filter(|l| l.starts_with('[')).count(), script.transcript.len());
        assert_eq!(text.matches("Test Drive Booked Successfully!").count(), 1);
    }

    #[test]
    fn test_instant_call_json() {
        let data = DemoData::new();
        let cmd = CallCommand {
            instant: true,
            format: OutputFormat::Json,
            ..CallCommand::default()
        };
        let mut out = Vec::new();
        run_call(&cmd, &data, &TimingConfig::default(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["transcript"].as_array().unwrap().len(), 5);
        assert_eq!(value["notification"]["kind"], "success");
    }

    #[test]
    fn test_instant_feed_prints_every_line_once_per_cycle() {
        let data = DemoData::new();
        let cmd = FeedCommand {
            cycles: 2,
            instant: true,
            ..FeedCommand::default()
        };
        let mut out = Vec::new();
        run_feed(&cmd, &data, &TimingConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = data.activity_lines();
        assert_eq!(text.lines().count(), lines.len() * 2);
        assert_eq!(text.lines().next(), Some(format!("› {}", lines[0]).as_str()));
    }
}
