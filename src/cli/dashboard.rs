//! Dashboard command handler.

use crate::config::AppConfig;
use crate::providers::{DataSource, DemoData};
use crate::tui::{run_tui, App};
use anyhow::{bail, Context, Result};
use std::io::IsTerminal;
use std::sync::Arc;

/// Open the interactive dashboard on the demo data set.
///
/// `theme` is an explicit `--theme` flag and wins over the saved preference.
pub fn run_dashboard(config: AppConfig, theme: Option<&str>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the dashboard needs an interactive terminal; try `lifebot fixtures` for plain output");
    }

    let data: Arc<dyn DataSource> = Arc::new(DemoData::new());
    tracing::debug!(source = data.name(), tab = %config.tui.initial_tab, "opening dashboard");

    let mut app = App::new(data, config);
    run_tui(&mut app, theme).context("terminal dashboard failed")?;
    Ok(())
}
