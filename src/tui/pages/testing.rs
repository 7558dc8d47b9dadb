use crate::model::Experiment;
use crate::providers::DataSource;
use crate::tui::traits::PageState;

/// Read-only view of the running experiment.
#[derive(Debug)]
pub struct TestingPage {
    pub experiment: Experiment,
}

impl TestingPage {
    pub fn mount(data: &dyn DataSource) -> Self {
        Self {
            experiment: data.experiment(),
        }
    }

    /// Id of the variant marked as winner.
    pub fn winner_id(&self) -> Option<&str> {
        self.experiment.winner().map(|v| v.id.as_str())
    }
}

impl PageState for TestingPage {}
