//! Data sources behind the dashboard pages.
//!
//! Each page reads its fixtures through one of the traits below. The crate
//! ships a single implementation, [`DemoData`], holding the static
//! demonstration dataset; a live backend only has to implement the same
//! traits for the pages to render it unchanged.
//!
//! # Example
//!
//! ```
//! use lifebot::providers::{DataSource, DemoData, SegmentProvider};
//! use std::sync::Arc;
//!
//! let source: Arc<dyn DataSource> = Arc::new(DemoData::new());
//! assert_eq!(source.segments().len(), 4);
//! ```

mod demo;

pub use demo::DemoData;

use crate::model::{
    CallScript, ChartPoint, Creative, Customer, Dealer, Experiment, GeneratorOptions, KpiCard,
    LeadBucket, ProgressStat, Segment, SeriesChart, Stat,
};

/// Behavioural micro-segments.
pub trait SegmentProvider: Send + Sync {
    fn segments(&self) -> Vec<Segment>;
}

/// Customers with a recommended next action.
pub trait CustomerProvider: Send + Sync {
    fn customers(&self) -> Vec<Customer>;
}

/// Generated creatives and the generator form choices.
pub trait CreativeProvider: Send + Sync {
    fn creatives(&self) -> Vec<Creative>;

    fn generator_options(&self) -> GeneratorOptions;
}

/// The running A/B experiment.
pub trait ExperimentProvider: Send + Sync {
    fn experiment(&self) -> Experiment;
}

/// Dealers and the lead pipeline routed to them.
pub trait DealerProvider: Send + Sync {
    fn dealers(&self) -> Vec<Dealer>;

    /// Lead counts per temperature tier.
    fn lead_distribution(&self) -> Vec<LeadBucket>;

    /// Conversions and revenue per dealer.
    fn dealer_performance(&self) -> SeriesChart;
}

/// Lines cycled through by the agent activity feed.
pub trait ActivityProvider: Send + Sync {
    fn activity_lines(&self) -> Vec<String>;
}

/// Script for the simulated voice call.
pub trait TranscriptProvider: Send + Sync {
    fn call_script(&self) -> CallScript;
}

/// Headline numbers and chart series.
pub trait MetricsProvider: Send + Sync {
    /// Status strip shown in the header.
    fn header_status(&self) -> Vec<Stat>;

    fn dashboard_kpis(&self) -> Vec<KpiCard>;

    /// Campaign performance for the current week.
    fn weekly_performance(&self) -> Vec<ChartPoint>;

    fn processing_speed(&self) -> Stat;

    fn call_stats(&self) -> Vec<Stat>;

    fn call_performance(&self) -> Vec<ProgressStat>;

    fn roi_kpis(&self) -> Vec<KpiCard>;

    /// Before/after comparison of key metrics.
    fn roi_comparison(&self) -> SeriesChart;

    /// Monthly ROI and conversions.
    fn roi_trend(&self) -> SeriesChart;
}

/// Everything the dashboard reads, as one object.
pub trait DataSource:
    SegmentProvider
    + CustomerProvider
    + CreativeProvider
    + ExperimentProvider
    + DealerProvider
    + ActivityProvider
    + TranscriptProvider
    + MetricsProvider
{
    /// Short name for logs.
    fn name(&self) -> &'static str;
}
