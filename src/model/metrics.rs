//! KPI cards, chart series, dealers and lead buckets.

use serde::{Deserialize, Serialize};

/// Direction of a KPI change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Neutral => "•",
        }
    }
}

/// Headline metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

impl KpiCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>, trend: Trend) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            trend,
            subtext: None,
        }
    }

    #[must_use]
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }
}

/// Single labelled value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Label with one value per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub label: String,
    pub values: Vec<f64>,
}

impl SeriesRow {
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            values: values.into(),
        }
    }

    /// Value of series `index`, zero when missing.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }
}

/// A chart with named series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesChart {
    pub title: String,
    pub series: Vec<String>,
    pub rows: Vec<SeriesRow>,
}

/// Dealership receiving routed leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub rating: f64,
    /// Performance score in percent
    pub performance: u8,
    pub leads_assigned: u32,
    pub conversions: u32,
}

impl Dealer {
    /// Conversions per assigned lead, rounded percent; zero without leads.
    #[must_use]
    pub fn conversion_rate(&self) -> u32 {
        if self.leads_assigned == 0 {
            return 0;
        }
        (f64::from(self.conversions) / f64::from(self.leads_assigned) * 100.0).round() as u32
    }
}

/// Lead temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadTier {
    Hot,
    Warm,
    Cold,
}

impl std::fmt::Display for LeadTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hot => write!(f, "Hot"),
            Self::Warm => write!(f, "Warm"),
            Self::Cold => write!(f, "Cold"),
        }
    }
}

/// Number of leads in one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadBucket {
    pub tier: LeadTier,
    pub value: u32,
}

/// Small labelled figure used in stat strips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Figure drawn with a progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStat {
    pub label: String,
    pub value: String,
    /// Bar fill in percent
    pub percent: u8,
}

impl ProgressStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>, percent: u8) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            percent: percent.min(100),
        }
    }
}
