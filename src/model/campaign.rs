//! Audience segments, next-best-action targets, creatives and experiments.

use super::{ChartPoint, SeriesRow};
use serde::{Deserialize, Serialize};

/// A behavioural micro-segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: u32,
    pub name: String,
    pub count: u32,
    /// Conversion probability in percent (0-100)
    pub probability: u8,
    pub icon: String,
    pub insights: Vec<String>,
}

impl Segment {
    /// Expected conversions if the whole segment is targeted.
    #[must_use]
    pub fn estimated_conversions(&self) -> u32 {
        (f64::from(self.count) * f64::from(self.probability) / 100.0).round() as u32
    }

    /// Campaign cost in rupees at 3.5 per user.
    #[must_use]
    pub fn campaign_cost(&self) -> f64 {
        f64::from(self.count) * 3.5
    }
}

/// Aggregate figures shown above the segment cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    pub segments: usize,
    pub total_users: u64,
    pub average_probability: u8,
}

impl SegmentSummary {
    /// Sum the counts and take the rounded mean probability.
    #[must_use]
    pub fn from_segments(segments: &[Segment]) -> Self {
        let total_users = segments.iter().map(|s| u64::from(s.count)).sum();
        let average_probability = if segments.is_empty() {
            0
        } else {
            let sum: f64 = segments.iter().map(|s| f64::from(s.probability)).sum();
            (sum / segments.len() as f64).round() as u8
        };
        Self {
            segments: segments.len(),
            total_users,
            average_probability,
        }
    }
}

/// Delivery channel for a next-best action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    WhatsApp,
    Email,
    #[serde(rename = "SMS")]
    Sms,
    Phone,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WhatsApp => write!(f, "WhatsApp"),
            Self::Email => write!(f, "Email"),
            Self::Sms => write!(f, "SMS"),
            Self::Phone => write!(f, "Phone"),
        }
    }
}

/// Customer targeted by a recommended action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub car: String,
    pub probability: u8,
    pub channel: Channel,
    pub message: String,
    pub send_time: String,
}

impl Customer {
    /// First letter of each word of the name, e.g. `RK` for "Rajesh Kumar".
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Initials of a display name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// A generated ad creative for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    pub id: u32,
    pub language: String,
    pub headline: String,
    pub body: String,
    pub cta: String,
    /// Predicted click-through rate in percent
    pub predicted_ctr: f64,
    pub segment: String,
}

/// Choices offered by the creative generator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub cars: Vec<String>,
    pub languages: Vec<String>,
    pub segments: Vec<String>,
}

/// Lifecycle of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    Running,
    Paused,
    Completed,
}

impl std::fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// One arm of an A/B test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Engagement in percent
    pub engagement: u8,
    pub cpl: u32,
    pub conversions: u32,
    /// Statistical confidence in percent
    pub confidence: u8,
}

/// An autonomous A/B test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub name: String,
    pub status: ExperimentStatus,
    pub variants: Vec<Variant>,
    /// Traffic split per variant, in percent
    pub traffic: Vec<ChartPoint>,
    /// Side-by-side metrics, one value per variant
    pub performance: Vec<SeriesRow>,
    pub note: String,
}

impl Experiment {
    /// Variant with the highest confidence. Ties keep the first listed.
    #[must_use]
    pub fn winner(&self) -> Option<&Variant> {
        self.variants.iter().reduce(|best, v| {
            if v.confidence > best.confidence {
                v
            } else {
                best
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: &str, confidence: u8) -> Variant {
        Variant {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            engagement: 0,
            cpl: 0,
            conversions: 0,
            confidence,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Rajesh Kumar"), "RK");
        assert_eq!(initials("  Sneha   Reddy "), "SR");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_segment_estimates() {
        let segment = Segment {
            id: 1,
            name: "Test".to_string(),
            count: 2847,
            probability: 78,
            icon: String::new(),
            insights: Vec::new(),
        };
        assert_eq!(segment.estimated_conversions(), 2221);
        assert!((segment.campaign_cost() - 9964.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_segment_summary() {
        let seg = |count, probability| Segment {
            id: 0,
            name: String::new(),
            count,
            probability,
            icon: String::new(),
            insights: Vec::new(),
        };
        let summary = SegmentSummary::from_segments(&[seg(10, 50), seg(20, 55)]);
        assert_eq!(summary.total_users, 30);
        // 52.5 rounds half away from zero
        assert_eq!(summary.average_probability, 53);
        assert_eq!(SegmentSummary::from_segments(&[]).average_probability, 0);
    }

    #[test]
    fn test_winner_is_highest_confidence() {
        let experiment = Experiment {
            name: "test".to_string(),
            status: ExperimentStatus::Running,
            variants: vec![variant("A", 45), variant("B", 89), variant("C", 89)],
            traffic: Vec::new(),
            performance: Vec::new(),
            note: String::new(),
        };
        assert_eq!(experiment.winner().map(|v| v.id.as_str()), Some("B"));
    }
}
