//! Voice call records: transcript, caller profile and session state.

use serde::{Deserialize, Serialize};

/// Who is talking in a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "ai")]
    Ai,
    #[serde(rename = "customer")]
    Customer,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ai => write!(f, "AI Agent"),
            Self::Customer => write!(f, "Customer"),
        }
    }
}

/// One turn of the simulated conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    /// Wall-clock label such as `10:23`
    pub timestamp: String,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Live state of a simulated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallSession {
    pub elapsed_seconds: u32,
    pub active: bool,
    pub current_transcript_index: usize,
}

/// Profile card shown next to the live call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerProfile {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub lead_score: u8,
    pub intent: String,
    /// Budget match in percent
    pub budget_match: u8,
    pub timeline: String,
    pub insights: Vec<String>,
}

/// What the call books once the conversation ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub title: String,
    pub slot: String,
    pub location: String,
}

impl BookingConfirmation {
    /// Text used for the completion toast body.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} at {}", self.slot, self.location)
    }
}

/// Everything needed to run one simulated call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallScript {
    pub caller: CallerProfile,
    pub transcript: Vec<TranscriptEntry>,
    pub booking: BookingConfirmation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_description() {
        let booking = BookingConfirmation {
            title: "Booked".to_string(),
            slot: "Saturday, 11:00 AM".to_string(),
            location: "JP Nagar Showroom".to_string(),
        };
        assert_eq!(booking.description(), "Saturday, 11:00 AM at JP Nagar Showroom");
    }

    #[test]
    fn test_speaker_serializes_lowercase() {
        let json = serde_json::to_string(&Speaker::Ai).unwrap();
        assert_eq!(json, "\"ai\"");
    }
}
