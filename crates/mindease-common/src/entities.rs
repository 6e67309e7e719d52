//! Core entity types shared by the mock providers and the web layer.
//! Field names on the wire follow the JSON contract the front end consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// One line of the chat transcript. Lives only for a single render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }
}

/// Optional context sent alongside a chat message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatContext {
    pub emotion: Option<String>,
}

/// Keyword-to-canned-response mapping. A trigger of `"default"` marks the fallback rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerRule {
    pub trigger: String,
    pub response: String,
}

impl TriggerRule {
    pub fn new(trigger: impl Into<String>, response: impl Into<String>) -> Self {
        Self { trigger: trigger.into(), response: response.into() }
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    pub mood_score: u8,   // 1..=10
    pub emotion: String,
}

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "hr")]
    pub heart_rate: u32,
    #[serde(rename = "spO2")]
    pub blood_oxygen: u32,
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv: Option<u32>,
}

/// A single point on the heart-rate history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRatePoint {
    pub time: String,  // HH:MM
    pub value: u32,
}

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: String,
    pub score: f64,
    pub sources: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Slice of the emotion distribution pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: u32,
    pub color: String,
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Validated feedback submission, before the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    /// Any non-zero number; the form offers 1-5 but the API does not enforce it.
    pub rating: Number,
    pub feedback: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub rating: Number,
    pub feedback: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackEntry {
    pub const DEFAULT_CATEGORY: &'static str = "general";

    pub fn from_submission(new: NewFeedback) -> Self {
        Self {
            id: Uuid::new_v4(),
            rating: new.rating,
            feedback: new.feedback,
            category: new
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_CATEGORY.to_string()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_reading_wire_names() {
        let reading = SensorReading {
            timestamp: Utc::now(),
            heart_rate: 72,
            blood_oxygen: 98,
            device_id: "dev-1".to_string(),
            temperature: None,
            hrv: Some(45),
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["hr"], 72);
        assert_eq!(json["spO2"], 98);
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_mood_entry_uses_ts_key() {
        let entry: MoodEntry = serde_json::from_str(
            r#"{"ts":"2024-01-15T09:00:00Z","mood_score":7,"emotion":"calm"}"#,
        ).unwrap();
        assert_eq!(entry.mood_score, 7);
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-01-15T09:00:00+00:00");
    }

    #[test]
    fn test_feedback_category_defaults_to_general() {
        let entry = FeedbackEntry::from_submission(NewFeedback {
            rating: Number::from(4u8),
            feedback: "nice".to_string(),
            category: Some("  ".to_string()),
        });
        assert_eq!(entry.category, "general");
    }

    #[test]
    fn test_chat_message_constructors() {
        assert!(ChatMessage::user("hi").is_user);
        assert!(!ChatMessage::bot("hello").is_user);
    }
}
