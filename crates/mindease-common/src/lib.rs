//! mindease-common — Shared types and errors used across all MindEase crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{
    ChatContext, ChatMessage, EmotionCount, EmotionResult, FeedbackEntry, HeartRatePoint,
    MoodEntry, NewFeedback, SensorReading, TriggerRule,
};
pub use error::{ApiError, MindEaseError, Result};
