//! Trait for emotion detection results.

use chrono::Utc;
use mindease_common::{EmotionCount, EmotionResult};

pub trait EmotionSource: Send + Sync {
    /// The currently detected emotion.
    fn current(&self) -> EmotionResult;

    /// Weekly breakdown of detected emotions, for the dashboard pie chart.
    fn distribution(&self) -> Vec<EmotionCount>;
}

// ── Mock Implementation ────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockEmotionSource;

impl EmotionSource for MockEmotionSource {
    fn current(&self) -> EmotionResult {
        EmotionResult {
            emotion: "calm".to_string(),
            score: 0.72,
            sources: vec!["camera (placeholder)".to_string(), "sensors (mock)".to_string()],
            timestamp: Utc::now(),
        }
    }

    fn distribution(&self) -> Vec<EmotionCount> {
        [
            ("Happy", 12, "#10b981"),
            ("Calm", 18, "#3b82f6"),
            ("Neutral", 15, "#6b7280"),
            ("Sad", 8, "#f59e0b"),
            ("Anxious", 5, "#ef4444"),
        ]
        .into_iter()
        .map(|(emotion, count, color)| EmotionCount {
            emotion: emotion.to_string(),
            count,
            color: color.to_string(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_calm() {
        let result = MockEmotionSource.current();
        assert_eq!(result.emotion, "calm");
        assert!((result.score - 0.72).abs() < 1e-9);
        assert_eq!(result.sources.len(), 2);
    }

    #[test]
    fn test_distribution_totals() {
        let dist = MockEmotionSource.distribution();
        assert_eq!(dist.len(), 5);
        assert_eq!(dist.iter().map(|d| d.count).sum::<u32>(), 58);
        assert!(dist.iter().all(|d| d.color.starts_with('#')));
    }
}
