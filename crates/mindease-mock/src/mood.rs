//! Trait for mood history data access.

use chrono::{DateTime, TimeZone, Utc};
use mindease_common::MoodEntry;

/// Source of mood history entries, ordered oldest first.
pub trait MoodSource: Send + Sync {
    fn entries(&self) -> Vec<MoodEntry>;

    /// Entries whose timestamp lies in `[start, end]`. Either bound may be open.
    fn between(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Vec<MoodEntry> {
        self.entries()
            .into_iter()
            .filter(|e| start.map_or(true, |s| e.timestamp >= s))
            .filter(|e| end.map_or(true, |end| e.timestamp <= end))
            .collect()
    }
}

// ── Static sample data ─────────────────────────────────────────────────────

pub struct StaticMoodSource {
    entries: Vec<MoodEntry>,
}

impl StaticMoodSource {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    /// One week of sample entries, one per day at 09:00 UTC.
    pub fn sample() -> Self {
        const SAMPLES: [(u32, u8, &str); 7] = [
            (15, 6, "neutral"),
            (16, 7, "calm"),
            (17, 5, "anxious"),
            (18, 4, "sad"),
            (19, 6, "neutral"),
            (20, 8, "happy"),
            (21, 7, "calm"),
        ];

        let entries = SAMPLES
            .iter()
            .filter_map(|&(day, mood_score, emotion)| {
                Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0)
                    .single()
                    .map(|timestamp| MoodEntry { timestamp, mood_score, emotion: emotion.to_string() })
            })
            .collect();
        Self { entries }
    }
}

impl Default for StaticMoodSource {
    fn default() -> Self {
        Self::sample()
    }
}

impl MoodSource for StaticMoodSource {
    fn entries(&self) -> Vec<MoodEntry> {
        self.entries.clone()
    }
}
