//! Sample data used across test suites.

use chrono::{DateTime, Utc};
use mindease_common::TriggerRule;

/// Parse an RFC 3339 timestamp, panicking on bad input.
pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap_or_else(|e| panic!("bad fixture timestamp {s}: {e}"))
        .with_timezone(&Utc)
}

/// A small rule table with a known default.
pub fn sample_rules() -> Vec<TriggerRule> {
    vec![
        TriggerRule::new("anxious", "I hear you..."),
        TriggerRule::new("sad", "I'm sorry you're feeling sad."),
        TriggerRule::new("default", "Tell me more."),
    ]
}
