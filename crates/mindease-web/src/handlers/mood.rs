//! Mood history endpoint with optional inclusive date range.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use mindease_common::{error::ApiError, MoodEntry};
use serde::{Deserialize, Serialize};
use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct MoodFilter {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub data: Vec<MoodEntry>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Parse a query bound. Accepts RFC 3339 or a bare `YYYY-MM-DD`
/// (midnight UTC). Empty strings count as absent.
pub fn parse_bound(raw: Option<&str>, name: &str) -> Result<Option<DateTime<Utc>>, ApiError> {
    let raw = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(r) => r,
        None => return Ok(None),
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| ApiError::bad_request(format!("Invalid {} date: {}", name, raw)))
}

/// GET /api/mood?start=&end=
pub async fn api_mood(
    State(state): State<SharedState>,
    Query(filter): Query<MoodFilter>,
) -> Result<Json<MoodResponse>, ApiError> {
    let start = parse_bound(filter.start.as_deref(), "start")?;
    let end = parse_bound(filter.end.as_deref(), "end")?;

    let data = state.mood.between(start, end);
    Ok(Json(MoodResponse { count: data.len(), data, timestamp: Utc::now() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_formats() {
        let rfc = parse_bound(Some("2024-01-16T09:00:00Z"), "start").unwrap().unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-01-16T09:00:00+00:00");

        let day = parse_bound(Some("2024-01-16"), "start").unwrap().unwrap();
        assert_eq!(day.to_rfc3339(), "2024-01-16T00:00:00+00:00");

        let offset = parse_bound(Some("2024-01-16T10:00:00+01:00"), "end").unwrap().unwrap();
        assert_eq!(offset.to_rfc3339(), "2024-01-16T09:00:00+00:00");
    }

    #[test]
    fn test_parse_bound_absent_and_invalid() {
        assert!(parse_bound(None, "start").unwrap().is_none());
        assert!(parse_bound(Some(""), "start").unwrap().is_none());
        assert!(parse_bound(Some("yesterday"), "start").is_err());
    }
}
