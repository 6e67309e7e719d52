//! Feedback submission and listing, backed by the injected `FeedbackStore`.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use mindease_common::{error::ApiError, FeedbackEntry, NewFeedback};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use crate::state::{AppEvent, SharedState};

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct FeedbackList {
    pub data: Vec<FeedbackEntry>,
    pub count: usize,
}

/// Validate a raw JSON body into a submission. The rating must be a
/// non-zero number; its range is left to the client.
pub fn parse_feedback(body: &Value) -> Result<NewFeedback, ApiError> {
    let rating = match body.get("rating") {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.clone()),
        _ => None,
    };
    let feedback = body
        .get("feedback")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (rating, feedback) = match (rating, feedback) {
        (Some(r), Some(f)) => (r, f),
        _ => return Err(ApiError::bad_request("Rating and feedback are required")),
    };

    Ok(NewFeedback {
        rating,
        feedback: feedback.to_string(),
        category: body.get("category").and_then(Value::as_str).map(str::to_string),
    })
}

/// POST /api/feedback
pub async fn api_submit_feedback(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let submission = parse_feedback(&body)?;

    let entry = state.feedback.insert(submission).await?;
    tracing::info!(id = %entry.id, rating = %entry.rating, category = %entry.category, "Feedback received");
    state.publish(AppEvent::FeedbackReceived {
        id: entry.id,
        rating: entry.rating,
        category: entry.category.clone(),
    });

    Ok(Json(FeedbackResponse {
        success: true,
        message: "Feedback received successfully".to_string(),
        id: entry.id,
    }))
}

/// GET /api/feedback
pub async fn api_list_feedback(
    State(state): State<SharedState>,
) -> Result<Json<FeedbackList>, ApiError> {
    let data = state.feedback.list().await?;
    Ok(Json(FeedbackList { count: data.len(), data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requires_rating_and_feedback() {
        assert!(parse_feedback(&json!({ "feedback": "great" })).is_err());
        assert!(parse_feedback(&json!({ "rating": 4 })).is_err());
        assert!(parse_feedback(&json!({ "rating": 0, "feedback": "meh" })).is_err());
        assert!(parse_feedback(&json!({ "rating": 4, "feedback": "   " })).is_err());
        assert!(parse_feedback(&json!({ "rating": "4", "feedback": "great" })).is_err());
    }

    #[test]
    fn test_any_non_zero_number_is_a_rating() {
        let ok = parse_feedback(&json!({ "rating": 5, "feedback": " great ", "category": "chat" })).unwrap();
        assert_eq!(ok.rating, serde_json::Number::from(5u8));
        assert_eq!(ok.feedback, "great");
        assert_eq!(ok.category.as_deref(), Some("chat"));

        assert!(parse_feedback(&json!({ "rating": 7, "feedback": "great" })).is_ok());
        let half = parse_feedback(&json!({ "rating": 4.5, "feedback": "great" })).unwrap();
        assert_eq!(half.rating.as_f64(), Some(4.5));
        assert!(parse_feedback(&json!({ "rating": 0.0, "feedback": "meh" })).is_err());
    }
}
