//! Emotion detection placeholder endpoints.

use axum::{extract::State, Json};
use mindease_common::{EmotionCount, EmotionResult};
use serde::Serialize;
use crate::state::SharedState;

pub const MOCK_STATUS: &str = "mock";

#[derive(Debug, Serialize)]
pub struct EmotionResponse {
    #[serde(flatten)]
    pub result: EmotionResult,
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub data: Vec<EmotionCount>,
    pub count: usize,
}

/// GET /api/emotion
pub async fn api_emotion(State(state): State<SharedState>) -> Json<EmotionResponse> {
    Json(EmotionResponse {
        result: state.emotion.current(),
        status: MOCK_STATUS,
        message: "This is mock emotion data. Integrate facial recognition model here.",
    })
}

/// GET /api/emotion/distribution
pub async fn api_emotion_distribution(State(state): State<SharedState>) -> Json<DistributionResponse> {
    let data = state.emotion.distribution();
    Json(DistributionResponse { count: data.len(), data })
}
