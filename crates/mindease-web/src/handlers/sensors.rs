//! Sensor endpoints: latest jittered reading and heart-rate history.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use mindease_common::{error::ApiError, HeartRatePoint, SensorReading};
use serde::{Deserialize, Serialize};
use crate::state::SharedState;

/// One day of five-minute samples.
pub const MAX_HISTORY_POINTS: usize = 288;

#[derive(Debug, Serialize)]
pub struct LatestReading {
    pub data: SensorReading,
    pub status: &'static str,
}

#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub points: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub data: Vec<HeartRatePoint>,
    pub count: usize,
}

/// GET /api/sensors/latest
pub async fn api_sensors_latest(State(state): State<SharedState>) -> Json<LatestReading> {
    Json(LatestReading { data: state.sensors.latest(), status: "ok" })
}

/// GET /api/sensors/history?points=
pub async fn api_sensors_history(
    State(state): State<SharedState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let points = query.points.unwrap_or(state.history_points).clamp(1, MAX_HISTORY_POINTS);
    let data = state.sensors.heart_rate_history(points);
    Ok(Json(HistoryResponse { count: data.len(), data }))
}
