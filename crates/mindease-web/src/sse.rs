//! Server-Sent Events (SSE) streaming for the live dashboard widgets.

use axum::response::sse::{Event, KeepAlive, Sse};
use axum::extract::State;
use futures_core::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::state::{AppEvent, SharedState};

/// SSE endpoint — clients subscribe here for real-time updates.
pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();
    let stream = BroadcastStream::new(rx)
        .filter_map(|result| {
            // Lagged receivers just skip the missed events.
            result.ok().and_then(|event| {
                serde_json::to_string(&event).ok().map(|data| {
                    Ok(Event::default().data(data))
                })
            })
        });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

/// Publish a fresh sensor reading every `state.sensor_interval` while at
/// least one client is subscribed.
pub fn spawn_sensor_ticker(state: SharedState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(state.sensor_interval);
        loop {
            ticker.tick().await;
            if state.event_tx.receiver_count() == 0 {
                continue;
            }
            let reading = state.sensors.latest();
            tracing::debug!(hr = reading.heart_rate, spo2 = reading.blood_oxygen, "Publishing sensor reading");
            state.publish(AppEvent::SensorReading { reading });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_ticker_publishes_readings() {
        let mut state = AppState::default();
        state.sensor_interval = Duration::from_millis(10);
        let state = Arc::new(state);
        let mut rx = state.subscribe();

        let handle = spawn_sensor_ticker(state.clone());
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("ticker should publish")
            .unwrap();
        handle.abort();

        match event {
            AppEvent::SensorReading { reading } => assert!((68..80).contains(&reading.heart_rate)),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_value(AppEvent::ContactReceived { id: uuid::Uuid::nil() }).unwrap();
        assert_eq!(json["type"], "contact_received");
    }
}
