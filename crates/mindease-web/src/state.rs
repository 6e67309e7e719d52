//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use mindease_common::error::Result;
use mindease_common::SensorReading;
use mindease_config::Config;
use mindease_mock::{
    EmotionSource, MockEmotionSource, MockSensorSource, MoodSource, SensorSource,
    StaticMoodSource, TriggerResponder,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::store::{FeedbackStore, InMemoryFeedbackStore};

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// Fresh reading from the sensor source
    SensorReading { reading: SensorReading },
    /// A feedback entry was stored
    FeedbackReceived { id: Uuid, rating: Number, category: String },
    /// A contact form was submitted
    ContactReceived { id: Uuid },
}

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<TriggerResponder>,
    pub mood: Arc<dyn MoodSource>,
    pub sensors: Arc<dyn SensorSource>,
    pub emotion: Arc<dyn EmotionSource>,
    pub feedback: Arc<dyn FeedbackStore>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
    /// Default number of heart-rate history samples
    pub history_points: usize,
    /// How often the sensor ticker publishes a reading
    pub sensor_interval: Duration,
    /// Directory served under /static
    pub static_dir: String,
}

impl AppState {
    /// State backed entirely by mock providers and the built-in rule table.
    pub fn new(responder: TriggerResponder) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            responder: Arc::new(responder),
            mood: Arc::new(StaticMoodSource::sample()),
            sensors: Arc::new(MockSensorSource::default()),
            emotion: Arc::new(MockEmotionSource),
            feedback: Arc::new(InMemoryFeedbackStore::new()),
            event_tx,
            history_points: 20,
            sensor_interval: Duration::from_secs(3),
            static_dir: "static".to_string(),
        }
    }

    /// Build state from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let responder = match &config.chat.rules_path {
            Some(path) => {
                let responder = TriggerResponder::from_json_file(path)?;
                tracing::info!(path = %path.display(), rules = responder.len(), "Loaded chat trigger rules");
                responder
            }
            None => TriggerResponder::builtin(),
        };

        let mut state = Self::new(responder)
            .with_sensor_source(MockSensorSource::new(config.sensors.device_id.clone()));
        state.history_points = config.sensors.history_points.max(1);
        state.sensor_interval = Duration::from_secs(config.sensors.stream_interval_secs.max(1));
        state.static_dir = config.server.static_dir.clone();
        Ok(state)
    }

    pub fn with_feedback_store(mut self, store: impl FeedbackStore + 'static) -> Self {
        self.feedback = Arc::new(store);
        self
    }

    pub fn with_sensor_source(mut self, source: impl SensorSource + 'static) -> Self {
        self.sensors = Arc::new(source);
        self
    }

    pub fn with_mood_source(mut self, source: impl MoodSource + 'static) -> Self {
        self.mood = Arc::new(source);
        self
    }

    pub fn with_emotion_source(mut self, source: impl EmotionSource + 'static) -> Self {
        self.emotion = Arc::new(source);
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    /// Publish to SSE subscribers. Having none connected is not an error.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TriggerResponder::builtin())
    }
}

pub type SharedState = Arc<AppState>;
