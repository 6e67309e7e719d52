//! mindease-mock — placeholder data sources for the MindEase front end.
//!
//! Every provider sits behind a trait so a real sensor, ML, or LLM backend
//! can be swapped in without touching the handlers that consume it.

pub mod responder;
pub mod mood;
pub mod sensors;
pub mod emotion;

pub use responder::{ChatReply, TriggerResponder};
pub use mood::{MoodSource, StaticMoodSource};
pub use sensors::{MockSensorSource, SensorSource};
pub use emotion::{EmotionSource, MockEmotionSource};
