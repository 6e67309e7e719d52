//! mindease-web — Web front end for MindEase
//! Serves:
//!   - Informational pages (about, features, privacy, safety, sensors, research)
//!   - Mock empathetic chat
//!   - Mock wellbeing dashboard with a live sensor widget
//!   - JSON endpoints backing all of the above

pub mod router;
pub mod handlers;
pub mod state;
pub mod store;
pub mod sse;
