//! Mock empathetic chat: page plus the trigger-match endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use mindease_common::{error::ApiError, ChatContext, ChatMessage};
use serde::Serialize;
use serde_json::Value;
use crate::handlers::layout::{escape_html, mock_notice, render_page};
use crate::state::SharedState;

pub const GREETING: &str = "Hello! I'm here to support you. How are you feeling today?";

/// Emotions offered by the developer panel on the chat page.
const SIMULATED_EMOTIONS: [&str; 6] = ["happy", "calm", "neutral", "sad", "anxious", "stressed"];

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub sentiment: String,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/chat
pub async fn api_chat(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::bad_request("Message is required and must be a string"))?;

    // A malformed context is ignored rather than rejected.
    let context: Option<ChatContext> = body
        .get("context")
        .cloned()
        .and_then(|c| serde_json::from_value(c).ok());

    let reply = state.responder.reply(message, context.as_ref());
    tracing::debug!(sentiment = %reply.sentiment, "Chat reply selected");

    Ok(Json(ChatResponse {
        response: reply.response,
        sentiment: reply.sentiment,
        timestamp: Utc::now(),
    }))
}

/// Render one transcript bubble.
pub fn message_bubble(msg: &ChatMessage) -> String {
    let side = if msg.is_user { "message-user" } else { "message-bot" };
    format!(r#"<div class="message {}" data-testid="message-{}">
        <p>{}</p>
        <span class="message-time">{}</span>
    </div>"#,
        side, msg.id, escape_html(&msg.text), msg.timestamp.format("%H:%M"))
}

pub async fn chat_page(State(_state): State<SharedState>) -> Html<String> {
    let transcript = message_bubble(&ChatMessage::bot(GREETING));

    let emotion_options: String = SIMULATED_EMOTIONS.iter().map(|e| {
        let selected = if *e == "neutral" { " selected" } else { "" };
        format!(r#"<option value="{}"{}>{}</option>"#, e, selected, e)
    }).collect();

    let body = format!(r#"
    <div class="page-header">
        <div>
            <h1 class="page-title">Empathetic Chat</h1>
            <p class="text-muted">Share your feelings in a safe, supportive environment</p>
        </div>
    </div>
    {}
    <div class="grid-2">
        <div class="card chat-window" data-testid="chat-window">
            <div id="transcript" class="transcript">{}</div>
            <form id="chat-form" class="d-flex gap-3">
                <input id="chat-input" class="form-control" placeholder="Type your message..." aria-label="Message input" autocomplete="off">
                <button type="submit" class="btn btn-primary" aria-label="Send message">Send</button>
            </form>
            <p id="chat-status" class="text-muted" role="status"></p>
        </div>
        <div class="d-flex flex-column gap-3">
            <div class="card">
                <div class="card-header">Developer Testing Panel</div>
                <label for="emotion-select">Simulate emotion</label>
                <select id="emotion-select" class="form-control">{}</select>
            </div>
            <div class="card alert-warning">
                <div class="card-header">Need Immediate Help?</div>
                <p>If you're in crisis, please reach out to a professional:</p>
                <a href="tel:988" class="btn btn-danger">Call 988 - Suicide &amp; Crisis Lifeline</a>
            </div>
        </div>
    </div>
<script src="/static/js/chat.js"></script>"#,
        mock_notice("<strong>AI/ML integration placeholder:</strong> this chat uses canned responses. Connect a real model behind <code>/api/chat</code>."),
        transcript,
        emotion_options,
    );

    Html(render_page("Chat", "chat", &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_escapes_text() {
        let html = message_bubble(&ChatMessage::user("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("message-user"));
    }
}
