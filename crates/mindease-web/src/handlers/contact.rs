//! Contact form page and submission endpoint.

use std::sync::LazyLock;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use mindease_common::error::ApiError;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use crate::handlers::layout::render_page;
use crate::state::{AppEvent, SharedState};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn required_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// POST /api/contact
pub async fn api_contact(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let (name, email, message) = match (
        required_str(&body, "name"),
        required_str(&body, "email"),
        required_str(&body, "message"),
    ) {
        (Some(n), Some(e), Some(m)) => (n, e, m),
        _ => return Err(ApiError::bad_request("Name, email, and message are required")),
    };

    // Presence is judged on the trimmed value, format on the raw one.
    let raw_email = body.get("email").and_then(Value::as_str).unwrap_or(email);
    if !is_valid_email(raw_email) {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    let id = Uuid::new_v4();
    tracing::info!(%id, name, email, message_len = message.len(), "Contact form submission");
    state.publish(AppEvent::ContactReceived { id });

    Ok(Json(ContactResponse {
        success: true,
        message: "Thank you for contacting us. We will get back to you soon.".to_string(),
        id,
    }))
}

pub async fn contact_page() -> Html<String> {
    let body = r#"
    <div class="page-header">
        <div>
            <h1 class="page-title">Contact Us</h1>
            <p class="text-muted">Questions, partnership ideas or research enquiries</p>
        </div>
    </div>
    <div class="card">
        <form id="contact-form" class="d-flex flex-column gap-3">
            <label for="name">Name</label>
            <input id="name" name="name" class="form-control" required>
            <label for="email">Email</label>
            <input id="email" name="email" type="email" class="form-control" required>
            <label for="message">Message</label>
            <textarea id="message" name="message" class="form-control" rows="5" required></textarea>
            <button type="submit" class="btn btn-primary">Send Message</button>
            <p id="contact-status" class="text-muted" role="status"></p>
        </form>
    </div>
<script src="/static/js/contact.js"></script>"#;

    Html(render_page("Contact", "contact", body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.uk"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(" jane@example.com "));
    }
}
