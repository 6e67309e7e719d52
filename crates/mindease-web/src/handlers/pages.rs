//! Static informational pages.

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use mindease_common::error::ApiError;
use crate::handlers::layout::{mock_notice, render_page};

/// (title, description) pairs rendered as a grid of cards.
fn card_grid(cards: &[(&str, &str)]) -> String {
    let cards: String = cards.iter().map(|(title, desc)| format!(r#"
        <div class="card card-hover">
            <div class="card-header">{}</div>
            <p class="text-muted">{}</p>
        </div>"#, title, desc)).collect();
    format!(r#"<div class="grid-3">{}</div>"#, cards)
}

fn bullet_list(items: &[&str]) -> String {
    let items: String = items.iter().map(|i| format!("<li>{}</li>", i)).collect();
    format!("<ul>{}</ul>", items)
}

fn page_header(title: &str, subtitle: &str) -> String {
    format!(r#"<div class="page-header">
        <div>
            <h1 class="page-title">{}</h1>
            <p class="text-muted">{}</p>
        </div>
    </div>"#, title, subtitle)
}

pub async fn home_page() -> Html<String> {
    let body = format!(r#"
    <section class="hero">
        <h1 class="text-gradient">Your companion for emotional wellbeing</h1>
        <p class="text-muted">MindEase combines emotion detection, physiological sensing and empathetic conversation
        to help you understand how you feel.</p>
        <div class="d-flex gap-3">
            <a href="/chat" class="btn btn-primary">Start Chatting</a>
            <a href="/dashboard" class="btn btn-outline">View Dashboard</a>
        </div>
    </section>
    <h2>Features</h2>
    {}
    <h2>How it works</h2>
    {}"#,
        card_grid(&[
            ("Multimodal Emotion Detection", "Facial analysis and physiological sensors combined to understand your emotional state. (Integration placeholder)"),
            ("Empathetic Chat Support", "Compassionate, non-judgmental conversation designed to support you."),
            ("Mood History Dashboard", "Track your emotional wellbeing over time with visualizations of your mood patterns."),
            ("Privacy &amp; Safety First", "Your data is protected and consent is always explicit."),
        ]),
        card_grid(&[
            ("1. Capture Inputs", "Camera and sensors capture facial expressions and vital signs (heart rate, SpO₂)."),
            ("2. Fusion &amp; Detection", "Multimodal data is fused to detect your emotional state in real time."),
            ("3. Support &amp; Dashboard", "Receive support through chat and follow your wellbeing on the dashboard."),
        ]),
    );
    Html(render_page("Home", "home", &body))
}

pub async fn about_page() -> Html<String> {
    let body = format!(r#"
    {}
    <div class="card">
        <div class="card-header">Project Synopsis</div>
        <p>MindEase explores accessible emotional support by pairing emotion recognition with
        wearable sensing and a conversational assistant. Every intelligent component in this build is a
        placeholder awaiting integration.</p>
    </div>
    <h2>Technologies &amp; Integration</h2>
    {}"#,
        page_header("About MindEase", "Project objectives, technologies and mission"),
        card_grid(&[
            ("Emotion AI", "Facial emotion recognition using computer vision and deep learning models. Integration point: <code>/api/emotion</code>"),
            ("IoT Sensors", "MAX30102 sensor for heart rate and SpO₂ monitoring via ESP32. Integration point: <code>/api/sensors/latest</code>"),
            ("NLP Chatbot", "Natural language processing for empathetic conversation. Integration point: <code>/api/chat</code>"),
            ("Data Fusion", "Combines multimodal inputs for more accurate emotion detection."),
        ]),
    );
    Html(render_page("About", "about", &body))
}

pub async fn features_page() -> Html<String> {
    let body = format!("{}{}",
        page_header("Features", "What MindEase is designed to do"),
        card_grid(&[
            ("Facial Emotion Detection", "Real-time emotion recognition from facial expressions."),
            ("Physiological Sensor Integration", "Heart rate, SpO₂ and heart rate variability from a MAX30102 sensor via ESP32."),
            ("AI-Powered Empathetic Chatbot", "Context-aware conversation that responds to how you feel."),
            ("Mood History &amp; Analytics", "Dashboard for tracking emotional wellbeing over time."),
            ("Emergency Alert System", "Detection of distress signals with immediate access to crisis helplines."),
            ("Privacy &amp; Data Security", "Encryption, secure storage and consent management for personal health data."),
        ]),
    );
    Html(render_page("Features", "features", &body))
}

pub async fn privacy_page() -> Html<String> {
    let body = format!(r#"
    {}
    <div class="card"><div class="card-header">Information We Collect</div>{}</div>
    <div class="card"><div class="card-header">How We Use It</div>{}</div>
    <div class="card"><div class="card-header">Your Rights</div>{}</div>"#,
        page_header("Privacy Policy", "How MindEase handles your data"),
        bullet_list(&[
            "Name and email address (when you contact us)",
            "Emotional state and mood patterns",
            "Physiological data (heart rate, SpO₂) from connected sensors",
            "Chat conversation history",
            "Facial expression data (only if camera access is granted)",
        ]),
        bullet_list(&[
            "To deliver personalized emotional support and track your wellbeing",
            "To detect crisis situations and connect you with appropriate resources",
            "To respond to inquiries and provide support",
        ]),
        bullet_list(&[
            "Request a copy of your personal data",
            "Correct inaccurate information",
            "Request deletion of your data",
            "Withdraw consent at any time",
        ]),
    );
    Html(render_page("Privacy Policy", "privacy", &body))
}

pub async fn safety_page() -> Html<String> {
    let body = format!(r#"
    {}
    <div class="alert alert-danger">If you are in immediate danger, call your local emergency number.</div>
    {}
    <div class="grid-2">
        <div class="card"><div class="card-header">MindEase is</div>{}</div>
        <div class="card"><div class="card-header">MindEase is not</div>{}</div>
    </div>"#,
        page_header("Safety Guidelines", "Crisis resources and ethical guidelines"),
        card_grid(&[
            ("988 Suicide &amp; Crisis Lifeline", "Call or text <a href=\"tel:988\">988</a>. 24/7 confidential support."),
            ("Crisis Text Line", "Text HOME to 741741. Support anytime."),
            ("SAMHSA Helpline", "<a href=\"tel:1-800-662-4357\">1-800-662-4357</a>. Mental health and substance use."),
        ]),
        bullet_list(&[
            "A supportive companion for emotional wellbeing",
            "A tool to track and understand your mood patterns",
            "A supplement to professional mental health care",
        ]),
        bullet_list(&[
            "A replacement for professional therapy or medical treatment",
            "An emergency response service",
            "Capable of diagnosing mental health conditions",
        ]),
    );
    Html(render_page("Safety", "safety", &body))
}

pub async fn sensors_page() -> Html<String> {
    let body = format!(r#"
    {}
    {}
    <div class="card">
        <div class="card-header">MAX30102 Pulse Oximeter</div>
        {}
    </div>
    <div class="card">
        <div class="card-header">Reading the latest values</div>
        <pre><code>GET /api/sensors/latest
{{"data": {{"timestamp": "...", "hr": 72, "spO2": 98, "device_id": "esp32-max30102-001"}}, "status": "ok"}}</code></pre>
        <p class="text-muted">Live readings are also pushed to <code>/api/events</code> as Server-Sent Events.</p>
    </div>"#,
        page_header("Sensor Integration", "Connecting MAX30102 and other IoT sensors"),
        mock_notice("<strong>Integration placeholder:</strong> all readings shown in MindEase are simulated."),
        bullet_list(&[
            "Heart rate range: 30-220 BPM",
            "SpO₂ range: 70-100%",
            "I2C address: 0x57",
            "Supply voltage: 3.3V",
        ]),
    );
    Html(render_page("Sensors", "sensors", &body))
}

pub async fn research_page() -> Html<String> {
    let body = format!(r#"
    {}
    {}
    <div class="card">
        <div class="card-header">User Feedback</div>
        <form id="feedback-form" class="d-flex flex-column gap-3">
            <label for="rating">Rating</label>
            <select id="rating" name="rating" class="form-control">
                <option value="5">5 - Excellent</option>
                <option value="4">4 - Good</option>
                <option value="3">3 - Average</option>
                <option value="2">2 - Below Average</option>
                <option value="1">1 - Poor</option>
            </select>
            <label for="category">Category</label>
            <select id="category" name="category" class="form-control">
                <option value="general">General</option>
                <option value="chat">Chat</option>
                <option value="dashboard">Dashboard</option>
                <option value="accessibility">Accessibility</option>
            </select>
            <label for="feedback">Feedback</label>
            <textarea id="feedback" name="feedback" class="form-control" rows="4" required></textarea>
            <button type="submit" class="btn btn-primary">Submit Feedback</button>
            <p id="feedback-status" class="text-muted" role="status"></p>
        </form>
    </div>
<script src="/static/js/feedback.js"></script>"#,
        page_header("Research &amp; Evaluation", "How we measure MindEase"),
        card_grid(&[
            ("Emotion Detection Accuracy", "Precision of multimodal emotion classification. Current value: pending."),
            ("User Experience", "Platform usability and user satisfaction. Current value: pending."),
            ("Response Time", "System performance and latency. Target: under 200 ms."),
        ]),
    );
    Html(render_page("Research", "research", &body))
}

/// Fallback for unmatched paths: JSON under `/api`, an HTML page elsewhere.
pub async fn not_found(uri: Uri) -> Response {
    if uri.path() == "/api" || uri.path().starts_with("/api/") {
        return ApiError::NotFound(format!("No endpoint at {}", uri.path())).into_response();
    }

    let body = format!(r#"
    {}
    <a href="/" class="btn btn-primary">Back to Home</a>"#,
        page_header("Page not found", "The page you are looking for does not exist."),
    );
    (StatusCode::NOT_FOUND, Html(render_page("Not Found", "", &body))).into_response()
}
