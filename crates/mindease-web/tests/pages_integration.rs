//! Smoke tests for the server-rendered pages.

use axum::http::StatusCode;
use mindease_test_utils::http::get;
use mindease_web::router::build_router;
use mindease_web::state::AppState;

#[tokio::test]
async fn every_page_renders_with_nav() {
    let app = build_router(AppState::default());
    let pages = [
        ("/", "Your companion for emotional wellbeing"),
        ("/about", "Project Synopsis"),
        ("/features", "Emergency Alert System"),
        ("/privacy", "Privacy Policy"),
        ("/safety", "988 Suicide &amp; Crisis Lifeline"),
        ("/sensors", "MAX30102 Pulse Oximeter"),
        ("/research", "User Feedback"),
        ("/chat", "Empathetic Chat"),
        ("/contact", "Contact Us"),
        ("/dashboard", "Wellbeing Dashboard"),
    ];

    for (path, marker) in pages {
        let resp = get(&app, path).await;
        assert_eq!(resp.status, StatusCode::OK, "{}", path);
        assert!(resp.text.contains(marker), "{} missing {:?}", path, marker);
        assert!(resp.text.contains(r#"class="navbar""#), "{} missing nav", path);
    }
}

#[tokio::test]
async fn chat_page_seeds_greeting() {
    let app = build_router(AppState::default());
    let resp = get(&app, "/chat").await;
    assert!(resp.text.contains("How are you feeling today?"));
    assert!(resp.text.contains(r#"<option value="neutral" selected>"#));
}

#[tokio::test]
async fn dashboard_shows_sample_mood_rows() {
    let app = build_router(AppState::default());
    let resp = get(&app, "/dashboard").await;
    assert!(resp.text.contains("Jan 15"));
    assert!(resp.text.contains("Jan 21"));
    assert!(resp.text.contains("Live Sensor Data (Simulated)"));
}

#[tokio::test]
async fn unknown_path_is_404_page() {
    let app = build_router(AppState::default());
    let resp = get(&app, "/no/such/page").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.text.contains("Page not found"));
}
