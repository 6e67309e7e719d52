//! Wellbeing dashboard — stat cards, mood history, heart-rate history,
//! emotion distribution and the live sensor widget.

use axum::{extract::State, response::Html};
use mindease_common::{EmotionCount, HeartRatePoint, MoodEntry, SensorReading};
use crate::handlers::layout::{escape_html, mock_notice, render_page};
use crate::state::SharedState;

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let mood = state.mood.entries();
    let current = state.emotion.current();
    let reading = state.sensors.latest();
    let history = state.sensors.heart_rate_history(state.history_points);
    let distribution = state.emotion.distribution();

    let trend = match mood_trend(&mood) {
        Some(pct) => format!("{:+.0}%", pct),
        None => "n/a".to_string(),
    };

    let body = format!(r#"
    <div class="page-header">
        <div>
            <h1 class="page-title">Wellbeing Dashboard</h1>
            <p class="text-muted">Track your emotional health over time</p>
        </div>
    </div>
    {}
    <div class="stats-grid">
        {}
        {}
        {}
        {}
    </div>
    <div class="grid-2">
        <div class="card">
            <div class="card-header">Mood Score Over Time</div>
            <table class="table">
                <thead><tr><th>Date</th><th>Emotion</th><th>Score</th></tr></thead>
                <tbody>{}</tbody>
            </table>
        </div>
        {}
    </div>
    <div class="grid-2">
        <div class="card">
            <div class="card-header">Heart Rate History</div>
            <div class="bar-chart">{}</div>
        </div>
        <div class="card">
            <div class="card-header">Emotion Distribution</div>
            {}
        </div>
    </div>
<script src="/static/js/dashboard.js"></script>"#,
        mock_notice("This dashboard displays mock data. Charts will populate with real sensor and emotion data once integrated."),
        stat_card("Current Mood", &capitalize(&current.emotion), "Last updated: just now"),
        stat_card("Heart Rate", &format!("{} BPM", reading.heart_rate), "Simulated"),
        stat_card("SpO₂", &format!("{}%", reading.blood_oxygen), "Simulated"),
        stat_card("Mood Trend", &trend, "Second half vs. first half of the period"),
        mood_rows(&mood),
        sensor_widget(&reading),
        heart_rate_bars(&history),
        distribution_bars(&distribution),
    );

    Html(render_page("Dashboard", "dashboard", &body))
}

/// Percentage change of the mean mood score between the later and the
/// earlier half of `entries`. `None` with fewer than two entries.
pub fn mood_trend(entries: &[MoodEntry]) -> Option<f64> {
    if entries.len() < 2 {
        return None;
    }
    let mid = entries.len() / 2;
    let mean = |xs: &[MoodEntry]| xs.iter().map(|e| e.mood_score as f64).sum::<f64>() / xs.len() as f64;
    let (early, late) = (mean(&entries[..mid]), mean(&entries[mid..]));
    if early == 0.0 {
        return None;
    }
    Some((late - early) / early * 100.0)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn stat_card(title: &str, value: &str, subtitle: &str) -> String {
    format!(r#"<div class="stat-card card-hover">
            <div class="stat-label">{}</div>
            <div class="stat-value text-gradient">{}</div>
            <div class="text-muted small">{}</div>
        </div>"#, title, escape_html(value), subtitle)
}

fn mood_rows(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return r#"<tr><td colspan="3" class="text-center text-muted">No mood entries recorded yet.</td></tr>"#.to_string();
    }
    entries.iter().map(|e| {
        let pct = (e.mood_score as u32 * 10).min(100);
        format!(r#"<tr>
                <td>{}</td>
                <td><span class="badge badge-outline">{}</span></td>
                <td>
                    <div class="progress-track"><div class="progress-bar" style="width:{}%"></div></div>
                    <span class="score-value">{}</span>
                </td>
            </tr>"#,
            e.timestamp.format("%b %-d"), escape_html(&e.emotion), pct, e.mood_score)
    }).collect()
}

fn heart_rate_bars(points: &[HeartRatePoint]) -> String {
    points.iter().map(|p| {
        // 50..=100 BPM maps onto the bar height
        let height = p.value.saturating_sub(50).min(50) * 2;
        format!(r#"<div class="bar" style="height:{}%" title="{} — {} BPM"></div>"#, height, p.time, p.value)
    }).collect()
}

fn distribution_bars(slices: &[EmotionCount]) -> String {
    let total: u32 = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return r#"<p class="text-muted">No emotions detected yet.</p>"#.to_string();
    }
    slices.iter().map(|s| {
        let pct = s.count as f64 / total as f64 * 100.0;
        format!(r#"<div class="d-flex align-center gap-3">
                <span style="width:80px">{}</span>
                <div class="progress-track"><div class="progress-bar" style="width:{:.0}%; background:{}"></div></div>
                <span class="score-value">{}</span>
            </div>"#, escape_html(&s.emotion), pct, escape_html(&s.color), s.count)
    }).collect()
}

fn sensor_widget(reading: &SensorReading) -> String {
    let temperature = reading
        .temperature
        .map(|t| format!(r#"<div class="sensor-row"><span>Temperature</span><strong id="sensor-temp">{:.1}°C</strong></div>"#, t))
        .unwrap_or_default();

    format!(r#"<div class="card" id="sensor-widget">
            <div class="card-header">Live Sensor Data (Simulated)</div>
            <div class="sensor-row"><span>Heart Rate</span><strong id="sensor-hr">{}</strong></div>
            <div class="sensor-row"><span>SpO₂</span><strong id="sensor-spo2">{}%</strong></div>
            {}
            <p class="text-muted small">Last updated: <span id="sensor-updated">{}</span></p>
        </div>"#,
        reading.heart_rate, reading.blood_oxygen, temperature, reading.timestamp.format("%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindease_mock::{MoodSource, StaticMoodSource};

    #[test]
    fn test_mood_trend_on_sample_week() {
        // early half: 6,7,5 -> 6.0 ; late half: 4,6,8,7 -> 6.25
        let trend = mood_trend(&StaticMoodSource::sample().entries()).unwrap();
        assert!((trend - 4.1666).abs() < 1e-3, "trend {}", trend);
    }

    #[test]
    fn test_mood_trend_needs_two_entries() {
        let one = StaticMoodSource::sample().entries().into_iter().take(1).collect::<Vec<_>>();
        assert!(mood_trend(&one).is_none());
        assert!(mood_trend(&[]).is_none());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("calm"), "Calm");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_empty_distribution() {
        assert!(distribution_bars(&[]).contains("No emotions"));
    }
}
