//! Trait for physiological sensor readings, plus a jittered mock.
//!
//! The mock stands in for a MAX30102 pulse oximeter on an ESP32. Values are
//! only meant to keep the dashboard populated; no ranges are enforced.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use mindease_common::{HeartRatePoint, SensorReading};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minutes between two heart-rate history samples.
pub const HISTORY_STEP_MINUTES: i64 = 5;

pub trait SensorSource: Send + Sync {
    /// Most recent reading, timestamped now.
    fn latest(&self) -> SensorReading;

    /// `points` heart-rate samples spaced [`HISTORY_STEP_MINUTES`] apart, oldest first,
    /// the last one taken now.
    fn heart_rate_history(&self, points: usize) -> Vec<HeartRatePoint>;
}

// ── Mock Implementation ────────────────────────────────────────────────────

pub struct MockSensorSource {
    device_id: String,
    hrv: Option<u32>,
    rng: Mutex<StdRng>,
}

impl MockSensorSource {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self::with_rng(device_id, StdRng::from_entropy())
    }

    /// Deterministic jitter, for tests.
    pub fn with_seed(device_id: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(device_id, StdRng::seed_from_u64(seed))
    }

    fn with_rng(device_id: impl Into<String>, rng: StdRng) -> Self {
        Self { device_id: device_id.into(), hrv: Some(45), rng: Mutex::new(rng) }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    fn with_rng_locked<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while holding the lock cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    pub fn reading_at(&self, timestamp: DateTime<Utc>) -> SensorReading {
        let (heart_rate, blood_oxygen, temperature) = self.with_rng_locked(|rng| {
            (
                68 + rng.gen_range(0..12u32),
                96 + rng.gen_range(0..3u32),
                36.4 + rng.gen_range(0.0..0.6f64),
            )
        });

        SensorReading {
            timestamp,
            heart_rate,
            blood_oxygen,
            device_id: self.device_id.clone(),
            temperature: Some((temperature * 10.0_f64).round() / 10.0),
            hrv: self.hrv,
        }
    }

    pub fn history_at(&self, now: DateTime<Utc>, points: usize) -> Vec<HeartRatePoint> {
        self.with_rng_locked(|rng| {
            (0..points)
                .rev()
                .map(|i| {
                    let timestamp = now - Duration::minutes(i as i64 * HISTORY_STEP_MINUTES);
                    let variance = (i as f64 / 5.0).sin() * 10.0 + rng.gen_range(0.0..5.0);
                    HeartRatePoint {
                        time: timestamp.format("%H:%M").to_string(),
                        value: (70.0 + variance).round() as u32,
                    }
                })
                .collect()
        })
    }
}

impl Default for MockSensorSource {
    fn default() -> Self {
        Self::new("esp32-max30102-001")
    }
}

impl SensorSource for MockSensorSource {
    fn latest(&self) -> SensorReading {
        self.reading_at(Utc::now())
    }

    fn heart_rate_history(&self, points: usize) -> Vec<HeartRatePoint> {
        self.history_at(Utc::now(), points)
    }
}
