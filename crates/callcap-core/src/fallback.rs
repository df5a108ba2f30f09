//! Date-seeded demo metrics
//!
//! The seed string for a UTC calendar day is hashed with 32-bit FNV-1a and the
//! hash drives a xorshift32 generator, so every caller on the same day sees the
//! same six numbers without any stored state.

use crate::aggregate::clamp_percent;
use crate::config::Config;
use crate::types::{DataCaptureMetrics, Metric};
use chrono::{Datelike, NaiveDate};

pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
pub const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut h = FNV_OFFSET_BASIS;
    for &b in bytes {
        h ^= b as u32;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Marsaglia xorshift32 (13, 17, 5)
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// A zero state would stick at zero, so it is replaced by the FNV offset basis
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { FNV_OFFSET_BASIS } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Uniform in `[min, max)`
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }
}

/// `(metric, base, low, high)`: each value is `base + U[low, high)`, drawn in
/// this order
const DRAWS: [(Metric, f64, f64, f64); 6] = [
    (Metric::CompletionRate, 82.0, -4.0, 6.0),
    (Metric::FieldCaptureAccuracy, 90.0, -5.0, 7.0),
    (Metric::ErrorRetryRate, 7.0, -3.0, 5.0),
    (Metric::AbandonmentRate, 5.0, -2.0, 4.0),
    (Metric::RecontactRequiredRate, 10.0, -4.0, 6.0),
    (Metric::CustomerConfirmationRate, 85.0, -6.0, 8.0),
];

/// Seed string for a day, e.g. `data-capture-2025-3-7`
pub fn seed_for(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}-{}-{}", prefix, date.year(), date.month(), date.day())
}

/// Demo metrics for a UTC calendar day
pub fn fallback_metrics(date: NaiveDate, config: &Config) -> DataCaptureMetrics {
    let seed = seed_for(&config.fallback_seed_prefix, date);
    let mut rng = XorShift32::new(fnv1a32(seed.as_bytes()));

    let mut metrics = DataCaptureMetrics::default();
    for (metric, base, low, high) in DRAWS {
        metrics.set(metric, clamp_percent(base + rng.range(low, high)));
    }

    tracing::debug!(seed = %seed, ?metrics, "generated fallback metrics");
    metrics
}
