//! Choice between computed and demo metrics

use crate::config::Config;
use crate::fallback::fallback_metrics;
use crate::types::{DataCaptureMetrics, FallbackReason, MetricsReport};
use chrono::NaiveDate;

/// Decide whether `computed` can be shown as-is.
///
/// Tiny batches (`n <= tiny_sample_max_calls`, including an empty batch with
/// no computed metrics) and batches with any metric at exactly 0 or 100 are
/// replaced by the day's fallback numbers.
pub fn select_metrics(
    computed: Option<DataCaptureMetrics>,
    n: usize,
    date: NaiveDate,
    config: &Config,
) -> MetricsReport {
    let reason = match computed {
        None => FallbackReason::TinySample { calls: n },
        Some(_) if !config.demo_fallback => FallbackReason::None,
        Some(_) if n <= config.tiny_sample_max_calls => FallbackReason::TinySample { calls: n },
        Some(metrics) => match metrics.saturated_metric() {
            Some(metric) => FallbackReason::Saturated {
                metric,
                value: metrics.get(metric),
            },
            None => FallbackReason::None,
        },
    };

    match (reason, computed) {
        (FallbackReason::None, Some(metrics)) => {
            tracing::info!(calls = n, "returning computed metrics");
            MetricsReport::computed(metrics)
        }
        _ => {
            tracing::info!(calls = n, ?reason, %date, "substituting demo metrics");
            MetricsReport::demo(fallback_metrics(date, config), reason)
        }
    }
}
