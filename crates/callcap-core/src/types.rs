//! Batch-level KPI types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six data-capture KPIs, in draw/report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    CompletionRate,
    FieldCaptureAccuracy,
    ErrorRetryRate,
    AbandonmentRate,
    RecontactRequiredRate,
    CustomerConfirmationRate,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::CompletionRate,
        Metric::FieldCaptureAccuracy,
        Metric::ErrorRetryRate,
        Metric::AbandonmentRate,
        Metric::RecontactRequiredRate,
        Metric::CustomerConfirmationRate,
    ];

    /// Wire name used in the dashboard payload
    pub fn name(self) -> &'static str {
        match self {
            Metric::CompletionRate => "completionRate",
            Metric::FieldCaptureAccuracy => "fieldCaptureAccuracy",
            Metric::ErrorRetryRate => "errorRetryRate",
            Metric::AbandonmentRate => "abandonmentRate",
            Metric::RecontactRequiredRate => "recontactRequiredRate",
            Metric::CustomerConfirmationRate => "customerConfirmationRate",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Six integer percentages in `[0, 100]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCaptureMetrics {
    pub completion_rate: u8,
    pub field_capture_accuracy: u8,
    pub error_retry_rate: u8,
    pub abandonment_rate: u8,
    pub recontact_required_rate: u8,
    pub customer_confirmation_rate: u8,
}

impl DataCaptureMetrics {
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::CompletionRate => self.completion_rate,
            Metric::FieldCaptureAccuracy => self.field_capture_accuracy,
            Metric::ErrorRetryRate => self.error_retry_rate,
            Metric::AbandonmentRate => self.abandonment_rate,
            Metric::RecontactRequiredRate => self.recontact_required_rate,
            Metric::CustomerConfirmationRate => self.customer_confirmation_rate,
        }
    }

    pub fn set(&mut self, metric: Metric, value: u8) {
        let slot = match metric {
            Metric::CompletionRate => &mut self.completion_rate,
            Metric::FieldCaptureAccuracy => &mut self.field_capture_accuracy,
            Metric::ErrorRetryRate => &mut self.error_retry_rate,
            Metric::AbandonmentRate => &mut self.abandonment_rate,
            Metric::RecontactRequiredRate => &mut self.recontact_required_rate,
            Metric::CustomerConfirmationRate => &mut self.customer_confirmation_rate,
        };
        *slot = value.min(100);
    }

    /// First metric pinned at exactly 0 or 100, if any
    pub fn saturated_metric(&self) -> Option<Metric> {
        Metric::ALL
            .into_iter()
            .find(|&m| matches!(self.get(m), 0 | 100))
    }
}

/// Why the selector substituted demo numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackReason {
    /// Computed metrics were returned
    #[default]
    None,
    /// Batch of `tiny_sample_max_calls` or fewer
    TinySample { calls: usize },
    /// A computed metric hit exactly 0 or 100
    Saturated { metric: Metric, value: u8 },
    /// Demo numbers asked for directly, with no batch behind them
    Requested,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::None => f.write_str("none"),
            FallbackReason::TinySample { calls } => write!(f, "tiny sample ({calls} calls)"),
            FallbackReason::Saturated { metric, value } => write!(f, "saturated ({metric}={value})"),
            FallbackReason::Requested => f.write_str("requested"),
        }
    }
}

/// Final output handed to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    #[serde(flatten)]
    pub metrics: DataCaptureMetrics,
    #[serde(rename = "isDemo")]
    pub is_demo: bool,
    #[serde(skip)]
    pub reason: FallbackReason,
}

impl MetricsReport {
    pub fn computed(metrics: DataCaptureMetrics) -> Self {
        Self {
            metrics,
            is_demo: false,
            reason: FallbackReason::None,
        }
    }

    pub fn demo(metrics: DataCaptureMetrics, reason: FallbackReason) -> Self {
        Self {
            metrics,
            is_demo: true,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataCaptureMetrics {
        DataCaptureMetrics {
            completion_rate: 67,
            field_capture_accuracy: 99,
            error_retry_rate: 20,
            abandonment_rate: 33,
            recontact_required_rate: 33,
            customer_confirmation_rate: 80,
        }
    }

    #[test]
    fn test_report_wire_shape() {
        let report = MetricsReport::computed(sample());
        let json = serde_json::to_value(report).unwrap();

        assert_eq!(json["completionRate"], 67);
        assert_eq!(json["fieldCaptureAccuracy"], 99);
        assert_eq!(json["errorRetryRate"], 20);
        assert_eq!(json["abandonmentRate"], 33);
        assert_eq!(json["recontactRequiredRate"], 33);
        assert_eq!(json["customerConfirmationRate"], 80);
        assert_eq!(json["isDemo"], false);
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_metric_names_match_serde() {
        let json = serde_json::to_value(sample()).unwrap();
        for metric in Metric::ALL {
            assert_eq!(json[metric.name()], sample().get(metric));
        }
    }

    #[test]
    fn test_saturated_metric() {
        assert_eq!(sample().saturated_metric(), None);

        let mut pinned = sample();
        pinned.set(Metric::ErrorRetryRate, 0);
        assert_eq!(pinned.saturated_metric(), Some(Metric::ErrorRetryRate));

        pinned.set(Metric::CompletionRate, 100);
        assert_eq!(pinned.saturated_metric(), Some(Metric::CompletionRate));
    }

    #[test]
    fn test_fallback_reason_display() {
        assert_eq!(FallbackReason::None.to_string(), "none");
        assert_eq!(
            FallbackReason::TinySample { calls: 4 }.to_string(),
            "tiny sample (4 calls)"
        );
        let saturated = FallbackReason::Saturated {
            metric: Metric::CompletionRate,
            value: 100,
        };
        assert_eq!(saturated.to_string(), "saturated (completionRate=100)");
        assert_eq!(FallbackReason::Requested.to_string(), "requested");
    }

    #[test]
    fn test_set_clamps() {
        let mut m = sample();
        m.set(Metric::AbandonmentRate, 250);
        assert_eq!(m.abandonment_rate, 100);
    }
}
