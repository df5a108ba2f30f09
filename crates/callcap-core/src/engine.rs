//! Batch pipeline: classify every call, aggregate, select

use crate::aggregate::aggregate;
use crate::config::Config;
use crate::extract::{analyze_call, CallAnalysis, CallOutcome};
use crate::select::select_metrics;
use crate::types::{DataCaptureMetrics, MetricsReport};
use callcap_logs::CallRecord;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analyze(&self, call: &CallRecord) -> CallAnalysis {
        analyze_call(call, &self.config)
    }

    /// Per-call outcomes in input order
    pub fn classify_all(&self, calls: &[CallRecord]) -> Vec<CallOutcome> {
        calls
            .iter()
            .enumerate()
            .map(|(idx, call)| {
                let outcome = self.analyze(call).outcome;
                tracing::debug!(
                    call = idx,
                    turns = call.turn_count(),
                    complete = outcome.required_present,
                    captured = outcome.captured_field_count,
                    valid = outcome.valid_captured_field_count,
                    abandoned = outcome.abandoned,
                    "classified call"
                );
                outcome
            })
            .collect()
    }

    /// Aggregate before the demo-fallback decision; `None` for an empty batch
    pub fn compute(&self, calls: &[CallRecord]) -> Option<DataCaptureMetrics> {
        aggregate(&self.classify_all(calls))
    }

    /// Full pipeline for the given UTC calendar day
    pub fn evaluate(&self, calls: &[CallRecord], date: NaiveDate) -> MetricsReport {
        let computed = self.compute(calls);
        select_metrics(computed, calls.len(), date, &self.config)
    }
}

/// Run the full pipeline with an explicit configuration
pub fn evaluate(calls: &[CallRecord], date: NaiveDate, config: &Config) -> MetricsReport {
    Engine::new(config.clone()).evaluate(calls, date)
}
