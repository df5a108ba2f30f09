//! Batch reduction of per-call outcomes into KPI percentages

use crate::extract::CallOutcome;
use crate::types::DataCaptureMetrics;

/// Round half up, then clamp into `[0, 100]`
pub fn clamp_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}

/// `numerator / denominator` as an integer percentage, rounded half up in
/// integer arithmetic; `0` for an empty denominator
pub fn percentage(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let (num, den) = (numerator as u128, denominator as u128);
    ((200 * num + den) / (2 * den)).min(100) as u8
}

/// Reduce outcomes into the six KPIs. `None` for an empty batch: there is
/// nothing to divide by and the caller must fall back.
pub fn aggregate(outcomes: &[CallOutcome]) -> Option<DataCaptureMetrics> {
    if outcomes.is_empty() {
        return None;
    }

    let n = outcomes.len();
    let count = |pred: fn(&CallOutcome) -> bool| outcomes.iter().filter(|o| pred(o)).count();

    let captured: usize = outcomes.iter().map(|o| o.captured_field_count).sum();
    let valid: usize = outcomes.iter().map(|o| o.valid_captured_field_count).sum();

    Some(DataCaptureMetrics {
        completion_rate: percentage(count(|o| o.required_present), n),
        field_capture_accuracy: percentage(valid, captured),
        error_retry_rate: percentage(count(|o| o.has_retry), n),
        abandonment_rate: percentage(count(|o| o.abandoned), n),
        recontact_required_rate: percentage(count(|o| o.recontact_required), n),
        customer_confirmation_rate: percentage(count(|o| o.has_confirmation), n),
    })
}
